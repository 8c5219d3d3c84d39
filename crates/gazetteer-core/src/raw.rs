// crates/gazetteer-core/src/raw.rs

use csv::StringRecord;

/// Column names of a GeoNames dump line, in file order.
///
/// The source file carries no header; positions are the schema.
pub const COLUMNS: [&str; 19] = [
    "geonameid",
    "name",
    "asciiname",
    "alternatenames",
    "latitude",
    "longitude",
    "feature_class",
    "feature_code",
    "country_code",
    "cc2",
    "admin1_code",
    "admin2_code",
    "admin3_code",
    "admin4_code",
    "population",
    "elevation",
    "dem",
    "timezone",
    "modification_date",
];

/// One raw gazetteer line as it comes from the tab-separated dump.
/// NOTE: This type mirrors the external dataset and may be subject to that dataset's license.
///
/// Fields are kept as text; typing happens when cleaning. Empty fields are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub geonameid: Option<String>,
    pub name: Option<String>,
    pub asciiname: Option<String>,
    /// Comma-separated in the source.
    pub alternatenames: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub feature_class: Option<String>,
    pub feature_code: Option<String>,
    pub country_code: Option<String>,
    pub cc2: Option<String>,
    pub admin1_code: Option<String>,
    pub admin2_code: Option<String>,
    pub admin3_code: Option<String>,
    pub admin4_code: Option<String>,
    pub population: Option<String>,
    pub elevation: Option<String>,
    pub dem: Option<String>,
    pub timezone: Option<String>,
    pub modification_date: Option<String>,
}

impl RawRecord {
    /// Builds a record from one positional row. Missing trailing fields are `None`;
    /// callers reject rows wider than [`COLUMNS`] before getting here.
    pub fn from_record(row: &StringRecord) -> Self {
        let field = |idx: usize| -> Option<String> {
            row.get(idx)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            geonameid: field(0),
            name: field(1),
            asciiname: field(2),
            alternatenames: field(3),
            latitude: field(4),
            longitude: field(5),
            feature_class: field(6),
            feature_code: field(7),
            country_code: field(8),
            cc2: field(9),
            admin1_code: field(10),
            admin2_code: field(11),
            admin3_code: field(12),
            admin4_code: field(13),
            population: field(14),
            elevation: field(15),
            dem: field(16),
            timezone: field(17),
            modification_date: field(18),
        }
    }
}
