// crates/gazetteer-core/src/traits.rs
use crate::error::Result;
use crate::model::LocationRecord;
use crate::query::Extremes;

/// Case folding used for every name comparison.
///
/// Plain Unicode lowercasing: `"GOUNGHIN"` and `"Gounghin"` compare equal, but
/// accents are significant (`"Gounghín"` is a different name).
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Name-based matching helpers for types that expose a display name.
///
/// # Examples
/// ```rust
/// use gazetteer_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Gounghin Nord").name_contains("GOUNGHIN"));
/// assert_eq!(Place("ouagadougou").initial_upper().as_deref(), Some("O"));
/// assert_eq!(Place("").initial_upper(), None);
/// ```
pub trait NameMatch {
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_contains_folded(&fold_case(q))
    }

    /// Like [`NameMatch::name_contains`] for a needle already passed through
    /// [`fold_case`], so a scan folds it once.
    #[inline]
    fn name_contains_folded(&self, folded: &str) -> bool {
        fold_case(self.name_str()).contains(folded)
    }

    /// The first character, upper-cased. `None` for an empty name.
    ///
    /// Some characters upper-case to more than one (`ß` -> `SS`), hence a `String`.
    #[inline]
    fn initial_upper(&self) -> Option<String> {
        self.name_str()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }
}

impl NameMatch for LocationRecord {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// The four analyses run over a cleaned table.
///
/// All operations are read-only and keep source order.
pub trait GazetteerQuery {
    /// Records whose name contains `needle`, ignoring case.
    fn substring_match(&self, needle: &str) -> Vec<&LocationRecord>;

    /// Records whose upper-cased initial lies in `lo..=hi`. Empty names never match.
    fn alpha_range(&self, lo: char, hi: char) -> Vec<&LocationRecord>;

    /// First records reaching the minimum/maximum latitude and longitude.
    ///
    /// Fails with [`GazetteerError::EmptyTable`](crate::GazetteerError::EmptyTable)
    /// when there is nothing to compare.
    fn extremes(&self) -> Result<Extremes<'_>>;

    /// Records with `lat >= lat_min` and `long <= long_max`, both bounds inclusive.
    fn bounding_filter(&self, lat_min: f64, long_max: f64) -> Vec<&LocationRecord>;
}
