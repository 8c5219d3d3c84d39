/// Simple aggregate statistics for a cleaned table.
///
/// Returned by [`LocationTable::stats`](crate::LocationTable::stats). Bounds are
/// `None` only when the table is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TableStats {
    pub records: usize,
    pub lat_min: Option<f64>,
    pub lat_max: Option<f64>,
    pub long_min: Option<f64>,
    pub long_max: Option<f64>,
}

/// Why a raw row did not survive cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// One of ID, name, latitude or longitude was empty.
    MissingField,
    /// The identifier is not an integer.
    BadId,
    /// Latitude or longitude did not coerce to a finite number.
    BadCoordinate,
    /// The identifier was already seen earlier in the file.
    DuplicateId,
}

/// Row accounting for one load, logged by the loader and reported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanReport {
    pub rows_read: usize,
    pub kept: usize,
    pub missing_field: usize,
    pub bad_id: usize,
    pub bad_coordinate: usize,
    pub duplicate_id: usize,
}

impl CleanReport {
    pub fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::MissingField => self.missing_field += 1,
            DropReason::BadId => self.bad_id += 1,
            DropReason::BadCoordinate => self.bad_coordinate += 1,
            DropReason::DuplicateId => self.duplicate_id += 1,
        }
    }

    pub fn dropped(&self) -> usize {
        self.missing_field + self.bad_id + self.bad_coordinate + self.duplicate_id
    }
}
