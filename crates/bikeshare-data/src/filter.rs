//! Date-range selection over the rental table.

use bikeshare_common::{DateRange, RentalRecord};
use tracing::debug;

/// Returns the records whose date lies in `range`, both ends inclusive.
///
/// An inverted range selects nothing. Input order is preserved.
pub fn filter_by_date(records: &[RentalRecord], range: DateRange) -> Vec<RentalRecord> {
    if range.is_inverted() {
        debug!(%range, "Inverted date range selects no records");
        return Vec::new();
    }

    let selected: Vec<RentalRecord> = records
        .iter()
        .filter(|record| range.contains(record.date))
        .copied()
        .collect();

    debug!(%range, selected = selected.len(), total = records.len(), "Filtered records");
    selected
}
