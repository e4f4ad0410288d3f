//! Search filtering over the loaded country list

use crate::models::CountryRecord;

/// Whether a query filters nothing out
pub fn is_identity_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Indices of the records whose name contains `query`, ignoring case.
///
/// Order follows `records`. A blank query matches everything.
pub fn matching_indices(records: &[CountryRecord], query: &str) -> Vec<usize> {
    if is_identity_query(query) {
        return (0..records.len()).collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Filtered view of `records` for `query`
pub fn filter_countries<'a>(records: &'a [CountryRecord], query: &str) -> Vec<&'a CountryRecord> {
    matching_indices(records, query)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
