//! Case-insensitive substring filtering over in-memory rows.
//!
//! The table views filter client-side: the full result set is already in
//! memory and the filter is applied against a handful of searchable fields
//! per row. Matching is case-insensitive and ignores leading/trailing
//! whitespace in the needle.

/// Returns `true` if any of `haystacks` contains `needle`, ignoring case.
///
/// An empty (or whitespace-only) needle matches everything, so an empty
/// filter box shows the full table.
pub fn matches_filter(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|hay| hay.to_lowercase().contains(&needle))
}

/// Filters `rows` down to those where `fields(row)` matches `needle`.
pub fn apply_filter<'a, T, F>(rows: &'a [T], needle: &str, fields: F) -> Vec<&'a T>
where
    F: Fn(&T) -> Vec<String>,
{
    rows.iter()
        .filter(|row| {
            let values = fields(row);
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            matches_filter(needle, &refs)
        })
        .collect()
}
