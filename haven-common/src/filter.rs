//! Filtering and ordering rules shared by every view

use chrono::{DateTime, Utc};

use crate::gender::Gender;

/// Whether a resource tagged `resource_gender` shows under `filter`
///
/// Visible when the filter is `All`, when the tags match, or when the resource
/// itself applies to everyone.
pub fn is_visible(resource_gender: Gender, filter: Gender) -> bool {
    filter == Gender::All || resource_gender == filter || resource_gender == Gender::All
}

/// Case-insensitive substring search over a set of text fields
///
/// The fields are joined with spaces before matching, so a query may span two
/// adjacent fields. Only an empty query matches everything; whitespace is
/// matched literally.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = fields.join(" ").to_lowercase();
    haystack.contains(&query.to_lowercase())
}

/// Order items newest first by creation time
///
/// Items with equal timestamps keep the later-inserted one first.
pub fn newest_first<'a, T, F>(items: impl IntoIterator<Item = &'a T>, created_at: F) -> Vec<&'a T>
where
    T: 'a,
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut indexed: Vec<(usize, &T)> = items.into_iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| created_at(b).cmp(&created_at(a)).then(ib.cmp(ia)));
    indexed.into_iter().map(|(_, item)| item).collect()
}
