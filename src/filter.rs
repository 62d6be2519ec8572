//! Accent-insensitive keyword filtering over division sequences.

use tracing::debug;

use crate::division::Division;
use crate::normalize::normalize;

/// Keeps the divisions whose normalized name contains every keyword.
///
/// The test is conjunctive: all keywords must appear as substrings of the
/// diacritic-folded, lowercased name. Keywords are folded the same way, so
/// accented queries work too. Input order is preserved and the returned
/// iterator is lazy; an empty keyword slice keeps everything (the conjunction
/// over no keywords holds vacuously).
///
/// ```
/// use vn_divisions::{filter_by_keywords, Province};
///
/// let provinces = vec![
///     Province::new(1, "Thành phố Hà Nội"),
///     Province::new(4, "Tỉnh Cao Bằng"),
/// ];
/// let keywords = vec!["cao".to_string()];
/// let hits: Vec<_> = filter_by_keywords(&provinces, &keywords).collect();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Tỉnh Cao Bằng");
/// ```
pub fn filter_by_keywords<D, I>(
    divisions: I,
    keywords: &[String],
) -> impl Iterator<Item = D>
where
    D: Division,
    I: IntoIterator<Item = D>,
{
    let keywords: Vec<String> = keywords.iter().map(|keyword| normalize(keyword)).collect();
    divisions.into_iter().filter(move |division| {
        let name = normalize(division.name());
        keywords.iter().all(|keyword| name.contains(keyword.as_str()))
    })
}

/// Splits a raw query on whitespace and delegates to [`filter_by_keywords`].
///
/// A blank query means no filtering, matching the list endpoints of the
/// surrounding service.
pub fn filter_by_query<D, I>(divisions: I, query: &str) -> impl Iterator<Item = D>
where
    D: Division,
    I: IntoIterator<Item = D>,
{
    let keywords: Vec<String> = query
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect();
    if !keywords.is_empty() {
        debug!(?keywords, "filtering divisions by keywords");
    }
    filter_by_keywords(divisions, &keywords)
}
