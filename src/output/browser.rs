use crate::trending::Listing;
use crate::{Result, TrendingError};

/// Resolves the 1-indexed `position` to the entry's URL
///
/// Position 0 and positions past the end are both out of range. An empty
/// listing, usually the result of a failed fetch, gets its own error.
pub fn resolve_nth<T: Listing>(records: &[T], position: usize) -> Result<&str> {
    if records.is_empty() {
        return Err(TrendingError::EmptyListing { position });
    }

    position
        .checked_sub(1)
        .and_then(|index| records.get(index))
        .map(|record| record.url())
        .ok_or(TrendingError::IndexOutOfRange {
            index: position,
            len: records.len(),
        })
}

/// Opens `url` in the user's default browser
pub fn open_in_browser(url: &str) -> Result<()> {
    tracing::info!("Opening {}", url);
    webbrowser::open(url).map_err(|source| TrendingError::Browser {
        url: url.to_string(),
        source,
    })
}

/// Opens the entry at the 1-indexed `position`
pub fn open_nth<T: Listing>(records: &[T], position: usize) -> Result<()> {
    let url = resolve_nth(records, position)?;
    open_in_browser(url)
}
