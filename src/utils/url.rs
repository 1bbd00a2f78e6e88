//! URL utilities for building API endpoints

use crate::error::HolodexError;
use url::Url;

/// Parse an API base URL, e.g. `https://holodex.net/api/v2`
pub fn parse_base_url(base: &str) -> Result<Url, HolodexError> {
    let parsed = Url::parse(base)?;
    if parsed.cannot_be_a_base() {
        return Err(HolodexError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
    }
    Ok(parsed)
}

/// Append path segments to the base URL, percent-encoding each one
///
/// Segments are appended after the base path, so `/api/v2` is kept and an
/// id containing `/` or `?` cannot change the route.
pub fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
