//! Resolves the configured store URL to the root every endpoint hangs off.

use reqwest::Url;

use crate::error::StorefrontError;

/// Parses `store_url` and reduces it to `scheme://host[:port]/`.
///
/// `"https://shop.example.com/collections/tees"` becomes
/// `"https://shop.example.com/"`; the AJAX endpoints live at the store root
/// even when the configured URL points at a page.
///
/// # Errors
///
/// [`StorefrontError::InvalidStoreUrl`] when `store_url` does not parse, is
/// not `http`/`https`, or has no host.
pub fn store_origin(store_url: &str) -> Result<Url, StorefrontError> {
    let invalid = |reason: String| StorefrontError::InvalidStoreUrl {
        store_url: store_url.to_owned(),
        reason,
    };

    let parsed = Url::parse(store_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", parsed.scheme())));
    }

    let origin = parsed.origin();
    if !origin.is_tuple() {
        return Err(invalid("store URL has no host".to_owned()));
    }
    Url::parse(&origin.ascii_serialization()).map_err(|e| invalid(e.to_string()))
}
