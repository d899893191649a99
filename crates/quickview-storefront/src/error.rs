use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The product lookup answered with a non-success status.
    #[error("product not found at {url} (HTTP {status})")]
    NotFound { url: String, status: u16 },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// `/cart/add.js` declined the request. `description` is the storefront's
    /// human-readable reason when the error body carried one.
    #[error("cart rejected the request (HTTP {status}): {}", .description.as_deref().unwrap_or("no description"))]
    CartRejected {
        status: u16,
        description: Option<String>,
    },

    #[error("invalid store URL \"{store_url}\": {reason}")]
    InvalidStoreUrl { store_url: String, reason: String },

    #[error("invalid product handle \"{handle}\"")]
    InvalidHandle { handle: String },

    #[error("normalization error for product {handle}: {reason}")]
    Normalization { handle: String, reason: String },
}
