//! HTTP client for the storefront's AJAX endpoints (`/products/{handle}.js`,
//! `/cart/add.js`, `/cart.js`).

mod cart;
mod origin;

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use quickview_core::{AppConfig, Product};
use reqwest::{Client, Url};

use crate::error::StorefrontError;
use crate::normalize::normalize_product;
use crate::types::StorefrontProduct;

pub use origin::store_origin;

/// Characters left unescaped in a handle path segment (RFC 3986 unreserved).
const HANDLE_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// HTTP client bound to one storefront origin.
///
/// Non-success product lookups map to [`StorefrontError::NotFound`]; cart
/// rejections carry the storefront's `description`. Nothing is retried.
pub struct StorefrontClient {
    pub(super) client: Client,
    pub(super) origin: Url,
}

impl StorefrontClient {
    /// Creates a client for the store at `store_url` with the given request
    /// timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::InvalidStoreUrl`] if `store_url` is not an
    ///   `http`/`https` URL with a host.
    /// - [`StorefrontError::Http`] if the underlying `reqwest::Client` cannot
    ///   be constructed.
    pub fn new(
        store_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, StorefrontError> {
        let origin = store_origin(store_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, origin })
    }

    /// Builds a client from the store URL, timeout, and user agent in `config`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, StorefrontError> {
        Self::new(
            &config.store_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// The `scheme://host[:port]` every request is addressed to.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.origin.as_str().trim_end_matches('/')
    }

    /// Fetches and normalizes the product behind `handle`.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::InvalidHandle`]: `handle` is empty or blank.
    /// - [`StorefrontError::NotFound`]: any non-success status.
    /// - [`StorefrontError::Http`]: network or TLS failure.
    /// - [`StorefrontError::Deserialize`]: body is not a product document.
    /// - [`StorefrontError::Normalization`]: product has no variants.
    pub async fn fetch_product(&self, handle: &str) -> Result<Product, StorefrontError> {
        let url = self.product_url(handle)?;
        tracing::debug!(handle, %url, "fetching product");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(StorefrontError::NotFound {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<StorefrontProduct>(&body).map_err(|e| {
            StorefrontError::Deserialize {
                context: format!("product {handle}"),
                source: e,
            }
        })?;

        normalize_product(parsed)
    }

    /// Builds `{origin}/products/{handle}.js`, percent-encoding the handle.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::InvalidHandle`] for blank handles.
    fn product_url(&self, handle: &str) -> Result<Url, StorefrontError> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(StorefrontError::InvalidHandle {
                handle: handle.to_owned(),
            });
        }
        let encoded = utf8_percent_encode(handle, HANDLE_SEGMENT);
        self.endpoint(&format!("/products/{encoded}.js"))
    }

    pub(super) fn endpoint(&self, path: &str) -> Result<Url, StorefrontError> {
        self.origin
            .join(path)
            .map_err(|e| StorefrontError::InvalidStoreUrl {
                store_url: self.origin.to_string(),
                reason: format!("cannot join \"{path}\": {e}"),
            })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
