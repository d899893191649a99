//! Cart endpoints for `StorefrontClient`.

use quickview_core::{CartAddRequest, CartLineRequest, CartState};

use crate::error::StorefrontError;
use crate::types::CartErrorBody;

use super::StorefrontClient;

impl StorefrontClient {
    /// Adds every line in `items` with a single batched `POST /cart/add.js`.
    ///
    /// Returns the storefront's JSON response (the added line items).
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::CartRejected`]: non-success status; carries the
    ///   body's `description` when present. The body's `message` is not a
    ///   substitute.
    /// - [`StorefrontError::Http`]: network or TLS failure.
    /// - [`StorefrontError::Deserialize`]: success body is not JSON.
    pub async fn add_to_cart(
        &self,
        items: &[CartLineRequest],
    ) -> Result<serde_json::Value, StorefrontError> {
        let url = self.endpoint("/cart/add.js")?;
        tracing::debug!(line_count = items.len(), "posting cart add");

        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&CartAddRequest { items })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let parsed = serde_json::from_str::<CartErrorBody>(&body).ok();
            // `message` is a generic category ("Cart Error"), never shown.
            let message = parsed.as_ref().and_then(|b| b.message.as_deref());
            tracing::debug!(status = status.as_u16(), ?message, "cart add rejected");
            let description = parsed
                .and_then(|b| b.description)
                .filter(|d| !d.trim().is_empty());
            return Err(StorefrontError::CartRejected {
                status: status.as_u16(),
                description,
            });
        }

        serde_json::from_str(&body).map_err(|e| StorefrontError::Deserialize {
            context: "cart add response".to_owned(),
            source: e,
        })
    }

    /// Reads the current cart from `GET /cart.js`.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::UnexpectedStatus`]: non-success status.
    /// - [`StorefrontError::Http`]: network or TLS failure.
    /// - [`StorefrontError::Deserialize`]: body lacks `item_count`.
    pub async fn fetch_cart(&self) -> Result<CartState, StorefrontError> {
        let url = self.endpoint("/cart.js")?;
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(StorefrontError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<CartState>(&body).map_err(|e| StorefrontError::Deserialize {
            context: "cart state".to_owned(),
            source: e,
        })
    }
}
