//! [`Storefront`] port backed by the HTTP [`StorefrontClient`].

use quickview_core::{CartLineRequest, Product};
use quickview_storefront::{StorefrontClient, StorefrontError};

use crate::error::WidgetError;
use crate::ports::Storefront;

impl Storefront for StorefrontClient {
    async fn fetch_product(&self, handle: &str) -> Result<Product, WidgetError> {
        StorefrontClient::fetch_product(self, handle)
            .await
            .map_err(|e| lookup_error(handle, e))
    }

    async fn add_to_cart(&self, items: &[CartLineRequest]) -> Result<(), WidgetError> {
        match StorefrontClient::add_to_cart(self, items).await {
            Ok(_) => Ok(()),
            // The storefront accepted the add; only its echo was unreadable.
            Err(StorefrontError::Deserialize { context, source }) => {
                tracing::warn!(%context, error = %source, "cart add succeeded with unreadable body");
                Ok(())
            }
            Err(StorefrontError::CartRejected { description, .. }) => {
                Err(WidgetError::CartRejected { description })
            }
            Err(e) => Err(WidgetError::Network(e.to_string())),
        }
    }

    async fn cart_item_count(&self) -> Result<u32, WidgetError> {
        StorefrontClient::fetch_cart(self)
            .await
            .map(|cart| cart.item_count)
            .map_err(|e| WidgetError::Network(e.to_string()))
    }
}

/// Product lookups only distinguish "no usable product" from transport failure.
fn lookup_error(handle: &str, err: StorefrontError) -> WidgetError {
    match err {
        StorefrontError::Http(e) => WidgetError::Network(e.to_string()),
        other => {
            tracing::debug!(handle, error = %other, "product lookup failed");
            WidgetError::NotFound {
                handle: handle.to_owned(),
            }
        }
    }
}
