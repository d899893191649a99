//! Product loading with a single in-flight slot.

use std::cell::Cell;

use quickview_core::Product;

use crate::error::WidgetError;
use crate::ports::Storefront;

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Product),
    /// Another load was still pending; this request was dropped.
    Busy,
}

/// Fetches products, allowing at most one request in flight.
#[derive(Debug, Default)]
pub struct ProductLoader {
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag on every exit path, including a dropped future.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl ProductLoader {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.get()
    }

    /// Loads the product behind `handle`.
    ///
    /// # Errors
    ///
    /// - [`WidgetError::NotFound`]: blank handle (no request is made) or the
    ///   storefront has no such product.
    /// - [`WidgetError::Network`]: transport failure.
    pub async fn load<S: Storefront>(
        &self,
        storefront: &S,
        handle: &str,
    ) -> Result<LoadOutcome, WidgetError> {
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(WidgetError::NotFound {
                handle: handle.to_owned(),
            });
        }

        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            tracing::debug!(handle, "product load already in flight; dropping request");
            return Ok(LoadOutcome::Busy);
        };

        let product = storefront.fetch_product(handle).await?;
        tracing::debug!(
            handle,
            variants = product.variants.len(),
            "product loaded"
        );
        Ok(LoadOutcome::Loaded(product))
    }
}
