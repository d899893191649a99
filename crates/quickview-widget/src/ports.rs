//! Seams between the widget core and the outside world.

use std::future::Future;

use quickview_core::{CartLineRequest, Product};

use crate::commands::UiCommand;
use crate::error::WidgetError;

/// Storefront operations the widget needs. Implemented for
/// [`quickview_storefront::StorefrontClient`] in [`crate::adapter`].
pub trait Storefront {
    /// Looks up a product by handle.
    fn fetch_product(&self, handle: &str) -> impl Future<Output = Result<Product, WidgetError>>;

    /// Adds every line with one batched request.
    fn add_to_cart(
        &self,
        items: &[CartLineRequest],
    ) -> impl Future<Output = Result<(), WidgetError>>;

    /// Current number of items in the cart.
    fn cart_item_count(&self) -> impl Future<Output = Result<u32, WidgetError>>;
}

/// Presentation surface. Receives commands in the order they take effect.
pub trait View {
    fn apply(&self, command: UiCommand);
}

impl<V: View + ?Sized> View for &V {
    fn apply(&self, command: UiCommand) {
        (**self).apply(command);
    }
}
