//! Commands the widget core emits for a [`crate::View`] to carry out.

use std::time::Duration;

use quickview_core::{Product, VariantId};

use crate::renderer::Selector;

pub const ADD_TO_CART_LABEL: &str = "ADD TO CART";
pub const SOLD_OUT_LABEL: &str = "SOLD OUT";
pub const ADDED_LABEL: &str = "ADDED!";

/// Static product details shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDisplay {
    pub title: String,
    pub description: Option<String>,
    pub price: String,
    pub image: Option<String>,
}

impl ProductDisplay {
    #[must_use]
    pub fn from_product(product: &Product, currency_symbol: &str) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price.format(currency_symbol),
            image: product.featured_image.clone(),
        }
    }
}

/// Work the view runs later, fire-and-forget, by handing it back to
/// [`crate::QuickView::run_deferred`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    SetSubmitLabel(String),
    ClosePopup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    ShowModal,
    HideModal,
    SetScrollLocked(bool),
    ShowProduct(ProductDisplay),
    /// Replaces the variants container. An empty list clears it.
    RenderSelectors(Vec<Selector>),
    SetSelectorValue { slot: usize, value: String },
    /// Binds the hidden selected-variant field.
    SetSelectedVariant(VariantId),
    SetPrice(String),
    SetSubmitLabel(String),
    SetSubmitEnabled(bool),
    SetSubmitLoading(bool),
    SetCartCount(u32),
    /// Blocking notice for the shopper.
    Notify(String),
    Schedule {
        after: Duration,
        action: DeferredAction,
    },
}
