use quickview_core::VariantId;
use thiserror::Error;

/// Shown when the cart rejects an add without saying why.
pub const GENERIC_CART_FAILURE: &str = "Could not add this item to your cart. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The product handle did not resolve to a usable product.
    #[error("product \"{handle}\" not found")]
    NotFound { handle: String },

    /// Transport-level failure talking to the storefront.
    #[error("network error: {0}")]
    Network(String),

    /// Submit was attempted with no variant bound.
    #[error("no variant selected")]
    Validation,

    /// Submit was attempted while the bound variant is unavailable.
    #[error("variant {variant} is sold out")]
    SoldOut { variant: VariantId },

    #[error("cart rejected the request: {}", .description.as_deref().unwrap_or(GENERIC_CART_FAILURE))]
    CartRejected { description: Option<String> },

    #[error("\"{value}\" is not a choice for option slot {slot}")]
    UnknownOption { slot: usize, value: String },
}

impl WidgetError {
    /// Text for the blocking notice shown to the shopper.
    ///
    /// Cart rejections pass the storefront's description through unchanged.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WidgetError::NotFound { .. } => "Sorry, this product could not be found.".to_owned(),
            WidgetError::Network(_) => {
                "Could not reach the store. Please check your connection and try again.".to_owned()
            }
            WidgetError::Validation => "Please select a product option.".to_owned(),
            WidgetError::SoldOut { .. } => "Sorry, this option is sold out.".to_owned(),
            WidgetError::CartRejected { description } => description
                .clone()
                .unwrap_or_else(|| GENERIC_CART_FAILURE.to_owned()),
            WidgetError::UnknownOption { value, .. } => {
                format!("\"{value}\" is not available for this product.")
            }
        }
    }
}
