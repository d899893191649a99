//! Wire types for the storefront's AJAX endpoints.
//!
//! ## Observed shape of `GET /products/{handle}.js`
//!
//! ### Prices
//! Integers in minor currency units (`2500` for 25.00), unlike the decimal
//! strings of `products.json`. Variant `price` may be `null` on some themes'
//! proxies; we model it as `Option<i64>`.
//!
//! ### `featured_image`
//! A protocol-relative CDN URL (`"//cdn.shopify.com/s/files/..."`) or `null`
//! for products without media. Normalization adds the `https:` scheme.
//!
//! ### `options`
//! Objects with `name`, `position`, and `values`. A product without options
//! still reports one option named `"Title"` with the single value
//! `"Default Title"`.
//!
//! ### `option1`..`option3` on variants
//! Explicit `null` for slots the product does not use.
//!
//! ### `description`
//! Raw HTML; may be an empty string.

use serde::Deserialize;

/// Response body of `GET /products/{handle}.js`.
#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontProduct {
    pub id: u64,
    pub title: String,
    pub handle: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Lowest variant price in minor units.
    pub price: i64,

    #[serde(default)]
    pub featured_image: Option<String>,

    #[serde(default)]
    pub options: Vec<StorefrontOption>,

    pub variants: Vec<StorefrontVariant>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontOption {
    pub name: String,

    /// 1-based slot index. Absent on some older themes.
    #[serde(default)]
    pub position: Option<u8>,

    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontVariant {
    pub id: u64,

    /// `"Black / Medium"` style title, or `"Default Title"`.
    pub title: String,

    #[serde(default)]
    pub option1: Option<String>,
    #[serde(default)]
    pub option2: Option<String>,
    #[serde(default)]
    pub option3: Option<String>,

    #[serde(default)]
    pub price: Option<i64>,

    /// Defaults to `false` when absent: an unknown stock state is not
    /// offered for purchase.
    #[serde(default)]
    pub available: bool,
}

/// Error body returned by `/cart/add.js` on a non-success status, e.g.
/// `{"status": 422, "message": "Cart Error", "description": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
