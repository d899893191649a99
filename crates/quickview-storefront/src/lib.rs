pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::StorefrontClient;
pub use error::StorefrontError;
pub use normalize::normalize_product;
pub use types::{StorefrontOption, StorefrontProduct, StorefrontVariant};
