//! Domain types and configuration shared by every quickview crate.

pub mod app_config;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod money;

pub use app_config::{AppConfig, Environment};
pub use cart::{CartAddRequest, CartLineRequest, CartState};
pub use catalog::{
    Product, ProductOption, Selection, Variant, VariantId, DEFAULT_VARIANT_TITLE, MAX_OPTION_SLOTS,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use money::Money;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
