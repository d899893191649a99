//! Catalog types as the widget sees them after normalization.
//!
//! A [`Product`] is immutable once fetched. Variants carry up to three
//! positional option values (`option1..option3` in storefront terms); a
//! [`Selection`] is matched against those positions slot-for-slot.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Title the storefront gives the sole variant of a product without options.
pub const DEFAULT_VARIANT_TITLE: &str = "Default Title";

/// Maximum number of option slots a storefront product can vary by.
pub const MAX_OPTION_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u64);

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One option dimension of a product, e.g. `Color` with `["Black", "Blue"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    /// Permissible values in catalog order.
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub title: String,
    /// Positional option values; `None` for slots the product does not use.
    pub options: [Option<String>; MAX_OPTION_SLOTS],
    pub price: Option<Money>,
    pub available: bool,
}

impl Variant {
    /// Returns the value in the given zero-based option slot.
    #[must_use]
    pub fn option(&self, slot: usize) -> Option<&str> {
        self.options.get(slot).and_then(Option::as_deref)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub handle: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Money,
    pub featured_image: Option<String>,
    pub options: Vec<ProductOption>,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Returns the lone variant when the product has no real options, i.e.
    /// exactly one variant titled [`DEFAULT_VARIANT_TITLE`].
    #[must_use]
    pub fn sole_default_variant(&self) -> Option<&Variant> {
        match self.variants.as_slice() {
            [only] if only.title == DEFAULT_VARIANT_TITLE => Some(only),
            _ => None,
        }
    }

    /// First variant in catalog order that is available for purchase.
    #[must_use]
    pub fn first_available_variant(&self) -> Option<&Variant> {
        self.variants.iter().find(|v| v.available)
    }

    #[must_use]
    pub fn variant(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }
}

/// The option values currently chosen, one per rendered selector, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.values.get(slot).map(String::as_str)
    }

    /// Exact, case-sensitive tuple equality against the variant's positional
    /// option values across every slot.
    #[must_use]
    pub fn matches(&self, variant: &Variant) -> bool {
        if self.values.len() > MAX_OPTION_SLOTS {
            return false;
        }
        (0..MAX_OPTION_SLOTS).all(|slot| self.get(slot) == variant.option(slot))
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.values.join(" / "))
    }
}
