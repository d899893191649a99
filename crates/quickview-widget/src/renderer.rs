//! Builds the option selectors for a product.

use quickview_core::{Product, Selection, VariantId};

/// One labeled single-choice selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Zero-based position among the rendered selectors.
    pub slot: usize,
    pub label: String,
    pub values: Vec<String>,
    pub selected: String,
}

impl Selector {
    #[must_use]
    pub fn offers(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// What the variants container shows for a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantPicker {
    /// No options to choose: the hidden field binds straight to this variant.
    Fixed(VariantId),
    Selectors(Vec<Selector>),
}

/// Builds the picker for `product`.
///
/// A product whose only variant is the storefront's `"Default Title"`
/// gets no selectors. Otherwise every option with at least one value gets a
/// selector with its values in catalog order and the first value selected.
#[must_use]
pub fn build_picker(product: &Product) -> VariantPicker {
    if let Some(only) = product.sole_default_variant() {
        return VariantPicker::Fixed(only.id);
    }

    let selectors = product
        .options
        .iter()
        .filter_map(|option| {
            let first = option.values.first()?;
            Some((option, first.clone()))
        })
        .enumerate()
        .map(|(slot, (option, first))| Selector {
            slot,
            label: option.name.clone(),
            values: option.values.clone(),
            selected: first,
        })
        .collect();

    VariantPicker::Selectors(selectors)
}

/// Reads every selector's current value, in slot order.
#[must_use]
pub fn current_selection(selectors: &[Selector]) -> Selection {
    Selection::new(selectors.iter().map(|s| s.selected.clone()).collect())
}
