//! Maps the current selection to a variant.

use quickview_core::{Money, Product, Selection, Variant, VariantId};

use crate::commands::{UiCommand, ADD_TO_CART_LABEL, SOLD_OUT_LABEL};

/// The state a matched variant pushes into the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub variant: VariantId,
    pub price: Option<Money>,
    pub available: bool,
}

impl From<&Variant> for Resolution {
    fn from(variant: &Variant) -> Self {
        Self {
            variant: variant.id,
            price: variant.price,
            available: variant.available,
        }
    }
}

impl Resolution {
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.available {
            ADD_TO_CART_LABEL
        } else {
            SOLD_OUT_LABEL
        }
    }

    /// Hidden field, price (when the variant has one), and submit control.
    #[must_use]
    pub fn commands(&self, currency_symbol: &str) -> Vec<UiCommand> {
        let mut commands = vec![UiCommand::SetSelectedVariant(self.variant)];
        if let Some(price) = self.price {
            commands.push(UiCommand::SetPrice(price.format(currency_symbol)));
        }
        commands.push(UiCommand::SetSubmitEnabled(self.available));
        commands.push(UiCommand::SetSubmitLabel(self.submit_label().to_owned()));
        commands
    }
}

/// First variant, in catalog order, whose option tuple equals `selection`.
#[must_use]
pub fn resolve<'p>(product: &'p Product, selection: &Selection) -> Option<&'p Variant> {
    product.variants.iter().find(|v| selection.matches(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(id: u64, color: &str, size: &str, available: bool) -> Variant {
        Variant {
            id: VariantId(id),
            title: format!("{color} / {size}"),
            options: [Some(color.to_owned()), Some(size.to_owned()), None],
            price: Some(Money::from_minor(2500 + i64::try_from(id).unwrap_or(0))),
            available,
        }
    }

    fn classic_tee() -> Product {
        Product {
            id: 1,
            handle: "classic-tee".to_owned(),
            title: "Classic Tee".to_owned(),
            description: None,
            price: Money::from_minor(2500),
            featured_image: None,
            options: Vec::new(),
            variants: vec![
                variant(1, "Black", "Small", true),
                variant(2, "Black", "Medium", true),
                variant(3, "Blue", "Medium", false),
            ],
        }
    }

    fn selection(values: &[&str]) -> Selection {
        Selection::new(values.iter().map(|v| (*v).to_owned()).collect())
    }

    #[test]
    fn resolves_exact_match() {
        let p = classic_tee();
        let v = resolve(&p, &selection(&["Black", "Medium"])).unwrap();
        assert_eq!(v.id, VariantId(2));
    }

    #[test]
    fn missing_combination_is_no_match() {
        let p = classic_tee();
        assert!(resolve(&p, &selection(&["Blue", "Small"])).is_none());
    }

    #[test]
    fn match_never_disagrees_with_selection() {
        let p = classic_tee();
        for sel in [["Black", "Small"], ["Black", "Medium"], ["Blue", "Medium"]] {
            let s = selection(&sel);
            let v = resolve(&p, &s).unwrap();
            assert_eq!(v.option(0), Some(sel[0]));
            assert_eq!(v.option(1), Some(sel[1]));
        }
    }

    #[test]
    fn resolving_twice_is_stable() {
        let p = classic_tee();
        let s = selection(&["Blue", "Medium"]);
        assert_eq!(resolve(&p, &s).map(|v| v.id), resolve(&p, &s).map(|v| v.id));
    }

    #[test]
    fn first_match_wins_on_duplicate_tuples() {
        let mut p = classic_tee();
        p.variants.push(variant(9, "Black", "Small", true));
        assert_eq!(
            resolve(&p, &selection(&["Black", "Small"])).map(|v| v.id),
            Some(VariantId(1))
        );
    }

    #[test]
    fn sold_out_variant_disables_submit() {
        let p = classic_tee();
        let r = Resolution::from(&p.variants[2]);
        let commands = r.commands("$");
        assert!(commands.contains(&UiCommand::SetSubmitEnabled(false)));
        assert!(commands.contains(&UiCommand::SetSubmitLabel(SOLD_OUT_LABEL.to_owned())));
        assert_eq!(commands[0], UiCommand::SetSelectedVariant(VariantId(3)));
    }

    #[test]
    fn variant_without_price_leaves_price_alone() {
        let mut v = variant(1, "Black", "Small", true);
        v.price = None;
        let commands = Resolution::from(&v).commands("$");
        assert!(!commands.iter().any(|c| matches!(c, UiCommand::SetPrice(_))));
        assert!(commands.contains(&UiCommand::SetSubmitLabel(ADD_TO_CART_LABEL.to_owned())));
    }
}
