//! Terminal presentation of the quick view.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::time::Duration;

use quickview_widget::{DeferredAction, UiCommand, View, ViewModel};

/// Replays widget commands into a [`ViewModel`] and prints the ones a
/// shopper would notice immediately.
#[derive(Default)]
pub(crate) struct TerminalView {
    model: RefCell<ViewModel>,
}

impl TerminalView {
    pub(crate) fn take_scheduled(&self) -> Vec<(Duration, DeferredAction)> {
        self.model.borrow_mut().take_scheduled()
    }

    /// The modal as text; empty when hidden.
    pub(crate) fn render(&self) -> String {
        render_model(&self.model.borrow())
    }
}

impl View for TerminalView {
    fn apply(&self, command: UiCommand) {
        match &command {
            UiCommand::Notify(message) => eprintln!("! {message}"),
            UiCommand::SetCartCount(count) => println!("cart: {count} item(s)"),
            UiCommand::SetSubmitLabel(label) => tracing::debug!(%label, "submit label"),
            UiCommand::HideModal => println!("(quick view closed)"),
            _ => {}
        }
        self.model.borrow_mut().apply(&command);
    }
}

fn render_model(model: &ViewModel) -> String {
    let mut out = String::new();
    if !model.modal_visible {
        return out;
    }
    if let Some(product) = &model.product {
        let price = model.price.as_deref().unwrap_or(&product.price);
        let _ = writeln!(out, "{}  {price}", product.title);
        if let Some(image) = &product.image {
            let _ = writeln!(out, "{image}");
        }
        if let Some(description) = &product.description {
            let _ = writeln!(out, "{description}");
        }
    }
    for selector in &model.selectors {
        let choices: Vec<String> = selector
            .values
            .iter()
            .map(|v| {
                if *v == selector.selected {
                    format!("[{v}]")
                } else {
                    v.clone()
                }
            })
            .collect();
        let _ = writeln!(out, "  {}: {}", selector.label, choices.join(" "));
    }
    let variant = model
        .selected_variant
        .map_or_else(|| "none".to_owned(), |id| id.to_string());
    let state = if model.submit_loading {
        "loading"
    } else if model.submit_enabled {
        "enabled"
    } else {
        "disabled"
    };
    let _ = write!(out, "variant {variant} | {} ({state})", model.submit_label);
    out
}

#[cfg(test)]
mod tests {
    use quickview_core::VariantId;
    use quickview_widget::{ProductDisplay, Selector};

    use super::*;

    #[test]
    fn hidden_modal_renders_nothing() {
        let view = TerminalView::default();
        assert!(view.render().is_empty());
    }

    #[test]
    fn renders_selectors_with_current_choice_marked() {
        let view = TerminalView::default();
        view.apply(UiCommand::ShowProduct(ProductDisplay {
            title: "Classic Tee".to_owned(),
            description: None,
            price: "$25.00".to_owned(),
            image: None,
        }));
        view.apply(UiCommand::RenderSelectors(vec![Selector {
            slot: 0,
            label: "Color".to_owned(),
            values: vec!["Black".to_owned(), "Blue".to_owned()],
            selected: "Blue".to_owned(),
        }]));
        view.apply(UiCommand::SetSelectedVariant(VariantId(1003)));
        view.apply(UiCommand::ShowModal);

        let text = view.render();
        assert_eq!(
            text,
            "Classic Tee  $25.00\n  Color: Black [Blue]\nvariant 1003 | ADD TO CART (enabled)"
        );
    }
}
