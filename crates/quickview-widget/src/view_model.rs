//! In-memory picture of the modal, built by replaying [`UiCommand`]s.
//!
//! Adapters without a retained UI (the terminal front end, tests) keep one of
//! these and render from it.

use std::time::Duration;

use quickview_core::VariantId;

use crate::commands::{DeferredAction, ProductDisplay, UiCommand, ADD_TO_CART_LABEL};
use crate::renderer::Selector;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub modal_visible: bool,
    pub scroll_locked: bool,
    pub product: Option<ProductDisplay>,
    pub selectors: Vec<Selector>,
    pub selected_variant: Option<VariantId>,
    pub price: Option<String>,
    pub submit_label: String,
    pub submit_enabled: bool,
    pub submit_loading: bool,
    pub cart_count: Option<u32>,
    pub notices: Vec<String>,
    pub scheduled: Vec<(Duration, DeferredAction)>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            modal_visible: false,
            scroll_locked: false,
            product: None,
            selectors: Vec::new(),
            selected_variant: None,
            price: None,
            submit_label: ADD_TO_CART_LABEL.to_owned(),
            submit_enabled: true,
            submit_loading: false,
            cart_count: None,
            notices: Vec::new(),
            scheduled: Vec::new(),
        }
    }
}

impl ViewModel {
    pub fn apply(&mut self, command: &UiCommand) {
        match command {
            UiCommand::ShowModal => self.modal_visible = true,
            UiCommand::HideModal => self.modal_visible = false,
            UiCommand::SetScrollLocked(locked) => self.scroll_locked = *locked,
            UiCommand::ShowProduct(display) => {
                self.price = Some(display.price.clone());
                self.product = Some(display.clone());
            }
            UiCommand::RenderSelectors(selectors) => self.selectors.clone_from(selectors),
            UiCommand::SetSelectorValue { slot, value } => {
                if let Some(selector) = self.selectors.iter_mut().find(|s| s.slot == *slot) {
                    selector.selected.clone_from(value);
                }
            }
            UiCommand::SetSelectedVariant(id) => self.selected_variant = Some(*id),
            UiCommand::SetPrice(price) => self.price = Some(price.clone()),
            UiCommand::SetSubmitLabel(label) => self.submit_label.clone_from(label),
            UiCommand::SetSubmitEnabled(enabled) => self.submit_enabled = *enabled,
            UiCommand::SetSubmitLoading(loading) => self.submit_loading = *loading,
            UiCommand::SetCartCount(count) => self.cart_count = Some(*count),
            UiCommand::Notify(message) => self.notices.push(message.clone()),
            UiCommand::Schedule { after, action } => {
                self.scheduled.push((*after, action.clone()));
            }
        }
    }

    /// Removes and returns the deferred actions recorded so far.
    pub fn take_scheduled(&mut self) -> Vec<(Duration, DeferredAction)> {
        std::mem::take(&mut self.scheduled)
    }
}
