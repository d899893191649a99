//! Modal visibility and the "current product".

use quickview_core::Product;

use crate::commands::UiCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Where a click landed relative to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop itself, outside the content box.
    Backdrop,
    Content,
}

#[derive(Debug, Default)]
pub struct PopupController {
    visible: bool,
    current: Option<Product>,
}

impl PopupController {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn current(&self) -> Option<&Product> {
        self.current.as_ref()
    }

    /// Makes `product` current, discarding any previous one, and shows the
    /// modal with background scroll locked.
    pub fn open(&mut self, product: Product) -> Vec<UiCommand> {
        self.current = Some(product);
        self.visible = true;
        vec![UiCommand::ShowModal, UiCommand::SetScrollLocked(true)]
    }

    /// Hides the modal, unlocks scroll, and forgets the current product.
    /// No-op when already hidden.
    pub fn close(&mut self) -> Vec<UiCommand> {
        if !self.visible {
            return Vec::new();
        }
        self.visible = false;
        self.current = None;
        vec![UiCommand::HideModal, UiCommand::SetScrollLocked(false)]
    }

    pub fn on_key(&mut self, key: Key) -> Vec<UiCommand> {
        match key {
            Key::Escape if self.visible => self.close(),
            _ => Vec::new(),
        }
    }

    pub fn on_click(&mut self, target: ClickTarget) -> Vec<UiCommand> {
        match target {
            ClickTarget::Backdrop => self.close(),
            ClickTarget::Content => Vec::new(),
        }
    }
}
