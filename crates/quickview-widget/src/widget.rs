//! The composed quick-view widget.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use quickview_core::{AppConfig, Product, Selection, VariantId};

use crate::commands::{DeferredAction, ProductDisplay, UiCommand, ADDED_LABEL, ADD_TO_CART_LABEL};
use crate::error::WidgetError;
use crate::loader::{LoadOutcome, ProductLoader};
use crate::popup::{ClickTarget, Key, PopupController};
use crate::ports::{Storefront, View};
use crate::renderer::{self, Selector, VariantPicker};
use crate::resolver::{self, Resolution};
use crate::submitter::{self, SubmitCycle, SubmitReceipt, SubmitState};

#[derive(Debug, Clone)]
pub struct WidgetSettings {
    pub bonus_product_handle: String,
    pub currency_symbol: String,
    pub success_label_delay: Duration,
    pub auto_close_delay: Duration,
}

impl WidgetSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            bonus_product_handle: config.bonus_product_handle.clone(),
            currency_symbol: config.currency_symbol.clone(),
            success_label_delay: config.success_label_delay(),
            auto_close_delay: config.auto_close_delay(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened,
    /// A load was already pending; this open was dropped.
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(SubmitReceipt),
    /// A submit was already running; this one was dropped.
    Busy,
}

/// Selector and hidden-field state for the current product.
#[derive(Debug)]
struct PickerState {
    selectors: Vec<Selector>,
    selected_variant: Option<VariantId>,
    selected_available: bool,
    submit_label: String,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            selectors: Vec::new(),
            selected_variant: None,
            selected_available: false,
            submit_label: ADD_TO_CART_LABEL.to_owned(),
        }
    }
}

/// One quick-view instance, owned by whatever composes the page.
///
/// All methods take `&self`; state lives in `Cell`/`RefCell` and no borrow is
/// held across an `.await`, so overlapping calls on one task see each other's
/// in-flight flags.
pub struct QuickView<S, V> {
    storefront: S,
    view: V,
    settings: WidgetSettings,
    loader: ProductLoader,
    popup: RefCell<PopupController>,
    picker: RefCell<PickerState>,
    submit_state: Cell<SubmitState>,
}

impl<S: Storefront, V: View> QuickView<S, V> {
    pub fn new(storefront: S, view: V, settings: WidgetSettings) -> Self {
        Self {
            storefront,
            view,
            settings,
            loader: ProductLoader::default(),
            popup: RefCell::new(PopupController::default()),
            picker: RefCell::new(PickerState::default()),
            submit_state: Cell::new(SubmitState::Idle),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn storefront(&self) -> &S {
        &self.storefront
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.popup.borrow().is_visible()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    #[must_use]
    pub fn submit_state(&self) -> SubmitState {
        self.submit_state.get()
    }

    #[must_use]
    pub fn current_product(&self) -> Option<Product> {
        self.popup.borrow().current().cloned()
    }

    /// Value of the hidden selected-variant field.
    #[must_use]
    pub fn selected_variant(&self) -> Option<VariantId> {
        self.picker.borrow().selected_variant
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        renderer::current_selection(&self.picker.borrow().selectors)
    }

    fn emit(&self, commands: impl IntoIterator<Item = UiCommand>) {
        for command in commands {
            self.view.apply(command);
        }
    }

    /// Loads `handle`, renders it, and shows the modal.
    ///
    /// Failures are shown to the shopper as a notice and returned.
    ///
    /// # Errors
    ///
    /// [`WidgetError::NotFound`] or [`WidgetError::Network`] from the load.
    pub async fn open(&self, handle: &str) -> Result<OpenOutcome, WidgetError> {
        let product = match self.loader.load(&self.storefront, handle).await {
            Ok(LoadOutcome::Loaded(product)) => product,
            Ok(LoadOutcome::Busy) => return Ok(OpenOutcome::Busy),
            Err(err) => {
                tracing::warn!(handle, error = %err, "quick view load failed");
                self.view.apply(UiCommand::Notify(err.user_message()));
                return Err(err);
            }
        };

        tracing::info!(handle = %product.handle, "opening quick view");
        *self.picker.borrow_mut() = PickerState::default();
        self.view.apply(UiCommand::ShowProduct(ProductDisplay::from_product(
            &product,
            &self.settings.currency_symbol,
        )));
        self.render_picker(&product);

        let commands = self.popup.borrow_mut().open(product);
        self.emit(commands);
        Ok(OpenOutcome::Opened)
    }

    fn render_picker(&self, product: &Product) {
        match renderer::build_picker(product) {
            VariantPicker::Fixed(id) => {
                self.view.apply(UiCommand::RenderSelectors(Vec::new()));
                if let Some(variant) = product.variant(id) {
                    self.apply_resolution(Resolution::from(variant));
                }
            }
            VariantPicker::Selectors(selectors) => {
                self.view
                    .apply(UiCommand::RenderSelectors(selectors.clone()));
                self.picker.borrow_mut().selectors = selectors;
                self.resolve_against(product);
            }
        }
    }

    fn resolve_against(&self, product: &Product) {
        let selection = self.selection();
        match resolver::resolve(product, &selection) {
            Some(variant) => self.apply_resolution(Resolution::from(variant)),
            None => {
                tracing::warn!(
                    handle = %product.handle,
                    selection = %selection,
                    "no variant matches selection"
                );
            }
        }
    }

    fn apply_resolution(&self, resolution: Resolution) {
        {
            let mut picker = self.picker.borrow_mut();
            picker.selected_variant = Some(resolution.variant);
            picker.selected_available = resolution.available;
            resolution.submit_label().clone_into(&mut picker.submit_label);
        }
        self.emit(resolution.commands(&self.settings.currency_symbol));
    }

    /// Changes the selector in `slot` to `value` and re-resolves.
    ///
    /// Returns the bound variant afterwards. A combination with no variant
    /// leaves the previous binding in place.
    ///
    /// # Errors
    ///
    /// [`WidgetError::UnknownOption`] if no product is open, the slot does not
    /// exist, or `value` is not one of its choices.
    pub fn select(&self, slot: usize, value: &str) -> Result<Option<VariantId>, WidgetError> {
        let Some(product) = self.current_product() else {
            return Err(unknown_option(slot, value));
        };

        {
            let mut picker = self.picker.borrow_mut();
            let selector = picker
                .selectors
                .iter_mut()
                .find(|s| s.slot == slot)
                .filter(|s| s.offers(value))
                .ok_or_else(|| unknown_option(slot, value))?;
            value.clone_into(&mut selector.selected);
        }
        self.view.apply(UiCommand::SetSelectorValue {
            slot,
            value: value.to_owned(),
        });

        self.resolve_against(&product);
        Ok(self.selected_variant())
    }

    /// Submits the bound variant (and the bonus product when the selection
    /// qualifies) to the cart.
    ///
    /// # Errors
    ///
    /// - [`WidgetError::Validation`]: no variant bound; nothing is sent.
    /// - [`WidgetError::SoldOut`]: the bound variant is unavailable; nothing
    ///   is sent.
    /// - [`WidgetError::CartRejected`] / [`WidgetError::Network`]: the add
    ///   failed. The popup stays open.
    pub async fn submit(&self) -> Result<SubmitOutcome, WidgetError> {
        if self.submit_state.get() == SubmitState::Submitting {
            tracing::debug!("submit already in progress; dropping request");
            return Ok(SubmitOutcome::Busy);
        }

        let (primary, available, restore_label) = {
            let picker = self.picker.borrow();
            (
                picker.selected_variant,
                picker.selected_available,
                picker.submit_label.clone(),
            )
        };
        let primary = match primary {
            Some(variant) if available => variant,
            Some(variant) => {
                tracing::debug!(%variant, "refusing to submit sold-out variant");
                return Err(self.reject_submit(WidgetError::SoldOut { variant }));
            }
            None => return Err(self.reject_submit(WidgetError::Validation)),
        };
        let selection = self.selection();

        let Some(_cycle) = SubmitCycle::begin(&self.submit_state, &self.view) else {
            return Ok(SubmitOutcome::Busy);
        };

        match submitter::submit_to_cart(
            &self.storefront,
            &self.settings.bonus_product_handle,
            primary,
            selection.values(),
        )
        .await
        {
            Ok(receipt) => {
                self.on_added(restore_label).await;
                Ok(SubmitOutcome::Added(receipt))
            }
            Err(err) => {
                tracing::warn!(variant = %primary, error = %err, "add to cart failed");
                self.view.apply(UiCommand::Notify(err.user_message()));
                Err(err)
            }
        }
    }

    fn reject_submit(&self, err: WidgetError) -> WidgetError {
        self.view.apply(UiCommand::Notify(err.user_message()));
        err
    }

    async fn on_added(&self, restore_label: String) {
        self.emit([
            UiCommand::SetSubmitLabel(ADDED_LABEL.to_owned()),
            UiCommand::Schedule {
                after: self.settings.success_label_delay,
                action: DeferredAction::SetSubmitLabel(restore_label),
            },
        ]);

        match self.storefront.cart_item_count().await {
            Ok(count) => self.view.apply(UiCommand::SetCartCount(count)),
            Err(e) => tracing::warn!(error = %e, "could not refresh cart count"),
        }

        self.view.apply(UiCommand::Schedule {
            after: self.settings.auto_close_delay,
            action: DeferredAction::ClosePopup,
        });
    }

    /// Runs an action previously handed out in a [`UiCommand::Schedule`].
    pub fn run_deferred(&self, action: DeferredAction) {
        match action {
            DeferredAction::SetSubmitLabel(label) => {
                self.view.apply(UiCommand::SetSubmitLabel(label));
            }
            DeferredAction::ClosePopup => self.close(),
        }
    }

    /// Hides the modal and drops the current product and its selection.
    pub fn close(&self) {
        let commands = self.popup.borrow_mut().close();
        self.after_popup_event(commands);
    }

    pub fn on_key(&self, key: Key) {
        let commands = self.popup.borrow_mut().on_key(key);
        self.after_popup_event(commands);
    }

    pub fn on_click(&self, target: ClickTarget) {
        let commands = self.popup.borrow_mut().on_click(target);
        self.after_popup_event(commands);
    }

    fn after_popup_event(&self, commands: Vec<UiCommand>) {
        if commands.is_empty() {
            return;
        }
        if !self.popup.borrow().is_visible() {
            *self.picker.borrow_mut() = PickerState::default();
            tracing::debug!("quick view closed");
        }
        self.emit(commands);
    }
}

fn unknown_option(slot: usize, value: &str) -> WidgetError {
    WidgetError::UnknownOption {
        slot,
        value: value.to_owned(),
    }
}
