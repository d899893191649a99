//! Cart submission: line items, bonus product, and the submit state machine.
//!
//! `Idle → Submitting → (Success | Failed) → Idle`. Entering `Submitting`
//! disables the submit control and shows its loading indicator; leaving it
//! always undoes both, whatever the outcome.

use std::cell::Cell;

use quickview_core::{CartLineRequest, VariantId};

use crate::bonus;
use crate::commands::UiCommand;
use crate::error::WidgetError;
use crate::ports::{Storefront, View};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// What a successful submit sent to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub items: Vec<CartLineRequest>,
    pub bonus: Option<VariantId>,
}

/// Holds the `Submitting` state for one attempt. Dropping it returns the
/// machine to `Idle` and re-enables the submit control.
pub struct SubmitCycle<'a, V: View> {
    state: &'a Cell<SubmitState>,
    view: &'a V,
}

impl<'a, V: View> SubmitCycle<'a, V> {
    /// Enters `Submitting`. Returns `None` if an attempt is already running.
    pub fn begin(state: &'a Cell<SubmitState>, view: &'a V) -> Option<Self> {
        if state.replace(SubmitState::Submitting) == SubmitState::Submitting {
            return None;
        }
        view.apply(UiCommand::SetSubmitEnabled(false));
        view.apply(UiCommand::SetSubmitLoading(true));
        Some(Self { state, view })
    }
}

impl<V: View> Drop for SubmitCycle<'_, V> {
    fn drop(&mut self) {
        self.state.set(SubmitState::Idle);
        self.view.apply(UiCommand::SetSubmitLoading(false));
        self.view.apply(UiCommand::SetSubmitEnabled(true));
    }
}

/// Adds `primary` to the cart, plus the bonus product's first available
/// variant when `selected_values` satisfy [`bonus::evaluate`].
///
/// The bonus lookup finishes before the add request is sent. A bonus that
/// cannot be fetched or has nothing available is skipped and logged.
///
/// # Errors
///
/// Propagates the storefront's error for the add request
/// ([`WidgetError::CartRejected`] or [`WidgetError::Network`]).
pub async fn submit_to_cart<S: Storefront>(
    storefront: &S,
    bonus_handle: &str,
    primary: VariantId,
    selected_values: &[String],
) -> Result<SubmitReceipt, WidgetError> {
    let mut items = vec![CartLineRequest::single(primary)];

    let bonus = if bonus::evaluate(selected_values) {
        find_bonus_variant(storefront, bonus_handle).await
    } else {
        None
    };
    if let Some(id) = bonus {
        items.push(CartLineRequest::single(id));
    }

    storefront.add_to_cart(&items).await?;
    tracing::info!(
        variant = %primary,
        bonus = ?bonus.map(|b| b.0),
        line_count = items.len(),
        "added to cart"
    );
    Ok(SubmitReceipt { items, bonus })
}

async fn find_bonus_variant<S: Storefront>(storefront: &S, handle: &str) -> Option<VariantId> {
    match storefront.fetch_product(handle).await {
        Ok(product) => {
            let found = product.first_available_variant().map(|v| v.id);
            if found.is_none() {
                tracing::warn!(
                    handle,
                    "bonus product has no available variant; submitting without it"
                );
            }
            found
        }
        Err(e) => {
            tracing::warn!(
                handle,
                error = %e,
                "bonus product lookup failed; submitting without it"
            );
            None
        }
    }
}
