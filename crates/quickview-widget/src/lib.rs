//! Product quick-view widget core.
//!
//! [`QuickView`] composes the loader, renderer, resolver, bonus rule, cart
//! submitter, and popup controller. It never touches a presentation surface
//! directly: every visible effect is a [`UiCommand`] sent to a [`View`], and
//! every network call goes through a [`Storefront`].

pub mod adapter;
pub mod bonus;
pub mod commands;
pub mod error;
pub mod loader;
pub mod popup;
pub mod ports;
pub mod renderer;
pub mod resolver;
pub mod submitter;
pub mod view_model;
pub mod widget;

pub use commands::{DeferredAction, ProductDisplay, UiCommand};
pub use error::{WidgetError, GENERIC_CART_FAILURE};
pub use popup::{ClickTarget, Key};
pub use ports::{Storefront, View};
pub use renderer::Selector;
pub use submitter::{SubmitReceipt, SubmitState};
pub use view_model::ViewModel;
pub use widget::{OpenOutcome, QuickView, SubmitOutcome, WidgetSettings};
