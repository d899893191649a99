//! Test doubles for the widget's ports.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use quickview_core::{
    CartLineRequest, Money, Product, ProductOption, Variant, VariantId, DEFAULT_VARIANT_TITLE,
};
use quickview_widget::{QuickView, Storefront, UiCommand, View, ViewModel, WidgetError, WidgetSettings};

pub const BONUS_HANDLE: &str = "free-tote";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Fetch(String),
    Add(Vec<CartLineRequest>),
    CartCount,
}

/// In-memory storefront. Every call yields once so overlapping futures on
/// one task interleave the way real requests do.
pub struct FakeStorefront {
    products: HashMap<String, Result<Product, WidgetError>>,
    add_result: RefCell<Result<(), WidgetError>>,
    cart_count: Cell<Option<u32>>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeStorefront {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
            add_result: RefCell::new(Ok(())),
            cart_count: Cell::new(Some(1)),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.handle.clone(), Ok(product));
        self
    }

    pub fn with_lookup_error(mut self, handle: &str, err: WidgetError) -> Self {
        self.products.insert(handle.to_owned(), Err(err));
        self
    }

    pub fn rejecting_adds(self, err: WidgetError) -> Self {
        *self.add_result.borrow_mut() = Err(err);
        self
    }

    pub fn without_cart_count(self) -> Self {
        self.cart_count.set(None);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn adds(&self) -> Vec<Vec<CartLineRequest>> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Add(items) => Some(items.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn fetches(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Fetch(h) => Some(h.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Storefront for FakeStorefront {
    async fn fetch_product(&self, handle: &str) -> Result<Product, WidgetError> {
        self.calls.borrow_mut().push(Call::Fetch(handle.to_owned()));
        tokio::task::yield_now().await;
        self.products
            .get(handle)
            .cloned()
            .unwrap_or_else(|| {
                Err(WidgetError::NotFound {
                    handle: handle.to_owned(),
                })
            })
    }

    async fn add_to_cart(&self, items: &[CartLineRequest]) -> Result<(), WidgetError> {
        self.calls.borrow_mut().push(Call::Add(items.to_vec()));
        tokio::task::yield_now().await;
        self.add_result.borrow().clone()
    }

    async fn cart_item_count(&self) -> Result<u32, WidgetError> {
        self.calls.borrow_mut().push(Call::CartCount);
        tokio::task::yield_now().await;
        self.cart_count
            .get()
            .ok_or_else(|| WidgetError::Network("cart unavailable".to_owned()))
    }
}

/// Records every command and keeps a replayed [`ViewModel`].
#[derive(Default)]
pub struct RecordingView {
    pub model: RefCell<ViewModel>,
    pub log: RefCell<Vec<UiCommand>>,
}

impl RecordingView {
    pub fn model(&self) -> ViewModel {
        self.model.borrow().clone()
    }
}

impl View for RecordingView {
    fn apply(&self, command: UiCommand) {
        self.model.borrow_mut().apply(&command);
        self.log.borrow_mut().push(command);
    }
}

pub fn settings() -> WidgetSettings {
    WidgetSettings {
        bonus_product_handle: BONUS_HANDLE.to_owned(),
        currency_symbol: "$".to_owned(),
        success_label_delay: Duration::from_millis(2000),
        auto_close_delay: Duration::from_millis(1500),
    }
}

pub fn widget(storefront: FakeStorefront) -> QuickView<FakeStorefront, RecordingView> {
    QuickView::new(storefront, RecordingView::default(), settings())
}

pub fn variant(id: u64, values: &[&str], price: Option<i64>, available: bool) -> Variant {
    let mut options: [Option<String>; 3] = [None, None, None];
    for (slot, value) in values.iter().enumerate() {
        options[slot] = Some((*value).to_owned());
    }
    Variant {
        id: VariantId(id),
        title: values.join(" / "),
        options,
        price: price.map(Money::from_minor),
        available,
    }
}

pub fn option(name: &str, values: &[&str]) -> ProductOption {
    ProductOption {
        name: name.to_owned(),
        values: values.iter().map(|v| (*v).to_owned()).collect(),
    }
}

/// `classic-tee` with (Black,Small), (Black,Medium), (Blue,Medium), all available.
pub fn classic_tee() -> Product {
    Product {
        id: 100,
        handle: "classic-tee".to_owned(),
        title: "Classic Tee".to_owned(),
        description: Some("<p>Soft cotton.</p>".to_owned()),
        price: Money::from_minor(2500),
        featured_image: Some("https://cdn.example.com/tee.jpg".to_owned()),
        options: vec![
            option("Color", &["Black", "Blue"]),
            option("Size", &["Small", "Medium"]),
        ],
        variants: vec![
            variant(1001, &["Black", "Small"], Some(2500), true),
            variant(1002, &["Black", "Medium"], Some(2700), true),
            variant(1003, &["Blue", "Medium"], Some(2500), true),
        ],
    }
}

/// Bonus product whose first variant is sold out.
pub fn tote() -> Product {
    Product {
        id: 700,
        handle: BONUS_HANDLE.to_owned(),
        title: "Free Tote".to_owned(),
        description: None,
        price: Money::from_minor(0),
        featured_image: None,
        options: vec![option("Color", &["Natural", "Black"])],
        variants: vec![
            variant(7001, &["Natural"], Some(0), false),
            variant(7002, &["Black"], Some(0), true),
        ],
    }
}

pub fn gift_card() -> Product {
    let mut only = variant(5001, &["Default Title"], Some(1000), true);
    only.title = DEFAULT_VARIANT_TITLE.to_owned();
    Product {
        id: 500,
        handle: "gift-card".to_owned(),
        title: "Gift Card".to_owned(),
        description: None,
        price: Money::from_minor(1000),
        featured_image: None,
        options: vec![option("Title", &["Default Title"])],
        variants: vec![only],
    }
}
