use serde::{Deserialize, Serialize};

use crate::catalog::VariantId;

/// One line of a `/cart/add.js` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineRequest {
    pub id: VariantId,
    pub quantity: u32,
}

impl CartLineRequest {
    #[must_use]
    pub fn single(id: VariantId) -> Self {
        Self { id, quantity: 1 }
    }
}

/// Body of a batched `POST /cart/add.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartAddRequest<'a> {
    pub items: &'a [CartLineRequest],
}

/// The part of `GET /cart.js` the widget reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CartState {
    pub item_count: u32,
}
