//! Promotional rule that appends a bonus product to the cart.
//!
//! The rule fires when the submitted option values contain both trigger
//! tokens, compared case-insensitively as whole values. The tokens may come
//! from any slot: `["Medium", "Black"]` qualifies just like `["Black", "Medium"]`.

use std::collections::HashSet;

const TRIGGER_COLOR: &str = "black";
const TRIGGER_SIZE: &str = "medium";

/// Returns `true` iff the selected values include both `"black"` and
/// `"medium"` (case-insensitive, exact token match).
#[must_use]
pub fn evaluate<S: AsRef<str>>(selected: &[S]) -> bool {
    let values: HashSet<String> = selected
        .iter()
        .map(|v| v.as_ref().to_lowercase())
        .collect();
    values.contains(TRIGGER_COLOR) && values.contains(TRIGGER_SIZE)
}
