//! Admin form fields and the rules for writing their submissions back.
//!
//! ## Save Policies
//! ```text
//! ┌──────────────────┬──────────────────────────┬───────────────────────────┐
//! │ Source           │ field submitted          │ field missing             │
//! ├──────────────────┼──────────────────────────┼───────────────────────────┤
//! │ ProductEdit      │ write sanitized value    │ write "" (clears)         │
//! │ QuickEdit        │ write sanitized value    │ leave stored value alone  │
//! └──────────────────┴──────────────────────────┴───────────────────────────┘
//! ```
//!
//! Admin input is trusted: nothing here checks that the value is a valid
//! minimum. An unreadable value simply resolves to "no constraint".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::sanitize::sanitize_text_field;
use crate::types::MinimumQuantity;
use crate::MIN_QUANTITY_META_KEY;

/// Label shared by the product edit and quick edit fields.
pub const FIELD_LABEL: &str = "Minimum Order Quantity";

/// Help text on the product edit field.
pub const FIELD_DESCRIPTION: &str =
    "Enter the minimum quantity required to add this product to the cart.";

/// A numeric admin input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NumberField {
    /// Element id and form field name.
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    /// Current value, empty when unset.
    pub value: String,
    pub min: u32,
    pub step: u32,
}

impl NumberField {
    fn minimum_quantity(value: String, description: Option<String>) -> Self {
        NumberField {
            name: MIN_QUANTITY_META_KEY.to_string(),
            label: FIELD_LABEL.to_string(),
            description,
            value,
            min: 1,
            step: 1,
        }
    }
}

/// The field on the single product edit screen, pre-populated.
pub fn product_edit_field(minimum: Option<MinimumQuantity>) -> NumberField {
    NumberField::minimum_quantity(
        minimum.map(|m| m.to_string()).unwrap_or_default(),
        Some(FIELD_DESCRIPTION.to_string()),
    )
}

/// The quick edit field, rendered once without any row's data.
pub fn quick_edit_field() -> NumberField {
    NumberField::minimum_quantity(String::new(), None)
}

/// Which admin form produced a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SaveSource {
    ProductEdit,
    QuickEdit,
}

/// Decides what to write for a submission, `None` meaning "write nothing".
///
/// ## Example
/// ```rust
/// use minqty_core::surface::{value_to_store, SaveSource};
///
/// assert_eq!(value_to_store(Some(" 12 "), SaveSource::ProductEdit).as_deref(), Some("12"));
/// assert_eq!(value_to_store(None, SaveSource::ProductEdit).as_deref(), Some(""));
/// assert_eq!(value_to_store(None, SaveSource::QuickEdit), None);
/// ```
pub fn value_to_store(submitted: Option<&str>, source: SaveSource) -> Option<String> {
    match (submitted, source) {
        (Some(raw), _) => Some(sanitize_text_field(raw)),
        (None, SaveSource::ProductEdit) => Some(String::new()),
        (None, SaveSource::QuickEdit) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_edit_field_is_prefilled() {
        let field = product_edit_field(MinimumQuantity::new(8));
        assert_eq!(field.value, "8");
        assert_eq!(field.name, MIN_QUANTITY_META_KEY);
        assert_eq!(field.min, 1);
        assert_eq!(field.step, 1);
        assert!(field.description.is_some());
    }

    #[test]
    fn test_product_edit_field_empty_without_minimum() {
        assert_eq!(product_edit_field(None).value, "");
    }

    #[test]
    fn test_quick_edit_field_has_no_value() {
        let field = quick_edit_field();
        assert!(field.value.is_empty());
        assert_eq!(field.label, FIELD_LABEL);
    }

    #[test]
    fn test_submitted_values_are_sanitized() {
        assert_eq!(
            value_to_store(Some("<b>4</b>\n"), SaveSource::QuickEdit).as_deref(),
            Some("4")
        );
        assert_eq!(
            value_to_store(Some(""), SaveSource::QuickEdit).as_deref(),
            Some("")
        );
    }
}
