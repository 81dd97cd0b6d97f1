//! Product list column and the quick edit hand-off.
//!
//! ## Two-Phase Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RENDER (once per page)                                                 │
//! │  for each listed product:                                               │
//! │      minimum = resolve(product_id)                                      │
//! │      row "post-{id}" ── visible text  "10"                              │
//! │                     └─ hidden attr   data-min_quantity="10"             │
//! │                                                                         │
//! │  ACTIVATE (each time a row's quick edit opens)                          │
//! │      target ──► row id? ──no──► nothing happens                         │
//! │                   │                                                     │
//! │                  yes                                                    │
//! │                   ▼                                                     │
//! │      fresh quick edit field ◄── copy hidden attr of THAT row            │
//! │                                 (absent → empty)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Activation only reads what the render phase already placed in the page.
//! It never resolves again and never reuses the previous row's input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::surface::fields::{quick_edit_field, NumberField};
use crate::types::{MinimumQuantity, ProductId};

/// Column key in the product list table.
pub const MIN_QUANTITY_COLUMN: &str = "min_quantity";

/// Column header.
pub const MIN_QUANTITY_COLUMN_LABEL: &str = "Min";

/// Data attribute carrying the machine-readable value on each row.
pub const HIDDEN_ATTRIBUTE: &str = "data-min_quantity";

/// Prefix of a list row's element id.
const ROW_PREFIX: &str = "post-";

/// A column in the admin product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListColumn {
    pub key: String,
    pub label: String,
}

/// Appends the minimum quantity column unless it is already registered.
pub fn register_column(mut columns: Vec<ListColumn>) -> Vec<ListColumn> {
    if !columns.iter().any(|c| c.key == MIN_QUANTITY_COLUMN) {
        columns.push(ListColumn {
            key: MIN_QUANTITY_COLUMN.to_string(),
            label: MIN_QUANTITY_COLUMN_LABEL.to_string(),
        });
    }
    columns
}

/// Element id of the list row for `product_id`.
pub fn row_element_id(product_id: &ProductId) -> String {
    format!("{}{}", ROW_PREFIX, product_id)
}

/// Recovers the product id from a list row element id.
///
/// Returns `None` unless the id has the row prefix followed by a non-empty
/// identifier other than `"0"`.
pub fn parse_row_element_id(element_id: &str) -> Option<ProductId> {
    let raw = element_id.strip_prefix(ROW_PREFIX)?.trim();
    if raw.is_empty() || raw == "0" {
        return None;
    }
    Some(ProductId::new(raw))
}

/// One row's cell in the minimum quantity column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ColumnCell {
    pub product_id: ProductId,
    /// Element id of the row this cell belongs to.
    pub row_id: String,
    /// What the admin sees in the column.
    pub visible_text: String,
    /// Value of [`HIDDEN_ATTRIBUTE`] on the row.
    pub hidden_value: String,
}

/// Renders the cell for one product from its resolved minimum.
pub fn render_cell(product_id: &ProductId, minimum: Option<MinimumQuantity>) -> ColumnCell {
    let value = minimum.map(|m| m.to_string()).unwrap_or_default();
    ColumnCell {
        product_id: product_id.clone(),
        row_id: row_element_id(product_id),
        visible_text: value.clone(),
        hidden_value: value,
    }
}

/// The render phase's output: every listed row's cell, keyed by product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RenderedListing {
    rows: BTreeMap<String, ColumnCell>,
}

impl RenderedListing {
    /// Creates an empty listing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a row's cell.
    pub fn push(&mut self, cell: ColumnCell) {
        self.rows.insert(cell.product_id.as_str().to_string(), cell);
    }

    /// The hidden value of a row, `None` when the row was not rendered.
    pub fn hidden_value(&self, product_id: &ProductId) -> Option<&str> {
        self.rows
            .get(product_id.as_str())
            .map(|cell| cell.hidden_value.as_str())
    }

    /// Rendered cells in row order.
    pub fn cells(&self) -> impl Iterator<Item = &ColumnCell> {
        self.rows.values()
    }

    /// Number of rendered rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Checks whether no rows were rendered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<ColumnCell> for RenderedListing {
    fn from_iter<I: IntoIterator<Item = ColumnCell>>(iter: I) -> Self {
        let mut listing = RenderedListing::new();
        for cell in iter {
            listing.push(cell);
        }
        listing
    }
}

/// What the admin clicked to open quick edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationTarget {
    /// A list row, identified by its element id.
    RowElement(String),
    /// Anything else (toolbar button, keyboard shortcut without a row).
    Detached,
}

impl ActivationTarget {
    /// The product whose row was activated, if one resolves.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            ActivationTarget::RowElement(element_id) => parse_row_element_id(element_id),
            ActivationTarget::Detached => None,
        }
    }
}

/// The quick edit input currently open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuickEditInput {
    pub product_id: ProductId,
    pub field: NumberField,
}

/// Client-side quick edit state for one listing page.
#[derive(Debug, Clone, Default)]
pub struct QuickEditSession {
    active: Option<QuickEditInput>,
}

impl QuickEditSession {
    /// Creates a session with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens quick edit for `target`, populating the input from `listing`.
    ///
    /// When the target does not resolve to a row, nothing runs and the
    /// session is left as it was.
    pub fn activate(
        &mut self,
        listing: &RenderedListing,
        target: &ActivationTarget,
    ) -> Option<&QuickEditInput> {
        let product_id = target.product_id()?;

        let mut field = quick_edit_field();
        field.value = listing
            .hidden_value(&product_id)
            .unwrap_or_default()
            .to_string();

        self.active = Some(QuickEditInput { product_id, field });
        self.active.as_ref()
    }

    /// The input currently open, if any.
    pub fn active(&self) -> Option<&QuickEditInput> {
        self.active.as_ref()
    }

    /// Closes the open input (save or cancel).
    pub fn close(&mut self) -> Option<QuickEditInput> {
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> RenderedListing {
        [
            render_cell(&"5".into(), MinimumQuantity::new(5)),
            render_cell(&"6".into(), None),
            render_cell(&"7".into(), MinimumQuantity::new(12)),
        ]
        .into_iter()
        .collect()
    }

    fn row(id: &str) -> ActivationTarget {
        ActivationTarget::RowElement(format!("post-{}", id))
    }

    #[test]
    fn test_register_column_appends_once() {
        let existing = vec![ListColumn {
            key: "name".to_string(),
            label: "Name".to_string(),
        }];
        let columns = register_column(register_column(existing));

        assert_eq!(columns.len(), 2);
        assert_eq!(columns[1].key, MIN_QUANTITY_COLUMN);
        assert_eq!(columns[1].label, "Min");
    }

    #[test]
    fn test_render_cell_embeds_value_twice() {
        let cell = render_cell(&"5".into(), MinimumQuantity::new(5));
        assert_eq!(cell.visible_text, "5");
        assert_eq!(cell.hidden_value, "5");
        assert_eq!(cell.row_id, "post-5");

        let cell = render_cell(&"6".into(), None);
        assert_eq!(cell.visible_text, "");
        assert_eq!(cell.hidden_value, "");
    }

    #[test]
    fn test_parse_row_element_id() {
        assert_eq!(parse_row_element_id("post-42"), Some(ProductId::from("42")));
        assert_eq!(parse_row_element_id("post-0"), None);
        assert_eq!(parse_row_element_id("post-"), None);
        assert_eq!(parse_row_element_id("edit-42"), None);
    }

    #[test]
    fn test_activation_copies_row_value() {
        let listing = listing();
        let mut session = QuickEditSession::new();

        let input = session.activate(&listing, &row("5")).unwrap();
        assert_eq!(input.field.value, "5");
        assert_eq!(input.product_id.as_str(), "5");
    }

    #[test]
    fn test_no_cross_row_leakage() {
        let listing = listing();
        let mut session = QuickEditSession::new();

        session.activate(&listing, &row("7"));
        let input = session.activate(&listing, &row("6")).unwrap();
        assert_eq!(input.field.value, "");

        let input = session.activate(&listing, &row("5")).unwrap();
        assert_eq!(input.field.value, "5");
    }

    #[test]
    fn test_row_not_rendered_defaults_to_empty() {
        let listing = listing();
        let mut session = QuickEditSession::new();

        session.activate(&listing, &row("7"));
        let input = session.activate(&listing, &row("99")).unwrap();
        assert_eq!(input.field.value, "");
    }

    #[test]
    fn test_unresolved_target_does_nothing() {
        let listing = listing();
        let mut session = QuickEditSession::new();

        session.activate(&listing, &row("5"));
        assert!(session.activate(&listing, &ActivationTarget::Detached).is_none());
        assert!(session.activate(&listing, &row("0")).is_none());
        assert_eq!(session.active().unwrap().product_id.as_str(), "5");

        assert!(session.close().is_some());
        assert!(session.active().is_none());
    }
}
