//! Storefront quantity widget and product summary line.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::MinimumQuantity;

/// Arguments for the storefront quantity input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuantityInputArgs {
    /// Value shown when the widget first renders.
    pub input_value: u32,
    /// Lowest value the widget allows.
    pub min_value: u32,
    /// Highest value the widget allows, `None` for unbounded.
    pub max_value: Option<u32>,
    /// Increment between allowed values.
    pub step: u32,
}

impl Default for QuantityInputArgs {
    /// Platform defaults: start at one, no lower bound beyond zero.
    fn default() -> Self {
        QuantityInputArgs {
            input_value: 1,
            min_value: 0,
            max_value: None,
            step: 1,
        }
    }
}

impl QuantityInputArgs {
    /// Applies a resolved minimum.
    ///
    /// With a minimum, both the starting value and the lower bound become the
    /// minimum. Without one, `self` is returned untouched.
    pub fn with_minimum(self, minimum: Option<MinimumQuantity>) -> Self {
        match minimum {
            Some(min) => QuantityInputArgs {
                input_value: min.get(),
                min_value: min.get(),
                ..self
            },
            None => self,
        }
    }
}

/// Line shown under the price on the product page.
pub fn summary_message(minimum: Option<MinimumQuantity>) -> Option<String> {
    minimum.map(|min| format!("Minimum order quantity: {}", min))
}
