//! # Notices
//!
//! User-visible messages produced by the engine. The caller decides where
//! they are shown; the engine only says what to show and how severe it is.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoticeSeverity {
    Error,
}

/// A message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl Notice {
    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            severity: NoticeSeverity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
