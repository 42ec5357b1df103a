//! Purchase error model.

use thiserror::Error;

/// Result type used across the purchase flow.
pub type PurchaseResult<T> = Result<T, InvalidPurchase>;

/// A ticket purchase was rejected.
///
/// This is the only failure the purchase flow surfaces. It is raised before any
/// payment or reservation happens, so a rejected purchase has no side effects.
/// The message names the violated rule and is safe to show to the purchaser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct InvalidPurchase {
    reason: String,
}

impl InvalidPurchase {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Rejection for a missing or non-positive account identifier.
    pub fn invalid_account() -> Self {
        Self::new("Invalid account ID.")
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
