//! Investment engine errors
//!
//! Two distinct classes, and the distinction matters for callers:
//!
//! - [`RejectReason`] is an expected business outcome. The presentation
//!   layer pattern-matches it and shows the user guidance. It is carried
//!   inside [`crate::TransactionResult::Rejected`], never thrown.
//! - [`EngineError`] is defect-class: malformed collaborator data (a
//!   non-positive NAV, a corrupted holding) reaching the engine. These are
//!   logged and surfaced as `Err`, because they indicate an upstream bug
//!   rather than recoverable user input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a transaction was rejected
///
/// All variants are locally recoverable by presenting the user a message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", content = "details", rename_all = "snake_case")]
pub enum RejectReason {
    /// Non-numeric, negative, or non-finite input
    #[error("Amount is not a valid number")]
    InvalidAmount,

    /// Amount below the fund's minimum for the chosen mode
    #[error("Amount {amount} is below the fund minimum of {minimum}")]
    BelowMinimum { minimum: Decimal, amount: Decimal },

    /// Step-up percentage outside the allowed band
    #[error("Step-up of {0}% is outside the allowed range of 1% to 25%")]
    StepUpOutOfRange(Decimal),

    /// SIP debit day outside 1..=28
    #[error("SIP day-of-month {0} is outside the allowed range of 1 to 28")]
    InvalidDayOfMonth(u8),

    /// Redemption by units exceeds the units held
    #[error("Requested {requested} units but only {held} are held")]
    InsufficientUnits { requested: Decimal, held: Decimal },

    /// Redemption by amount exceeds the current holding value
    #[error("Requested {requested} exceeds the current holding value of {available}")]
    InsufficientValue { requested: Decimal, available: Decimal },
}

/// Defect-class failures
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid state transition: {0}")]
    InvalidState(String),
}

impl EngineError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        EngineError::InvalidInput(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        EngineError::InvalidState(message.into())
    }
}
