//! Core Kernel - Foundational types for the investment engine
//!
//! This crate provides the fundamental building blocks used by the domain crates:
//! - Money types with precise decimal arithmetic
//! - Percentage rates
//! - Strongly-typed identifiers

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, Rate, MoneyError};
pub use identifiers::{FundId, HoldingId, SipPlanId, InvestorId, TransactionId};
pub use error::CoreError;
