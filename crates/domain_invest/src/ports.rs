//! Ports to external collaborators
//!
//! The engine only ever computes over already-fetched snapshots; fetching
//! and persisting belong to the adapters behind these traits. Both traits
//! are synchronous because the engine is (no async suspension points).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CoreError, FundId, InvestorId, Money};

use crate::fund::Fund;
use crate::holding::Holding;
use crate::orchestrator::TransactionReceipt;

/// Read-only lookup of fund snapshots
pub trait FundCatalog {
    /// Returns the current snapshot for a fund
    fn fund(&self, id: FundId) -> Result<Fund, CoreError>;
}

/// Read/write access to an investor's holdings
///
/// Writes are limited to applying the delta of a completed transaction;
/// the engine computes the delta, the store applies it and assigns any
/// ledger identifiers.
pub trait PortfolioStore {
    /// Returns the investor's holding in a fund, if any
    fn holding(&self, investor: InvestorId, fund: FundId) -> Result<Option<Holding>, CoreError>;

    /// Applies a completed transaction's delta
    fn apply(&mut self, investor: InvestorId, delta: &HoldingDelta) -> Result<(), CoreError>;
}

/// Direction of a holding delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaKind {
    Buy,
    Redeem,
}

/// The unit/amount change a successful transaction asks the store to apply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingDelta {
    pub fund_id: FundId,
    pub kind: DeltaKind,
    pub units: Decimal,
    pub amount: Money,
    pub nav: Decimal,
}

impl HoldingDelta {
    /// Builds the delta for a successful receipt
    pub fn from_receipt(receipt: &TransactionReceipt, kind: DeltaKind) -> Self {
        Self {
            fund_id: receipt.fund_id,
            kind,
            units: receipt.units,
            amount: receipt.amount,
            nav: receipt.effective_nav,
        }
    }
}
