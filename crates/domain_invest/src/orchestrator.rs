//! Transaction orchestration
//!
//! The single entry point an interaction surface calls. `submit` takes an
//! immutable [`TransactionIntent`], runs validation, conversion, and
//! optional projection, and packages exactly one immutable
//! [`TransactionResult`]. Either the full computation succeeds or a typed
//! rejection comes back; there is no intermediate state visible to
//! callers, and submitting the same intent twice yields the same result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use core_kernel::{FundId, Money};

use crate::error::{EngineError, RejectReason};
use crate::fund::{Fund, InvestmentMode};
use crate::holding::Holding;
use crate::projection::{estimate_future_value, estimate_sip_future_value};
use crate::redemption::{self, RedemptionCharges, RedemptionRequest};
use crate::sip::{SipDuration, SipFrequency, StepUp};
use crate::units::amount_to_units;
use crate::validation::{validate_day_of_month, validate_purchase, validate_step_up};

/// Assumed return for an "expected value" preview annotation
///
/// Illustrative only; the resulting `projected_value` never feeds
/// settlement math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthAssumption {
    /// Assumed annual return percentage
    pub expected_annual_return_percent: Decimal,
    /// Preview horizon in years
    pub horizon_years: u32,
}

/// What the caller wants to do, with every input already fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionIntent {
    /// One-time purchase
    LumpSum {
        fund: Fund,
        amount: Decimal,
        preview: Option<GrowthAssumption>,
    },
    /// Start a SIP; the receipt covers the first installment
    StartSip {
        fund: Fund,
        amount: Decimal,
        frequency: SipFrequency,
        day_of_month: u8,
        duration: SipDuration,
        step_up: Option<StepUp>,
        preview: Option<GrowthAssumption>,
    },
    /// Redeem from a holding
    Redeem {
        fund: Fund,
        holding: Holding,
        request: RedemptionRequest,
        charges: RedemptionCharges,
        /// Valuation date for the exit-load holding-period check
        as_of: chrono::NaiveDate,
    },
}

/// The numeric outcome of a successful transaction
///
/// Deliberately carries no generated identifier or timestamp: the receipt
/// is a pure function of the intent, and ledger ids are assigned by the
/// portfolio store when the delta is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub fund_id: FundId,
    /// Units bought or redeemed
    pub units: Decimal,
    /// Gross transaction amount
    pub amount: Money,
    /// NAV the transaction was priced at
    pub effective_nav: Decimal,
    /// Estimated flat-rate tax (zero for purchases)
    pub estimated_tax: Money,
    /// Exit-load deduction (zero when not applicable)
    pub exit_load: Money,
    /// Amount after deductions; equals `amount` for purchases
    pub estimated_payout: Money,
    /// Illustrative future-value annotation, when a preview was requested
    pub projected_value: Option<Money>,
}

/// Discriminated transaction outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransactionResult {
    Success(TransactionReceipt),
    Rejected { reason: RejectReason },
}

impl TransactionResult {
    /// Returns the receipt, if the transaction succeeded
    pub fn receipt(&self) -> Option<&TransactionReceipt> {
        match self {
            TransactionResult::Success(receipt) => Some(receipt),
            TransactionResult::Rejected { .. } => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, TransactionResult::Rejected { .. })
    }
}

/// Composes validation, conversion, and projection into one call
///
/// Holds no state; every invocation is independent.
#[derive(Debug, Default)]
pub struct TransactionOrchestrator;

impl TransactionOrchestrator {
    pub fn new() -> Self {
        Self
    }

    /// Submits a transaction intent
    ///
    /// # Errors
    ///
    /// `EngineError` only for defect-class input (malformed fund or
    /// holding data); business-rule violations come back inside
    /// `Ok(TransactionResult::Rejected)`.
    pub fn submit(&self, intent: &TransactionIntent) -> Result<TransactionResult, EngineError> {
        let result = match intent {
            TransactionIntent::LumpSum {
                fund,
                amount,
                preview,
            } => self.submit_purchase(fund, *amount, InvestmentMode::LumpSum, *preview),
            TransactionIntent::StartSip {
                fund,
                amount,
                step_up,
                day_of_month,
                preview,
                ..
            } => self.submit_sip_start(fund, *amount, *step_up, *day_of_month, *preview),
            TransactionIntent::Redeem {
                fund,
                holding,
                request,
                charges,
                as_of,
            } => redemption::resolve(request, holding, fund, charges, *as_of),
        };

        match &result {
            Ok(TransactionResult::Success(receipt)) => {
                debug!(
                    fund = %receipt.fund_id,
                    units = %receipt.units,
                    amount = %receipt.amount,
                    "transaction accepted"
                );
            }
            Ok(TransactionResult::Rejected { reason }) => {
                debug!(%reason, "transaction rejected");
            }
            Err(err) => {
                // Upstream collaborator bug, not user error: log loudly.
                error!(%err, "defect-class input reached the engine");
            }
        }

        result
    }

    fn submit_purchase(
        &self,
        fund: &Fund,
        amount: Decimal,
        mode: InvestmentMode,
        preview: Option<GrowthAssumption>,
    ) -> Result<TransactionResult, EngineError> {
        fund.validate_snapshot()?;

        if let Err(reason) = validate_purchase(fund, mode, amount) {
            return Ok(TransactionResult::Rejected { reason });
        }

        let units = amount_to_units(amount, fund.nav)?;
        let gross = Money::new(amount, fund.currency).round_to_currency();

        let projected_value = preview.map(|p| {
            Money::new(
                estimate_future_value(amount, p.expected_annual_return_percent, p.horizon_years),
                fund.currency,
            )
        });

        Ok(TransactionResult::Success(TransactionReceipt {
            fund_id: fund.id,
            units,
            amount: gross,
            effective_nav: fund.nav,
            estimated_tax: Money::zero(fund.currency),
            exit_load: Money::zero(fund.currency),
            estimated_payout: gross,
            projected_value,
        }))
    }

    fn submit_sip_start(
        &self,
        fund: &Fund,
        amount: Decimal,
        step_up: Option<StepUp>,
        day_of_month: u8,
        preview: Option<GrowthAssumption>,
    ) -> Result<TransactionResult, EngineError> {
        fund.validate_snapshot()?;

        // First failure wins: amount, then step-up, then debit day.
        if let Err(reason) = validate_purchase(fund, InvestmentMode::Sip, amount) {
            return Ok(TransactionResult::Rejected { reason });
        }
        if let Some(step_up) = &step_up {
            if let Err(reason) = validate_step_up(step_up.percent) {
                return Ok(TransactionResult::Rejected { reason });
            }
        }
        if let Err(reason) = validate_day_of_month(day_of_month) {
            return Ok(TransactionResult::Rejected { reason });
        }

        // The receipt prices the first installment at today's NAV.
        let units = amount_to_units(amount, fund.nav)?;
        let gross = Money::new(amount, fund.currency).round_to_currency();

        let projected_value = preview.map(|p| {
            Money::new(
                estimate_sip_future_value(
                    amount,
                    p.horizon_years * 12,
                    p.expected_annual_return_percent,
                ),
                fund.currency,
            )
        });

        Ok(TransactionResult::Success(TransactionReceipt {
            fund_id: fund.id,
            units,
            amount: gross,
            effective_nav: fund.nav,
            estimated_tax: Money::zero(fund.currency),
            exit_load: Money::zero(fund.currency),
            estimated_payout: gross,
            projected_value,
        }))
    }
}
