//! Systematic Investment Plans
//!
//! A `SipPlan` is created when an investor starts a SIP and lives until
//! cancelled. Its amount and step-up must satisfy fund and business
//! bounds at creation *and* after every modification.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{FundId, SipPlanId};

use crate::error::{EngineError, RejectReason};
use crate::fund::{Fund, InvestmentMode};
use crate::projection::project_installment;
use crate::validation::{validate_day_of_month, validate_purchase, validate_step_up};

/// SIP installment frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SipFrequency {
    Monthly,
    Quarterly,
}

impl SipFrequency {
    /// Returns the number of installments per year
    pub fn installments_per_year(&self) -> u32 {
        match self {
            SipFrequency::Monthly => 12,
            SipFrequency::Quarterly => 4,
        }
    }

    /// Months between installments
    pub fn months_between(&self) -> u32 {
        match self {
            SipFrequency::Monthly => 1,
            SipFrequency::Quarterly => 3,
        }
    }
}

/// How long the SIP runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SipDuration {
    /// A fixed number of months
    FixedMonths(u32),
    /// Runs until the investor cancels
    UntilCancelled,
}

/// Annual step-up configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepUp {
    /// Annual increase percentage, within [1, 25]
    pub percent: Decimal,
}

/// Plan lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SipStatus {
    Active,
    Paused,
    Cancelled,
}

/// A systematic investment plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipPlan {
    /// Unique identifier
    pub id: SipPlanId,
    /// Fund the plan invests into
    pub fund_id: FundId,
    /// Base installment amount
    pub amount: Decimal,
    /// Installment frequency
    pub frequency: SipFrequency,
    /// Debit day of month, 1 to 28
    pub day_of_month: u8,
    /// Plan duration
    pub duration: SipDuration,
    /// Optional annual step-up
    pub step_up: Option<StepUp>,
    /// Lifecycle state
    pub status: SipStatus,
    /// Date the plan started
    pub started_on: NaiveDate,
}

impl SipPlan {
    /// Creates a new SIP plan, validating fund and business bounds
    ///
    /// # Errors
    ///
    /// - [`RejectReason::BelowMinimum`] if the amount is under the fund's
    ///   SIP minimum
    /// - [`RejectReason::StepUpOutOfRange`] for a step-up outside [1, 25]
    /// - [`RejectReason::InvalidDayOfMonth`] for a debit day outside 1..=28
    pub fn new(
        fund: &Fund,
        amount: Decimal,
        frequency: SipFrequency,
        day_of_month: u8,
        duration: SipDuration,
        step_up: Option<StepUp>,
        started_on: NaiveDate,
    ) -> Result<Self, RejectReason> {
        validate_purchase(fund, InvestmentMode::Sip, amount)?;
        if let Some(step_up) = &step_up {
            validate_step_up(step_up.percent)?;
        }
        validate_day_of_month(day_of_month)?;

        Ok(Self {
            id: SipPlanId::new_v7(),
            fund_id: fund.id,
            amount,
            frequency,
            day_of_month,
            duration,
            step_up,
            status: SipStatus::Active,
            started_on,
        })
    }

    /// Changes the installment amount, re-validating the fund minimum
    pub fn modify_amount(&mut self, fund: &Fund, amount: Decimal) -> Result<(), RejectReason> {
        validate_purchase(fund, InvestmentMode::Sip, amount)?;
        self.amount = amount;
        Ok(())
    }

    /// Enables or changes the annual step-up
    pub fn set_step_up(&mut self, percent: Decimal) -> Result<(), RejectReason> {
        validate_step_up(percent)?;
        self.step_up = Some(StepUp { percent });
        Ok(())
    }

    /// Removes the step-up
    pub fn clear_step_up(&mut self) {
        self.step_up = None;
    }

    /// Pauses an active plan
    pub fn pause(&mut self) -> Result<(), EngineError> {
        match self.status {
            SipStatus::Active => {
                self.status = SipStatus::Paused;
                Ok(())
            }
            other => Err(EngineError::invalid_state(format!(
                "cannot pause a SIP in state {other:?}"
            ))),
        }
    }

    /// Resumes a paused plan
    pub fn resume(&mut self) -> Result<(), EngineError> {
        match self.status {
            SipStatus::Paused => {
                self.status = SipStatus::Active;
                Ok(())
            }
            other => Err(EngineError::invalid_state(format!(
                "cannot resume a SIP in state {other:?}"
            ))),
        }
    }

    /// Cancels the plan; terminal
    pub fn cancel(&mut self) -> Result<(), EngineError> {
        match self.status {
            SipStatus::Cancelled => Err(EngineError::invalid_state(
                "SIP is already cancelled".to_string(),
            )),
            _ => {
                self.status = SipStatus::Cancelled;
                Ok(())
            }
        }
    }

    /// Installment amount in the given plan year (0 = first year)
    ///
    /// Without a step-up every year debits the base amount.
    pub fn installment_for_year(&self, years_elapsed: u32) -> Decimal {
        match &self.step_up {
            Some(step_up) => project_installment(self.amount, step_up.percent, years_elapsed),
            None => self.amount,
        }
    }

    /// The next debit date strictly after `from_date`
    pub fn next_debit_date(&self, from_date: NaiveDate) -> NaiveDate {
        let mut candidate = NaiveDate::from_ymd_opt(
            from_date.year(),
            from_date.month(),
            u32::from(self.day_of_month),
        )
        // day_of_month <= 28, present in every month
        .unwrap_or(from_date);

        while candidate <= from_date {
            candidate = candidate
                .checked_add_months(chrono::Months::new(self.frequency.months_between()))
                .unwrap_or(candidate);
        }
        candidate
    }

    /// Previews the installment for each plan year over a horizon
    pub fn projected_installments(&self, years: u32) -> Vec<(u32, Decimal)> {
        (0..years)
            .map(|year| (year, self.installment_for_year(year)))
            .collect()
    }
}
