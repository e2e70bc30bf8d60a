//! Fund snapshot
//!
//! A `Fund` is the immutable per-transaction snapshot the fund catalog
//! hands to the engine: identity, NAV as of a valuation date, investment
//! minimums, and the exit-load rule. The engine never mutates it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, FundId};

use crate::error::EngineError;

/// Broad scheme categories shown in the fund list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundCategory {
    /// Equity/stock fund
    Equity,
    /// Debt/fixed income fund
    Debt,
    /// Hybrid (mixed equity and debt) fund
    Hybrid,
    /// Index tracking fund
    Index,
    /// Tax-saving equity fund with a statutory lock-in
    Elss,
    /// Liquid/overnight fund
    Liquid,
}

/// Risk level classification (riskometer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk - capital preservation
    Low = 1,
    /// Medium-low risk
    MediumLow = 2,
    /// Medium risk
    Medium = 3,
    /// Medium-high risk
    MediumHigh = 4,
    /// High risk - aggressive growth
    High = 5,
}

/// How money is being put into a fund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentMode {
    /// Recurring systematic investment
    Sip,
    /// One-time investment
    LumpSum,
}

/// Exit-load rule: a redemption fee charged when units are sold before
/// the holding-period threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitLoad {
    /// Load percentage (e.g., 1 = 1% of the redemption amount)
    pub percent: Decimal,
    /// Holding period below which the load applies, in months
    pub min_holding_months: u32,
}

impl ExitLoad {
    /// Returns true if a redemption on `as_of` of units bought on
    /// `purchased_on` attracts the load.
    pub fn applies(&self, purchased_on: NaiveDate, as_of: NaiveDate) -> bool {
        match purchased_on.checked_add_months(chrono::Months::new(self.min_holding_months)) {
            Some(threshold) => as_of < threshold,
            None => false,
        }
    }
}

/// An investable mutual-fund scheme, snapshotted at a valuation date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// Unique identifier
    pub id: FundId,
    /// Scheme code (short identifier)
    pub scheme_code: String,
    /// Scheme name
    pub name: String,
    /// Category
    pub category: FundCategory,
    /// Risk level
    pub risk_level: RiskLevel,
    /// Currency
    pub currency: Currency,
    /// NAV per unit as of `nav_date`
    pub nav: Decimal,
    /// Valuation date of the NAV
    pub nav_date: NaiveDate,
    /// Minimum SIP installment amount
    pub min_sip_amount: Decimal,
    /// Minimum lump-sum amount
    pub min_lumpsum_amount: Decimal,
    /// Exit-load rule, if the scheme has one
    pub exit_load: Option<ExitLoad>,
    /// Annual expense ratio percentage
    pub expense_ratio: Decimal,
    /// Whether the scheme accepts new investments
    pub is_open: bool,
}

impl Fund {
    /// Creates a new fund snapshot
    ///
    /// # Arguments
    ///
    /// * `scheme_code` - Short scheme identifier
    /// * `name` - Scheme name
    /// * `category` - Scheme category
    /// * `risk_level` - Riskometer classification
    /// * `nav` - NAV per unit
    /// * `nav_date` - Valuation date of the NAV
    pub fn new(
        scheme_code: impl Into<String>,
        name: impl Into<String>,
        category: FundCategory,
        risk_level: RiskLevel,
        nav: Decimal,
        nav_date: NaiveDate,
    ) -> Self {
        Self {
            id: FundId::new_v7(),
            scheme_code: scheme_code.into(),
            name: name.into(),
            category,
            risk_level,
            currency: Currency::INR,
            nav,
            nav_date,
            min_sip_amount: Decimal::ZERO,
            min_lumpsum_amount: Decimal::ZERO,
            exit_load: None,
            expense_ratio: Decimal::ZERO,
            is_open: true,
        }
    }

    /// Sets the investment minimums
    pub fn with_minimums(mut self, min_sip: Decimal, min_lumpsum: Decimal) -> Self {
        self.min_sip_amount = min_sip;
        self.min_lumpsum_amount = min_lumpsum;
        self
    }

    /// Sets the exit-load rule
    pub fn with_exit_load(mut self, percent: Decimal, min_holding_months: u32) -> Self {
        self.exit_load = Some(ExitLoad {
            percent,
            min_holding_months,
        });
        self
    }

    /// Sets the expense ratio
    pub fn with_expense_ratio(mut self, percent: Decimal) -> Self {
        self.expense_ratio = percent;
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Returns the minimum investment amount for a mode
    pub fn minimum_for(&self, mode: InvestmentMode) -> Decimal {
        match mode {
            InvestmentMode::Sip => self.min_sip_amount,
            InvestmentMode::LumpSum => self.min_lumpsum_amount,
        }
    }

    /// Checks that the snapshot is usable for settlement math
    ///
    /// A snapshot that fails here reached the engine through a collaborator
    /// bug, not user input.
    pub fn validate_snapshot(&self) -> Result<(), EngineError> {
        if self.nav <= Decimal::ZERO {
            return Err(EngineError::invalid_input(format!(
                "fund {} has non-positive NAV {}",
                self.scheme_code, self.nav
            )));
        }
        if self.min_sip_amount.is_sign_negative() || self.min_lumpsum_amount.is_sign_negative() {
            return Err(EngineError::invalid_input(format!(
                "fund {} has negative minimums",
                self.scheme_code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn nav_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_fund_creation() {
        let fund = Fund::new(
            "BCF102",
            "Bluechip Growth Fund",
            FundCategory::Equity,
            RiskLevel::High,
            dec!(52.32),
            nav_date(),
        )
        .with_minimums(dec!(500), dec!(1000));

        assert_eq!(fund.scheme_code, "BCF102");
        assert_eq!(fund.nav, dec!(52.32));
        assert_eq!(fund.minimum_for(InvestmentMode::Sip), dec!(500));
        assert_eq!(fund.minimum_for(InvestmentMode::LumpSum), dec!(1000));
        assert!(fund.is_open);
    }

    #[test]
    fn test_snapshot_validation_rejects_zero_nav() {
        let fund = Fund::new(
            "BAD001",
            "Broken Fund",
            FundCategory::Debt,
            RiskLevel::Low,
            Decimal::ZERO,
            nav_date(),
        );

        assert!(fund.validate_snapshot().is_err());
    }

    #[test]
    fn test_exit_load_applies_inside_threshold() {
        let load = ExitLoad {
            percent: dec!(1),
            min_holding_months: 12,
        };
        let bought = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();

        assert!(load.applies(bought, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        assert!(!load.applies(bought, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(!load.applies(bought, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }
}
