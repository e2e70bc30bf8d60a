//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use chrono::NaiveDate;
use core_kernel::{Currency, FundId, InvestorId};
use domain_invest::{Fund, FundCategory, Holding, RiskLevel};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::FundFixtures;

/// Builder for fund snapshots
pub struct TestFundBuilder {
    scheme_code: String,
    name: String,
    category: FundCategory,
    risk_level: RiskLevel,
    currency: Currency,
    nav: Decimal,
    nav_date: NaiveDate,
    min_sip: Decimal,
    min_lumpsum: Decimal,
    exit_load: Option<(Decimal, u32)>,
}

impl Default for TestFundBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFundBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            scheme_code: "TST001".to_string(),
            name: "Test Fund".to_string(),
            category: FundCategory::Equity,
            risk_level: RiskLevel::Medium,
            currency: Currency::INR,
            nav: dec!(50.00),
            nav_date: FundFixtures::nav_date(),
            min_sip: dec!(500),
            min_lumpsum: dec!(1000),
            exit_load: None,
        }
    }

    /// Sets the NAV
    pub fn with_nav(mut self, nav: Decimal) -> Self {
        self.nav = nav;
        self
    }

    /// Sets the valuation date
    pub fn with_nav_date(mut self, date: NaiveDate) -> Self {
        self.nav_date = date;
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: FundCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the investment minimums
    pub fn with_minimums(mut self, min_sip: Decimal, min_lumpsum: Decimal) -> Self {
        self.min_sip = min_sip;
        self.min_lumpsum = min_lumpsum;
        self
    }

    /// Sets the exit load
    pub fn with_exit_load(mut self, percent: Decimal, months: u32) -> Self {
        self.exit_load = Some((percent, months));
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Builds the fund snapshot
    pub fn build(self) -> Fund {
        let mut fund = Fund::new(
            self.scheme_code,
            self.name,
            self.category,
            self.risk_level,
            self.nav,
            self.nav_date,
        )
        .with_minimums(self.min_sip, self.min_lumpsum)
        .with_currency(self.currency);

        if let Some((percent, months)) = self.exit_load {
            fund = fund.with_exit_load(percent, months);
        }
        fund
    }
}

/// Builder for holdings
pub struct TestHoldingBuilder {
    investor_id: InvestorId,
    fund_id: FundId,
    units: Decimal,
    purchase_nav: Decimal,
    purchased_on: Option<NaiveDate>,
}

impl Default for TestHoldingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHoldingBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            investor_id: InvestorId::new_v7(),
            fund_id: FundId::new_v7(),
            units: dec!(1000),
            purchase_nav: dec!(30),
            purchased_on: None,
        }
    }

    /// Sets the owning investor
    pub fn with_investor(mut self, investor_id: InvestorId) -> Self {
        self.investor_id = investor_id;
        self
    }

    /// Sets the fund
    pub fn with_fund(mut self, fund_id: FundId) -> Self {
        self.fund_id = fund_id;
        self
    }

    /// Sets the units and their purchase NAV
    pub fn with_units(mut self, units: Decimal, purchase_nav: Decimal) -> Self {
        self.units = units;
        self.purchase_nav = purchase_nav;
        self
    }

    /// Sets the first-purchase date
    pub fn with_purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchased_on = Some(date);
        self
    }

    /// Builds the holding
    pub fn build(self) -> Holding {
        let mut holding = Holding::new(self.investor_id, self.fund_id);
        if !self.units.is_zero() {
            holding.add_units(self.units, self.purchase_nav);
        }
        if let Some(date) = self.purchased_on {
            holding = holding.with_purchase_date(date);
        }
        holding
    }
}
