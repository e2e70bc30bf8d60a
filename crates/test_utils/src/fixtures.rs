//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Designed to be consistent
//! and predictable across test suites: the bluechip fund always prices at
//! 52.32, the liquid fund at 36.67.

use chrono::NaiveDate;
use core_kernel::{FundId, InvestorId};
use domain_invest::{Fund, FundCategory, Holding, RiskLevel};
use rust_decimal_macros::dec;

/// Fixture for fund test data
pub struct FundFixtures;

impl FundFixtures {
    /// Standard NAV valuation date (Mar 1, 2024)
    pub fn nav_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// Equity fund, NAV 52.32, min SIP 500, min lump sum 1000, 1% exit
    /// load inside 12 months
    pub fn bluechip() -> Fund {
        Fund::new(
            "BCF102",
            "Bluechip Growth Fund",
            FundCategory::Equity,
            RiskLevel::High,
            dec!(52.32),
            Self::nav_date(),
        )
        .with_minimums(dec!(500), dec!(1000))
        .with_exit_load(dec!(1), 12)
        .with_expense_ratio(dec!(0.68))
    }

    /// Liquid fund, NAV 36.67, no exit load
    pub fn liquid() -> Fund {
        Fund::new(
            "LQF221",
            "Overnight Liquid Fund",
            FundCategory::Liquid,
            RiskLevel::Low,
            dec!(36.67),
            Self::nav_date(),
        )
        .with_minimums(dec!(100), dec!(500))
        .with_expense_ratio(dec!(0.15))
    }

    /// Index fund with a high lump-sum minimum
    pub fn index() -> Fund {
        Fund::new(
            "NIF050",
            "Nifty 50 Index Fund",
            FundCategory::Index,
            RiskLevel::MediumHigh,
            dec!(152.80),
            Self::nav_date(),
        )
        .with_minimums(dec!(1000), dec!(5000))
        .with_expense_ratio(dec!(0.20))
    }
}

/// Fixture for holding test data
pub struct HoldingFixtures;

impl HoldingFixtures {
    /// A holding of 1000 units bought at NAV 30
    pub fn thousand_units(investor: InvestorId, fund: FundId) -> Holding {
        let mut holding = Holding::new(investor, fund);
        holding.add_units(dec!(1000), dec!(30));
        holding
    }

    /// The 457.93-unit holding used in shortfall scenarios
    pub fn partial_units(investor: InvestorId, fund: FundId) -> Holding {
        let mut holding = Holding::new(investor, fund);
        holding.add_units(dec!(457.93), dec!(40));
        holding
    }
}
