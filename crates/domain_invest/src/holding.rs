//! Unit holdings for investors

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{FundId, HoldingId, InvestorId};

use crate::error::RejectReason;
use crate::{round_currency, round_units};

/// An investor's unit holding in a fund
///
/// Mutated only by the portfolio store when it applies the delta of a
/// successful transaction; the engine itself only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier
    pub id: HoldingId,
    /// Investor ID
    pub investor_id: InvestorId,
    /// Fund ID
    pub fund_id: FundId,
    /// Number of units held
    pub units: Decimal,
    /// Average NAV paid across purchases
    pub avg_purchase_nav: Decimal,
    /// Date of the first purchase, when known
    ///
    /// Drives the exit-load check; `None` means the load is treated as
    /// display-only for this holding.
    pub purchased_on: Option<NaiveDate>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    /// Creates a new empty holding
    pub fn new(investor_id: InvestorId, fund_id: FundId) -> Self {
        Self {
            id: HoldingId::new_v7(),
            investor_id,
            fund_id,
            units: Decimal::ZERO,
            avg_purchase_nav: Decimal::ZERO,
            purchased_on: None,
            updated_at: Utc::now(),
        }
    }

    /// Sets the first-purchase date
    pub fn with_purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchased_on = Some(date);
        self
    }

    /// Adds units bought at the given NAV, updating the average purchase NAV
    pub fn add_units(&mut self, units: Decimal, nav: Decimal) {
        let new_total = self.units + units;
        if !new_total.is_zero() {
            self.avg_purchase_nav =
                (self.units * self.avg_purchase_nav + units * nav) / new_total;
        }
        self.units = round_units(new_total);
        self.updated_at = Utc::now();
    }

    /// Removes redeemed units from the holding
    pub fn remove_units(&mut self, units: Decimal) -> Result<(), RejectReason> {
        if units > self.units {
            return Err(RejectReason::InsufficientUnits {
                requested: units,
                held: self.units,
            });
        }
        self.units = round_units(self.units - units);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Current value of the holding at the given NAV
    pub fn value_at_nav(&self, nav: Decimal) -> Decimal {
        round_currency(self.units * nav)
    }

    /// Unrealized gain (or loss) at the given NAV
    pub fn unrealized_gain(&self, nav: Decimal) -> Decimal {
        round_currency(self.units * (nav - self.avg_purchase_nav))
    }
}
