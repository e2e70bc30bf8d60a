//! In-memory port adapters
//!
//! HashMap-backed test doubles for the engine's two ports. Suites use
//! them to exercise the full fetch-compute-apply loop without any
//! storage layer.

use std::collections::HashMap;

use core_kernel::{CoreError, FundId, InvestorId};
use domain_invest::{DeltaKind, Fund, FundCatalog, Holding, HoldingDelta, PortfolioStore};

/// In-memory fund catalog
#[derive(Debug, Default)]
pub struct InMemoryFundCatalog {
    funds: HashMap<FundId, Fund>,
}

impl InMemoryFundCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fund snapshot to the catalog
    pub fn insert(&mut self, fund: Fund) {
        self.funds.insert(fund.id, fund);
    }
}

impl FundCatalog for InMemoryFundCatalog {
    fn fund(&self, id: FundId) -> Result<Fund, CoreError> {
        self.funds
            .get(&id)
            .cloned()
            .ok_or_else(|| CoreError::not_found(format!("fund {id}")))
    }
}

/// In-memory portfolio store
#[derive(Debug, Default)]
pub struct InMemoryPortfolioStore {
    holdings: HashMap<(InvestorId, FundId), Holding>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a holding directly, bypassing the delta path
    pub fn seed(&mut self, holding: Holding) {
        self.holdings
            .insert((holding.investor_id, holding.fund_id), holding);
    }
}

impl PortfolioStore for InMemoryPortfolioStore {
    fn holding(&self, investor: InvestorId, fund: FundId) -> Result<Option<Holding>, CoreError> {
        Ok(self.holdings.get(&(investor, fund)).cloned())
    }

    fn apply(&mut self, investor: InvestorId, delta: &HoldingDelta) -> Result<(), CoreError> {
        let holding = self
            .holdings
            .entry((investor, delta.fund_id))
            .or_insert_with(|| Holding::new(investor, delta.fund_id));

        match delta.kind {
            DeltaKind::Buy => {
                holding.add_units(delta.units, delta.nav);
                Ok(())
            }
            DeltaKind::Redeem => holding
                .remove_units(delta.units)
                .map_err(|reason| CoreError::validation(reason.to_string())),
        }
    }
}
