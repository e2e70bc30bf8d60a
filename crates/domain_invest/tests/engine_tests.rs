//! End-to-end tests for the investment transaction engine

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{InvestorId, Rate};
use domain_invest::{
    amount_to_units, estimate_future_value, estimate_sip_future_value, project_installment,
    units_to_amount, DeltaKind, FundCatalog, GrowthAssumption, HoldingDelta, PortfolioStore,
    RedemptionCharges, RedemptionRequest, RejectReason, SipDuration, SipFrequency, SipPlan,
    StepUp, TransactionIntent, TransactionOrchestrator, TransactionResult,
};
use test_utils::{
    assert_decimal_approx_eq, FundFixtures, HoldingFixtures, InMemoryFundCatalog,
    InMemoryPortfolioStore, TestFundBuilder, TestHoldingBuilder,
};

fn as_of() -> NaiveDate {
    FundFixtures::nav_date()
}

// ============================================================================
// Unit Conversion Tests
// ============================================================================

mod conversion_tests {
    use super::*;

    #[test]
    fn test_amount_to_units_at_published_nav() {
        // 25000 at NAV 52.32 -> 477.829 units
        let units = amount_to_units(dec!(25000), dec!(52.32)).unwrap();
        assert_eq!(units, dec!(477.829));
    }

    #[test]
    fn test_units_to_amount_at_published_nav() {
        let amount = units_to_amount(dec!(1000), dec!(36.67)).unwrap();
        assert_eq!(amount, dec!(36670.00));
    }

    #[test]
    fn test_round_trip_within_one_rounding_unit() {
        let nav = dec!(52.32);
        let amount = dec!(25000);

        let units = amount_to_units(amount, nav).unwrap();
        let back = units_to_amount(units, nav).unwrap();

        assert_decimal_approx_eq(back, amount, dec!(0.05));
    }
}

// ============================================================================
// Projection Tests
// ============================================================================

mod projection_tests {
    use super::*;

    #[test]
    fn test_next_year_installment() {
        // 2500 stepped up 10% -> 2750
        assert_eq!(project_installment(dec!(2500), dec!(10), 1), dec!(2750));
    }

    #[test]
    fn test_year_zero_identity() {
        assert_eq!(project_installment(dec!(2500), dec!(10), 0), dec!(2500));
    }

    #[test]
    fn test_lump_sum_growth_preview() {
        let value = estimate_future_value(dec!(100000), dec!(12), 5);
        assert_eq!(value, dec!(176234.17));
    }

    #[test]
    fn test_sip_growth_preview_beats_contributions() {
        let value = estimate_sip_future_value(dec!(2500), 60, dec!(12));
        assert!(value > dec!(150000));
    }
}

// ============================================================================
// Orchestrator Tests
// ============================================================================

mod orchestrator_tests {
    use super::*;

    #[test]
    fn test_sip_below_minimum_is_rejected() {
        // Fund minSIP = 500, submitting 499
        let orchestrator = TransactionOrchestrator::new();
        let result = orchestrator
            .submit(&TransactionIntent::StartSip {
                fund: FundFixtures::bluechip(),
                amount: dec!(499),
                frequency: SipFrequency::Monthly,
                day_of_month: 5,
                duration: SipDuration::UntilCancelled,
                step_up: None,
                preview: None,
            })
            .unwrap();

        assert_eq!(
            result,
            TransactionResult::Rejected {
                reason: RejectReason::BelowMinimum {
                    minimum: dec!(500),
                    amount: dec!(499),
                }
            }
        );
    }

    #[test]
    fn test_step_up_thirty_percent_is_rejected() {
        let orchestrator = TransactionOrchestrator::new();
        let result = orchestrator
            .submit(&TransactionIntent::StartSip {
                fund: FundFixtures::bluechip(),
                amount: dec!(2500),
                frequency: SipFrequency::Monthly,
                day_of_month: 5,
                duration: SipDuration::UntilCancelled,
                step_up: Some(StepUp { percent: dec!(30) }),
                preview: None,
            })
            .unwrap();

        assert_eq!(
            result,
            TransactionResult::Rejected {
                reason: RejectReason::StepUpOutOfRange(dec!(30))
            }
        );
    }

    #[test]
    fn test_lump_sum_buys_units_at_nav() {
        let orchestrator = TransactionOrchestrator::new();
        let result = orchestrator
            .submit(&TransactionIntent::LumpSum {
                fund: FundFixtures::bluechip(),
                amount: dec!(25000),
                preview: None,
            })
            .unwrap();

        let receipt = result.receipt().expect("success");
        assert_eq!(receipt.units, dec!(477.829));
        assert_eq!(receipt.effective_nav, dec!(52.32));
        assert_eq!(receipt.estimated_payout, receipt.amount);
    }

    #[test]
    fn test_preview_annotates_but_does_not_change_settlement() {
        let orchestrator = TransactionOrchestrator::new();
        let preview = Some(GrowthAssumption {
            expected_annual_return_percent: dec!(12),
            horizon_years: 5,
        });

        let with_preview = orchestrator
            .submit(&TransactionIntent::LumpSum {
                fund: FundFixtures::bluechip(),
                amount: dec!(25000),
                preview,
            })
            .unwrap();
        let without_preview = orchestrator
            .submit(&TransactionIntent::LumpSum {
                fund: FundFixtures::bluechip(),
                amount: dec!(25000),
                preview: None,
            })
            .unwrap();

        let annotated = with_preview.receipt().unwrap();
        let plain = without_preview.receipt().unwrap();

        assert!(annotated.projected_value.is_some());
        assert_eq!(annotated.units, plain.units);
        assert_eq!(annotated.amount, plain.amount);
        assert_eq!(annotated.estimated_payout, plain.estimated_payout);
    }
}

// ============================================================================
// Redemption Tests
// ============================================================================

mod redemption_tests {
    use super::*;

    #[test]
    fn test_redeem_all_resolves_full_holding() {
        // holding{units: 1000, nav: 36.67} -> amount 36670.00, units 1000
        let fund = TestFundBuilder::new().with_nav(dec!(36.67)).build();
        let holding = TestHoldingBuilder::new()
            .with_fund(fund.id)
            .with_units(dec!(1000), dec!(30))
            .build();

        let orchestrator = TransactionOrchestrator::new();
        let result = orchestrator
            .submit(&TransactionIntent::Redeem {
                fund,
                holding,
                request: RedemptionRequest::all(),
                charges: RedemptionCharges::none(),
                as_of: as_of(),
            })
            .unwrap();

        let receipt = result.receipt().expect("success");
        assert_eq!(receipt.units, dec!(1000));
        assert_eq!(receipt.amount.amount(), dec!(36670.00));
    }

    #[test]
    fn test_redeem_units_beyond_holding_is_rejected_not_clamped() {
        // Holding 457.93 units, request 500
        let fund = TestFundBuilder::new().with_nav(dec!(42.10)).build();
        let holding = HoldingFixtures::partial_units(InvestorId::new_v7(), fund.id);

        let orchestrator = TransactionOrchestrator::new();
        let result = orchestrator
            .submit(&TransactionIntent::Redeem {
                fund,
                holding,
                request: RedemptionRequest::by_units(dec!(500)),
                charges: RedemptionCharges::none(),
                as_of: as_of(),
            })
            .unwrap();

        assert_eq!(
            result,
            TransactionResult::Rejected {
                reason: RejectReason::InsufficientUnits {
                    requested: dec!(500),
                    held: dec!(457.93),
                }
            }
        );
    }

    #[test]
    fn test_tax_and_exit_load_stack_on_payout() {
        let fund = TestFundBuilder::new()
            .with_nav(dec!(36.67))
            .with_exit_load(dec!(1), 12)
            .build();
        let holding = TestHoldingBuilder::new()
            .with_fund(fund.id)
            .with_units(dec!(1000), dec!(30))
            .with_purchase_date(NaiveDate::from_ymd_opt(2023, 10, 1).unwrap())
            .build();

        let orchestrator = TransactionOrchestrator::new();
        let result = orchestrator
            .submit(&TransactionIntent::Redeem {
                fund,
                holding,
                request: RedemptionRequest::all(),
                charges: RedemptionCharges::new(Rate::from_percentage(dec!(10))),
                as_of: as_of(),
            })
            .unwrap();

        let receipt = result.receipt().expect("success");
        assert_eq!(receipt.amount.amount(), dec!(36670.00));
        assert_eq!(receipt.estimated_tax.amount(), dec!(3667.00));
        assert_eq!(receipt.exit_load.amount(), dec!(366.70));
        assert_eq!(receipt.estimated_payout.amount(), dec!(32636.30));
    }
}

// ============================================================================
// SIP Plan Lifecycle Tests
// ============================================================================

mod sip_plan_tests {
    use super::*;

    #[test]
    fn test_plan_lifecycle_round_trip() {
        let fund = FundFixtures::bluechip();
        let mut plan = SipPlan::new(
            &fund,
            dec!(2500),
            SipFrequency::Monthly,
            5,
            SipDuration::FixedMonths(60),
            Some(StepUp { percent: dec!(10) }),
            as_of(),
        )
        .unwrap();

        plan.pause().unwrap();
        plan.resume().unwrap();
        plan.modify_amount(&fund, dec!(3000)).unwrap();
        plan.cancel().unwrap();

        assert!(plan.resume().is_err());
    }

    #[test]
    fn test_modification_cannot_break_fund_minimum() {
        let fund = FundFixtures::bluechip();
        let mut plan = SipPlan::new(
            &fund,
            dec!(2500),
            SipFrequency::Monthly,
            5,
            SipDuration::UntilCancelled,
            None,
            as_of(),
        )
        .unwrap();

        assert!(matches!(
            plan.modify_amount(&fund, dec!(100)),
            Err(RejectReason::BelowMinimum { .. })
        ));
        assert_eq!(plan.amount, dec!(2500));
    }
}

// ============================================================================
// Port Flow Tests
// ============================================================================

mod port_flow_tests {
    use super::*;

    /// Full loop: fetch from the catalog, submit, apply the delta, redeem.
    #[test]
    fn test_buy_then_redeem_through_ports() {
        let investor = InvestorId::new_v7();

        let mut catalog = InMemoryFundCatalog::new();
        let fund = FundFixtures::liquid();
        let fund_id = fund.id;
        catalog.insert(fund);

        let mut store = InMemoryPortfolioStore::new();
        let orchestrator = TransactionOrchestrator::new();

        // Buy
        let fund = catalog.fund(fund_id).unwrap();
        let result = orchestrator
            .submit(&TransactionIntent::LumpSum {
                fund: fund.clone(),
                amount: dec!(10000),
                preview: None,
            })
            .unwrap();
        let receipt = result.receipt().expect("buy succeeds");
        store
            .apply(investor, &HoldingDelta::from_receipt(receipt, DeltaKind::Buy))
            .unwrap();

        let holding = store.holding(investor, fund_id).unwrap().expect("holding exists");
        assert_eq!(holding.units, receipt.units);

        // Redeem all
        let result = orchestrator
            .submit(&TransactionIntent::Redeem {
                fund,
                holding: holding.clone(),
                request: RedemptionRequest::all(),
                charges: RedemptionCharges::none(),
                as_of: as_of(),
            })
            .unwrap();
        let receipt = result.receipt().expect("redeem succeeds");
        assert_eq!(receipt.units, holding.units);

        store
            .apply(
                investor,
                &HoldingDelta::from_receipt(receipt, DeltaKind::Redeem),
            )
            .unwrap();

        let emptied = store.holding(investor, fund_id).unwrap().unwrap();
        assert_eq!(emptied.units, Decimal::ZERO);
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization_tests {
    use super::*;

    #[test]
    fn test_rejected_result_wire_shape() {
        let result = TransactionResult::Rejected {
            reason: RejectReason::BelowMinimum {
                minimum: dec!(500),
                amount: dec!(499),
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["outcome"], "rejected");
        assert_eq!(json["reason"]["reason"], "below_minimum");
        assert_eq!(json["reason"]["details"]["minimum"], "500");
        assert_eq!(json["reason"]["details"]["amount"], "499");
    }

    #[test]
    fn test_intent_round_trips_through_json() {
        let intent = TransactionIntent::LumpSum {
            fund: FundFixtures::bluechip(),
            amount: dec!(25000),
            preview: Some(GrowthAssumption {
                expected_annual_return_percent: dec!(12),
                horizon_years: 5,
            }),
        };

        let json = serde_json::to_string(&intent).unwrap();
        let back: TransactionIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intent);
    }
}
