//! Integration tests for the regime engine.
//!
//! This suite exercises the public API end to end:
//! - Reference scenarios under the FY 2023-24 tables
//! - Scenarios under the current FY 2024-25 tables
//! - Deduction caps and the rebate cliff
//! - Salary slip intake and settlement against withheld tax
//! - JSON wire shape of inputs and results
//! - Policies loaded from the shipped YAML configuration

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use regime_engine::calculation::settle;
use regime_engine::config::ConfigLoader;
use regime_engine::models::{
    ComparisonResult, Regime, SalarySlip, Settlement, TaxInput, TaxYearPolicy,
};
use regime_engine::{calculate_tax, calculate_tax_with_policy};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn salaried(salary: &str) -> TaxInput {
    TaxInput {
        salary: dec(salary),
        ..Default::default()
    }
}

fn legacy(input: &TaxInput) -> ComparisonResult {
    calculate_tax_with_policy(input, &TaxYearPolicy::fy2023_24())
}

/// Parses a request body the way the calling web layer would.
fn input_from_json(body: Value) -> TaxInput {
    serde_json::from_value(body).expect("request body should deserialize")
}

fn assert_breakdown_sums(comparison: &ComparisonResult) {
    for result in [&comparison.old_regime, &comparison.new_regime] {
        let sum: Decimal = result.slab_breakdown.iter().map(|s| s.tax_amount).sum();
        assert_eq!(
            sum, result.tax_before_rebate,
            "{} regime breakdown does not sum to tax before rebate",
            result.regime
        );
    }
}

// =============================================================================
// SECTION 1: Reference Scenarios (FY 2023-24 tables)
// =============================================================================

#[test]
fn test_old_regime_no_tax_case() {
    let comparison = legacy(&salaried("400000"));

    assert_eq!(comparison.old_regime.taxable_income, dec("350000"));
    assert_eq!(comparison.old_regime.total_tax, Decimal::ZERO);
    assert_breakdown_sums(&comparison);
}

#[test]
fn test_new_regime_no_tax_case() {
    let comparison = legacy(&salaried("700000"));

    assert_eq!(comparison.new_regime.taxable_income, dec("650000"));
    assert_eq!(comparison.new_regime.total_tax, Decimal::ZERO);
    assert_breakdown_sums(&comparison);
}

#[test]
fn test_higher_slabs_with_itemized_deductions() {
    let input = input_from_json(json!({
        "salary": 1500000,
        "otherIncome": 0,
        "section80c": 150000,
        "section80dSelf": 25000,
        "section80dParents": 25000,
        "parentsSenior": false,
        "homeLoanInterest": 0
    }));

    let comparison = legacy(&input);

    // Old: 1.5M - 50k - 150k - 25k - 25k = 1,250,000
    // 12,500 + 100,000 + 75,000 = 187,500; cess 7,500
    assert_eq!(comparison.old_regime.taxable_income, dec("1250000"));
    assert_eq!(comparison.old_regime.tax_before_rebate, dec("187500"));
    assert_eq!(comparison.old_regime.total_tax, dec("195000"));

    // New: 1.5M - 50k = 1,450,000
    // 15,000 + 30,000 + 45,000 + 50,000 = 140,000; cess 5,600
    assert_eq!(comparison.new_regime.taxable_income, dec("1450000"));
    assert_eq!(comparison.new_regime.tax_before_rebate, dec("140000"));
    assert_eq!(comparison.new_regime.total_tax, dec("145600"));

    assert_eq!(comparison.suggested_regime, Regime::New);
    assert_eq!(comparison.savings, dec("49400"));
    assert_breakdown_sums(&comparison);
}

// =============================================================================
// SECTION 2: Current Policy (FY 2024-25)
// =============================================================================

#[test]
fn test_current_policy_is_the_default() {
    let input = salaried("1800000");
    assert_eq!(
        calculate_tax(&input),
        calculate_tax_with_policy(&input, &TaxYearPolicy::fy2024_25())
    );
}

#[test]
fn test_current_policy_new_regime_standard_deduction() {
    let comparison = calculate_tax(&salaried("775000"));

    // 775,000 - 75,000 lands exactly on the new-regime rebate threshold
    assert_eq!(comparison.new_regime.taxable_income, dec("700000"));
    assert_eq!(comparison.new_regime.tax_before_rebate, dec("20000"));
    assert_eq!(comparison.new_regime.total_tax, Decimal::ZERO);
    assert_eq!(comparison.suggested_regime, Regime::New);
}

#[test]
fn test_heavy_deductions_favour_old_regime() {
    let input = TaxInput {
        salary: dec("1000000"),
        section_80c: dec("150000"),
        section_80d_self: dec("25000"),
        section_80d_parents: dec("50000"),
        parents_senior: true,
        home_loan_interest: dec("200000"),
        professional_tax: dec("2500"),
        ..Default::default()
    };

    let comparison = calculate_tax(&input);

    // Old: 1,000,000 - 2,500 - 50,000 - 150,000 - 25,000 - 50,000 - 200,000
    assert_eq!(comparison.old_regime.taxable_income, dec("522500"));
    // 12,500 + 22,500 * 20% = 17,000; cess 680
    assert_eq!(comparison.old_regime.total_tax, dec("17680"));

    // New: 1,000,000 - 2,500 - 75,000 = 922,500
    // 20,000 + 22,250 = 42,250; cess 1,690
    assert_eq!(comparison.new_regime.taxable_income, dec("922500"));
    assert_eq!(comparison.new_regime.total_tax, dec("43940"));

    assert_eq!(comparison.suggested_regime, Regime::Old);
    assert_eq!(comparison.savings, dec("26260"));
}

#[test]
fn test_top_bracket_breakdown_is_complete_ladder() {
    let comparison = calculate_tax(&salaried("2575000"));

    let labels: Vec<&str> = comparison
        .new_regime
        .slab_breakdown
        .iter()
        .map(|s| s.slab_label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec!["0 - 3L", "3L - 7L", "7L - 10L", "10L - 12L", "12L - 15L", "Above 15L"]
    );
    let rates: Vec<u32> = comparison
        .new_regime
        .slab_breakdown
        .iter()
        .map(|s| s.rate_percent)
        .collect();
    assert_eq!(rates, vec![0, 5, 10, 15, 20, 30]);
    assert_breakdown_sums(&comparison);
}

// =============================================================================
// SECTION 3: Caps and the Rebate Cliff
// =============================================================================

#[test]
fn test_80c_cap_saturates() {
    let at_cap = TaxInput {
        section_80c: dec("150000"),
        ..salaried("1500000")
    };
    let far_above = TaxInput {
        section_80c: dec("10000000"),
        ..salaried("1500000")
    };

    assert_eq!(
        calculate_tax(&at_cap).old_regime.taxable_income,
        calculate_tax(&far_above).old_regime.taxable_income
    );
}

#[test]
fn test_old_regime_rebate_cliff() {
    // 550,000 - 50,000 standard deduction = 500,000 taxable
    let at_threshold = calculate_tax(&salaried("550000"));
    assert_eq!(at_threshold.old_regime.taxable_income, dec("500000"));
    assert_eq!(at_threshold.old_regime.rebate_applied, dec("12500"));
    assert_eq!(at_threshold.old_regime.total_tax, Decimal::ZERO);

    let over_threshold = calculate_tax(&salaried("550001"));
    assert_eq!(over_threshold.old_regime.taxable_income, dec("500001"));
    assert_eq!(over_threshold.old_regime.rebate_applied, Decimal::ZERO);
    assert_eq!(over_threshold.old_regime.total_tax, dec("13000.208"));
}

#[test]
fn test_new_regime_rebate_cliff() {
    let at_threshold = calculate_tax(&salaried("775000"));
    let over_threshold = calculate_tax(&salaried("775001"));

    assert_eq!(at_threshold.new_regime.total_tax, Decimal::ZERO);
    // 20,000.10 + 4% cess
    assert_eq!(over_threshold.new_regime.total_tax, dec("20800.104"));
}

#[test]
fn test_negative_inputs_are_clamped() {
    let input = input_from_json(json!({
        "salary": 900000,
        "otherIncome": -50000,
        "section80c": -10000,
        "homeLoanInterest": -1
    }));

    assert_eq!(calculate_tax(&input), calculate_tax(&salaried("900000")));
}

#[test]
fn test_zero_income_produces_zero_everywhere() {
    let comparison = calculate_tax(&TaxInput::default());

    for result in [&comparison.old_regime, &comparison.new_regime] {
        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
        assert_eq!(result.slab_breakdown.len(), 1);
    }
    assert_eq!(comparison.suggested_regime, Regime::Old);
    assert_eq!(comparison.savings, Decimal::ZERO);
}

#[test]
fn test_extreme_amounts_still_produce_a_comparison() {
    let inputs = [
        TaxInput {
            salary: Decimal::MAX,
            ..Default::default()
        },
        TaxInput {
            salary: Decimal::MAX,
            other_income: Decimal::MAX,
            ..Default::default()
        },
        TaxInput {
            salary: Decimal::MAX,
            professional_tax: Decimal::MAX,
            pf_contribution: Decimal::MAX,
            ..Default::default()
        },
    ];

    for input in &inputs {
        for comparison in [calculate_tax(input), legacy(input)] {
            assert_breakdown_sums(&comparison);
            assert_eq!(
                comparison.savings,
                (comparison.old_regime.total_tax - comparison.new_regime.total_tax).abs()
            );
        }
    }

    let top = calculate_tax(&inputs[1]);
    assert_eq!(top.old_regime.gross_income, Decimal::MAX);
    assert!(top.old_regime.total_tax > Decimal::ZERO);
    assert!(top.new_regime.total_tax > Decimal::ZERO);
}

// =============================================================================
// SECTION 4: Salary Slip Intake and Settlement
// =============================================================================

#[test]
fn test_monthly_slip_flows_into_comparison() {
    let monthly: SalarySlip = serde_json::from_value(json!({
        "salary": 125000,
        "tds": 10000,
        "professional_tax": 200,
        "pf_contribution": 1800
    }))
    .unwrap();
    let slip = monthly.annualized();

    let profile = TaxInput {
        section_80c: dec("100000"),
        ..Default::default()
    };
    let input = profile.apply_salary_slip(&slip);

    assert_eq!(input.salary, dec("1500000"));
    assert_eq!(input.professional_tax, dec("2400"));
    assert_eq!(input.pf_contribution, dec("21600"));

    let comparison = calculate_tax(&input);

    // Old: 1,500,000 - 2,400 - 50,000 - 121,600 = 1,326,000
    assert_eq!(comparison.old_regime.taxable_income, dec("1326000"));
    assert_eq!(comparison.old_regime.total_tax, dec("218712"));

    // New: 1,500,000 - 2,400 - 75,000 = 1,422,600
    assert_eq!(comparison.new_regime.taxable_income, dec("1422600"));
    assert_eq!(comparison.new_regime.total_tax, dec("129500.80"));
    assert_eq!(comparison.suggested_regime, Regime::New);

    assert_eq!(
        settle(&comparison, slip.tds),
        Settlement::Payable(dec("9500.80"))
    );
}

#[test]
fn test_refund_when_withholding_exceeds_liability() {
    let comparison = calculate_tax(&salaried("700000"));
    assert_eq!(comparison.suggested().total_tax, Decimal::ZERO);

    assert_eq!(
        settle(&comparison, dec("12000")),
        Settlement::Refund(dec("12000"))
    );
}

// =============================================================================
// SECTION 5: Wire Shape
// =============================================================================

#[test]
fn test_result_serializes_with_camel_case_keys() {
    let comparison = legacy(&salaried("400000"));
    let json = serde_json::to_value(&comparison).unwrap();

    assert_eq!(json["suggestedRegime"], "OLD");
    assert_eq!(json["oldRegime"]["regime"], "OLD");
    for key in [
        "taxableIncome",
        "taxBeforeRebate",
        "rebateApplied",
        "taxAfterRebate",
        "cess",
        "totalTax",
        "slabBreakdown",
    ] {
        assert!(
            json["oldRegime"].get(key).is_some(),
            "missing key {} in old regime result",
            key
        );
    }

    let slab = &json["oldRegime"]["slabBreakdown"][1];
    assert_eq!(slab["slabLabel"], "2.5L - 5L");
    assert_eq!(slab["ratePercent"], 5);
}

#[test]
fn test_result_deserializes_back() {
    let comparison = calculate_tax(&salaried("1234567"));
    let json = serde_json::to_string(&comparison).unwrap();

    let parsed: ComparisonResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, comparison);
}

// =============================================================================
// SECTION 6: Loaded Configuration
// =============================================================================

#[test]
fn test_loaded_configuration_matches_compiled_policy() {
    let loader = ConfigLoader::load("./config/income_tax").expect("Failed to load config");
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let input = TaxInput {
        section_80c: dec("150000"),
        home_loan_interest: dec("200000"),
        ..salaried("1750000")
    };

    assert_eq!(
        loader.calculate(&input, date).unwrap(),
        calculate_tax(&input)
    );
}

#[test]
fn test_loaded_configuration_selects_legacy_tables_by_date() {
    let loader = ConfigLoader::load("./config/income_tax").expect("Failed to load config");
    let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    let input = TaxInput {
        section_80c: dec("150000"),
        section_80d_self: dec("25000"),
        section_80d_parents: dec("25000"),
        ..salaried("1500000")
    };

    let comparison = loader.calculate(&input, date).unwrap();
    assert_eq!(comparison.new_regime.total_tax, dec("145600"));
    assert_eq!(loader.policy_for(date).unwrap().label, "FY 2023-24");
}
