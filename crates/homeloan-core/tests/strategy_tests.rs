use homeloan_core::strategies::balance_transfer::{
    calculate_balance_transfer, BalanceTransferInput,
};
use homeloan_core::strategies::biweekly::{calculate_biweekly_impact, BiweeklyInput};
use homeloan_core::strategies::flexi::{calculate_flexi_impact, FlexiInput};
use homeloan_core::strategies::prepayment::{
    calculate_lump_sum_timing, calculate_prepayment_impact, LumpSumInput, PartPrepaymentInput,
    LUMP_SUM_REFERENCE_YEARS,
};
use homeloan_core::strategies::step_up::{calculate_step_up_emi, StepUpInput};
use homeloan_core::{LoanParameters, PrepaymentMode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn assert_close(actual: Decimal, expected: Decimal, tol: Decimal, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{}: expected ~{}, got {} (diff = {})",
        msg,
        expected,
        actual,
        diff
    );
}

fn standard_loan() -> LoanParameters {
    LoanParameters::new(dec!(5_000_000), dec!(8.5), 20)
}

// ===========================================================================
// Biweekly split
// ===========================================================================

#[test]
fn test_biweekly_clears_the_loan_early() {
    let input = BiweeklyInput {
        loan: standard_loan(),
    };
    let output = calculate_biweekly_impact(&input).unwrap().result;

    assert_eq!(output.biweekly_payment, dec!(21_696));
    assert_eq!(output.periods_used, 429);
    assert_close(
        output.metrics.total_interest,
        dec!(4_306_785),
        dec!(2),
        "biweekly interest",
    );
    assert_close(
        output.metrics.interest_saved,
        dec!(1_107_094),
        dec!(2),
        "biweekly saving",
    );
    assert!(output.metrics.months_saved > dec!(40));
}

// ===========================================================================
// Step-up EMI
// ===========================================================================

#[test]
fn test_step_up_shortens_tenure_and_interest() {
    let input = StepUpInput {
        loan: standard_loan(),
        annual_increase: dec!(5),
        initial_fraction: Decimal::ONE,
    };
    let output = calculate_step_up_emi(&input).unwrap().result;

    assert_eq!(output.metrics.months_used, dec!(141));
    assert_close(
        output.metrics.total_interest,
        dec!(3_298_784),
        dec!(2),
        "step-up interest",
    );
    assert!(output.metrics.interest_saved > dec!(2_000_000));
    assert!(output.final_installment > output.initial_installment);
}

#[test]
fn test_step_up_rejects_negative_increase() {
    let input = StepUpInput {
        loan: standard_loan(),
        annual_increase: dec!(-5),
        initial_fraction: Decimal::ONE,
    };
    assert!(calculate_step_up_emi(&input).is_err());
}

#[test]
fn test_step_up_flags_a_fraction_that_never_amortizes() {
    // A tenth of the EMI with no growth cannot even cover interest.
    let input = StepUpInput {
        loan: standard_loan(),
        annual_increase: dec!(0),
        initial_fraction: dec!(0.1),
    };
    assert!(calculate_step_up_emi(&input).is_err());
}

// ===========================================================================
// Part-prepayment
// ===========================================================================

#[test]
fn test_part_prepayment_reduce_tenure_branch() {
    let input = PartPrepaymentInput {
        loan: standard_loan(),
        amount: dec!(500_000),
        prepayment_year: 5,
        mode: PrepaymentMode::ReduceTenure,
    };
    let output = calculate_prepayment_impact(&input).unwrap().result;

    assert_eq!(output.standard_emi, dec!(43_391));
    assert!(output.revised_emi.is_none());
    assert_eq!(output.metrics.months_used, dec!(204));
    assert_eq!(output.metrics.months_saved, dec!(36));
    assert_close(
        output.metrics.interest_saved,
        dec!(1_069_153),
        dec!(2),
        "reduce-tenure saving",
    );
}

#[test]
fn test_part_prepayment_reduce_emi_branch() {
    let input = PartPrepaymentInput {
        loan: standard_loan(),
        amount: dec!(500_000),
        prepayment_year: 5,
        mode: PrepaymentMode::ReduceEmi,
    };
    let output = calculate_prepayment_impact(&input).unwrap().result;

    assert_eq!(output.metrics.months_used, dec!(240));
    assert_eq!(output.metrics.months_saved, dec!(0));
    assert_eq!(output.revised_emi, Some(dec!(38_467)));
    assert_close(
        output.metrics.interest_saved,
        dec!(386_266),
        dec!(2),
        "reduce-emi saving",
    );
}

#[test]
fn test_part_prepayment_rejects_year_beyond_tenure() {
    let input = PartPrepaymentInput {
        loan: standard_loan(),
        amount: dec!(500_000),
        prepayment_year: 21,
        mode: PrepaymentMode::ReduceTenure,
    };
    assert!(calculate_prepayment_impact(&input).is_err());
}

// ===========================================================================
// Lump-sum timing
// ===========================================================================

#[test]
fn test_lump_sum_earlier_is_always_better() {
    let input = LumpSumInput {
        loan: standard_loan(),
        amount: dec!(500_000),
    };
    let output = calculate_lump_sum_timing(&input).unwrap().result;

    assert_eq!(output.scenarios.len(), LUMP_SUM_REFERENCE_YEARS.len());
    for pair in output.scenarios.windows(2) {
        assert!(
            pair[0].interest_saved > pair[1].interest_saved,
            "year {} should beat year {}",
            pair[0].year,
            pair[1].year
        );
    }
    let year_five = output.scenarios.iter().find(|s| s.year == 5).unwrap();
    assert_eq!(year_five.months_used, 204);
    assert_close(
        year_five.interest_saved,
        dec!(1_069_153),
        dec!(2),
        "year-5 saving",
    );
}

#[test]
fn test_lump_sum_skips_years_beyond_tenure() {
    let input = LumpSumInput {
        loan: LoanParameters::new(dec!(2_000_000), dec!(9), 4),
        amount: dec!(200_000),
    };
    let output = calculate_lump_sum_timing(&input).unwrap();

    let years: Vec<u32> = output.result.scenarios.iter().map(|s| s.year).collect();
    assert_eq!(years, vec![1, 3]);
    assert_eq!(output.warnings.len(), 2);
}

// ===========================================================================
// Balance transfer
// ===========================================================================

#[test]
fn test_balance_transfer_breakeven() {
    let input = BalanceTransferInput {
        outstanding_balance: dec!(4_000_000),
        remaining_months: 180,
        current_rate: dec!(9.0),
        new_rate: dec!(8.0),
        processing_fee_percent: dec!(0.5),
        flat_fee: dec!(0),
    };
    let output = calculate_balance_transfer(&input).unwrap().result;

    assert_eq!(output.old_emi, dec!(40_571));
    assert_eq!(output.new_emi, dec!(38_417));
    assert_eq!(output.transfer_cost, dec!(20_000));
    assert_eq!(output.transferred_principal, dec!(4_020_000));
    assert_eq!(output.breakeven_months, Some(dec!(9.3)));
    assert_close(
        output.net_savings,
        dec!(387_621),
        dec!(2),
        "net savings after cost",
    );
}

#[test]
fn test_balance_transfer_to_a_worse_rate_has_no_breakeven() {
    let input = BalanceTransferInput {
        outstanding_balance: dec!(4_000_000),
        remaining_months: 180,
        current_rate: dec!(8.0),
        new_rate: dec!(9.0),
        processing_fee_percent: dec!(0.5),
        flat_fee: dec!(5_000),
    };
    let output = calculate_balance_transfer(&input).unwrap();

    assert!(output.result.breakeven_months.is_none());
    assert!(output.result.monthly_saving < Decimal::ZERO);
    assert!(!output.warnings.is_empty());
}

// ===========================================================================
// Flexi offset
// ===========================================================================

#[test]
fn test_flexi_offset_cuts_interest_and_tenure() {
    let input = FlexiInput {
        loan: standard_loan(),
        offset_fraction: dec!(0.2),
    };
    let output = calculate_flexi_impact(&input).unwrap().result;

    assert_eq!(output.offset_balance, dec!(1_000_000));
    assert_eq!(output.metrics.months_used, dec!(173));
    assert_close(
        output.metrics.total_interest,
        dec!(2_506_242),
        dec!(2),
        "flexi interest",
    );
    assert!(output.metrics.interest_saved > dec!(2_900_000));
}

#[test]
fn test_flexi_zero_offset_matches_plain_schedule() {
    let input = FlexiInput {
        loan: standard_loan(),
        offset_fraction: dec!(0),
    };
    let output = calculate_flexi_impact(&input).unwrap().result;

    assert_eq!(output.metrics.months_used, dec!(240));
    assert_eq!(output.metrics.interest_saved, dec!(0));
    assert_eq!(output.metrics.months_saved, dec!(0));
}

#[test]
fn test_flexi_rejects_full_offset() {
    let input = FlexiInput {
        loan: standard_loan(),
        offset_fraction: dec!(1),
    };
    assert!(calculate_flexi_impact(&input).is_err());
}
