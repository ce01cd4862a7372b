use homeloan_core::emi::{emi, total_interest};
use homeloan_core::schedule::generate_amortization_schedule;
use homeloan_core::{LoanParameters, PrepaymentEvent, PrepaymentMode};
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
    // 50L at 8.5% over 20 years, the regression fixture.
    LoanParameters::new(dec!(5_000_000), dec!(8.5), 20)
}

// ===========================================================================
// EMI engine
// ===========================================================================

#[test]
fn test_emi_regression_fixture() {
    let params = standard_loan();
    assert_eq!(emi(&params).unwrap(), dec!(43_391));
    assert_eq!(total_interest(&params).unwrap(), dec!(5_413_840));
}

#[test]
fn test_total_interest_derives_from_emi() {
    for (principal, rate, years) in [
        (dec!(2_500_000), dec!(7.35), 15u32),
        (dec!(10_000_000), dec!(9.9), 30),
        (dec!(800_000), dec!(11.25), 5),
    ] {
        let params = LoanParameters::new(principal, rate, years);
        let installment = emi(&params).unwrap();
        assert_eq!(
            total_interest(&params).unwrap(),
            installment * Decimal::from(years * 12) - principal
        );
    }
}

#[test]
fn test_zero_rate_is_exact_division() {
    let params = LoanParameters::new(dec!(2_400_000), dec!(0), 20);
    assert_eq!(emi(&params).unwrap(), dec!(10_000));
}

// ===========================================================================
// Amortization scheduler
// ===========================================================================

#[test]
fn test_clean_schedule_runs_full_tenure_to_zero() {
    let params = standard_loan();
    let schedule =
        generate_amortization_schedule(&params, &[], PrepaymentMode::ReduceTenure).unwrap();

    assert_eq!(schedule.total_months, 240);
    assert_eq!(schedule.entries.len(), 240);
    let last = schedule.entries.last().unwrap();
    assert!(last.closing_balance < dec!(1), "terminal balance not cleared");
    assert_close(
        schedule.total_interest,
        dec!(5_413_878.80),
        dec!(1),
        "baseline accrued interest",
    );
}

#[test]
fn test_entry_invariants_hold_every_month() {
    let params = LoanParameters::new(dec!(1_500_000), dec!(9.25), 10);
    let schedule =
        generate_amortization_schedule(&params, &[], PrepaymentMode::ReduceTenure).unwrap();
    let monthly_rate = params.monthly_rate();

    let mut expected_opening = params.principal;
    for entry in &schedule.entries {
        assert_eq!(entry.opening_balance, expected_opening);
        assert_eq!(entry.interest, entry.opening_balance * monthly_rate);
        assert!(entry.closing_balance >= Decimal::ZERO);
        assert_close(
            entry.opening_balance - entry.principal - entry.prepayment,
            entry.closing_balance,
            dec!(0.01),
            "balance roll-forward",
        );
        expected_opening = entry.closing_balance;
    }
}

#[test]
fn test_prepayment_fixture_reduce_tenure() {
    let params = standard_loan();
    let baseline =
        generate_amortization_schedule(&params, &[], PrepaymentMode::ReduceTenure).unwrap();
    let events = [PrepaymentEvent {
        month: 60,
        amount: dec!(500_000),
    }];
    let schedule =
        generate_amortization_schedule(&params, &events, PrepaymentMode::ReduceTenure).unwrap();

    assert_eq!(schedule.total_months, 204);
    assert_close(
        schedule.total_interest,
        dec!(4_344_726.30),
        dec!(1),
        "reduce-tenure interest",
    );
    assert!(schedule.total_interest < baseline.total_interest);
    assert!(schedule.total_months < baseline.total_months);
}

#[test]
fn test_prepayment_fixture_reduce_emi() {
    let params = standard_loan();
    let events = [PrepaymentEvent {
        month: 60,
        amount: dec!(500_000),
    }];
    let schedule =
        generate_amortization_schedule(&params, &events, PrepaymentMode::ReduceEmi).unwrap();

    // Reduce-EMI keeps the full tenure; the saving shows up in interest only.
    assert_eq!(schedule.total_months, 240);
    assert_close(
        schedule.total_interest,
        dec!(5_027_613.20),
        dec!(1),
        "reduce-emi interest",
    );
}

#[test]
fn test_any_prepayment_never_costs_interest_or_months() {
    let params = LoanParameters::new(dec!(3_000_000), dec!(8.75), 15);
    let baseline =
        generate_amortization_schedule(&params, &[], PrepaymentMode::ReduceTenure).unwrap();

    for (month, amount) in [
        (1u32, dec!(50_000)),
        (60, dec!(200_000)),
        (179, dec!(25_000)),
        (90, dec!(5_000_000)),
    ] {
        for mode in [PrepaymentMode::ReduceTenure, PrepaymentMode::ReduceEmi] {
            let events = [PrepaymentEvent { month, amount }];
            let schedule = generate_amortization_schedule(&params, &events, mode).unwrap();
            assert!(
                schedule.total_interest <= baseline.total_interest,
                "prepayment at month {month} increased interest under {mode:?}"
            );
            assert!(schedule.total_months <= baseline.total_months);
        }
    }
}

#[test]
fn test_recurring_annual_prepayments() {
    let params = standard_loan();
    let events: Vec<PrepaymentEvent> = (1..=10)
        .map(|year| PrepaymentEvent {
            month: year * 12,
            amount: dec!(100_000),
        })
        .collect();
    let schedule =
        generate_amortization_schedule(&params, &events, PrepaymentMode::ReduceTenure).unwrap();

    assert!(schedule.total_months < 240);
    // Every posted prepayment shows up in its month's entry.
    let posted: Vec<u32> = schedule
        .entries
        .iter()
        .filter(|e| e.prepayment > Decimal::ZERO)
        .map(|e| e.month)
        .collect();
    assert_eq!(posted, (1..=10).map(|y| y * 12).collect::<Vec<_>>());
}

#[test]
fn test_event_after_payoff_is_a_no_op() {
    let params = standard_loan();
    // A huge event at month 12 clears the loan; the later event never posts.
    let events = [
        PrepaymentEvent {
            month: 12,
            amount: dec!(10_000_000),
        },
        PrepaymentEvent {
            month: 120,
            amount: dec!(500_000),
        },
    ];
    let schedule =
        generate_amortization_schedule(&params, &events, PrepaymentMode::ReduceTenure).unwrap();
    assert_eq!(schedule.total_months, 12);
    assert_eq!(
        schedule.entries.last().unwrap().closing_balance,
        Decimal::ZERO
    );
}

#[test]
fn test_reduce_emi_lowers_the_installment_going_forward() {
    let params = standard_loan();
    let events = [PrepaymentEvent {
        month: 60,
        amount: dec!(500_000),
    }];
    let schedule =
        generate_amortization_schedule(&params, &events, PrepaymentMode::ReduceEmi).unwrap();

    // Installment = interest + principal portion; after the recast it drops.
    let before = &schedule.entries[58];
    let after = &schedule.entries[60];
    let installment_before = before.interest + before.principal;
    let installment_after = after.interest + after.principal;
    assert!(installment_after < installment_before);
    assert_close(
        installment_after,
        dec!(38_467.46),
        dec!(0.5),
        "recast installment",
    );
}
