//! Biweekly split-payment simulation.
//!
//! Half the standard EMI every 14 days (~26 payments a year) with a dedicated
//! period rate of annual% / 100 / 26. The compounding cadence differs
//! materially from monthly, so this runs its own accrual loop rather than
//! reusing the monthly scheduler. The rate/26 approximation is kept as-is
//! for output compatibility with prior figures.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::{emi_exact, round_rupee};
use crate::strategies::{metrics_against_baseline, StrategyMetrics};
use crate::types::{with_metadata, ComputationOutput, LoanParameters, Money};
use crate::HomeLoanResult;

const BALANCE_EPSILON: Decimal = dec!(0.01);

/// Periods per year under the 14-day cadence.
const PERIODS_PER_YEAR: Decimal = dec!(26);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiweeklyInput {
    pub loan: LoanParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiweeklyOutput {
    /// Half the standard EMI, rounded to the rupee for display.
    pub biweekly_payment: Money,
    pub periods_used: u32,
    pub metrics: StrategyMetrics,
}

/// Simulate switching from monthly EMIs to biweekly half-payments.
pub fn calculate_biweekly_impact(
    input: &BiweeklyInput,
) -> HomeLoanResult<ComputationOutput<BiweeklyOutput>> {
    let start = Instant::now();
    input.loan.validate()?;

    let period_rate = input.loan.annual_rate / dec!(100) / PERIODS_PER_YEAR;
    let payment = emi_exact(&input.loan) / dec!(2);

    let mut balance = input.loan.principal;
    let mut total_interest = Decimal::ZERO;
    let mut periods = 0u32;
    // 26 half-payments a year retire principal faster than 12 full ones, so
    // the nominal tenure in periods is a safe upper bound.
    let max_periods = input.loan.tenure_years * 26;

    while balance >= BALANCE_EPSILON && periods < max_periods {
        periods += 1;
        let interest = balance * period_rate;
        total_interest += interest;
        let mut principal_portion = payment - interest;
        if principal_portion > balance {
            principal_portion = balance;
        }
        balance -= principal_portion;
    }

    let months_used = Decimal::from(periods) * dec!(12) / PERIODS_PER_YEAR;
    let metrics = metrics_against_baseline(&input.loan, total_interest, months_used);

    let output = BiweeklyOutput {
        biweekly_payment: round_rupee(payment),
        periods_used: periods,
        metrics,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Biweekly Split-Payment Simulation",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}
