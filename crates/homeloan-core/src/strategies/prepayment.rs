//! Part-prepayment and lump-sum timing simulations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::{emi, emi_exact_for_months, round_rupee};
use crate::error::HomeLoanError;
use crate::schedule::generate_amortization_schedule;
use crate::strategies::{baseline_schedule, metrics_against_baseline, StrategyMetrics};
use crate::types::{
    with_metadata, ComputationOutput, LoanParameters, Money, PrepaymentEvent, PrepaymentMode,
};
use crate::HomeLoanResult;

/// Fixed reference years for the lump-sum timing comparison.
pub const LUMP_SUM_REFERENCE_YEARS: [u32; 4] = [1, 3, 5, 10];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartPrepaymentInput {
    pub loan: LoanParameters,
    pub amount: Money,
    /// Year after which the prepayment posts (event month = year × 12).
    pub prepayment_year: u32,
    pub mode: PrepaymentMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartPrepaymentOutput {
    pub standard_emi: Money,
    /// Recast installment under reduce-EMI; absent for reduce-tenure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_emi: Option<Money>,
    pub metrics: StrategyMetrics,
}

/// Simulate a single part-prepayment under either post-event branch.
pub fn calculate_prepayment_impact(
    input: &PartPrepaymentInput,
) -> HomeLoanResult<ComputationOutput<PartPrepaymentOutput>> {
    let start = Instant::now();
    input.loan.validate()?;

    if input.prepayment_year == 0 || input.prepayment_year > input.loan.tenure_years {
        return Err(HomeLoanError::InvalidInput {
            field: "prepayment_year".into(),
            reason: format!("Must be within 1..={}", input.loan.tenure_years),
        });
    }

    let event_month = input.prepayment_year * 12;
    let events = [PrepaymentEvent {
        month: event_month,
        amount: input.amount,
    }];
    let schedule = generate_amortization_schedule(&input.loan, &events, input.mode)?;

    let revised_emi = match input.mode {
        PrepaymentMode::ReduceTenure => None,
        PrepaymentMode::ReduceEmi => schedule
            .entries
            .iter()
            .find(|entry| entry.month == event_month)
            .filter(|entry| entry.closing_balance > Decimal::ZERO)
            .map(|entry| {
                round_rupee(emi_exact_for_months(
                    entry.closing_balance,
                    input.loan.annual_rate,
                    input.loan.months() - event_month,
                ))
            }),
    };

    let metrics = metrics_against_baseline(
        &input.loan,
        schedule.total_interest,
        Decimal::from(schedule.total_months),
    );

    let output = PartPrepaymentOutput {
        standard_emi: emi(&input.loan)?,
        revised_emi,
        metrics,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Part-Prepayment Simulation",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumInput {
    pub loan: LoanParameters,
    pub amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumScenario {
    pub year: u32,
    pub total_interest: Money,
    pub months_used: u32,
    pub interest_saved: Money,
    pub months_saved: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpSumOutput {
    pub baseline_interest: Money,
    /// One scenario per reference year, earliest first.
    pub scenarios: Vec<LumpSumScenario>,
}

/// Compare one lump-sum amount posted at each reference year (1, 3, 5, 10),
/// reduce-tenure branch, to illustrate how timing drives the saving.
pub fn calculate_lump_sum_timing(
    input: &LumpSumInput,
) -> HomeLoanResult<ComputationOutput<LumpSumOutput>> {
    let start = Instant::now();
    input.loan.validate()?;

    if input.amount <= Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "amount".into(),
            reason: "Lump-sum amount must be positive".into(),
        });
    }

    let baseline = baseline_schedule(&input.loan);
    let mut warnings = Vec::new();
    let mut scenarios = Vec::new();

    for year in LUMP_SUM_REFERENCE_YEARS {
        if year > input.loan.tenure_years {
            warnings.push(format!(
                "Reference year {year} is beyond the {}-year tenure; skipped",
                input.loan.tenure_years
            ));
            continue;
        }
        let events = [PrepaymentEvent {
            month: year * 12,
            amount: input.amount,
        }];
        let schedule = generate_amortization_schedule(
            &input.loan,
            &events,
            PrepaymentMode::ReduceTenure,
        )?;
        scenarios.push(LumpSumScenario {
            year,
            total_interest: schedule.total_interest,
            months_used: schedule.total_months,
            interest_saved: baseline.total_interest - schedule.total_interest,
            months_saved: baseline.total_months - schedule.total_months,
        });
    }

    let output = LumpSumOutput {
        baseline_interest: baseline.total_interest,
        scenarios,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Lump-Sum Timing Comparison",
        input,
        warnings,
        elapsed,
        output,
    ))
}
