//! Annually-stepped EMI simulation.
//!
//! The installment grows every month by annual_increase% / 12 compounded:
//! installment(m) = initial_fraction × standard EMI × (1 + step)^m. The
//! monthly-compounded growth is a deliberate simplification kept for output
//! compatibility.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::{emi_exact, round_rupee};
use crate::error::HomeLoanError;
use crate::strategies::{metrics_against_baseline, StrategyMetrics};
use crate::types::{with_metadata, ComputationOutput, LoanParameters, Money, Rate};
use crate::HomeLoanResult;

const BALANCE_EPSILON: Decimal = dec!(0.01);

/// Hard stop for the accrual loop; no realistic step-up runs this long.
const MAX_MONTHS: u32 = 1200;

fn default_initial_fraction() -> Decimal {
    Decimal::ONE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepUpInput {
    pub loan: LoanParameters,
    /// Annual installment growth as a percentage (5 = 5% per year).
    pub annual_increase: Rate,
    /// Starting installment as a fraction of the standard EMI (default 1).
    #[serde(default = "default_initial_fraction")]
    pub initial_fraction: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepUpOutput {
    pub initial_installment: Money,
    pub final_installment: Money,
    pub metrics: StrategyMetrics,
}

/// Simulate a growing installment until the balance reaches zero.
pub fn calculate_step_up_emi(
    input: &StepUpInput,
) -> HomeLoanResult<ComputationOutput<StepUpOutput>> {
    let start = Instant::now();
    input.loan.validate()?;

    if input.annual_increase < Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "annual_increase".into(),
            reason: "Annual increase cannot be negative".into(),
        });
    }
    if input.initial_fraction <= Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "initial_fraction".into(),
            reason: "Initial fraction must be positive".into(),
        });
    }

    let mut warnings = Vec::new();
    if input.annual_increase > dec!(25) {
        warnings.push(format!(
            "Annual increase of {}% is unusually high",
            input.annual_increase
        ));
    }

    let monthly_rate = input.loan.monthly_rate();
    let step_rate = input.annual_increase / dec!(1200);
    let base_installment = input.initial_fraction * emi_exact(&input.loan);
    let growth = Decimal::ONE + step_rate;

    let mut balance = input.loan.principal;
    let mut total_interest = Decimal::ZERO;
    let mut installment = base_installment;
    let mut months = 0u32;
    let mut first_installment = Decimal::ZERO;

    while balance >= BALANCE_EPSILON && months < MAX_MONTHS {
        months += 1;
        installment *= growth;
        if months == 1 {
            first_installment = installment;
        }
        let interest = balance * monthly_rate;
        total_interest += interest;
        let mut principal_portion = installment - interest;
        if principal_portion < Decimal::ZERO {
            principal_portion = Decimal::ZERO;
        }
        if principal_portion > balance {
            principal_portion = balance;
        }
        balance -= principal_portion;
    }

    if balance >= BALANCE_EPSILON {
        return Err(HomeLoanError::InvalidInput {
            field: "initial_fraction".into(),
            reason: format!("Installment never amortizes the loan within {MAX_MONTHS} months"),
        });
    }

    let metrics =
        metrics_against_baseline(&input.loan, total_interest, Decimal::from(months));

    let output = StepUpOutput {
        initial_installment: round_rupee(first_installment),
        final_installment: round_rupee(installment),
        metrics,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Step-Up EMI Simulation",
        input,
        warnings,
        elapsed,
        output,
    ))
}
