//! Flexi / overdraft-offset loan simulation.
//!
//! A configurable fraction of the principal sits in a linked account as an
//! offset balance. The full standard EMI posts every month, but interest
//! accrues only on the part of the balance the offset does not cover, so
//! principal retires faster.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::{emi_exact, round_rupee};
use crate::error::HomeLoanError;
use crate::strategies::{metrics_against_baseline, StrategyMetrics};
use crate::types::{with_metadata, ComputationOutput, LoanParameters, Money};
use crate::HomeLoanResult;

const BALANCE_EPSILON: Decimal = dec!(0.01);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexiInput {
    pub loan: LoanParameters,
    /// Fraction of the principal parked as the offset balance, in [0, 1).
    pub offset_fraction: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexiOutput {
    pub standard_emi: Money,
    pub offset_balance: Money,
    pub metrics: StrategyMetrics,
}

pub fn calculate_flexi_impact(
    input: &FlexiInput,
) -> HomeLoanResult<ComputationOutput<FlexiOutput>> {
    let start = Instant::now();
    input.loan.validate()?;

    if input.offset_fraction < Decimal::ZERO || input.offset_fraction >= Decimal::ONE {
        return Err(HomeLoanError::InvalidInput {
            field: "offset_fraction".into(),
            reason: "Offset fraction must be within [0, 1)".into(),
        });
    }

    let mut warnings = Vec::new();
    if input.offset_fraction > dec!(0.5) {
        warnings.push(format!(
            "Offset fraction {} covers more than half the principal",
            input.offset_fraction
        ));
    }

    let monthly_rate = input.loan.monthly_rate();
    let installment = emi_exact(&input.loan);
    let offset_balance = input.loan.principal * input.offset_fraction;

    let mut balance = input.loan.principal;
    let mut total_interest = Decimal::ZERO;
    let mut months = 0u32;
    // Interest never exceeds the plain schedule's, so the nominal tenure
    // bounds the loop.
    let total_months = input.loan.months();

    while balance >= BALANCE_EPSILON && months < total_months {
        months += 1;
        let accruing = (balance - offset_balance).max(Decimal::ZERO);
        let interest = accruing * monthly_rate;
        total_interest += interest;
        let mut principal_portion = installment - interest;
        if principal_portion > balance {
            principal_portion = balance;
        }
        balance -= principal_portion;
    }

    let metrics =
        metrics_against_baseline(&input.loan, total_interest, Decimal::from(months));

    let output = FlexiOutput {
        standard_emi: round_rupee(installment),
        offset_balance,
        metrics,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Flexi Offset Simulation",
        input,
        warnings,
        elapsed,
        output,
    ))
}
