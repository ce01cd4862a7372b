//! Repayment-strategy simulators.
//!
//! Each simulator is a pure function that configures the shared amortization
//! loop (or its own period-accrual loop where the cadence differs) and
//! reports savings against the zero-prepayment baseline.

pub mod balance_transfer;
pub mod biweekly;
pub mod flexi;
pub mod prepayment;
pub mod step_up;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schedule::run_schedule;
use crate::types::{AmortizationSchedule, LoanParameters, Money, PrepaymentMode};

/// The comparison metrics every strategy reports.
///
/// Months are Decimal because the biweekly cadence lands between month
/// boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyMetrics {
    pub total_interest: Money,
    pub months_used: Decimal,
    pub interest_saved: Money,
    pub months_saved: Decimal,
}

/// Zero-prepayment schedule the strategies compare against.
pub(crate) fn baseline_schedule(params: &LoanParameters) -> AmortizationSchedule {
    run_schedule(
        params.principal,
        params.annual_rate,
        params.months(),
        &[],
        PrepaymentMode::ReduceTenure,
    )
}

pub(crate) fn metrics_against_baseline(
    params: &LoanParameters,
    total_interest: Decimal,
    months_used: Decimal,
) -> StrategyMetrics {
    let baseline = baseline_schedule(params);
    StrategyMetrics {
        total_interest,
        months_used,
        interest_saved: baseline.total_interest - total_interest,
        months_saved: Decimal::from(baseline.total_months) - months_used,
    }
}
