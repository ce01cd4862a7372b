//! Balance transfer ("refinancing") comparison.
//!
//! Two independent schedules: the remaining loan at the current rate versus
//! the transferred loan at the new rate, with the transferred principal
//! inflated by the transfer costs. Breakeven is the month at which the EMI
//! saving has recovered those costs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::emi::{emi_exact_for_months, round_rupee};
use crate::error::HomeLoanError;
use crate::schedule::run_schedule;
use crate::types::{with_metadata, ComputationOutput, Money, PrepaymentMode, Rate};
use crate::HomeLoanResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceTransferInput {
    pub outstanding_balance: Money,
    pub remaining_months: u32,
    /// Current annual rate, percentage.
    pub current_rate: Rate,
    /// Offered annual rate, percentage.
    pub new_rate: Rate,
    /// Processing fee as a percentage of the outstanding balance.
    pub processing_fee_percent: Decimal,
    /// Fixed charges (legal, valuation, stamping).
    pub flat_fee: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceTransferOutput {
    pub old_emi: Money,
    pub new_emi: Money,
    /// Negative when the offered rate is worse.
    pub monthly_saving: Money,
    pub transfer_cost: Money,
    /// Outstanding balance plus transfer costs, financed at the new rate.
    pub transferred_principal: Money,
    pub old_total_interest: Money,
    pub new_total_interest: Money,
    /// Interest saved less transfer cost.
    pub net_savings: Money,
    /// Months for the EMI saving to recover the cost; absent when the new
    /// EMI is not lower.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakeven_months: Option<Decimal>,
}

pub fn calculate_balance_transfer(
    input: &BalanceTransferInput,
) -> HomeLoanResult<ComputationOutput<BalanceTransferOutput>> {
    let start = Instant::now();
    validate(input)?;

    let mut warnings = Vec::new();
    if input.new_rate >= input.current_rate {
        warnings.push(format!(
            "Offered rate {}% is not below the current rate {}%",
            input.new_rate, input.current_rate
        ));
    }

    let transfer_cost = input.outstanding_balance * input.processing_fee_percent / dec!(100)
        + input.flat_fee;
    let transferred_principal = input.outstanding_balance + transfer_cost;

    let old = run_schedule(
        input.outstanding_balance,
        input.current_rate,
        input.remaining_months,
        &[],
        PrepaymentMode::ReduceTenure,
    );
    let new = run_schedule(
        transferred_principal,
        input.new_rate,
        input.remaining_months,
        &[],
        PrepaymentMode::ReduceTenure,
    );

    let old_emi_exact = emi_exact_for_months(
        input.outstanding_balance,
        input.current_rate,
        input.remaining_months,
    );
    let new_emi_exact =
        emi_exact_for_months(transferred_principal, input.new_rate, input.remaining_months);
    let saving = old_emi_exact - new_emi_exact;

    let breakeven_months = if saving > Decimal::ZERO {
        Some((transfer_cost / saving).round_dp(1))
    } else {
        None
    };

    let output = BalanceTransferOutput {
        old_emi: round_rupee(old_emi_exact),
        new_emi: round_rupee(new_emi_exact),
        monthly_saving: round_rupee(saving),
        transfer_cost,
        transferred_principal,
        old_total_interest: old.total_interest,
        new_total_interest: new.total_interest,
        net_savings: old.total_interest - new.total_interest - transfer_cost,
        breakeven_months,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Balance Transfer Comparison",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn validate(input: &BalanceTransferInput) -> HomeLoanResult<()> {
    if input.outstanding_balance <= Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "outstanding_balance".into(),
            reason: "Outstanding balance must be positive".into(),
        });
    }
    if input.remaining_months == 0 {
        return Err(HomeLoanError::InvalidInput {
            field: "remaining_months".into(),
            reason: "Remaining months must be greater than zero".into(),
        });
    }
    if input.current_rate < Decimal::ZERO || input.new_rate < Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "rate".into(),
            reason: "Rates cannot be negative".into(),
        });
    }
    if input.processing_fee_percent < Decimal::ZERO || input.flat_fee < Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "fees".into(),
            reason: "Fees cannot be negative".into(),
        });
    }
    Ok(())
}
