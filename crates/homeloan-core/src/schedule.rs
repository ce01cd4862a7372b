//! Month-by-month amortization under arbitrary prepayment events.
//!
//! One accrual loop serves both post-prepayment branches: reduce-tenure keeps
//! the original installment, reduce-EMI recasts it over the remaining nominal
//! tenure. The loop runs on the unrounded installment so a clean schedule
//! terminates at exactly the nominal tenure with a zero closing balance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::emi::emi_exact_for_months;
use crate::error::HomeLoanError;
use crate::types::{
    AmortizationEntry, AmortizationSchedule, LoanParameters, Money, PrepaymentEvent,
    PrepaymentMode, Rate,
};
use crate::HomeLoanResult;

/// Balance below this is treated as paid off.
const BALANCE_EPSILON: Decimal = dec!(0.01);

/// Generate the full amortization schedule for a loan.
///
/// `events` must be sorted ascending by month with no duplicates; each event
/// posts after that month's regular installment. An event at or past natural
/// payoff is a no-op; an event exceeding the remaining balance closes the
/// loan that month with no carry-forward.
pub fn generate_amortization_schedule(
    params: &LoanParameters,
    events: &[PrepaymentEvent],
    mode: PrepaymentMode,
) -> HomeLoanResult<AmortizationSchedule> {
    params.validate()?;
    validate_events(events, params.months())?;
    Ok(run_schedule(
        params.principal,
        params.annual_rate,
        params.months(),
        events,
        mode,
    ))
}

fn validate_events(events: &[PrepaymentEvent], total_months: u32) -> HomeLoanResult<()> {
    let mut previous = 0u32;
    for event in events {
        if event.month == 0 || event.month > total_months {
            return Err(HomeLoanError::InvalidPrepayment {
                month: event.month,
                reason: format!("Month must be within 1..={total_months}"),
            });
        }
        if event.amount <= Decimal::ZERO {
            return Err(HomeLoanError::InvalidPrepayment {
                month: event.month,
                reason: "Amount must be positive".into(),
            });
        }
        if event.month <= previous {
            return Err(HomeLoanError::InvalidPrepayment {
                month: event.month,
                reason: "Events must be sorted ascending by month without duplicates".into(),
            });
        }
        previous = event.month;
    }
    Ok(())
}

/// Shared accrual loop, month-granular so callers with non-whole-year
/// remaining tenures (balance transfer) can reuse it. Inputs are assumed
/// validated.
pub(crate) fn run_schedule(
    principal: Money,
    annual_rate: Rate,
    total_months: u32,
    events: &[PrepaymentEvent],
    mode: PrepaymentMode,
) -> AmortizationSchedule {
    let monthly_rate = annual_rate / dec!(1200);
    let mut installment = emi_exact_for_months(principal, annual_rate, total_months);
    let mut balance = principal;
    let mut total_interest = Decimal::ZERO;
    let mut entries = Vec::with_capacity(total_months as usize);
    let mut pending = events.iter().peekable();

    for month in 1..=total_months {
        if balance < BALANCE_EPSILON {
            break;
        }

        let opening_balance = balance;
        let interest = balance * monthly_rate;
        total_interest += interest;

        let mut principal_portion = installment - interest;
        if principal_portion > balance {
            // Final installment only needs to clear the remaining balance.
            principal_portion = balance;
        }
        balance -= principal_portion;

        let mut prepayment = Decimal::ZERO;
        if let Some(event) = pending.peek() {
            if event.month == month {
                if balance >= BALANCE_EPSILON {
                    prepayment = event.amount.min(balance);
                    balance -= prepayment;
                    if mode == PrepaymentMode::ReduceEmi
                        && balance >= BALANCE_EPSILON
                        && month < total_months
                    {
                        installment =
                            emi_exact_for_months(balance, annual_rate, total_months - month);
                    }
                }
                pending.next();
            }
        }

        if balance < BALANCE_EPSILON {
            balance = Decimal::ZERO;
        }

        entries.push(AmortizationEntry {
            month,
            opening_balance,
            interest,
            principal: principal_portion,
            prepayment,
            closing_balance: balance,
        });
    }

    let total_months = entries.len() as u32;
    AmortizationSchedule {
        entries,
        total_interest,
        total_months,
    }
}
