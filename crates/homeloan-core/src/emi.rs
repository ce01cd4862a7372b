//! Equated Monthly Installment math.
//!
//! Closed-form annuity formula with monthly rate = annual% / 1200. The public
//! EMI is rounded to the whole rupee, matching the whole-rupee convention of
//! the rest of the library; the scheduler uses the unrounded value internally
//! so that a clean schedule lands on exactly zero at the nominal tenure.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{LoanParameters, Money, Rate};
use crate::HomeLoanResult;

/// Equated monthly installment, rounded to the whole rupee.
pub fn emi(params: &LoanParameters) -> HomeLoanResult<Money> {
    params.validate()?;
    Ok(round_rupee(emi_exact(params)))
}

/// Total interest over the full tenure, derived from the same rounded EMI.
pub fn total_interest(params: &LoanParameters) -> HomeLoanResult<Money> {
    let installment = emi(params)?;
    Ok(installment * Decimal::from(params.months()) - params.principal)
}

/// Full-precision EMI for internal schedule arithmetic.
pub(crate) fn emi_exact(params: &LoanParameters) -> Decimal {
    emi_exact_for_months(params.principal, params.annual_rate, params.months())
}

/// Full-precision EMI over an arbitrary number of months. Used by the
/// reduce-EMI recast and the balance-transfer comparison, where remaining
/// tenures are rarely whole years.
pub(crate) fn emi_exact_for_months(principal: Money, annual_rate: Rate, months: u32) -> Decimal {
    let n = Decimal::from(months);
    if annual_rate.is_zero() {
        // The annuity formula divides by zero at 0%; interest-free loans
        // amortize in equal principal slices.
        return principal / n;
    }
    let r = annual_rate / Decimal::from(1200);
    let factor = pow_one_plus(r, months);
    principal * r * factor / (factor - Decimal::ONE)
}

/// (1 + r)^n by iterative multiplication; n is bounded by the tenure.
pub(crate) fn pow_one_plus(r: Decimal, n: u32) -> Decimal {
    let base = Decimal::ONE + r;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result *= base;
    }
    result
}

pub(crate) fn round_rupee(value: Decimal) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn standard_twenty_year_loan() {
        let params = LoanParameters::new(dec!(5_000_000), dec!(8.5), 20);
        assert_eq!(emi(&params).unwrap(), dec!(43391));
        assert_eq!(total_interest(&params).unwrap(), dec!(5_413_840));
    }

    #[test]
    fn total_interest_consistent_with_emi() {
        let params = LoanParameters::new(dec!(3_200_000), dec!(9.15), 17);
        let installment = emi(&params).unwrap();
        let expected = installment * Decimal::from(params.months()) - params.principal;
        assert_eq!(total_interest(&params).unwrap(), expected);
    }

    #[test]
    fn zero_rate_divides_principal_evenly() {
        let params = LoanParameters::new(dec!(1_200_000), dec!(0), 10);
        assert_eq!(emi(&params).unwrap(), dec!(10_000));
        assert_eq!(total_interest(&params).unwrap(), dec!(0));
    }

    #[test]
    fn rejects_non_positive_principal() {
        let params = LoanParameters::new(dec!(0), dec!(8.5), 20);
        assert!(emi(&params).is_err());
    }

    #[test]
    fn rejects_zero_tenure() {
        let params = LoanParameters::new(dec!(1_000_000), dec!(8.5), 0);
        assert!(emi(&params).is_err());
    }

    #[test]
    fn rejects_negative_rate() {
        let params = LoanParameters::new(dec!(1_000_000), dec!(-1), 20);
        assert!(emi(&params).is_err());
    }
}
