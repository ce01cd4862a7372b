//! Home-loan tax deductions under the Indian Income Tax Act.
//!
//! Maps one year's principal and interest repayment to deduction amounts
//! under sections 80C, 24(b) and 80EEA. These are deduction amounts, not
//! cash tax saved; applying a marginal rate is a presentation concern.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HomeLoanError;
use crate::types::Money;
use crate::HomeLoanResult;

/// Section 80C ceiling on principal repayment.
const SECTION_80C_CAP: Decimal = dec!(150_000);

/// Section 24(b) ceiling on interest for self-occupied property. Let-out
/// property has no ceiling.
const SECTION_24B_SELF_OCCUPIED_CAP: Decimal = dec!(200_000);

/// Section 80EEA ceiling on additional first-time-buyer interest relief.
const SECTION_80EEA_CAP: Decimal = dec!(150_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OccupancyType {
    SelfOccupied,
    LetOut,
}

/// The two mutually exclusive filing schemes. The new regime trades away
/// home-loan deductions for lower slab rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxRegime {
    Old,
    New,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBenefitInput {
    pub principal_paid: Money,
    pub interest_paid: Money,
    /// Echoed into the result for presentation; deductions do not depend on it.
    pub taxable_income: Money,
    pub occupancy: OccupancyType,
    pub regime: TaxRegime,
    /// Section 80EEA eligibility is declared by the caller (sanction-date and
    /// stamp-value conditions are not modelled here).
    pub first_time_buyer: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBenefitResult {
    pub section_80c: Money,
    pub section_24b: Money,
    pub section_80eea: Money,
    pub total_benefit: Money,
}

/// Compute deduction amounts for one financial year of repayment.
pub fn calculate_home_loan_tax_benefits(
    input: &TaxBenefitInput,
) -> HomeLoanResult<TaxBenefitResult> {
    validate(input)?;

    if input.regime == TaxRegime::New {
        return Ok(TaxBenefitResult {
            section_80c: Decimal::ZERO,
            section_24b: Decimal::ZERO,
            section_80eea: Decimal::ZERO,
            total_benefit: Decimal::ZERO,
        });
    }

    let section_80c = input.principal_paid.min(SECTION_80C_CAP);

    let section_24b = match input.occupancy {
        OccupancyType::SelfOccupied => input.interest_paid.min(SECTION_24B_SELF_OCCUPIED_CAP),
        OccupancyType::LetOut => input.interest_paid,
    };

    // 80EEA relieves interest left over once the 24(b) ceiling is exhausted;
    // for let-out property 24(b) absorbs everything.
    let section_80eea = if input.first_time_buyer {
        (input.interest_paid - section_24b).min(SECTION_80EEA_CAP)
    } else {
        Decimal::ZERO
    };

    let total_benefit = section_80c + section_24b + section_80eea;

    Ok(TaxBenefitResult {
        section_80c,
        section_24b,
        section_80eea,
        total_benefit,
    })
}

fn validate(input: &TaxBenefitInput) -> HomeLoanResult<()> {
    if input.principal_paid < Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "principal_paid".into(),
            reason: "Principal paid cannot be negative".into(),
        });
    }
    if input.interest_paid < Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "interest_paid".into(),
            reason: "Interest paid cannot be negative".into(),
        });
    }
    if input.taxable_income < Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "taxable_income".into(),
            reason: "Taxable income cannot be negative".into(),
        });
    }
    Ok(())
}
