//! Rate personalization: a fixed, ordered stack of additive adjustment rules.
//!
//! Each rule inspects one borrower-profile factor and returns a signed
//! percentage-point delta with a description. Deltas never interact; the
//! quoted rate is the base rate plus their sum, floored at [`RATE_FLOOR`].
//! Improvement tips re-run the same stack and surface only the costly
//! (positive) factors, in the same order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HomeLoanError;
use crate::types::{Money, Rate};
use crate::HomeLoanResult;

/// No quote goes below this, whatever the profile.
pub const RATE_FLOOR: Decimal = dec!(6.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditScoreBand {
    #[serde(rename = "750+")]
    Excellent,
    #[serde(rename = "700-749")]
    Good,
    #[serde(rename = "650-699")]
    Fair,
    #[serde(rename = "<650")]
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    Govt,
    Mnc,
    OtherSalaried,
    SelfEmployed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyLocation {
    Metro,
    Tier2,
    Tier3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub credit_score_band: CreditScoreBand,
    pub age: u32,
    pub gender: Gender,
    pub employment_type: EmploymentType,
    pub loan_amount: Money,
    pub property_location: PropertyLocation,
}

impl BorrowerProfile {
    pub fn validate(&self) -> HomeLoanResult<()> {
        if self.age < 23 || self.age > 62 {
            return Err(HomeLoanError::InvalidProfile {
                field: "age".into(),
                reason: "Age must be within 23..=62".into(),
            });
        }
        if self.loan_amount <= Decimal::ZERO {
            return Err(HomeLoanError::InvalidProfile {
                field: "loan_amount".into(),
                reason: "Loan amount must be positive".into(),
            });
        }
        Ok(())
    }
}

/// One factor's contribution to the quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateAdjustment {
    pub factor: String,
    /// Signed percentage-point delta.
    pub delta: Rate,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateQuoteResult {
    pub base_rate: Rate,
    /// One entry per factor, in fixed evaluation order.
    pub adjustments: Vec<RateAdjustment>,
    pub total_adjustment: Rate,
    pub adjusted_rate: Rate,
}

type RateRule = fn(&BorrowerProfile) -> RateAdjustment;

/// The fixed evaluation order. New factors append here; existing entries
/// never move.
const RATE_RULES: [RateRule; 6] = [
    credit_score_rule,
    age_rule,
    gender_rule,
    employment_rule,
    loan_amount_rule,
    location_rule,
];

/// Quote a personalized rate for the profile on top of a bank's base rate.
pub fn calculate_personalized_rate(
    base_rate: Rate,
    profile: &BorrowerProfile,
) -> HomeLoanResult<RateQuoteResult> {
    if base_rate <= Decimal::ZERO {
        return Err(HomeLoanError::InvalidInput {
            field: "base_rate".into(),
            reason: "Base rate must be positive".into(),
        });
    }
    profile.validate()?;

    let adjustments: Vec<RateAdjustment> =
        RATE_RULES.iter().map(|rule| rule(profile)).collect();
    let total_adjustment: Decimal = adjustments.iter().map(|a| a.delta).sum();
    let adjusted_rate = (base_rate + total_adjustment).max(RATE_FLOOR);

    Ok(RateQuoteResult {
        base_rate,
        adjustments,
        total_adjustment,
        adjusted_rate,
    })
}

/// Descriptions of the strictly positive (costly) factors, in rule order.
/// Empty means the profile already prices at its best.
pub fn get_rate_improvement_tips(profile: &BorrowerProfile) -> HomeLoanResult<Vec<String>> {
    profile.validate()?;
    Ok(RATE_RULES
        .iter()
        .map(|rule| rule(profile))
        .filter(|adjustment| adjustment.delta > Decimal::ZERO)
        .map(|adjustment| adjustment.description)
        .collect())
}

fn credit_score_rule(profile: &BorrowerProfile) -> RateAdjustment {
    let (delta, description) = match profile.credit_score_band {
        CreditScoreBand::Excellent => (
            dec!(-0.10),
            "Score of 750+ earns the top-bracket concession".to_string(),
        ),
        CreditScoreBand::Good => (
            dec!(0.00),
            "Score in 700-749 prices at the card rate".to_string(),
        ),
        CreditScoreBand::Fair => (
            dec!(0.25),
            "Raise your score above 750 to remove the 650-699 premium".to_string(),
        ),
        CreditScoreBand::Poor => (
            dec!(0.75),
            "A score below 650 carries a steep premium; clear overdues and retry".to_string(),
        ),
    };
    RateAdjustment {
        factor: "credit_score".into(),
        delta,
        description,
    }
}

fn age_rule(profile: &BorrowerProfile) -> RateAdjustment {
    let (delta, description) = match profile.age {
        23..=30 => (
            dec!(0.05),
            "Short credit history under 30 adds a small premium".to_string(),
        ),
        31..=45 => (
            dec!(-0.05),
            "Prime earning years earn a small concession".to_string(),
        ),
        46..=55 => (dec!(0.00), "Age prices at the card rate".to_string()),
        _ => (
            dec!(0.10),
            "A shorter runway to retirement adds a premium; consider a co-applicant".to_string(),
        ),
    };
    RateAdjustment {
        factor: "age".into(),
        delta,
        description,
    }
}

fn gender_rule(profile: &BorrowerProfile) -> RateAdjustment {
    let (delta, description) = match profile.gender {
        Gender::Female => (
            dec!(-0.05),
            "Women borrowers receive the standard concession".to_string(),
        ),
        _ => (dec!(0.00), "No gender-linked concession applies".to_string()),
    };
    RateAdjustment {
        factor: "gender".into(),
        delta,
        description,
    }
}

fn employment_rule(profile: &BorrowerProfile) -> RateAdjustment {
    let (delta, description) = match profile.employment_type {
        EmploymentType::Govt => (
            dec!(-0.10),
            "Government employment earns the stability concession".to_string(),
        ),
        EmploymentType::Mnc => (
            dec!(-0.05),
            "Salaried MNC employment earns a small concession".to_string(),
        ),
        EmploymentType::OtherSalaried => (
            dec!(0.00),
            "Salaried employment prices at the card rate".to_string(),
        ),
        EmploymentType::SelfEmployed => (
            dec!(0.25),
            "Self-employed income adds a premium; audited returns can offset it".to_string(),
        ),
    };
    RateAdjustment {
        factor: "employment".into(),
        delta,
        description,
    }
}

fn loan_amount_rule(profile: &BorrowerProfile) -> RateAdjustment {
    let (delta, description) = if profile.loan_amount < dec!(3_000_000) {
        (
            dec!(0.05),
            "Small-ticket loans below ₹30L carry a servicing premium".to_string(),
        )
    } else if profile.loan_amount <= dec!(7_500_000) {
        (
            dec!(0.00),
            "Loan amount prices at the card rate".to_string(),
        )
    } else {
        (
            dec!(-0.05),
            "Loans above ₹75L price into the priority segment".to_string(),
        )
    };
    RateAdjustment {
        factor: "loan_amount".into(),
        delta,
        description,
    }
}

fn location_rule(profile: &BorrowerProfile) -> RateAdjustment {
    let (delta, description) = match profile.property_location {
        PropertyLocation::Metro => (
            dec!(-0.05),
            "Metro property earns the liquidity concession".to_string(),
        ),
        PropertyLocation::Tier2 => (
            dec!(0.00),
            "Tier-2 property prices at the card rate".to_string(),
        ),
        PropertyLocation::Tier3 => (
            dec!(0.10),
            "Tier-3 property adds a resale-risk premium".to_string(),
        ),
    };
    RateAdjustment {
        factor: "location".into(),
        delta,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn best_profile() -> BorrowerProfile {
        BorrowerProfile {
            credit_score_band: CreditScoreBand::Excellent,
            age: 35,
            gender: Gender::Female,
            employment_type: EmploymentType::Govt,
            loan_amount: dec!(8_000_000),
            property_location: PropertyLocation::Metro,
        }
    }

    fn worst_profile() -> BorrowerProfile {
        BorrowerProfile {
            credit_score_band: CreditScoreBand::Poor,
            age: 60,
            gender: Gender::Male,
            employment_type: EmploymentType::SelfEmployed,
            loan_amount: dec!(2_000_000),
            property_location: PropertyLocation::Tier3,
        }
    }

    #[test]
    fn best_profile_collects_every_concession() {
        let quote = calculate_personalized_rate(dec!(8.5), &best_profile()).unwrap();
        assert_eq!(quote.total_adjustment, dec!(-0.40));
        assert_eq!(quote.adjusted_rate, dec!(8.10));
        assert_eq!(quote.adjustments.len(), 6);
    }

    #[test]
    fn worst_profile_pays_every_premium() {
        let quote = calculate_personalized_rate(dec!(8.5), &worst_profile()).unwrap();
        assert_eq!(quote.total_adjustment, dec!(1.25));
        assert_eq!(quote.adjusted_rate, dec!(9.75));
    }

    #[test]
    fn total_adjustment_is_the_sum_of_the_breakdown() {
        for profile in [best_profile(), worst_profile()] {
            let quote = calculate_personalized_rate(dec!(9.0), &profile).unwrap();
            let sum: Decimal = quote.adjustments.iter().map(|a| a.delta).sum();
            assert_eq!(quote.total_adjustment, sum);
        }
    }

    #[test]
    fn floor_holds_for_low_base_rates() {
        let quote = calculate_personalized_rate(dec!(6.6), &best_profile()).unwrap();
        assert_eq!(quote.adjusted_rate, RATE_FLOOR);
    }

    #[test]
    fn tips_empty_for_an_optimal_profile() {
        assert!(get_rate_improvement_tips(&best_profile()).unwrap().is_empty());
    }

    #[test]
    fn tips_cover_exactly_the_positive_deltas() {
        let profile = worst_profile();
        let quote = calculate_personalized_rate(dec!(8.5), &profile).unwrap();
        let positive = quote
            .adjustments
            .iter()
            .filter(|a| a.delta > Decimal::ZERO)
            .count();
        let tips = get_rate_improvement_tips(&profile).unwrap();
        assert_eq!(tips.len(), positive);
        assert!(tips[0].contains("below 650"));
    }

    #[test]
    fn rejects_out_of_range_age() {
        let profile = BorrowerProfile {
            age: 22,
            ..best_profile()
        };
        assert!(calculate_personalized_rate(dec!(8.5), &profile).is_err());
    }

    #[test]
    fn rejects_non_positive_base_rate() {
        assert!(calculate_personalized_rate(dec!(0), &best_profile()).is_err());
    }
}
