use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use homeloan_core::rate_quote::{
    calculate_personalized_rate, get_rate_improvement_tips, BorrowerProfile,
};

use crate::commands::parse_enum;
use crate::input;

/// Borrower-profile flags shared by `rate` and `tips`.
#[derive(Args)]
pub struct ProfileFlags {
    /// Credit score band: 750+, 700-749, 650-699 or <650
    #[arg(long)]
    pub credit_score: Option<String>,

    /// Borrower age (23-62)
    #[arg(long)]
    pub age: Option<u32>,

    /// Gender: male, female or other
    #[arg(long)]
    pub gender: Option<String>,

    /// Employment: govt, mnc, other-salaried or self-employed
    #[arg(long)]
    pub employment: Option<String>,

    /// Requested loan amount in rupees
    #[arg(long)]
    pub loan_amount: Option<Decimal>,

    /// Property location: metro, tier2 or tier3
    #[arg(long)]
    pub location: Option<String>,
}

impl ProfileFlags {
    fn to_profile(&self) -> Result<BorrowerProfile, Box<dyn std::error::Error>> {
        Ok(BorrowerProfile {
            credit_score_band: parse_enum(
                "credit score band",
                self.credit_score
                    .as_deref()
                    .ok_or("--credit-score is required (or provide --input)")?,
            )?,
            age: self.age.ok_or("--age is required (or provide --input)")?,
            gender: parse_enum(
                "gender",
                self.gender
                    .as_deref()
                    .ok_or("--gender is required (or provide --input)")?,
            )?,
            employment_type: parse_enum(
                "employment type",
                self.employment
                    .as_deref()
                    .ok_or("--employment is required (or provide --input)")?,
            )?,
            loan_amount: self
                .loan_amount
                .ok_or("--loan-amount is required (or provide --input)")?,
            property_location: parse_enum(
                "property location",
                self.location
                    .as_deref()
                    .ok_or("--location is required (or provide --input)")?,
            )?,
        })
    }
}

#[derive(Args)]
pub struct RateArgs {
    /// Path to JSON input file with {base_rate, profile}
    #[arg(long)]
    pub input: Option<String>,

    /// Bank's base rate as a percentage
    #[arg(long)]
    pub base_rate: Option<Decimal>,

    #[command(flatten)]
    pub profile: ProfileFlags,
}

#[derive(Args)]
pub struct TipsArgs {
    /// Path to JSON input file with a borrower profile
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub profile: ProfileFlags,
}

/// Full rate request, for `--input` files and piped stdin.
#[derive(Deserialize)]
struct RateRequest {
    base_rate: Decimal,
    profile: BorrowerProfile,
}

pub fn run_rate(args: RateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: RateRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RateRequest {
            base_rate: args
                .base_rate
                .ok_or("--base-rate is required (or provide --input)")?,
            profile: args.profile.to_profile()?,
        }
    };

    let result = calculate_personalized_rate(request.base_rate, &request.profile)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_tips(args: TipsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let profile: BorrowerProfile = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        args.profile.to_profile()?
    };

    let tips = get_rate_improvement_tips(&profile)?;
    Ok(json!({ "tips": tips }))
}
