use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use homeloan_core::tax::{calculate_home_loan_tax_benefits, TaxBenefitInput};

use crate::commands::parse_enum;
use crate::input;

/// Arguments for the tax-benefit calculation
#[derive(Args)]
pub struct TaxArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Principal repaid in the financial year
    #[arg(long)]
    pub principal_paid: Option<Decimal>,

    /// Interest paid in the financial year
    #[arg(long)]
    pub interest_paid: Option<Decimal>,

    /// Taxable income for the year
    #[arg(long)]
    pub taxable_income: Option<Decimal>,

    /// Occupancy: self-occupied or let-out
    #[arg(long, default_value = "self-occupied")]
    pub occupancy: String,

    /// Filing regime: old or new
    #[arg(long, default_value = "old")]
    pub regime: String,

    /// Claim section 80EEA first-time-buyer relief
    #[arg(long)]
    pub first_time_buyer: bool,
}

pub fn run_tax(args: TaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax_input: TaxBenefitInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        TaxBenefitInput {
            principal_paid: args
                .principal_paid
                .ok_or("--principal-paid is required (or provide --input)")?,
            interest_paid: args
                .interest_paid
                .ok_or("--interest-paid is required (or provide --input)")?,
            taxable_income: args
                .taxable_income
                .ok_or("--taxable-income is required (or provide --input)")?,
            occupancy: parse_enum("occupancy", &args.occupancy)?,
            regime: parse_enum("regime", &args.regime)?,
            first_time_buyer: args.first_time_buyer,
        }
    };

    let result = calculate_home_loan_tax_benefits(&tax_input)?;
    Ok(serde_json::to_value(result)?)
}
