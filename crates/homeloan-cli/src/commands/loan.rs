use clap::Args;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use homeloan_core::emi::{emi, total_interest};
use homeloan_core::format::{format_indian_compact_currency, format_indian_currency};
use homeloan_core::schedule::generate_amortization_schedule;
use homeloan_core::{LoanParameters, PrepaymentEvent, PrepaymentMode};

use crate::commands::parse_enum;
use crate::input;

/// Arguments for the EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file with loan parameters (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in rupees
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage (8.5 = 8.5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub tenure: Option<u32>,
}

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON input file with {loan, events, mode}
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal in rupees
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate as a percentage
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub tenure: Option<u32>,

    /// Post-prepayment branch: reduce-tenure or reduce-emi
    #[arg(long, default_value = "reduce-tenure")]
    pub mode: String,
}

/// Full schedule request, for `--input` files and piped stdin.
#[derive(Deserialize)]
struct ScheduleRequest {
    loan: LoanParameters,
    #[serde(default)]
    events: Vec<PrepaymentEvent>,
    #[serde(default = "default_mode")]
    mode: PrepaymentMode,
}

fn default_mode() -> PrepaymentMode {
    PrepaymentMode::ReduceTenure
}

fn loan_from_flags(
    principal: Option<Decimal>,
    rate: Option<Decimal>,
    tenure: Option<u32>,
) -> Result<LoanParameters, Box<dyn std::error::Error>> {
    Ok(LoanParameters::new(
        principal.ok_or("--principal is required (or provide --input)")?,
        rate.ok_or("--rate is required (or provide --input)")?,
        tenure.ok_or("--tenure is required (or provide --input)")?,
    ))
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan: LoanParameters = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        loan_from_flags(args.principal, args.rate, args.tenure)?
    };

    let installment = emi(&loan)?;
    let interest = total_interest(&loan)?;

    Ok(json!({
        "emi": installment,
        "total_interest": interest,
        "emi_formatted": format_indian_currency(installment),
        "total_interest_formatted": format_indian_currency(interest),
        "total_interest_compact": format_indian_compact_currency(interest),
    }))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request: ScheduleRequest = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ScheduleRequest {
            loan: loan_from_flags(args.principal, args.rate, args.tenure)?,
            events: Vec::new(),
            mode: parse_enum("mode", &args.mode)?,
        }
    };

    let schedule =
        generate_amortization_schedule(&request.loan, &request.events, request.mode)?;
    Ok(serde_json::to_value(schedule)?)
}
