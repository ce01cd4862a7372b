use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use homeloan_core::strategies::balance_transfer::{
    calculate_balance_transfer, BalanceTransferInput,
};
use homeloan_core::strategies::biweekly::{calculate_biweekly_impact, BiweeklyInput};
use homeloan_core::strategies::flexi::{calculate_flexi_impact, FlexiInput};
use homeloan_core::strategies::prepayment::{
    calculate_lump_sum_timing, calculate_prepayment_impact, LumpSumInput, PartPrepaymentInput,
};
use homeloan_core::strategies::step_up::{calculate_step_up_emi, StepUpInput};
use homeloan_core::LoanParameters;

use crate::commands::parse_enum;
use crate::input;

/// Loan flags shared by every strategy subcommand.
#[derive(Args)]
pub struct LoanFlags {
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

impl LoanFlags {
    fn to_loan(&self) -> Result<LoanParameters, Box<dyn std::error::Error>> {
        Ok(LoanParameters::new(
            self.principal
                .ok_or("--principal is required (or provide --input)")?,
            self.rate.ok_or("--rate is required (or provide --input)")?,
            self.tenure
                .ok_or("--tenure is required (or provide --input)")?,
        ))
    }
}

#[derive(Args)]
pub struct BiweeklyArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanFlags,
}

#[derive(Args)]
pub struct StepUpArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanFlags,

    /// Annual installment growth as a percentage (5 = 5% per year)
    #[arg(long)]
    pub annual_increase: Option<Decimal>,

    /// Starting installment as a fraction of the standard EMI
    #[arg(long, default_value = "1")]
    pub initial_fraction: Decimal,
}

#[derive(Args)]
pub struct PrepayArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanFlags,

    /// Prepayment amount in rupees
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Year after which the prepayment posts
    #[arg(long)]
    pub year: Option<u32>,

    /// Post-prepayment branch: reduce-tenure or reduce-emi
    #[arg(long, default_value = "reduce-tenure")]
    pub mode: String,
}

#[derive(Args)]
pub struct LumpSumArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanFlags,

    /// Lump-sum amount in rupees
    #[arg(long)]
    pub amount: Option<Decimal>,
}

#[derive(Args)]
pub struct TransferArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Outstanding balance in rupees
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Remaining tenure in months
    #[arg(long)]
    pub remaining_months: Option<u32>,

    /// Current annual rate as a percentage
    #[arg(long)]
    pub current_rate: Option<Decimal>,

    /// Offered annual rate as a percentage
    #[arg(long)]
    pub new_rate: Option<Decimal>,

    /// Processing fee as a percentage of the balance
    #[arg(long, default_value = "0.5")]
    pub fee_percent: Decimal,

    /// Fixed charges in rupees
    #[arg(long, default_value = "0")]
    pub flat_fee: Decimal,
}

#[derive(Args)]
pub struct FlexiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub loan: LoanFlags,

    /// Fraction of the principal parked as the offset balance
    #[arg(long)]
    pub offset_fraction: Option<Decimal>,
}

pub fn run_biweekly(args: BiweeklyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let strategy_input: BiweeklyInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        BiweeklyInput {
            loan: args.loan.to_loan()?,
        }
    };

    let result = calculate_biweekly_impact(&strategy_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_step_up(args: StepUpArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let strategy_input: StepUpInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        StepUpInput {
            loan: args.loan.to_loan()?,
            annual_increase: args
                .annual_increase
                .ok_or("--annual-increase is required (or provide --input)")?,
            initial_fraction: args.initial_fraction,
        }
    };

    let result = calculate_step_up_emi(&strategy_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_prepay(args: PrepayArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let strategy_input: PartPrepaymentInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PartPrepaymentInput {
            loan: args.loan.to_loan()?,
            amount: args
                .amount
                .ok_or("--amount is required (or provide --input)")?,
            prepayment_year: args.year.ok_or("--year is required (or provide --input)")?,
            mode: parse_enum("mode", &args.mode)?,
        }
    };

    let result = calculate_prepayment_impact(&strategy_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_lump_sum(args: LumpSumArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let strategy_input: LumpSumInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LumpSumInput {
            loan: args.loan.to_loan()?,
            amount: args
                .amount
                .ok_or("--amount is required (or provide --input)")?,
        }
    };

    let result = calculate_lump_sum_timing(&strategy_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_transfer(args: TransferArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let strategy_input: BalanceTransferInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        BalanceTransferInput {
            outstanding_balance: args
                .balance
                .ok_or("--balance is required (or provide --input)")?,
            remaining_months: args
                .remaining_months
                .ok_or("--remaining-months is required (or provide --input)")?,
            current_rate: args
                .current_rate
                .ok_or("--current-rate is required (or provide --input)")?,
            new_rate: args
                .new_rate
                .ok_or("--new-rate is required (or provide --input)")?,
            processing_fee_percent: args.fee_percent,
            flat_fee: args.flat_fee,
        }
    };

    let result = calculate_balance_transfer(&strategy_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_flexi(args: FlexiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let strategy_input: FlexiInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        FlexiInput {
            loan: args.loan.to_loan()?,
            offset_fraction: args
                .offset_fraction
                .ok_or("--offset-fraction is required (or provide --input)")?,
        }
    };

    let result = calculate_flexi_impact(&strategy_input)?;
    Ok(serde_json::to_value(result)?)
}
