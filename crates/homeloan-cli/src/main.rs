mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::{EmiArgs, ScheduleArgs};
use commands::rate::{RateArgs, TipsArgs};
use commands::strategy::{
    BiweeklyArgs, FlexiArgs, LumpSumArgs, PrepayArgs, StepUpArgs, TransferArgs,
};
use commands::tax::TaxArgs;

/// Home-loan decision support with decimal precision
#[derive(Parser)]
#[command(
    name = "hlc",
    version,
    about = "Home-loan decision support with decimal precision",
    long_about = "A CLI for home-loan calculations with decimal precision: EMI and \
                  amortization schedules under arbitrary prepayments, repayment-strategy \
                  comparisons (biweekly, step-up, lump-sum, balance transfer, flexi), \
                  Indian income-tax deductions, and personalized rate quotes."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the equated monthly installment and total interest
    Emi(EmiArgs),
    /// Generate the full amortization schedule, with optional prepayments
    Schedule(ScheduleArgs),
    /// Simulate biweekly half-payments
    Biweekly(BiweeklyArgs),
    /// Simulate an annually-stepped EMI
    StepUp(StepUpArgs),
    /// Simulate a single part-prepayment (reduce-EMI or reduce-tenure)
    Prepay(PrepayArgs),
    /// Compare one lump sum posted at reference years 1, 3, 5 and 10
    LumpSum(LumpSumArgs),
    /// Compare a balance transfer to a new lender
    Transfer(TransferArgs),
    /// Simulate a flexi/overdraft offset loan
    Flexi(FlexiArgs),
    /// Calculate home-loan tax deductions (80C, 24(b), 80EEA)
    Tax(TaxArgs),
    /// Quote a personalized rate for a borrower profile
    Rate(RateArgs),
    /// List rate-improvement tips for a borrower profile
    Tips(TipsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Emi(args) => commands::loan::run_emi(args),
        Commands::Schedule(args) => commands::loan::run_schedule(args),
        Commands::Biweekly(args) => commands::strategy::run_biweekly(args),
        Commands::StepUp(args) => commands::strategy::run_step_up(args),
        Commands::Prepay(args) => commands::strategy::run_prepay(args),
        Commands::LumpSum(args) => commands::strategy::run_lump_sum(args),
        Commands::Transfer(args) => commands::strategy::run_transfer(args),
        Commands::Flexi(args) => commands::strategy::run_flexi(args),
        Commands::Tax(args) => commands::tax::run_tax(args),
        Commands::Rate(args) => commands::rate::run_rate(args),
        Commands::Tips(args) => commands::rate::run_tips(args),
        Commands::Version => {
            println!("hlc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
