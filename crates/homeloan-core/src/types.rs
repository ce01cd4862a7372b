use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HomeLoanError;
use crate::HomeLoanResult;

/// All monetary values, in whole rupees. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as plain percentages (8.5 = 8.5% p.a.). Never as decimals.
pub type Rate = Decimal;

/// The fixed inputs of one loan simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    /// Annual interest rate as a percentage (8.5 = 8.5%).
    pub annual_rate: Rate,
    pub tenure_years: u32,
}

impl LoanParameters {
    pub fn new(principal: Money, annual_rate: Rate, tenure_years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            tenure_years,
        }
    }

    /// Nominal tenure in months.
    pub fn months(&self) -> u32 {
        self.tenure_years * 12
    }

    /// Periodic rate for monthly accrual: annual% / 1200.
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate / dec!(1200)
    }

    pub fn validate(&self) -> HomeLoanResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(HomeLoanError::InvalidInput {
                field: "principal".into(),
                reason: "Principal must be positive".into(),
            });
        }
        if self.annual_rate < Decimal::ZERO {
            return Err(HomeLoanError::InvalidInput {
                field: "annual_rate".into(),
                reason: "Annual rate cannot be negative".into(),
            });
        }
        if self.tenure_years == 0 {
            return Err(HomeLoanError::InvalidInput {
                field: "tenure_years".into(),
                reason: "Tenure must be at least one year".into(),
            });
        }
        Ok(())
    }
}

/// An extra principal payment posted after a given month's regular installment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepaymentEvent {
    /// 1-based month index within the loan tenure.
    pub month: u32,
    pub amount: Money,
}

/// What happens to the installment after a prepayment posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrepaymentMode {
    /// Keep the original installment; the loan pays off early.
    ReduceTenure,
    /// Recompute the installment over the remaining original tenure on the
    /// reduced balance; the month count stays put.
    ReduceEmi,
}

/// One month of the amortization breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationEntry {
    pub month: u32,
    pub opening_balance: Money,
    pub interest: Money,
    pub principal: Money,
    /// Extra principal posted this month, zero for most months.
    pub prepayment: Money,
    pub closing_balance: Money,
}

/// Full month-by-month breakdown plus totals. Generated fresh per simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub entries: Vec<AmortizationEntry>,
    /// Interest actually accrued across recorded months.
    pub total_interest: Money,
    /// True month count, possibly shorter than the nominal tenure.
    pub total_months: u32,
}

/// Standard computation output envelope for analysis-level results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
