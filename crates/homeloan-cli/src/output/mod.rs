pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Monetary fields across every command's output. Decimals travel as JSON
/// strings; renderers that want rupee grouping match on these names.
pub(crate) fn is_money_field(key: &str) -> bool {
    matches!(
        key,
        "emi" | "standard_emi"
            | "revised_emi"
            | "old_emi"
            | "new_emi"
            | "biweekly_payment"
            | "initial_installment"
            | "final_installment"
            | "total_interest"
            | "interest_saved"
            | "baseline_interest"
            | "old_total_interest"
            | "new_total_interest"
            | "net_savings"
            | "monthly_saving"
            | "transfer_cost"
            | "transferred_principal"
            | "offset_balance"
            | "opening_balance"
            | "closing_balance"
            | "principal"
            | "interest"
            | "prepayment"
            | "amount"
            | "section_80c"
            | "section_24b"
            | "section_80eea"
            | "total_benefit"
    )
}
