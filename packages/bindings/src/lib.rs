use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use homeloan_core::{LoanParameters, PrepaymentEvent, PrepaymentMode};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// EMI and amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let loan: LoanParameters = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let emi = homeloan_core::emi::emi(&loan).map_err(to_napi_error)?;
    let total_interest = homeloan_core::emi::total_interest(&loan).map_err(to_napi_error)?;
    serde_json::to_string(&serde_json::json!({
        "emi": emi,
        "total_interest": total_interest,
    }))
    .map_err(to_napi_error)
}

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

#[napi]
pub fn generate_amortization_schedule(input_json: String) -> NapiResult<String> {
    let request: ScheduleRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let schedule = homeloan_core::schedule::generate_amortization_schedule(
        &request.loan,
        &request.events,
        request.mode,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&schedule).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Strategy simulators
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_biweekly_impact(input_json: String) -> NapiResult<String> {
    let input: homeloan_core::strategies::biweekly::BiweeklyInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homeloan_core::strategies::biweekly::calculate_biweekly_impact(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_step_up_emi(input_json: String) -> NapiResult<String> {
    let input: homeloan_core::strategies::step_up::StepUpInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homeloan_core::strategies::step_up::calculate_step_up_emi(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_prepayment_impact(input_json: String) -> NapiResult<String> {
    let input: homeloan_core::strategies::prepayment::PartPrepaymentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homeloan_core::strategies::prepayment::calculate_prepayment_impact(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_lump_sum_timing(input_json: String) -> NapiResult<String> {
    let input: homeloan_core::strategies::prepayment::LumpSumInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homeloan_core::strategies::prepayment::calculate_lump_sum_timing(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_balance_transfer(input_json: String) -> NapiResult<String> {
    let input: homeloan_core::strategies::balance_transfer::BalanceTransferInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        homeloan_core::strategies::balance_transfer::calculate_balance_transfer(&input)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_flexi_impact(input_json: String) -> NapiResult<String> {
    let input: homeloan_core::strategies::flexi::FlexiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homeloan_core::strategies::flexi::calculate_flexi_impact(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Tax and rate personalization
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_home_loan_tax_benefits(input_json: String) -> NapiResult<String> {
    let input: homeloan_core::tax::TaxBenefitInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        homeloan_core::tax::calculate_home_loan_tax_benefits(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct RateRequest {
    base_rate: Decimal,
    profile: homeloan_core::rate_quote::BorrowerProfile,
}

#[napi]
pub fn calculate_personalized_rate(input_json: String) -> NapiResult<String> {
    let request: RateRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = homeloan_core::rate_quote::calculate_personalized_rate(
        request.base_rate,
        &request.profile,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn get_rate_improvement_tips(input_json: String) -> NapiResult<String> {
    let profile: homeloan_core::rate_quote::BorrowerProfile =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let tips =
        homeloan_core::rate_quote::get_rate_improvement_tips(&profile).map_err(to_napi_error)?;
    serde_json::to_string(&tips).map_err(to_napi_error)
}

#[napi]
pub fn format_indian_currency(value: String) -> NapiResult<String> {
    let amount: Decimal = value.parse().map_err(to_napi_error)?;
    Ok(homeloan_core::format::format_indian_currency(amount))
}

#[napi]
pub fn format_indian_compact_currency(value: String) -> NapiResult<String> {
    let amount: Decimal = value.parse().map_err(to_napi_error)?;
    Ok(homeloan_core::format::format_indian_compact_currency(
        amount,
    ))
}
