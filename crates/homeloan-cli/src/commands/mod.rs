pub mod loan;
pub mod rate;
pub mod strategy;
pub mod tax;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a kebab-case CLI string through the same serde names the core types
/// use, so the flag vocabulary and the JSON vocabulary never drift.
pub(crate) fn parse_enum<T: DeserializeOwned>(
    label: &str,
    raw: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    serde_json::from_value(Value::String(raw.to_string()))
        .map_err(|_| format!("Invalid {label}: '{raw}'").into())
}
