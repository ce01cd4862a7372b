pub mod emi;
pub mod error;
pub mod format;
pub mod schedule;
pub mod types;

#[cfg(feature = "strategies")]
pub mod strategies;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "personalization")]
pub mod rate_quote;

pub use error::HomeLoanError;
pub use types::*;

/// Standard result type for all home-loan operations
pub type HomeLoanResult<T> = Result<T, HomeLoanError>;
