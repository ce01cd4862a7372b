//! Indian-convention rupee formatting.
//!
//! One stateless module reused by every renderer: full digit grouping
//! (last three digits, then groups of two) and compact K/L/Cr text.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::Money;

const THOUSAND: Decimal = dec!(1_000);
const LAKH: Decimal = dec!(100_000);
const CRORE: Decimal = dec!(10_000_000);

/// Format a rupee amount with Indian digit grouping, e.g. ₹54,13,840.
///
/// Rounds to the whole rupee; the sign is preserved.
pub fn format_indian_currency(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative();
    let digits = rounded.abs().to_string();
    let grouped = group_indian(&digits);
    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Compact rupee text: ₹1.5K, ₹4.3L, ₹1.2Cr at the 10^3 / 10^5 / 10^7
/// thresholds. Below a thousand this falls back to full grouping.
pub fn format_indian_compact_currency(value: Money) -> String {
    let abs = value.abs();
    if abs < THOUSAND {
        return format_indian_currency(value);
    }

    let (scaled, suffix) = if abs >= CRORE {
        (value / CRORE, "Cr")
    } else if abs >= LAKH {
        (value / LAKH, "L")
    } else {
        (value / THOUSAND, "K")
    };

    let rounded = scaled.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative();
    let text = trim_zeros(&rounded.abs().to_string());
    if negative {
        format!("-₹{text}{suffix}")
    } else {
        format!("₹{text}{suffix}")
    }
}

/// Indian grouping: rightmost three digits, then pairs. "5413840" → "54,13,840".
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(head[start..end].to_string());
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

fn trim_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_by_indian_convention() {
        assert_eq!(format_indian_currency(dec!(0)), "₹0");
        assert_eq!(format_indian_currency(dec!(999)), "₹999");
        assert_eq!(format_indian_currency(dec!(1000)), "₹1,000");
        assert_eq!(format_indian_currency(dec!(43391)), "₹43,391");
        assert_eq!(format_indian_currency(dec!(543840)), "₹5,43,840");
        assert_eq!(format_indian_currency(dec!(5413840)), "₹54,13,840");
        assert_eq!(format_indian_currency(dec!(50000000)), "₹5,00,00,000");
    }

    #[test]
    fn rounds_and_keeps_sign() {
        assert_eq!(format_indian_currency(dec!(1234.56)), "₹1,235");
        assert_eq!(format_indian_currency(dec!(-5413840)), "-₹54,13,840");
    }

    #[test]
    fn compact_thresholds() {
        assert_eq!(format_indian_compact_currency(dec!(999)), "₹999");
        assert_eq!(format_indian_compact_currency(dec!(1000)), "₹1K");
        assert_eq!(format_indian_compact_currency(dec!(1500)), "₹1.5K");
        assert_eq!(format_indian_compact_currency(dec!(100_000)), "₹1L");
        assert_eq!(format_indian_compact_currency(dec!(5_000_000)), "₹50L");
        assert_eq!(format_indian_compact_currency(dec!(10_000_000)), "₹1Cr");
        assert_eq!(format_indian_compact_currency(dec!(54_138_400)), "₹5.41Cr");
    }

    #[test]
    fn compact_trims_trailing_zeros() {
        assert_eq!(format_indian_compact_currency(dec!(43_391)), "₹43.39K");
        assert_eq!(format_indian_compact_currency(dec!(-1_250_000)), "-₹12.5L");
    }
}
