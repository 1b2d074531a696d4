use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Format a dollar amount with thousands separators and no cents,
/// rounding half away from zero. Negative amounts render as "-$1,234".
pub fn usd0(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let grouped = group_thousands(&rounded.abs().to_string());
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a decimal rate as a percentage with one decimal place.
pub fn pct1(rate: Decimal) -> String {
    let pct = (rate * dec!(100)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", pct)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd0_groups_thousands() {
        assert_eq!(usd0(dec!(1478250)), "$1,478,250");
        assert_eq!(usd0(dec!(604687.5)), "$604,688");
        assert_eq!(usd0(dec!(96000)), "$96,000");
        assert_eq!(usd0(dec!(500)), "$500");
        assert_eq!(usd0(Decimal::ZERO), "$0");
    }

    #[test]
    fn test_usd0_negative() {
        assert_eq!(usd0(dec!(-126000)), "-$126,000");
        assert_eq!(usd0(dec!(-0.4)), "$0");
    }

    #[test]
    fn test_usd0_rounds_half_away() {
        assert_eq!(usd0(dec!(81187.5)), "$81,188");
        assert_eq!(usd0(dec!(-42000.5)), "-$42,001");
    }

    #[test]
    fn test_pct1() {
        assert_eq!(pct1(dec!(0.0365)), "3.7%");
        assert_eq!(pct1(dec!(0.4)), "40.0%");
        assert_eq!(pct1(dec!(0.015)), "1.5%");
        assert_eq!(pct1(Decimal::ZERO), "0.0%");
    }
}
