use chrono::DateTime;

/// Entity label used when the API did not attribute an address.
pub const UNIDENTIFIED_ENTITY: &str = "Unidentified";

/// Placeholder printed for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a unix timestamp as a human readable UTC date, `N/A` when absent.
pub fn format_timestamp(timestamp: Option<i64>) -> String {
    match timestamp {
        None | Some(0) => NOT_AVAILABLE.to_string(),
        Some(timestamp) => match DateTime::from_timestamp(timestamp, 0) {
            Some(date_time) => date_time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => timestamp.to_string(),
        },
    }
}

/// Format an integer count with thousands separators.
pub fn format_count(count: u64) -> String {
    group_integer_digits(&count.to_string())
}

/// Format a number with thousands separators, keeping its fractional digits.
pub fn format_amount(amount: f64) -> String {
    format_float(amount, None)
}

/// Format an optional amount, `N/A` when absent.
pub fn format_optional_amount(amount: Option<f64>) -> String {
    amount
        .map(format_amount)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format an amount of US dollars: `$` prefix, thousands separators, two decimals.
pub fn format_usd(amount: f64) -> String {
    format!("${}", format_float(amount, Some(2)))
}

/// Format a native currency balance with eight decimals.
pub fn format_balance(balance: f64) -> String {
    format_float(balance, Some(8))
}

/// Format an optional risk score, `N/A` when absent.
pub fn format_optional_score(score: Option<f64>) -> String {
    score
        .map(|score| score.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format an optional risk score out of ten, `N/A` when absent.
pub fn format_score_out_of_ten(score: Option<f64>) -> String {
    score
        .map(|score| format!("{score}/10"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Shorten a hash or address for display, appending `...` when truncated.
pub fn truncate(value: &str, max_length: usize) -> String {
    if value.chars().count() > max_length {
        let truncated: String = value.chars().take(max_length).collect();
        format!("{truncated}...")
    } else {
        value.to_string()
    }
}

fn format_float(value: f64, decimals: Option<usize>) -> String {
    let rendered = match decimals {
        Some(decimals) => format!("{value:.decimals$}"),
        None => value.to_string(),
    };
    let negative = rendered.starts_with('-');
    let unsigned = rendered.trim_start_matches('-');
    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((integer_part, fraction_part)) => (integer_part, Some(fraction_part)),
        None => (unsigned, None),
    };

    let mut formatted = group_integer_digits(integer_part);
    if let Some(fraction_part) = fraction_part {
        formatted.push('.');
        formatted.push_str(fraction_part);
    }
    if negative {
        formatted.insert(0, '-');
    }

    formatted
}

fn group_integer_digits(digits: &str) -> String {
    let mut grouped = String::new();
    for (position, digit) in digits.chars().rev().enumerate() {
        if position > 0 && position % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_timestamp_renders_utc_dates() {
        assert_eq!(
            "2024-06-20 07:25:00 UTC".to_string(),
            format_timestamp(Some(1718868300))
        );
    }

    #[test]
    fn format_timestamp_treats_absent_and_zero_as_not_available() {
        assert_eq!("N/A".to_string(), format_timestamp(None));
        assert_eq!("N/A".to_string(), format_timestamp(Some(0)));
    }

    #[test]
    fn format_timestamp_falls_back_to_the_raw_value_when_out_of_range() {
        assert_eq!(
            i64::MAX.to_string(),
            format_timestamp(Some(i64::MAX))
        );
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!("0".to_string(), format_count(0));
        assert_eq!("999".to_string(), format_count(999));
        assert_eq!("1,000".to_string(), format_count(1000));
        assert_eq!("1,234,567".to_string(), format_count(1234567));
    }

    #[test]
    fn format_amount_keeps_fractional_digits() {
        assert_eq!("0.000215".to_string(), format_amount(0.000215));
        assert_eq!("1,234,567.89".to_string(), format_amount(1234567.89));
        assert_eq!("-1,234.5".to_string(), format_amount(-1234.5));
    }

    #[test]
    fn format_optional_amount_falls_back_to_not_available() {
        assert_eq!("1,234.5".to_string(), format_optional_amount(Some(1234.5)));
        assert_eq!("N/A".to_string(), format_optional_amount(None));
    }

    #[test]
    fn format_usd_renders_two_decimals() {
        assert_eq!("$0.00".to_string(), format_usd(0.0));
        assert_eq!("$80,123.45".to_string(), format_usd(80123.45));
        assert_eq!("$-1,234.50".to_string(), format_usd(-1234.5));
    }

    #[test]
    fn format_balance_renders_eight_decimals() {
        assert_eq!("12.50000000".to_string(), format_balance(12.5));
        assert_eq!("1,234.50000000".to_string(), format_balance(1234.5));
    }

    #[test]
    fn format_optional_score_falls_back_to_not_available() {
        assert_eq!("8.7".to_string(), format_optional_score(Some(8.7)));
        assert_eq!("N/A".to_string(), format_optional_score(None));
    }

    #[test]
    fn format_score_out_of_ten_appends_the_scale() {
        assert_eq!("8.7/10".to_string(), format_score_out_of_ten(Some(8.7)));
        assert_eq!("N/A".to_string(), format_score_out_of_ten(None));
    }

    #[test]
    fn truncate_shortens_only_values_longer_than_the_limit() {
        assert_eq!("abcdef".to_string(), truncate("abcdef", 20));
        assert_eq!(
            "abcdefghijklmnopqrst...".to_string(),
            truncate("abcdefghijklmnopqrstuvwxyz", 20)
        );
        assert_eq!(
            "exactly-twenty-chars".to_string(),
            truncate("exactly-twenty-chars", 20)
        );
    }
}
