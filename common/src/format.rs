//! pt-BR display formatting for prices, percentages and dates.

use chrono::NaiveDate;

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

fn split_decimal(value: f64, decimals: usize) -> (bool, String, String) {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    (value < 0.0, integer.to_string(), fraction.to_string())
}

/// Chip bound: `R$100.000`, cents only when present (`R$1.234,5`).
pub fn format_brl_compact(value: f64) -> String {
    if !value.is_finite() {
        return format!("R${value}");
    }
    let (negative, integer, fraction) = split_decimal(value, 2);
    let fraction = fraction.trim_end_matches('0');
    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}R${}", group_thousands(&integer))
    } else {
        format!("{sign}R${},{fraction}", group_thousands(&integer))
    }
}

/// Card price: `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    if !value.is_finite() {
        return "R$ -".to_string();
    }
    let (negative, integer, fraction) = split_decimal(value, 2);
    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {},{fraction}", group_thousands(&integer))
}

/// `value` is already a percentage (`10.5` → `10,50%`).
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let (negative, integer, fraction) = split_decimal(value, 2);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{},{fraction}%", group_thousands(&integer))
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_brl_groups_thousands() {
        assert_eq!(format_brl_compact(100_000.0), "R$100.000");
        assert_eq!(format_brl_compact(5_000_000.0), "R$5.000.000");
        assert_eq!(format_brl_compact(0.0), "R$0");
        assert_eq!(format_brl_compact(1234.5), "R$1.234,5");
    }

    #[test]
    fn card_brl_always_has_cents() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(999.0), "R$ 999,00");
    }

    #[test]
    fn percent_and_date() {
        assert_eq!(format_percent(10.5), "10,50%");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 3, 7)), "07/03/2025");
        assert_eq!(format_date(None), "-");
    }
}
