//! Display formatting helpers for the dashboard

use chrono::NaiveDate;

/// Arabic thousands separator used in Persian numbers
pub const THOUSANDS_SEPARATOR: char = '\u{066C}';

/// Currency suffix appended to amounts
pub const CURRENCY: &str = "تومان";

/// Replace ASCII digits with Persian digits, leaving everything else alone
#[must_use]
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(0x06F0 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Group an integer's digits in threes with `separator`
#[must_use]
pub fn group_thousands(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount in toman, e.g. `۱۲۰٬۰۰۰ تومان`
#[must_use]
pub fn format_amount(amount: i64) -> String {
    format!(
        "{} {CURRENCY}",
        to_persian_digits(&group_thousands(amount, THOUSANDS_SEPARATOR))
    )
}

/// Format a date as `YYYY/MM/DD` with Persian digits
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    to_persian_digits(&date.format("%Y/%m/%d").to_string())
}

/// Share of allotted hours already used, as a whole percentage in `0..=100`
///
/// Zero when nothing was allotted.
#[must_use]
pub fn usage_percent(used: i64, total: i64) -> u8 {
    if total <= 0 {
        return 0;
    }
    let percent = (i128::from(used.max(0)) * 100) / i128::from(total);
    u8::try_from(percent.clamp(0, 100)).unwrap_or(100)
}
