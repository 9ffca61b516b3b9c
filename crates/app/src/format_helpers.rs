/// Shared formatting utilities for the UI layer.
use chrono::NaiveDate;
use shared_types::CurrencyConfig;

/// Group the digits of `amount` in threes, e.g. `15000000` → `15,000,000`.
pub fn group_thousands(amount: u64, separator: &str) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Format a money amount with grouping and the currency suffix,
/// e.g. `15,000,000 XAF`.
pub fn format_amount(amount: u64, currency: &CurrencyConfig) -> String {
    format!(
        "{} {}",
        group_thousands(amount, &currency.thousands_separator),
        currency.code
    )
}

/// Uppercase the first character and keep the rest as-is
/// (e.g. "payments" → "Payments").
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// ISO calendar date, e.g. "2023-11-10".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
