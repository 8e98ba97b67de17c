//! Display formatting shared by tables, summaries and exports.

/// Whole pounds with thousands separators, e.g. `£18,250`.
pub fn pounds(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}£{}", group_thousands(amount.unsigned_abs()))
}

/// Pounds and pence, e.g. `£1,250.50`. Rounds half away from zero.
pub fn pounds_pence(amount: f64) -> String {
    let pence = (amount * 100.0).round() as i64;
    let sign = if pence < 0 { "-" } else { "" };
    let pence = pence.unsigned_abs();
    format!("{sign}£{}.{:02}", group_thousands(pence / 100), pence % 100)
}

/// One decimal place, e.g. `32.4%`.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Lowercase, dash-separated file stem, e.g. `Locksmiths list` → `locksmiths-list`.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pounds_groups_thousands() {
        assert_eq!(pounds(0), "£0");
        assert_eq!(pounds(980), "£980");
        assert_eq!(pounds(18_250), "£18,250");
        assert_eq!(pounds(1_234_567), "£1,234,567");
        assert_eq!(pounds(-2_800), "-£2,800");
    }

    #[test]
    fn test_pounds_pence() {
        assert_eq!(pounds_pence(50.0), "£50.00");
        assert_eq!(pounds_pence(58.098), "£58.10");
        assert_eq!(pounds_pence(1_250.5), "£1,250.50");
    }

    #[test]
    fn test_percent_one_decimal() {
        assert_eq!(percent(32.0), "32.0%");
        assert_eq!(percent(100.0 / 3.0), "33.3%");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Locksmiths list"), "locksmiths-list");
        assert_eq!(slug("Operator overview (daily)"), "operator-overview-daily");
        assert_eq!(slug("  Weekly companies IN "), "weekly-companies-in");
    }
}
