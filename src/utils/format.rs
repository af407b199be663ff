use chrono::NaiveDate;

/// Format a whole-rupee amount with thousands separators: "₹31,000"
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₹{}", grouped)
}

/// Format a date for display: "Jan 25, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Format a date range for booking summaries: "Jan 25 - Jan 29, 2025"
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.format("%Y").to_string() == end.format("%Y").to_string() {
        format!("{} - {}", start.format("%b %d"), end.format("%b %d, %Y"))
    } else {
        format!("{} - {}", format_date(start), format_date(end))
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(800), "₹800");
        assert_eq!(format_rupees(3500), "₹3,500");
        assert_eq!(format_rupees(31000), "₹31,000");
        assert_eq!(format_rupees(1234567), "₹1,234,567");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date("2025-01-25")), "Jan 25, 2025");
    }

    #[test]
    fn test_format_date_range_same_year() {
        assert_eq!(
            format_date_range(date("2025-01-25"), date("2025-01-29")),
            "Jan 25 - Jan 29, 2025"
        );
    }

    #[test]
    fn test_format_date_range_across_years() {
        assert_eq!(
            format_date_range(date("2025-12-30"), date("2026-01-02")),
            "Dec 30, 2025 - Jan 02, 2026"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer string", 10), "a longe...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }
}
