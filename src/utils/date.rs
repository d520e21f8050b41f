// Date argument parsing for CLI flags

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};

/// Parse a `--date` argument: ISO dates plus a couple of relative keywords.
pub fn parse_date_arg(expr: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(date);
    }

    let today = Local::now().date_naive();
    match expr {
        "today" => Ok(today),
        "tomorrow" => Ok(today + Duration::days(1)),
        "yesterday" => Ok(today - Duration::days(1)),
        _ => anyhow::bail!(
            "Unsupported date expression: '{}'. Use YYYY-MM-DD, today, tomorrow or yesterday.",
            expr
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_date_arg("2024-01-16").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
        );
    }

    #[test]
    fn test_parse_relative_keywords() {
        let today = Local::now().date_naive();
        assert_eq!(parse_date_arg("today").unwrap(), today);
        assert_eq!(parse_date_arg("tomorrow").unwrap(), today + Duration::days(1));
        assert_eq!(parse_date_arg("yesterday").unwrap(), today - Duration::days(1));
    }

    #[test]
    fn test_parse_invalid_date_errors() {
        assert!(parse_date_arg("16/01/2024").is_err());
        assert!(parse_date_arg("soon").is_err());
    }
}
