//! Trip length labels.

use chrono::NaiveDate;

const DAYS_PER_WEEK: i64 = 7;
const DAYS_PER_MONTH: i64 = 30;

/// Label the distance between two calendar dates.
///
/// The absolute delta is used, so an inverted range labels the same as the
/// forward one. Months are counted as 30 days.
pub fn trip_duration_label(start: NaiveDate, end: NaiveDate) -> String {
    let days = (end - start).num_days().abs();

    match days {
        0 => "Day Trip".to_string(),
        1 => "1 Day".to_string(),
        d if d < DAYS_PER_WEEK => format!("{} Days", d),
        d if d < DAYS_PER_MONTH => plural(d / DAYS_PER_WEEK, "Week"),
        d => plural(d / DAYS_PER_MONTH, "Month"),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(start: &str, end: &str) -> String {
        let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        trip_duration_label(parse(start), parse(end))
    }

    #[test]
    fn test_day_trip() {
        assert_eq!(label("2024-05-01", "2024-05-01"), "Day Trip");
    }

    #[test]
    fn test_days() {
        assert_eq!(label("2024-05-01", "2024-05-02"), "1 Day");
        assert_eq!(label("2024-05-01", "2024-05-07"), "6 Days");
    }

    #[test]
    fn test_weeks() {
        assert_eq!(label("2024-05-01", "2024-05-08"), "1 Week");
        assert_eq!(label("2024-05-01", "2024-05-30"), "4 Weeks");
    }

    #[test]
    fn test_months() {
        assert_eq!(label("2024-05-01", "2024-05-31"), "1 Month");
        assert_eq!(label("2024-01-01", "2024-04-01"), "3 Months");
    }

    #[test]
    fn test_inverted_range_uses_absolute_delta() {
        assert_eq!(label("2024-05-10", "2024-05-01"), "1 Week");
    }
}
