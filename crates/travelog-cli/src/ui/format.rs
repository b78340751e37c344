//! String formatting for dates, sizes and table cells.

use chrono::NaiveDate;

/// "Jun 1, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Jun 1, 2024 - Jun 7, 2024", or a single date for day trips.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format_date(start)
    } else {
        format!("{} - {}", format_date(start), format_date(end))
    }
}

/// Truncate to `max_len` characters, adding an ellipsis.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let head: String = s.chars().take(max_len - 3).collect();
    format!("{}...", head)
}

/// Collapse whitespace runs (including newlines) into single spaces.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn format_bytes(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn dates() {
        assert_eq!(format_date(date("2024-06-01")), "Jun 1, 2024");
        assert_eq!(
            format_date_range(date("2024-06-01"), date("2024-06-07")),
            "Jun 1, 2024 - Jun 7, 2024"
        );
        assert_eq!(
            format_date_range(date("2024-06-01"), date("2024-06-01")),
            "Jun 1, 2024"
        );
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Zürich", 10), "Zürich");
        assert_eq!(truncate("Reykjavík, Iceland", 10), "Reykjav...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn single_line_collapses() {
        assert_eq!(single_line("Great\n\n food  here"), "Great food here");
    }

    #[test]
    fn bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
