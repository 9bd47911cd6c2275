use chrono::{Local, NaiveDate};

/// Formats accepted in task date and group deadline strings
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b, %Y", "%d %b %Y", "%d/%m/%Y"];

/// Parse a task date string into a day, tolerating the "Deadline:" and
/// "Finished:" prefixes the UI writes. Returns None for anything else.
pub fn parse_task_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw
        .trim()
        .trim_start_matches("Deadline:")
        .trim_start_matches("Finished:")
        .trim();

    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Timestamp used by the deadline sort; unparseable dates rank as epoch 0
/// so they sort first.
pub fn sort_timestamp(raw: &str) -> i64 {
    parse_task_date(raw)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}

/// Humanize a deadline string relative to today.
///
/// Unparseable input (including already-humanized strings like
/// "7 days left") is returned as-is.
pub fn format_deadline(deadline: &str) -> String {
    let Some(date) = parse_task_date(deadline) else {
        return deadline.to_string();
    };

    let today = Local::now().date_naive();
    let days_left = (date - today).num_days();

    match days_left {
        0 => "Today".to_string(),
        d if d < 0 => "Overdue".to_string(),
        1 => "1 day left".to_string(),
        d => format!("{} days left", d),
    }
}
