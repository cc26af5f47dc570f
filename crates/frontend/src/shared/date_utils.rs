/// Utilities for date and time formatting
///
/// Provides consistent date/time display across the application

/// Format ISO datetime string to DD/MM/YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let mut pieces = time_part.split(':');
                if let (Some(hours), Some(minutes)) = (pieces.next(), pieces.next()) {
                    return format!("{}/{}/{} {}:{}", day, month, year, hours, minutes);
                }
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Value for a `datetime-local` input: "YYYY-MM-DDTHH:MM"
pub fn to_input_datetime(datetime_str: &str) -> String {
    let trimmed = datetime_str.trim_end_matches('Z');
    match trimmed.split_once('T') {
        Some((date, time)) => {
            let hhmm: String = time.splitn(3, ':').take(2).collect::<Vec<_>>().join(":");
            format!("{}T{}", date, hhmm)
        }
        None => trimmed.to_string(),
    }
}

/// Current month as "YYYY-MM" for a `month` input
pub fn current_month() -> String {
    chrono::Utc::now().format("%Y-%m").to_string()
}

/// Current date as "YYYY-MM-DD" for a `date` input
pub fn current_date() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15/03/2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_to_input_datetime() {
        assert_eq!(
            to_input_datetime("2024-03-15T14:02:26.123"),
            "2024-03-15T14:02"
        );
        assert_eq!(to_input_datetime("2024-03-15T14:02Z"), "2024-03-15T14:02");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
