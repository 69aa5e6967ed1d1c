/// Utilities for date and time defaults
///
/// The dispatch form seeds its datetime field once at load time.
use chrono::{Local, NaiveDateTime};

/// Current local time formatted for a `datetime-local` input.
pub fn now_local_datetime() -> String {
    datetime_local_value(Local::now().naive_local())
}

/// Format a timestamp the way `datetime-local` inputs expect (minute
/// precision, no zone suffix).
fn datetime_local_value(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_datetime_local_value() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(datetime_local_value(dt), "2024-03-15T14:02");
    }

    #[test]
    fn test_midnight_keeps_leading_zeros() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(0, 7, 0)
            .unwrap();
        assert_eq!(datetime_local_value(dt), "2024-01-05T00:07");
    }
}
