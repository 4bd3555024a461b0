use anyhow::Result;
use nutrilog_calendar::{
    Clock, format_date, format_date_to_iso, parse_date, week_days, week_range_text,
};

/// Week label followed by its seven ISO days, one per line. Without a date
/// the clock's current day is used.
pub fn week(date: Option<&str>, clock: &impl Clock) -> Result<String> {
    let day = match date {
        Some(text) => parse_date(text)?.date(),
        None => clock.today(),
    };

    let mut lines = vec![week_range_text(day)];
    lines.extend(week_days(day).into_iter().map(format_date_to_iso));

    Ok(lines.join("\n"))
}

pub fn format(date: &str, pattern: &str) -> String {
    format_date(date, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrilog_calendar::FixedClock;
    use time::macros::date;

    #[test]
    fn test_week_from_clock() {
        let out = week(None, &FixedClock(date!(2024 - 03 - 13))).unwrap();
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "11-17 mar, 2024");
        assert_eq!(lines[1], "2024-03-11");
        assert_eq!(lines[7], "2024-03-17");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_week_rejects_bad_date() {
        assert!(week(Some("soon"), &FixedClock(date!(2024 - 03 - 13))).is_err());
    }

    #[test]
    fn test_format_placeholder() {
        assert_eq!(format("2024-03-05", "dd MMM yyyy"), "05 mar 2024");
        assert_eq!(format("pronto", "dd MMM yyyy"), "Fecha inválida");
    }
}
