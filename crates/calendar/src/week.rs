use time::{Date, Duration, PrimitiveDateTime, macros::time};

use crate::AsDate;

/// Monday 00:00:00 to Sunday 23:59:59.999 of one week, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: PrimitiveDateTime,
    pub end: PrimitiveDateTime,
}

impl WeekRange {
    pub fn contains(&self, date: impl AsDate) -> bool {
        let date = date.as_date();
        self.start.date() <= date && date <= self.end.date()
    }

    pub fn days(&self) -> [Date; 7] {
        week_days(self.start.date())
    }
}

/// Start and end of one calendar day in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub start: PrimitiveDateTime,
    pub end: PrimitiveDateTime,
}

pub fn week_start(date: impl AsDate) -> Date {
    let date = date.as_date();
    date.saturating_sub(Duration::days(i64::from(
        date.weekday().number_days_from_monday(),
    )))
}

pub fn week_range(date: impl AsDate) -> WeekRange {
    let monday = week_start(date);
    let sunday = monday.saturating_add(Duration::days(6));

    WeekRange {
        start: day_bounds(monday).start,
        end: day_bounds(sunday).end,
    }
}

/// Monday through Sunday of the week containing `date`.
pub fn week_days(date: impl AsDate) -> [Date; 7] {
    let monday = week_start(date);
    std::array::from_fn(|i| monday.saturating_add(Duration::days(i as i64)))
}

pub fn format_date_to_iso(date: impl AsDate) -> String {
    let date = date.as_date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

pub fn day_bounds(date: impl AsDate) -> DayBounds {
    let date = date.as_date();
    DayBounds {
        start: date.midnight(),
        end: date.with_time(time!(23:59:59.999)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Month, Weekday};
    use time::macros::{date, datetime};

    #[test]
    fn week_range_from_monday() {
        let week = week_range(datetime!(2025-01-20 09:00));

        assert_eq!(week.start, datetime!(2025-01-20 00:00));
        assert_eq!(week.end, datetime!(2025-01-26 23:59:59.999));
    }

    #[test]
    fn week_range_from_wednesday() {
        let week = week_range(date!(2025 - 01 - 22));

        assert_eq!(week.start, datetime!(2025-01-20 00:00));
        assert_eq!(week.end, datetime!(2025-01-26 23:59:59.999));
    }

    #[test]
    fn week_range_from_sunday() {
        let week = week_range(datetime!(2025-01-26 22:00 UTC));

        assert_eq!(week.start, datetime!(2025-01-20 00:00));
        assert_eq!(week.end, datetime!(2025-01-26 23:59:59.999));
        assert!(week.contains(date!(2025 - 01 - 26)));
        assert!(!week.contains(date!(2025 - 01 - 27)));
    }

    #[test]
    fn week_days_cross_month_and_year() {
        let days = week_days(date!(2025 - 01 - 01));

        assert_eq!(days[0], date!(2024 - 12 - 30));
        assert_eq!(days[0].weekday(), Weekday::Monday);
        assert_eq!(days[6], date!(2025 - 01 - 05));
    }

    #[test]
    fn iso_format_pads() {
        assert_eq!(format_date_to_iso(date!(2024 - 03 - 05)), "2024-03-05");
        let early = Date::from_calendar_date(987, Month::November, 30).unwrap();
        assert_eq!(format_date_to_iso(early), "0987-11-30");
    }

    #[test]
    fn day_bounds_stay_on_the_same_day() {
        let bounds = day_bounds(datetime!(2024-02-29 13:45));

        assert_eq!(bounds.start, datetime!(2024-02-29 00:00));
        assert_eq!(bounds.end, datetime!(2024-02-29 23:59:59.999));
    }
}
