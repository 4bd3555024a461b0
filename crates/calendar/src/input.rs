use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::{Error, Result};

/// Anything the display helpers accept: a typed date or an ISO-8601 string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateInput<'a> {
    Date(Date),
    DateTime(PrimitiveDateTime),
    Offset(OffsetDateTime),
    Text(&'a str),
}

impl DateInput<'_> {
    /// Local wall-clock value of the input. Offsets are kept as written,
    /// not converted.
    pub fn resolve(&self) -> Result<PrimitiveDateTime> {
        match self {
            DateInput::Date(date) => Ok(date.midnight()),
            DateInput::DateTime(value) => Ok(*value),
            DateInput::Offset(value) => Ok(PrimitiveDateTime::new(value.date(), value.time())),
            DateInput::Text(text) => parse_date(text),
        }
    }
}

impl From<Date> for DateInput<'_> {
    fn from(value: Date) -> Self {
        DateInput::Date(value)
    }
}

impl From<PrimitiveDateTime> for DateInput<'_> {
    fn from(value: PrimitiveDateTime) -> Self {
        DateInput::DateTime(value)
    }
}

impl From<OffsetDateTime> for DateInput<'_> {
    fn from(value: OffsetDateTime) -> Self {
        DateInput::Offset(value)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        DateInput::Text(value.as_str())
    }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.fff]]` (`T` or a space),
/// `YYYY-MM`, `YYYY` or an RFC 3339 instant. Reduced forms start at the
/// first day of the period.
pub fn parse_date(text: &str) -> Result<PrimitiveDateTime> {
    let text = text.trim();

    if let Ok(value) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(PrimitiveDateTime::new(value.date(), value.time()));
    }

    let local_formats: [&[BorrowedFormatItem<'_>]; 6] = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
    ];
    for format in local_formats {
        if let Ok(value) = PrimitiveDateTime::parse(text, format) {
            return Ok(value);
        }
    }

    let calendar_date = format_description!("[year]-[month]-[day]");
    [text.to_owned(), format!("{text}-01"), format!("{text}-01-01")]
        .iter()
        .find_map(|candidate| Date::parse(candidate, calendar_date).ok())
        .map(Date::midnight)
        .ok_or_else(|| Error::InvalidDate(text.to_owned()))
}

/// Calendar day of a typed date value.
pub trait AsDate {
    fn as_date(&self) -> Date;
}

impl AsDate for Date {
    fn as_date(&self) -> Date {
        *self
    }
}

impl AsDate for PrimitiveDateTime {
    fn as_date(&self) -> Date {
        self.date()
    }
}

impl AsDate for OffsetDateTime {
    fn as_date(&self) -> Date {
        self.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn parses_plain_dates_at_midnight() {
        assert_eq!(parse_date("2024-03-15"), Ok(datetime!(2024-03-15 00:00)));
    }

    #[test]
    fn parses_local_date_times() {
        assert_eq!(
            parse_date("2024-03-15T08:30"),
            Ok(datetime!(2024-03-15 08:30))
        );
        assert_eq!(
            parse_date("2024-03-15T08:30:15"),
            Ok(datetime!(2024-03-15 08:30:15))
        );
        assert_eq!(
            parse_date("2024-03-15T08:30:15.250"),
            Ok(datetime!(2024-03-15 08:30:15.250))
        );
    }

    #[test]
    fn parses_space_separated_date_times() {
        assert_eq!(
            parse_date("2024-03-15 08:30"),
            Ok(datetime!(2024-03-15 08:30))
        );
        assert_eq!(
            parse_date("2024-03-15 08:30:15"),
            Ok(datetime!(2024-03-15 08:30:15))
        );
        assert_eq!(
            parse_date("2024-03-15 08:30:15.5"),
            Ok(datetime!(2024-03-15 08:30:15.5))
        );
    }

    #[test]
    fn reduced_precision_starts_the_period() {
        assert_eq!(parse_date("2024-03"), Ok(datetime!(2024-03-01 00:00)));
        assert_eq!(parse_date("2024"), Ok(datetime!(2024-01-01 00:00)));
        assert!(parse_date("2024-3").is_err());
        assert!(parse_date("2024-13").is_err());
    }

    #[test]
    fn keeps_wall_clock_of_offset_instants() {
        assert_eq!(
            parse_date("2024-03-15T23:30:00-05:00"),
            Ok(datetime!(2024-03-15 23:30))
        );
        assert_eq!(
            parse_date("2024-03-15T10:00:00.000Z"),
            Ok(datetime!(2024-03-15 10:00))
        );
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        for text in ["not-a-date", "", "2024-02-30", "2024-13-01", "15/03/2024", "2024-03-15 25:00"] {
            assert!(
                matches!(parse_date(text), Err(Error::InvalidDate(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn typed_inputs_resolve() {
        assert_eq!(
            DateInput::from(date!(2024 - 03 - 15)).resolve(),
            Ok(datetime!(2024-03-15 00:00))
        );
        assert_eq!(
            DateInput::from(datetime!(2024-03-15 10:00 +02:00)).resolve(),
            Ok(datetime!(2024-03-15 10:00))
        );
    }
}
