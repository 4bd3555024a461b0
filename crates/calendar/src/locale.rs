use time::{Month, Weekday};

pub(crate) const LOCALE: &str = "es";

pub(crate) fn month_name(month: Month) -> String {
    rust_i18n::t!(month.to_string(), locale = LOCALE).to_string()
}

pub(crate) fn month_abbrev(month: Month) -> String {
    rust_i18n::t!(format!("{month}_sm"), locale = LOCALE).to_string()
}

pub(crate) fn weekday_name(weekday: Weekday) -> String {
    rust_i18n::t!(weekday.to_string(), locale = LOCALE).to_string()
}

pub(crate) fn weekday_abbrev(weekday: Weekday) -> String {
    rust_i18n::t!(format!("{weekday}_sm"), locale = LOCALE).to_string()
}

pub fn invalid_date_text() -> String {
    rust_i18n::t!("invalid_date", locale = LOCALE).to_string()
}

pub fn invalid_day_text() -> String {
    rust_i18n::t!("invalid_day", locale = LOCALE).to_string()
}
