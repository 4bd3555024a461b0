mod error;
mod format;
mod input;
mod locale;
mod navigation;
mod week;

pub use error::*;
pub use format::*;
pub use input::*;
pub use locale::{invalid_date_text, invalid_day_text};
pub use navigation::*;
pub use week::*;

rust_i18n::i18n!("locales", fallback = "es");
