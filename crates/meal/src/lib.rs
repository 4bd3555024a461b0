mod comment;
mod defaults;
mod form;
mod input;
mod messages;
mod types;
mod validate;

pub use comment::*;
pub use defaults::*;
pub use form::*;
pub use input::{FieldValue, RawMealInput};
pub use messages::message;
pub use types::*;
pub use validate::*;

rust_i18n::i18n!("locales", fallback = "es");
