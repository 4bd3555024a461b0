use time::PrimitiveDateTime;

use crate::locale::{
    invalid_date_text, invalid_day_text, month_abbrev, month_name, weekday_abbrev, weekday_name,
};
use crate::{AsDate, DateInput, Error, Result, week_range};

/// Day, abbreviated month and year: `05 mar 2024`.
pub const DEFAULT_PATTERN: &str = "dd MMM yyyy";

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Literal(String),
    Field(char, usize),
}

fn tokenize(pattern: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
                tokens.push(Token::Literal("'".to_owned()));
                continue;
            }

            let mut text = String::new();
            loop {
                match chars.next() {
                    Some('\'') if chars.peek() == Some(&'\'') => {
                        chars.next();
                        text.push('\'');
                    }
                    Some('\'') => break,
                    Some(c) => text.push(c),
                    None => return Err(Error::UnterminatedLiteral),
                }
            }
            tokens.push(Token::Literal(text));
            continue;
        }

        if c.is_ascii_alphabetic() {
            let mut len = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                len += 1;
            }
            tokens.push(Token::Field(c, len));
            continue;
        }

        match tokens.last_mut() {
            Some(Token::Literal(text)) => text.push(c),
            _ => tokens.push(Token::Literal(c.to_string())),
        }
    }

    Ok(tokens)
}

fn render(value: PrimitiveDateTime, pattern: &str) -> Result<String> {
    let mut out = String::new();

    for token in tokenize(pattern)? {
        let part = match token {
            Token::Literal(text) => text,
            Token::Field('d', 1) => value.day().to_string(),
            Token::Field('d', 2) => format!("{:02}", value.day()),
            Token::Field('M', 1) => u8::from(value.month()).to_string(),
            Token::Field('M', 2) => format!("{:02}", u8::from(value.month())),
            Token::Field('M', 3) => month_abbrev(value.month()),
            Token::Field('M', 4) => month_name(value.month()),
            Token::Field('y', 1) => value.year().to_string(),
            Token::Field('y', 2) => format!("{:02}", value.year().rem_euclid(100)),
            Token::Field('y', 4) => format!("{:04}", value.year()),
            Token::Field('E', 1..=3) => weekday_abbrev(value.weekday()),
            Token::Field('E', 4) => weekday_name(value.weekday()),
            Token::Field('H', 1) => value.hour().to_string(),
            Token::Field('H', 2) => format!("{:02}", value.hour()),
            Token::Field('m', 1) => value.minute().to_string(),
            Token::Field('m', 2) => format!("{:02}", value.minute()),
            Token::Field('s', 1) => value.second().to_string(),
            Token::Field('s', 2) => format!("{:02}", value.second()),
            Token::Field(c, _) => return Err(Error::UnknownToken(c)),
        };
        out.push_str(&part);
    }

    Ok(out)
}

/// Formats with a date-fns style pattern (`d`, `dd`, `M`..`MMMM`, `yy`,
/// `yyyy`, `EEE`, `EEEE`, `H`, `HH`, `mm`, `ss`, `'literal'`) in Spanish.
pub fn try_format_date<'a>(date: impl Into<DateInput<'a>>, pattern: &str) -> Result<String> {
    render(date.into().resolve()?, pattern)
}

fn or_placeholder(result: Result<String>, placeholder: fn() -> String) -> String {
    result.unwrap_or_else(|err| {
        tracing::debug!(error = %err, "date display degraded to placeholder");
        placeholder()
    })
}

/// Like [`try_format_date`], but any failure yields `"Fecha inválida"`.
pub fn format_date<'a>(date: impl Into<DateInput<'a>>, pattern: &str) -> String {
    or_placeholder(try_format_date(date, pattern), invalid_date_text)
}

pub fn format_date_default<'a>(date: impl Into<DateInput<'a>>) -> String {
    format_date(date, DEFAULT_PATTERN)
}

/// `lunes` or `lun`; `"Día inválido"` when the input is not a date.
pub fn day_name<'a>(date: impl Into<DateInput<'a>>, abbreviated: bool) -> String {
    let pattern = if abbreviated { "EEE" } else { "EEEE" };
    or_placeholder(try_format_date(date, pattern), invalid_day_text)
}

/// `marzo 2024`.
pub fn month_and_year<'a>(date: impl Into<DateInput<'a>>) -> String {
    format_date(date, "MMMM yyyy")
}

/// Label of the Monday-start week containing `date`: `11-17 mar, 2024`.
/// The month and year are those of the week's Sunday.
pub fn week_range_text<'a>(date: impl Into<DateInput<'a>>) -> String {
    let label = date.into().resolve().and_then(|value| {
        let week = week_range(value.as_date());
        Ok(format!(
            "{}-{}",
            render(week.start, "d")?,
            render(week.end, "d MMM, yyyy")?
        ))
    });

    or_placeholder(label, invalid_date_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn tokenizes_quoted_literals() {
        assert_eq!(
            tokenize("d 'de' MMMM").unwrap(),
            vec![
                Token::Field('d', 1),
                Token::Literal(" ".to_owned()),
                Token::Literal("de ".to_owned()),
                Token::Field('M', 4),
            ]
        );
        assert_eq!(
            tokenize("HH'h''s'").unwrap(),
            vec![Token::Field('H', 2), Token::Literal("h's".to_owned())]
        );
        assert_eq!(tokenize("'abc"), Err(Error::UnterminatedLiteral));
    }

    #[test]
    fn renders_numeric_fields() {
        let value = datetime!(2024-03-05 07:04:09);

        assert_eq!(render(value, "d/M/yy").unwrap(), "5/3/24");
        assert_eq!(render(value, "dd/MM/yyyy").unwrap(), "05/03/2024");
        assert_eq!(render(value, "HH:mm:ss").unwrap(), "07:04:09");
        assert_eq!(render(value, "H:m:s").unwrap(), "7:4:9");
    }

    #[test]
    fn renders_spanish_names() {
        let value = date!(2024 - 03 - 13).midnight();

        assert_eq!(render(value, "EEEE d 'de' MMMM").unwrap(), "miércoles 13 de marzo");
        assert_eq!(render(value, "EEE, d MMM").unwrap(), "mié, 13 mar");
    }

    #[test]
    fn unknown_letters_are_errors() {
        let value = date!(2024 - 03 - 13).midnight();

        assert_eq!(render(value, "Q"), Err(Error::UnknownToken('Q')));
        assert_eq!(render(value, "ddd"), Err(Error::UnknownToken('d')));
        assert_eq!(render(value, "yyy"), Err(Error::UnknownToken('y')));
    }
}
