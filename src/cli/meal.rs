use std::{io::Read, path::Path};

use anyhow::{Context, Result};
use nutrilog_meal::{FieldErrors, FormDefaults, MealEntry, MealType, RawMealInput};

/// Reads the payload from `input`, or stdin when no file is given.
pub fn read_payload(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .context("failed to read stdin")?;
            Ok(payload)
        }
    }
}

/// Parses a JSON meal payload and validates it against create-defaults.
///
/// The outer error is for malformed JSON; field errors are the inner one.
pub fn check_payload(
    payload: &str,
    preselected: Option<MealType>,
) -> Result<Result<MealEntry, FieldErrors>> {
    let raw: RawMealInput =
        serde_json::from_str(payload).context("meal payload is not valid JSON")?;

    Ok(FormDefaults::create(preselected).apply(raw).validate())
}

/// Prints the normalized entry or the field errors as JSON. Returns whether
/// the payload was valid.
pub fn validate(input: Option<&Path>, preselected: Option<MealType>) -> Result<bool> {
    let payload = read_payload(input)?;

    match check_payload(&payload, preselected)? {
        Ok(entry) => {
            println!("{}", serde_json::to_string_pretty(&entry)?);
            Ok(true)
        }
        Err(errors) => {
            tracing::warn!(fields = errors.len(), "meal payload rejected");
            println!("{}", serde_json::to_string_pretty(&errors)?);
            Ok(false)
        }
    }
}
