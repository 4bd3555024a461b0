use serde::{Deserialize, Deserializer, Serialize};

use crate::MealEntry;

/// A numeric form value as it arrives from the client: either a JSON number
/// or the raw text of an input box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NotANumber;

impl FieldValue {
    /// `Ok(None)` for blank text. Negative zero is read as zero.
    pub(crate) fn to_decimal(&self) -> Result<Option<f64>, NotANumber> {
        let value = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(None);
                }

                text.parse::<f64>().map_err(|_| NotANumber)?
            }
            FieldValue::Flag(_) => return Err(NotANumber),
        };

        if !value.is_finite() {
            return Err(NotANumber);
        }

        Ok(Some(value + 0.0))
    }
}

/// Whole number a `u32` field can store.
pub(crate) fn whole(value: f64) -> Option<u32> {
    let in_range = (0.0..=f64::from(u32::MAX)).contains(&value);
    (value.fract() == 0.0 && in_range).then_some(value as u32)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseText {
    Text(String),
    Number(f64),
    Flag(bool),
}

/// Accepts numbers and booleans where text is expected, as their display form.
fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(
        Option::<LooseText>::deserialize(deserializer)?.map(|value| match value {
            LooseText::Text(text) => text,
            LooseText::Number(n) => n.to_string(),
            LooseText::Flag(b) => b.to_string(),
        }),
    )
}

/// Loosely typed meal payload, every field optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMealInput {
    #[serde(rename = "type", default, deserialize_with = "loose_text")]
    pub meal_type: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub description: Option<String>,
    pub calories: Option<FieldValue>,
    #[serde(default, deserialize_with = "loose_text")]
    pub time: Option<String>,
    pub duration: Option<FieldValue>,
    pub water_intake: Option<FieldValue>,
    #[serde(default, deserialize_with = "loose_text")]
    pub notes: Option<String>,
}

impl From<&MealEntry> for RawMealInput {
    fn from(entry: &MealEntry) -> Self {
        Self {
            meal_type: Some(entry.meal_type.to_string()),
            name: Some(entry.name.to_owned()),
            description: entry.description.to_owned(),
            calories: entry.calories.map(FieldValue::from),
            time: entry.time.to_owned(),
            duration: entry.duration.map(FieldValue::from),
            water_intake: entry.water_intake.map(FieldValue::from),
            notes: entry.notes.to_owned(),
        }
    }
}

pub(crate) fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
