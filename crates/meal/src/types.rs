use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::OffsetDateTime;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A meal entry that passed validation.
///
/// Optional fields are `None` when the user left them blank; a zero is kept
/// as a zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    pub description: Option<String>,
    pub calories: Option<u32>,
    pub time: Option<String>,
    pub duration: Option<u32>,
    pub water_intake: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Client,
    Nutritionist,
}

impl Role {
    pub fn can_review(&self) -> bool {
        matches!(self, Role::Nutritionist)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
