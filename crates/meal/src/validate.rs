use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::input::{FieldValue, NotANumber, optional_text, whole};
use crate::messages::message;
use crate::{MealEntry, MealType, RawMealInput};

/// Validated fields, keyed by their wire name.
#[derive(
    AsRefStr, Display, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Type,
    Name,
    Calories,
    Duration,
    WaterIntake,
}

impl Field {
    fn from_struct_field(name: &str) -> Option<Self> {
        match name {
            "meal_type" => Some(Field::Type),
            "name" => Some(Field::Name),
            "calories" => Some(Field::Calories),
            "duration" => Some(Field::Duration),
            "water_intake" => Some(Field::WaterIntake),
            _ => None,
        }
    }
}

#[derive(EnumString, AsRefStr, Display, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    InvalidEnum,
    TooShort,
    Negative,
    TooSmall,
    NotANumber,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self {
            kind,
            message: message(field, kind),
        }
    }
}

/// Field-level errors of a rejected meal input, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, Vec<FieldError>>);

impl FieldErrors {
    pub fn push(&mut self, field: Field, kind: FieldErrorKind) {
        self.0
            .entry(field)
            .or_default()
            .push(FieldError::new(field, kind));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn get(&self, field: Field) -> &[FieldError] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has(&self, field: Field, kind: FieldErrorKind) -> bool {
        self.get(field).iter().any(|e| e.kind == kind)
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0
            .iter()
            .flat_map(|(field, errors)| errors.iter().map(move |e| (*field, e)))
    }

    fn extend_from(&mut self, errors: &ValidationErrors) {
        for (name, field_errors) in errors.field_errors() {
            let Some(field) = Field::from_struct_field(&name) else {
                tracing::warn!(field = %name, "unmapped validation field");
                continue;
            };

            for error in field_errors {
                match FieldErrorKind::from_str(&error.code) {
                    Ok(kind) => self.push(field, kind),
                    Err(_) => tracing::warn!(%field, code = %error.code, "unmapped validation code"),
                }
            }
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, e)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", e.message)?;
        }

        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[derive(Validate)]
struct MealCandidate {
    #[validate(custom(function = "known_meal_type"))]
    meal_type: String,
    #[validate(length(min = 2, code = "too_short"))]
    name: String,
    #[validate(range(min = 0.0, code = "negative"))]
    calories: Option<f64>,
    #[validate(range(min = 1.0, code = "too_small"))]
    duration: Option<f64>,
    #[validate(range(min = 0.0, code = "negative"))]
    water_intake: Option<f64>,
}

fn known_meal_type(value: &str) -> Result<(), ValidationError> {
    match MealType::from_str(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("invalid_enum")),
    }
}

fn coerce<T>(
    errors: &mut FieldErrors,
    field: Field,
    value: Option<Result<Option<T>, NotANumber>>,
) -> Option<T> {
    match value {
        Some(Ok(value)) => value,
        Some(Err(NotANumber)) => {
            errors.push(field, FieldErrorKind::NotANumber);
            None
        }
        None => None,
    }
}

impl RawMealInput {
    /// Normalizes the payload into a [`MealEntry`], or reports every field
    /// that failed.
    pub fn validate(&self) -> Result<MealEntry, FieldErrors> {
        let mut errors = FieldErrors::default();

        let calories = coerce(
            &mut errors,
            Field::Calories,
            self.calories.as_ref().map(FieldValue::to_decimal),
        );
        let duration = coerce(
            &mut errors,
            Field::Duration,
            self.duration.as_ref().map(FieldValue::to_decimal),
        );
        let water_intake = coerce(
            &mut errors,
            Field::WaterIntake,
            self.water_intake.as_ref().map(FieldValue::to_decimal),
        );

        let candidate = MealCandidate {
            meal_type: self.meal_type.as_deref().unwrap_or_default().to_owned(),
            name: self.name.as_deref().unwrap_or_default().trim().to_owned(),
            calories,
            duration,
            water_intake,
        };

        if let Err(e) = candidate.validate() {
            errors.extend_from(&e);
        }

        // reported alongside any range error
        for (field, value) in [(Field::Calories, calories), (Field::Duration, duration)] {
            if value.is_some_and(|v| v.fract() != 0.0 || v > f64::from(u32::MAX)) {
                errors.push(field, FieldErrorKind::NotANumber);
            }
        }

        let meal_type = MealType::from_str(&candidate.meal_type).ok();
        let Some(meal_type) = meal_type.filter(|_| errors.is_empty()) else {
            tracing::debug!(fields = ?errors.fields(), "meal input rejected");
            return Err(errors);
        };

        Ok(MealEntry {
            meal_type,
            name: candidate.name,
            description: optional_text(&self.description),
            calories: candidate.calories.and_then(whole),
            time: optional_text(&self.time),
            duration: candidate.duration.and_then(whole),
            water_intake: candidate.water_intake,
            notes: optional_text(&self.notes),
        })
    }
}
