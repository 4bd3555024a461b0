use crate::{MealEntry, MealType, RawMealInput};

/// Values a form starts from, computed before validation runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormDefaults {
    base: RawMealInput,
    locked_type: Option<MealType>,
}

impl FormDefaults {
    /// Defaults for a new meal. A preselected category becomes the default
    /// type and can no longer be changed by the user.
    pub fn create(preselected: Option<MealType>) -> Self {
        Self {
            base: RawMealInput {
                meal_type: preselected.map(|t| t.to_string()),
                ..Default::default()
            },
            locked_type: preselected,
        }
    }

    /// Defaults for editing an existing meal: every field starts from the
    /// stored record.
    pub fn edit(existing: &MealEntry) -> Self {
        Self {
            base: RawMealInput::from(existing),
            locked_type: None,
        }
    }

    pub fn is_type_locked(&self) -> bool {
        self.locked_type.is_some()
    }

    pub fn locked_type(&self) -> Option<MealType> {
        self.locked_type
    }

    pub fn values(&self) -> &RawMealInput {
        &self.base
    }

    /// Fills fields the user did not provide. A field that was provided
    /// blank stays blank, so clearing a value on edit removes it.
    pub fn apply(&self, raw: RawMealInput) -> RawMealInput {
        let base = self.base.clone();
        let meal_type = match self.locked_type {
            Some(locked) => Some(locked.to_string()),
            None => raw.meal_type.or(base.meal_type),
        };

        RawMealInput {
            meal_type,
            name: raw.name.or(base.name),
            description: raw.description.or(base.description),
            calories: raw.calories.or(base.calories),
            time: raw.time.or(base.time),
            duration: raw.duration.or(base.duration),
            water_intake: raw.water_intake.or(base.water_intake),
            notes: raw.notes.or(base.notes),
        }
    }
}
