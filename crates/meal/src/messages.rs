use crate::{Field, FieldErrorKind};

pub(crate) const LOCALE: &str = "es";

/// User-facing text for a field error, looked up in `locales/es.yml` under
/// `{field}.{kind}`.
pub fn message(field: Field, kind: FieldErrorKind) -> String {
    rust_i18n::t!(format!("{}.{}", field.as_ref(), kind.as_ref()), locale = LOCALE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed_spanish_text() {
        let cases = [
            (Field::Type, FieldErrorKind::InvalidEnum, "Tipo de comida no válido"),
            (
                Field::Name,
                FieldErrorKind::TooShort,
                "El nombre debe tener al menos 2 caracteres",
            ),
            (
                Field::Calories,
                FieldErrorKind::Negative,
                "Las calorías no pueden ser negativas",
            ),
            (
                Field::Duration,
                FieldErrorKind::TooSmall,
                "La duración debe ser mayor a 0",
            ),
            (
                Field::WaterIntake,
                FieldErrorKind::Negative,
                "La cantidad de agua no puede ser negativa",
            ),
            (
                Field::Duration,
                FieldErrorKind::NotANumber,
                "Debe ser un número válido",
            ),
        ];

        for (field, kind, expected) in cases {
            assert_eq!(message(field, kind), expected);
        }
    }
}
