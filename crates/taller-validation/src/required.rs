//! Required-field checks

use crate::result::ValidationResult;
use std::collections::HashMap;

/// A form field name paired with the label used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, label: &'static str) -> Self {
        Self { name, label }
    }

    /// The line reported when this field is left empty
    pub fn required_message(&self) -> String {
        format!("{} es requerido.", self.label)
    }
}

/// Required fields of the booking form, in the order they are reported
pub const BOOKING_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", "Nombre del cliente"),
    FieldDescriptor::new("service", "Tipo de reparación"),
    FieldDescriptor::new("vehicle", "Descripción del vehículo"),
    FieldDescriptor::new("date", "Fecha de la cita"),
];

/// Required fields of the payment form
pub const PAYMENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("cardNumber", "Número de tarjeta"),
    FieldDescriptor::new("cardHolder", "Nombre del titular"),
    FieldDescriptor::new("cvv", "CVV"),
];

/// Anything that can answer "what is the current value of field `name`"
///
/// Implemented by the form models and by plain string maps. A field that
/// does not exist answers `None`, which the validators treat as empty.
pub trait FieldSource {
    fn field_value(&self, name: &str) -> Option<&str>;
}

impl FieldSource for HashMap<String, String> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for HashMap<&str, &str> {
    fn field_value(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

/// Checks that every described field holds something besides whitespace.
///
/// Every empty field is reported, in descriptor order.
pub fn validate_required<S: FieldSource + ?Sized>(
    form: &S,
    fields: &[FieldDescriptor],
) -> ValidationResult {
    let mut result = ValidationResult::valid();

    for field in fields {
        let value = form.field_value(field.name).unwrap_or_default();
        if value.trim().is_empty() {
            result.push(field.required_message());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("name", "Nombre del cliente"),
        FieldDescriptor::new("service", "Tipo de reparación"),
        FieldDescriptor::new("vehicle", "Descripción del vehículo"),
    ];

    #[test]
    fn test_all_empty_reports_in_order() {
        let form: HashMap<&str, &str> = HashMap::from([("name", ""), ("service", "  "), ("vehicle", "\t")]);
        let result = validate_required(&form, FIELDS);
        assert_eq!(
            result.errors(),
            [
                "Nombre del cliente es requerido.",
                "Tipo de reparación es requerido.",
                "Descripción del vehículo es requerido.",
            ]
        );
    }

    #[test]
    fn test_missing_field_counts_as_empty() {
        let form: HashMap<&str, &str> = HashMap::from([("name", "Ana"), ("service", "Frenos")]);
        let result = validate_required(&form, FIELDS);
        assert_eq!(result.errors(), ["Descripción del vehículo es requerido."]);
    }

    #[test]
    fn test_booking_descriptors_all_empty() {
        let form: HashMap<String, String> = HashMap::new();
        let result = validate_required(&form, BOOKING_FIELDS);
        assert_eq!(result.errors().len(), BOOKING_FIELDS.len());
        assert_eq!(result.errors()[3], "Fecha de la cita es requerido.");
    }

    #[test]
    fn test_filled_fields_are_valid() {
        let form: HashMap<&str, &str> =
            HashMap::from([("name", "Ana"), ("service", "Frenos"), ("vehicle", " Seat Ibiza ")]);
        assert!(validate_required(&form, FIELDS).is_valid());
    }
}
