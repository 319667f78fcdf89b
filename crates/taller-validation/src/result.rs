//! Aggregated validation outcome

use serde::Serialize;
use std::fmt;

/// Outcome of validating one or more fields.
///
/// Holds the error lines in the order they were produced. A result is valid
/// exactly when it holds no lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// An empty (valid) result
    pub fn valid() -> Self {
        Self::default()
    }

    /// A result holding a single error line
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Append every line of `other` after the lines already held
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Error lines joined with newlines, as shown in the alert
    pub fn message(&self) -> String {
        self.errors.join("\n")
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::valid();
        assert!(result.is_valid());
        assert_eq!(result.message(), "");
    }

    #[test]
    fn test_push_makes_invalid() {
        let mut result = ValidationResult::valid();
        result.push("CVV es requerido.");
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["CVV es requerido."]);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut first = ValidationResult::invalid("uno");
        let mut second = ValidationResult::invalid("dos");
        second.push("tres");
        first.merge(second);
        assert_eq!(first.message(), "uno\ndos\ntres");
        assert_eq!(first.to_string(), first.message());
    }
}
