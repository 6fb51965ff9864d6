//! Validation error types
//!
//! Two families live here: the failures a validator *reports* about a value
//! ([`ValidationError`], collected into [`ValidationErrors`]), and the errors
//! raised while *configuring* validators ([`OptionError`], [`RegistryError`]).

use std::fmt;
use thiserror::Error;

/// Outcome of running a validator against a value
pub type ValidationResult<T> = Result<T, ValidationErrors>;

// ============================================================================
// Reported Failures
// ============================================================================

/// Every failure found in one validation pass
///
/// Composite validators append here instead of returning early, so a
/// single pass reports every rule the value breaks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// `Ok` when nothing was reported
    pub fn into_result(self) -> ValidationResult<()> {
        match self.is_empty() {
            true => Ok(()),
            false => Err(self),
        }
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    /// Failures reported at one property path (`"email"`, `"address.city"`)
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.0.iter().filter(move |error| error.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// One broken rule
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// What was validated (`"argument"`, `"username"`); empty when unknown
    pub location: String,
    /// Dotted property path inside the value; empty for the value itself
    pub field: String,
    pub message: String,
    pub error_type: ErrorType,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.location.is_empty(), self.field.is_empty()) {
            (true, true) => write!(f, "{} [{}]", self.message, self.error_type),
            (true, false) => write!(f, "{}: {} [{}]", self.field, self.message, self.error_type),
            (false, true) => write!(f, "{}: {} [{}]", self.location, self.message, self.error_type),
            (false, false) => write!(
                f,
                "{}.{}: {} [{}]",
                self.location, self.field, self.message, self.error_type
            ),
        }
    }
}

/// Broad category of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// The value has the wrong kind (string expected, object expected)
    TypeError,
    /// The value breaks a constraint (too long, out of range, empty)
    ValueError,
    /// The value is malformed (email address, UUID, pattern mismatch)
    FormatError,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TypeError => "type_error",
            Self::ValueError => "value_error",
            Self::FormatError => "format_error",
        })
    }
}

// ============================================================================
// Validation Context
// ============================================================================

/// Position of the validator inside the value being walked
///
/// [`GenericObjectValidator`](crate::GenericObjectValidator) pushes each
/// property name before descending, so leaf validators report full paths.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    location: String,
    path: Vec<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a value originating at `location`
    pub fn with_location(location: &str) -> Self {
        Self {
            location: location.to_string(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, field: &str) {
        self.path.push(field.to_string());
    }

    pub fn pop(&mut self) {
        self.path.pop();
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Dotted path of the current property
    pub fn field(&self) -> String {
        self.path.join(".")
    }

    /// Failure anchored at the current position
    pub fn error(&self, error_type: ErrorType, message: impl Into<String>) -> ValidationError {
        ValidationError {
            location: self.location.clone(),
            field: self.field(),
            message: message.into(),
            error_type,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// A validator rejected the options it was configured with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("Missing required option '{option}'")]
    Missing { option: String },

    #[error("Invalid value '{value}' for option '{option}': {reason}")]
    Invalid {
        option: String,
        value: String,
        reason: String,
    },
}

/// The registry could not hand out a validator instance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Validator '{0}' is not registered")]
    NotRegistered(String),

    #[error("Could not construct validator '{identifier}': {reason}")]
    Construction { identifier: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_are_ok() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_errors_by_field() {
        let mut ctx = ValidationContext::new();
        let mut errors = ValidationErrors::new();
        ctx.push("age");
        errors.add(ctx.error(ErrorType::TypeError, "Expected integer"));
        ctx.pop();
        ctx.push("name");
        errors.add(ctx.error(ErrorType::ValueError, "Too short"));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.for_field("age").count(), 1);
        assert_eq!(
            errors.to_string(),
            "age: Expected integer [type_error]; name: Too short [value_error]"
        );
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_context_paths() {
        let mut ctx = ValidationContext::with_location("argument");
        assert_eq!(ctx.field(), "");

        ctx.push("user");
        ctx.push("name");
        assert_eq!(ctx.field(), "user.name");

        ctx.pop();
        let error = ctx.error(ErrorType::ValueError, "bad");
        assert_eq!(error.field, "user");
        assert_eq!(error.location, "argument");
        assert_eq!(error.to_string(), "argument.user: bad [value_error]");
    }

    #[test]
    fn test_option_error_display() {
        let err = OptionError::Invalid {
            option: "minimum".to_string(),
            value: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value 'abc' for option 'minimum': not a number"
        );
    }
}
