//! Composite validators
//!
//! [`ValidatorConjunction`] ANDs its children and [`GenericObjectValidator`]
//! fans out over the properties of an object value. Neither short-circuits:
//! all child errors are collected.

use crate::errors::{ErrorType, ValidationContext, ValidationErrors};
use crate::types::Value;
use crate::validator::{BoxedValidator, Validator, ValidatorShape};

// ============================================================================
// Conjunction
// ============================================================================

/// Logical AND over an ordered list of validators
#[derive(Debug, Default)]
pub struct ValidatorConjunction {
    validators: Vec<BoxedValidator>,
}

impl ValidatorConjunction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator; evaluation follows insertion order
    pub fn add_validator(&mut self, validator: BoxedValidator) {
        self.validators.push(validator);
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// An empty conjunction imposes no constraint
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn validators(&self) -> impl Iterator<Item = &dyn Validator> {
        self.validators.iter().map(|v| v.as_ref())
    }
}

impl Validator for ValidatorConjunction {
    fn name(&self) -> &str {
        "Conjunction"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        for validator in &self.validators {
            validator.check(value, ctx, errors);
        }
    }

    fn shape(&self) -> ValidatorShape {
        ValidatorShape::Conjunction(self.validators.iter().map(|v| v.shape()).collect())
    }
}

// ============================================================================
// Generic Object Validator
// ============================================================================

/// Applies per-property conjunctions to the properties of an object value
///
/// A property missing from the value is validated as [`Value::Null`].
#[derive(Debug, Default)]
pub struct GenericObjectValidator {
    properties: Vec<(String, ValidatorConjunction)>,
}

impl GenericObjectValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a validator to a property; repeated calls accumulate
    pub fn add_property_validator(&mut self, property: &str, validator: BoxedValidator) {
        match self.properties.iter_mut().find(|(name, _)| name == property) {
            Some((_, conjunction)) => conjunction.add_validator(validator),
            None => {
                let mut conjunction = ValidatorConjunction::new();
                conjunction.add_validator(validator);
                self.properties.push((property.to_string(), conjunction));
            }
        }
    }

    pub fn property_validators(&self, property: &str) -> Option<&ValidatorConjunction> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, conjunction)| conjunction)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Validator for GenericObjectValidator {
    fn name(&self) -> &str {
        "GenericObject"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        if !matches!(value, Value::Object(_)) {
            errors.add(ctx.error(
                ErrorType::TypeError,
                format!("Expected object, got {}", value.type_name()),
            ));
            return;
        }

        for (property, conjunction) in &self.properties {
            let property_value = value.get_property(property).unwrap_or(&Value::Null);
            ctx.push(property);
            conjunction.check(property_value, ctx, errors);
            ctx.pop();
        }
    }

    fn shape(&self) -> ValidatorShape {
        ValidatorShape::Object(
            self.properties
                .iter()
                .map(|(name, conjunction)| (name.clone(), conjunction.shape()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{EmailAddressValidator, NotEmptyValidator};

    #[test]
    fn test_empty_conjunction_accepts_anything() {
        let conjunction = ValidatorConjunction::new();
        assert!(conjunction.is_empty());
        assert!(conjunction.validate(&Value::Null).is_ok());
    }

    #[test]
    fn test_conjunction_collects_all_errors() {
        let mut conjunction = ValidatorConjunction::new();
        conjunction.add_validator(Box::new(NotEmptyValidator));
        conjunction.add_validator(Box::new(EmailAddressValidator));

        let errors = conjunction.validate(&Value::from("")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(conjunction.validate(&Value::from("a@b.com")).is_ok());
    }

    #[test]
    fn test_object_validator_accumulates_per_property() {
        let mut object = GenericObjectValidator::new();
        object.add_property_validator("email", Box::new(NotEmptyValidator));
        object.add_property_validator("email", Box::new(EmailAddressValidator));

        assert_eq!(object.property_names().collect::<Vec<_>>(), vec!["email"]);
        assert_eq!(object.property_validators("email").map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_object_validator_reports_field_path() {
        let mut object = GenericObjectValidator::new();
        object.add_property_validator("email", Box::new(EmailAddressValidator));

        let errors = object
            .validate(&Value::object([("email", Value::from("nope"))]))
            .unwrap_err();
        assert_eq!(errors.as_slice()[0].field, "email");
    }

    #[test]
    fn test_object_validator_missing_property_is_null() {
        let mut object = GenericObjectValidator::new();
        object.add_property_validator("name", Box::new(NotEmptyValidator));

        assert!(object.validate(&Value::object(Vec::<(String, Value)>::new())).is_err());
    }

    #[test]
    fn test_object_validator_rejects_non_objects() {
        let object = GenericObjectValidator::new();
        let errors = object.validate(&Value::Int(3)).unwrap_err();
        assert_eq!(errors.as_slice()[0].error_type, ErrorType::TypeError);
    }

    #[test]
    fn test_shape() {
        let mut object = GenericObjectValidator::new();
        object.add_property_validator("email", Box::new(EmailAddressValidator));
        let mut conjunction = ValidatorConjunction::new();
        conjunction.add_validator(Box::new(object));

        assert_eq!(
            conjunction.shape(),
            ValidatorShape::Conjunction(vec![ValidatorShape::Object(vec![(
                "email".to_string(),
                ValidatorShape::Conjunction(vec![ValidatorShape::Leaf(
                    "EmailAddress".to_string()
                )])
            )])])
        );
    }
}
