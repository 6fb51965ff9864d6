use crate::errors::{ErrorType, ValidationContext, ValidationErrors};
use crate::types::Value;
use crate::validator::Validator;

/// Native booleans only
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanValidator;

impl Validator for BooleanValidator {
    fn name(&self) -> &str {
        "Boolean"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        if !matches!(value, Value::Bool(_)) {
            errors.add(ctx.error(
                ErrorType::TypeError,
                format!("Expected boolean, got {}", value.type_name()),
            ));
        }
    }
}

/// Accepts every value (`mixed`)
#[derive(Debug, Default, Clone, Copy)]
pub struct RawValidator;

impl Validator for RawValidator {
    fn name(&self) -> &str {
        "Raw"
    }

    fn check(&self, _value: &Value, _ctx: &mut ValidationContext, _errors: &mut ValidationErrors) {}
}
