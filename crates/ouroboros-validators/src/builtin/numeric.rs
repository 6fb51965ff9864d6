//! Numeric validators
//!
//! Numeric strings are accepted alongside native numbers because annotated
//! values often arrive straight from request parameters.

use crate::errors::{ErrorType, OptionError, ValidationContext, ValidationErrors};
use crate::options::ValidatorOptions;
use crate::types::Value;
use crate::validator::Validator;

/// Numeric view of a value, if it has one
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Integer: native integers or strings that parse as one
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerValidator;

impl Validator for IntegerValidator {
    fn name(&self) -> &str {
        "Integer"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        let valid = match value {
            Value::Int(_) => true,
            Value::String(s) => s.trim().parse::<i64>().is_ok(),
            _ => false,
        };
        if !valid {
            errors.add(ctx.error(
                ErrorType::TypeError,
                format!("Expected integer, got {}", value.type_name()),
            ));
        }
    }
}

/// Float: native floats or strings with a fractional part or exponent
#[derive(Debug, Default, Clone, Copy)]
pub struct FloatValidator;

impl Validator for FloatValidator {
    fn name(&self) -> &str {
        "Float"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        let valid = match value {
            Value::Float(_) => true,
            Value::String(s) => s.contains(['.', 'e', 'E']) && s.trim().parse::<f64>().is_ok(),
            _ => false,
        };
        if !valid {
            errors.add(ctx.error(
                ErrorType::TypeError,
                format!("Expected float, got {}", value.type_name()),
            ));
        }
    }
}

/// Any number, native or numeric string
#[derive(Debug, Default, Clone, Copy)]
pub struct NumberValidator;

impl Validator for NumberValidator {
    fn name(&self) -> &str {
        "Number"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        if as_number(value).is_none() {
            errors.add(ctx.error(
                ErrorType::TypeError,
                format!("Expected number, got {}", value.type_name()),
            ));
        }
    }
}

/// Inclusive numeric range (`minimum`, `maximum`)
#[derive(Debug, Default, Clone)]
pub struct NumberRangeValidator {
    minimum: Option<f64>,
    maximum: Option<f64>,
}

impl Validator for NumberRangeValidator {
    fn name(&self) -> &str {
        "NumberRange"
    }

    fn set_options(&mut self, options: &ValidatorOptions) -> Result<(), OptionError> {
        let minimum = options.parse::<f64>("minimum")?;
        let maximum = options.parse::<f64>("maximum")?;
        if let (Some(min), Some(max)) = (minimum, maximum) {
            if min > max {
                return Err(OptionError::Invalid {
                    option: "maximum".to_string(),
                    value: max.to_string(),
                    reason: format!("must not be less than minimum ({})", min),
                });
            }
        }
        self.minimum = minimum;
        self.maximum = maximum;
        Ok(())
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        let Some(number) = as_number(value) else {
            errors.add(ctx.error(
                ErrorType::TypeError,
                format!("Expected number, got {}", value.type_name()),
            ));
            return;
        };

        if let Some(min) = self.minimum {
            if number < min {
                errors.add(ctx.error(
                    ErrorType::ValueError,
                    format!("Value must be >= {} (got {})", min, number),
                ));
            }
        }

        if let Some(max) = self.maximum {
            if number > max {
                errors.add(ctx.error(
                    ErrorType::ValueError,
                    format!("Value must be <= {} (got {})", max, number),
                ));
            }
        }
    }
}
