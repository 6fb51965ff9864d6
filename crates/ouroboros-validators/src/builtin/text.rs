//! String validators

use crate::errors::{ErrorType, OptionError, ValidationContext, ValidationErrors};
use crate::formats;
use crate::options::ValidatorOptions;
use crate::types::Value;
use crate::validator::Validator;
use regex::Regex;

/// Report a type error unless `value` is a string; returns the string
fn expect_string<'v>(
    value: &'v Value,
    ctx: &ValidationContext,
    errors: &mut ValidationErrors,
) -> Option<&'v str> {
    match value {
        Value::String(s) => Some(s),
        other => {
            errors.add(ctx.error(
                ErrorType::TypeError,
                format!("Expected string, got {}", other.type_name()),
            ));
            None
        }
    }
}

// ============================================================================
// NotEmpty
// ============================================================================

/// Rejects null, `""`, and empty collections
#[derive(Debug, Default, Clone, Copy)]
pub struct NotEmptyValidator;

impl Validator for NotEmptyValidator {
    fn name(&self) -> &str {
        "NotEmpty"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        if value.is_empty() {
            errors.add(ctx.error(ErrorType::ValueError, "Value must not be empty"));
        }
    }
}

// ============================================================================
// StringLength
// ============================================================================

/// Length bounds in characters (`minimum`, `maximum`, both inclusive)
#[derive(Debug, Default, Clone)]
pub struct StringLengthValidator {
    minimum: Option<usize>,
    maximum: Option<usize>,
}

impl Validator for StringLengthValidator {
    fn name(&self) -> &str {
        "StringLength"
    }

    fn set_options(&mut self, options: &ValidatorOptions) -> Result<(), OptionError> {
        let minimum = options.parse::<usize>("minimum")?;
        let maximum = options.parse::<usize>("maximum")?;
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
        let Some(s) = expect_string(value, ctx, errors) else {
            return;
        };
        let char_count = s.chars().count();

        if let Some(min) = self.minimum {
            if char_count < min {
                errors.add(ctx.error(
                    ErrorType::ValueError,
                    format!("String must be at least {} characters (got {})", min, char_count),
                ));
            }
        }

        if let Some(max) = self.maximum {
            if char_count > max {
                errors.add(ctx.error(
                    ErrorType::ValueError,
                    format!("String must be at most {} characters (got {})", max, char_count),
                ));
            }
        }
    }
}

// ============================================================================
// RegularExpression
// ============================================================================

/// Matches the string against the required `pattern` option
#[derive(Debug, Default, Clone)]
pub struct RegularExpressionValidator {
    pattern: Option<Regex>,
}

impl Validator for RegularExpressionValidator {
    fn name(&self) -> &str {
        "RegularExpression"
    }

    fn set_options(&mut self, options: &ValidatorOptions) -> Result<(), OptionError> {
        let raw = options.require::<String>("pattern")?;
        let regex = Regex::new(&raw).map_err(|e| OptionError::Invalid {
            option: "pattern".to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        })?;
        self.pattern = Some(regex);
        Ok(())
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        let Some(s) = expect_string(value, ctx, errors) else {
            return;
        };
        match &self.pattern {
            Some(re) if re.is_match(s) => {}
            Some(re) => errors.add(ctx.error(
                ErrorType::ValueError,
                format!("String does not match pattern '{}'", re.as_str()),
            )),
            None => errors.add(ctx.error(
                ErrorType::ValueError,
                "Regular expression validator has no pattern configured",
            )),
        }
    }
}

// ============================================================================
// Format validators
// ============================================================================

/// Email address format
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailAddressValidator;

impl Validator for EmailAddressValidator {
    fn name(&self) -> &str {
        "EmailAddress"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        if let Some(s) = expect_string(value, ctx, errors) {
            if !formats::is_email_address(s) {
                errors.add(ctx.error(ErrorType::FormatError, "Invalid email format"));
            }
        }
    }
}

/// Hyphenated UUID format
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidValidator;

impl Validator for UuidValidator {
    fn name(&self) -> &str {
        "Uuid"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        if let Some(s) = expect_string(value, ctx, errors) {
            if !formats::is_uuid(s) {
                errors.add(ctx.error(ErrorType::FormatError, "Invalid UUID format"));
            }
        }
    }
}

/// Letters and digits only
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphanumericValidator;

impl Validator for AlphanumericValidator {
    fn name(&self) -> &str {
        "Alphanumeric"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        if let Some(s) = expect_string(value, ctx, errors) {
            if !formats::is_alphanumeric(s) {
                errors.add(ctx.error(
                    ErrorType::FormatError,
                    "String must contain only letters and digits",
                ));
            }
        }
    }
}

/// Plain text: any string without markup tags
#[derive(Debug, Default, Clone, Copy)]
pub struct TextValidator;

impl Validator for TextValidator {
    fn name(&self) -> &str {
        "Text"
    }

    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors) {
        if let Some(s) = expect_string(value, ctx, errors) {
            if formats::contains_markup(s) {
                errors.add(ctx.error(ErrorType::FormatError, "Text must not contain markup"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured<V: Validator + Default>(options: ValidatorOptions) -> V {
        let mut validator = V::default();
        validator.set_options(&options).unwrap();
        validator
    }

    #[test]
    fn test_not_empty() {
        assert!(NotEmptyValidator.validate(&Value::from("x")).is_ok());
        assert!(NotEmptyValidator.validate(&Value::Int(0)).is_ok());
        assert!(NotEmptyValidator.validate(&Value::from("")).is_err());
        assert!(NotEmptyValidator.validate(&Value::Null).is_err());
    }

    #[test]
    fn test_string_length_bounds() {
        let validator: StringLengthValidator =
            configured(ValidatorOptions::new().with("minimum", "3").with("maximum", "5"));

        assert!(validator.validate(&Value::from("abc")).is_ok());
        assert!(validator.validate(&Value::from("abcde")).is_ok());
        assert!(validator.validate(&Value::from("ab")).is_err());
        assert!(validator.validate(&Value::from("abcdef")).is_err());
        assert!(validator.validate(&Value::Int(4)).is_err());
    }

    #[test]
    fn test_string_length_counts_chars() {
        let validator: StringLengthValidator =
            configured(ValidatorOptions::new().with("maximum", "2"));
        assert!(validator.validate(&Value::from("éé")).is_ok());
    }

    #[test]
    fn test_string_length_rejects_inverted_bounds() {
        let mut validator = StringLengthValidator::default();
        let options = ValidatorOptions::new().with("minimum", "9").with("maximum", "1");
        assert!(validator.set_options(&options).is_err());
    }

    #[test]
    fn test_regular_expression() {
        let validator: RegularExpressionValidator =
            configured(ValidatorOptions::new().with("pattern", "^[a-z]+$"));
        assert!(validator.validate(&Value::from("abc")).is_ok());
        assert!(validator.validate(&Value::from("abc1")).is_err());
    }

    #[test]
    fn test_regular_expression_requires_valid_pattern() {
        let mut validator = RegularExpressionValidator::default();
        assert!(matches!(
            validator.set_options(&ValidatorOptions::new()),
            Err(OptionError::Missing { .. })
        ));
        assert!(matches!(
            validator.set_options(&ValidatorOptions::new().with("pattern", "(")),
            Err(OptionError::Invalid { .. })
        ));
    }

    #[test]
    fn test_email_address() {
        assert!(EmailAddressValidator.validate(&Value::from("a@b.com")).is_ok());
        let errors = EmailAddressValidator
            .validate(&Value::from("not-an-email"))
            .unwrap_err();
        assert_eq!(errors.as_slice()[0].error_type, ErrorType::FormatError);
    }

    #[test]
    fn test_text_and_alphanumeric() {
        assert!(TextValidator.validate(&Value::from("hello world")).is_ok());
        assert!(TextValidator.validate(&Value::from("<b>hi</b>")).is_err());
        assert!(AlphanumericValidator.validate(&Value::from("abc123")).is_ok());
        assert!(AlphanumericValidator.validate(&Value::from("abc 123")).is_err());
    }
}
