//! Core validator trait
//!
//! Every validator, built-in or custom, is configured once through
//! [`Validator::set_options`] and afterwards only read. Validators are
//! `Send + Sync` so a composed tree can be shared across threads.

use crate::errors::{OptionError, ValidationContext, ValidationErrors, ValidationResult};
use crate::options::ValidatorOptions;
use crate::types::Value;
use std::fmt;

/// The validator capability
pub trait Validator: Send + Sync + fmt::Debug {
    /// Short name used in logs and shape comparisons (e.g. "NotEmpty")
    fn name(&self) -> &str;

    /// Apply options parsed from an annotation
    ///
    /// Called once, right after construction. Validators without options
    /// accept anything.
    fn set_options(&mut self, options: &ValidatorOptions) -> Result<(), OptionError> {
        let _ = options;
        Ok(())
    }

    /// Check `value`, appending every violation to `errors`
    fn check(&self, value: &Value, ctx: &mut ValidationContext, errors: &mut ValidationErrors);

    /// Validate a value from scratch
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        let mut ctx = ValidationContext::new();
        let mut errors = ValidationErrors::new();
        self.check(value, &mut ctx, &mut errors);
        errors.into_result()
    }

    /// Structural description of this validator (and its children)
    fn shape(&self) -> ValidatorShape {
        ValidatorShape::Leaf(self.name().to_string())
    }
}

/// Type alias for boxed validator
pub type BoxedValidator = Box<dyn Validator>;

/// Tree shape of a composed validator, comparable across builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorShape {
    /// A single validator
    Leaf(String),
    /// Children of a conjunction, in evaluation order
    Conjunction(Vec<ValidatorShape>),
    /// Per-property children of a generic object validator
    Object(Vec<(String, ValidatorShape)>),
}
