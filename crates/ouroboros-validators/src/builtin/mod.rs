//! Built-in validators
//!
//! Registered by [`ValidatorRegistry::with_builtins`](crate::ValidatorRegistry::with_builtins)
//! under `<namespace><Name>Validator`, e.g. `Ouroboros\Validation\Validator\NotEmptyValidator`.

mod numeric;
mod primitive;
mod text;

pub use numeric::{FloatValidator, IntegerValidator, NumberRangeValidator, NumberValidator};
pub use primitive::{BooleanValidator, RawValidator};
pub use text::{
    AlphanumericValidator, EmailAddressValidator, NotEmptyValidator, RegularExpressionValidator,
    StringLengthValidator, TextValidator, UuidValidator,
};

/// Namespace prefix of the built-in validator identifiers
pub const BUILTIN_NAMESPACE: &str = "Ouroboros\\Validation\\Validator\\";

/// Suffix every built-in validator identifier ends with
pub const VALIDATOR_SUFFIX: &str = "Validator";
