//! Ouroboros Validators
//!
//! The validator capability used by Ouroboros' annotation-driven validation:
//! the [`Validator`] trait, the composite validators that annotation
//! resolution builds ([`ValidatorConjunction`], [`GenericObjectValidator`]),
//! a set of built-in validators, and the [`ValidatorRegistry`] that maps
//! identifiers to validator factories.
//!
//! # Features
//!
//! - **Default**: Core validators and registry
//! - **serde**: Conversions between [`Value`] and `serde_json::Value`
//!
//! # Example
//!
//! ```rust
//! use ouroboros_validators::{GenericObjectValidator, Validator, Value};
//! use ouroboros_validators::builtin::EmailAddressValidator;
//!
//! let mut person = GenericObjectValidator::new();
//! person.add_property_validator("email", Box::new(EmailAddressValidator));
//!
//! let valid = Value::object([("email", Value::from("a@b.com"))]);
//! assert!(person.validate(&valid).is_ok());
//!
//! let invalid = Value::object([("email", Value::from("not-an-email"))]);
//! assert!(person.validate(&invalid).is_err());
//! ```

// Public modules
pub mod builtin;
pub mod composite;
pub mod errors;
pub mod formats;
pub mod options;
pub mod registry;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use builtin::{BUILTIN_NAMESPACE, VALIDATOR_SUFFIX};
pub use composite::{GenericObjectValidator, ValidatorConjunction};
pub use errors::{
    ErrorType, OptionError, RegistryError, ValidationContext, ValidationError, ValidationErrors,
    ValidationResult,
};
pub use options::ValidatorOptions;
pub use registry::{ValidatorFactory, ValidatorRegistry};
pub use types::Value;
pub use validator::{BoxedValidator, Validator, ValidatorShape};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
