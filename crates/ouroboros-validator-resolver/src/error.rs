//! Resolver error types

use crate::annotation::AnnotationDiagnostic;
use ouroboros_validators::{OptionError, RegistryError};
use thiserror::Error;

/// Result type alias for resolver operations
pub type ResolverResult<T> = std::result::Result<T, ResolverError>;

/// Why a resolved identifier could not be turned into a configured validator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Options(#[from] OptionError),
}

/// Errors raised while resolving and composing validators
///
/// All of these are configuration errors: retrying never helps.
#[derive(Error, Debug, Clone)]
pub enum ResolverError {
    /// No registered validator answers to this name
    #[error("No validator found for name \"{0}\"")]
    ValidatorNotFound(String),

    /// The identifier is registered but could not be constructed or configured
    #[error("Validator \"{identifier}\" could not be opened: {source}")]
    UnopenableRegistryTarget {
        identifier: String,
        #[source]
        source: OpenError,
    },

    /// A method annotation names a validator that cannot be resolved
    #[error("Invalid validate annotation in {class_name}->{method_name}(): could not resolve validator \"{validator}\": {reason}")]
    UnresolvableValidator {
        class_name: String,
        method_name: String,
        validator: String,
        reason: String,
    },

    /// A property annotation names a validator that cannot be resolved (strict mode)
    #[error("Invalid validate annotation in {data_type}::{property}: could not resolve validator \"{validator}\": {reason}")]
    UnresolvableProperty {
        data_type: String,
        property: String,
        validator: String,
        reason: String,
    },

    /// Annotation text the parser could not fully interpret
    #[error("Malformed validate annotation in {location}: {}", join_diagnostics(.diagnostics))]
    MalformedAnnotation {
        location: String,
        diagnostics: Vec<AnnotationDiagnostic>,
    },

    /// A method annotation without a `$argument` marker
    #[error("Validate annotation \"{annotation}\" in {class_name}->{method_name}() does not name an argument")]
    MissingArgumentName {
        class_name: String,
        method_name: String,
        annotation: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn join_diagnostics(diagnostics: &[AnnotationDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
