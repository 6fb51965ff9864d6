//! Ouroboros Validator Resolver
//!
//! Turns `validate` annotations such as
//! `$name NotEmpty, StringLength(minimum=3, maximum=50)` into executable
//! validator trees.
//!
//! - [`parse_annotation`] / [`parse_options`]: the annotation grammar and
//!   its two option dialects (bare `key=value` and quoted values)
//! - [`NameResolver`]: logical names (`int`, `email`, fully qualified
//!   identifiers) to registered validator identifiers
//! - [`ConjunctionBuilder`]: per-class and per-method validator trees
//! - [`ConjunctionCache`]: at most one build per data type
//! - [`ValidatorResolver`]: the facade tying them together
//!
//! # Features
//!
//! - **Default**: Everything above
//! - **serde**: Deserialize [`ResolverConfig`] from configuration files
//!
//! # Example
//!
//! ```rust
//! use ouroboros_validator_resolver::{ClassMetadata, StaticReflection, ValidatorResolver};
//! use ouroboros_validators::{ValidatorRegistry, Value, BUILTIN_NAMESPACE, Validator};
//! use std::sync::Arc;
//!
//! let reflection = StaticReflection::new().with_class(
//!     ClassMetadata::new("Acme\\Controller\\UserController")
//!         .method_tag("register", "validate", "$username NotEmpty, StringLength(minimum=3)"),
//! );
//! let registry = Arc::new(ValidatorRegistry::with_builtins(BUILTIN_NAMESPACE));
//! let resolver = ValidatorResolver::new(Arc::new(reflection), registry);
//!
//! let arguments = resolver
//!     .build_method_arguments_validator_conjunctions(
//!         "Acme\\Controller\\UserController",
//!         "register",
//!     )
//!     .unwrap();
//! assert!(arguments["username"].validate(&Value::from("bob")).is_ok());
//! assert!(arguments["username"].validate(&Value::from("bo")).is_err());
//! ```

// Public modules
pub mod annotation;
pub mod builder;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod options;
pub mod reflection;
pub mod resolver;

// Re-export commonly used types
pub use annotation::{
    parse_annotation, AnnotationDiagnostic, DiagnosticKind, ParsedAnnotation, ValidatorSpec,
};
pub use builder::ConjunctionBuilder;
pub use cache::ConjunctionCache;
pub use config::{ResolverConfig, ENV_PREFIX};
pub use error::{OpenError, ResolverError, ResolverResult};
pub use logging::init_tracing;
pub use naming::{primitive_alias, unify_data_type, NameResolver};
pub use options::{parse_options, parse_options_with_diagnostics};
pub use reflection::{ClassMetadata, ReflectionService, StaticReflection, TagsValues};
pub use resolver::ValidatorResolver;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
