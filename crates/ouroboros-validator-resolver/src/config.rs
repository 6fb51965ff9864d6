//! Configuration options for validator resolution

use crate::error::{ResolverError, ResolverResult};
use ouroboros_validators::{BUILTIN_NAMESPACE, VALIDATOR_SUFFIX};

/// Environment variable prefix read by [`ResolverConfig::from_env`]
pub const ENV_PREFIX: &str = "OUROBOROS_VALIDATION_";

// ============================================================================
// Resolver Config
// ============================================================================

/// Controls naming conventions, caching and failure policy
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Prefix of built-in validator identifiers
    pub validator_namespace: String,

    /// Suffix appended to validator identifiers
    pub validator_suffix: String,

    /// Namespace segment of model types...
    pub model_segment: String,

    /// ...and what it becomes in the type's custom validator identifier
    pub validator_segment: String,

    /// Annotation tag holding validation rules
    pub annotation_tag: String,

    /// Memoize per-type conjunctions
    pub cache_enabled: bool,

    /// Parse diagnostics in method annotations are errors
    pub strict_method_annotations: bool,

    /// Unresolvable property validators are errors instead of being skipped
    pub strict_property_annotations: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            validator_namespace: BUILTIN_NAMESPACE.to_string(),
            validator_suffix: VALIDATOR_SUFFIX.to_string(),
            model_segment: "\\Model\\".to_string(),
            validator_segment: "\\Validator\\".to_string(),
            annotation_tag: "validate".to_string(),
            cache_enabled: true,
            strict_method_annotations: true,
            strict_property_annotations: false,
        }
    }
}

impl ResolverConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `OUROBOROS_VALIDATION_*` environment variables
    pub fn from_env() -> ResolverResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> ResolverResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));
        let flag = |name: &str| -> ResolverResult<Option<bool>> {
            var(name).map(|raw| parse_flag(name, &raw)).transpose()
        };

        let mut config = Self::default();
        if let Some(namespace) = var("NAMESPACE") {
            config.validator_namespace = namespace;
        }
        if let Some(tag) = var("TAG") {
            config.annotation_tag = tag;
        }
        if let Some(enabled) = flag("CACHE")? {
            config.cache_enabled = enabled;
        }
        if let Some(strict) = flag("STRICT_METHODS")? {
            config.strict_method_annotations = strict;
        }
        if let Some(strict) = flag("STRICT_PROPERTIES")? {
            config.strict_property_annotations = strict;
        }
        Ok(config)
    }

    /// Set the built-in validator namespace
    pub fn validator_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.validator_namespace = namespace.into();
        self
    }

    /// Set the model/validator namespace segments used for custom validators
    pub fn segments(mut self, model: impl Into<String>, validator: impl Into<String>) -> Self {
        self.model_segment = model.into();
        self.validator_segment = validator.into();
        self
    }

    /// Set the annotation tag name
    pub fn annotation_tag(mut self, tag: impl Into<String>) -> Self {
        self.annotation_tag = tag.into();
        self
    }

    /// Enable or disable the conjunction cache
    pub fn cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Treat method annotation diagnostics as errors
    pub fn strict_methods(mut self, strict: bool) -> Self {
        self.strict_method_annotations = strict;
        self
    }

    /// Treat unresolvable property validators as errors
    pub fn strict_properties(mut self, strict: bool) -> Self {
        self.strict_property_annotations = strict;
        self
    }
}

fn parse_flag(name: &str, raw: &str) -> ResolverResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ResolverError::Configuration(format!(
            "{}{} must be a boolean, got '{}'",
            ENV_PREFIX, name, raw
        ))),
    }
}
