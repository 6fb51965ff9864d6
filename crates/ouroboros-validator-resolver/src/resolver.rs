//! Validator resolver facade

use crate::builder::ConjunctionBuilder;
use crate::cache::ConjunctionCache;
use crate::config::ResolverConfig;
use crate::error::ResolverResult;
use crate::reflection::ReflectionService;
use ouroboros_validators::{
    BoxedValidator, ValidatorConjunction, ValidatorOptions, ValidatorRegistry,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Resolves validator names and builds validator trees from annotations
///
/// Create one per process at start-up and share it; the conjunction cache
/// lives as long as the resolver (or longer, when injected with
/// [`with_cache`](Self::with_cache)).
///
/// # Example
///
/// ```
/// use ouroboros_validator_resolver::{ClassMetadata, StaticReflection, ValidatorResolver};
/// use ouroboros_validators::{Validator, ValidatorRegistry, Value, BUILTIN_NAMESPACE};
/// use std::sync::Arc;
///
/// let reflection = StaticReflection::new().with_class(
///     ClassMetadata::new("Acme\\Model\\Person").property_tag("email", "validate", "EmailAddress"),
/// );
/// let registry = ValidatorRegistry::with_builtins(BUILTIN_NAMESPACE);
/// let resolver = ValidatorResolver::new(Arc::new(reflection), Arc::new(registry));
///
/// let conjunction = resolver.get_base_validator_conjunction("Acme\\Model\\Person").unwrap();
/// let person = Value::object([("email", Value::from("a@b.com"))]);
/// assert!(conjunction.validate(&person).is_ok());
/// ```
pub struct ValidatorResolver {
    builder: ConjunctionBuilder,
    cache: Arc<ConjunctionCache>,
}

impl ValidatorResolver {
    /// Create a resolver with the default configuration
    pub fn new(reflection: Arc<dyn ReflectionService>, registry: Arc<ValidatorRegistry>) -> Self {
        Self::with_config(reflection, registry, ResolverConfig::default())
    }

    pub fn with_config(
        reflection: Arc<dyn ReflectionService>,
        registry: Arc<ValidatorRegistry>,
        config: ResolverConfig,
    ) -> Self {
        debug!(
            namespace = %config.validator_namespace,
            cache_enabled = config.cache_enabled,
            "Creating validator resolver"
        );
        Self {
            builder: ConjunctionBuilder::new(reflection, registry, config),
            cache: Arc::new(ConjunctionCache::new()),
        }
    }

    /// Use a shared cache instead of a private one
    pub fn with_cache(mut self, cache: Arc<ConjunctionCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        self.builder.config()
    }

    pub fn cache(&self) -> &Arc<ConjunctionCache> {
        &self.cache
    }

    /// Registered identifier for `name`, if any
    pub fn resolve_validator_object_name(&self, name: &str) -> Option<String> {
        self.builder.names().resolve(name)
    }

    /// Configured validator for `name`, or `None` when it cannot be opened
    pub fn create_validator(
        &self,
        name: &str,
        options: &ValidatorOptions,
    ) -> Option<BoxedValidator> {
        match self.builder.try_create_validator(name, options) {
            Ok(validator) => Some(validator),
            Err(err) => {
                debug!(validator = %name, error = %err, "Could not create validator");
                None
            }
        }
    }

    /// Like [`create_validator`](Self::create_validator), keeping the reason
    pub fn try_create_validator(
        &self,
        name: &str,
        options: &ValidatorOptions,
    ) -> ResolverResult<BoxedValidator> {
        self.builder.try_create_validator(name, options)
    }

    /// Conjunction of all validators declared for `data_type`
    ///
    /// Built once per type while caching is enabled; otherwise rebuilt on
    /// every call.
    pub fn get_base_validator_conjunction(
        &self,
        data_type: &str,
    ) -> ResolverResult<Arc<ValidatorConjunction>> {
        if !self.config().cache_enabled {
            return self.builder.build_base_conjunction(data_type).map(Arc::new);
        }
        self.cache
            .get_or_try_build(data_type, || self.builder.build_base_conjunction(data_type))
    }

    /// One conjunction per annotated argument of `class_name::method_name`
    pub fn build_method_arguments_validator_conjunctions(
        &self,
        class_name: &str,
        method_name: &str,
    ) -> ResolverResult<BTreeMap<String, ValidatorConjunction>> {
        self.builder.build_argument_conjunctions(class_name, method_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::{ClassMetadata, StaticReflection};
    use ouroboros_validators::BUILTIN_NAMESPACE;

    fn resolver(config: ResolverConfig) -> ValidatorResolver {
        let reflection = StaticReflection::new().with_class(
            ClassMetadata::new("Acme\\Model\\Tag")
                .property_tag("label", "validate", "Alphanumeric"),
        );
        let registry = ValidatorRegistry::with_builtins(BUILTIN_NAMESPACE);
        ValidatorResolver::with_config(Arc::new(reflection), Arc::new(registry), config)
    }

    #[test]
    fn test_create_validator() {
        let resolver = resolver(ResolverConfig::default());
        assert!(resolver.create_validator("int", &ValidatorOptions::new()).is_some());
        assert!(resolver.create_validator("Bogus", &ValidatorOptions::new()).is_none());
        // a required option is missing
        assert!(resolver
            .create_validator("RegularExpression", &ValidatorOptions::new())
            .is_none());
    }

    #[test]
    fn test_resolve_validator_object_name() {
        let resolver = resolver(ResolverConfig::default());
        assert_eq!(
            resolver.resolve_validator_object_name("double").as_deref(),
            Some("Ouroboros\\Validation\\Validator\\FloatValidator")
        );
        assert_eq!(resolver.resolve_validator_object_name("Bogus"), None);
    }

    #[test]
    fn test_cached_conjunction_is_shared() {
        let resolver = resolver(ResolverConfig::default());
        let first = resolver.get_base_validator_conjunction("Acme\\Model\\Tag").unwrap();
        let second = resolver.get_base_validator_conjunction("Acme\\Model\\Tag").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(resolver.cache().build_count(), 1);
    }

    #[test]
    fn test_cache_disabled() {
        let resolver = resolver(ResolverConfig::default().cache(false));
        let first = resolver.get_base_validator_conjunction("Acme\\Model\\Tag").unwrap();
        let second = resolver.get_base_validator_conjunction("Acme\\Model\\Tag").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), second.len());
        assert!(resolver.cache().is_empty());
        assert_eq!(resolver.cache().build_count(), 0);
    }

    #[test]
    fn test_shared_cache() {
        let cache = Arc::new(ConjunctionCache::new());
        let a = resolver(ResolverConfig::default()).with_cache(Arc::clone(&cache));
        let b = resolver(ResolverConfig::default()).with_cache(Arc::clone(&cache));
        a.get_base_validator_conjunction("Acme\\Model\\Tag").unwrap();
        b.get_base_validator_conjunction("Acme\\Model\\Tag").unwrap();
        assert_eq!(cache.build_count(), 1);
    }
}
