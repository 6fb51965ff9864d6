//! Validator name resolution
//!
//! A name from an annotation is either a registered identifier already
//! (fully qualified custom validators) or a short logical name that maps
//! onto a built-in: `int` → `<namespace>IntegerValidator`,
//! `notEmpty` → `<namespace>NotEmptyValidator`.

use crate::config::ResolverConfig;
use ouroboros_validators::ValidatorRegistry;
use std::sync::Arc;
use tracing::trace;

/// Primitive type names and the validator they stand for
pub fn primitive_alias(name: &str) -> Option<&'static str> {
    match name {
        "int" => Some("Integer"),
        "string" => Some("Text"),
        "bool" => Some("Boolean"),
        "double" => Some("Float"),
        "numeric" => Some("Number"),
        "mixed" => Some("Raw"),
        _ => None,
    }
}

/// Apply the alias table and upper-case the first letter
pub fn unify_data_type(name: &str) -> String {
    let name = primitive_alias(name).unwrap_or(name);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Maps logical validator names to registered identifiers
#[derive(Debug, Clone)]
pub struct NameResolver {
    registry: Arc<ValidatorRegistry>,
    namespace: String,
    suffix: String,
    model_segment: String,
    validator_segment: String,
}

impl NameResolver {
    pub fn new(registry: Arc<ValidatorRegistry>, config: &ResolverConfig) -> Self {
        Self {
            registry,
            namespace: config.validator_namespace.clone(),
            suffix: config.validator_suffix.clone(),
            model_segment: config.model_segment.clone(),
            validator_segment: config.validator_segment.clone(),
        }
    }

    /// Resolve `name` to a registered identifier
    ///
    /// Registered identifiers are returned unchanged; otherwise the
    /// conventional built-in identifier is tried.
    pub fn resolve(&self, name: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        if self.registry.is_registered(name) {
            trace!(validator = %name, "Validator name is a registered identifier");
            return Some(name.to_string());
        }

        let candidate = self.builtin_identifier(name);
        if self.registry.is_registered(&candidate) {
            trace!(validator = %name, identifier = %candidate, "Resolved validator by convention");
            return Some(candidate);
        }

        None
    }

    /// `<namespace><Unified name><suffix>`, registered or not
    pub fn builtin_identifier(&self, name: &str) -> String {
        format!("{}{}{}", self.namespace, unify_data_type(name), self.suffix)
    }

    /// Conventional identifier of a data type's own validator
    ///
    /// `Acme\Blog\Model\Post` → `Acme\Blog\Validator\PostValidator`
    pub fn custom_validator_name(&self, data_type: &str) -> String {
        format!(
            "{}{}",
            data_type.replace(&self.model_segment, &self.validator_segment),
            self.suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ouroboros_validators::builtin::NotEmptyValidator;
    use ouroboros_validators::BUILTIN_NAMESPACE;

    fn resolver() -> NameResolver {
        let registry = Arc::new(ValidatorRegistry::with_builtins(BUILTIN_NAMESPACE));
        NameResolver::new(registry, &ResolverConfig::default())
    }

    #[test]
    fn test_unify_data_type() {
        assert_eq!(unify_data_type("int"), "Integer");
        assert_eq!(unify_data_type("string"), "Text");
        assert_eq!(unify_data_type("bool"), "Boolean");
        assert_eq!(unify_data_type("double"), "Float");
        assert_eq!(unify_data_type("numeric"), "Number");
        assert_eq!(unify_data_type("mixed"), "Raw");
        assert_eq!(unify_data_type("email"), "Email");
        assert_eq!(unify_data_type("notEmpty"), "NotEmpty");
        assert_eq!(unify_data_type(""), "");
    }

    #[test]
    fn test_resolve_alias() {
        assert_eq!(
            resolver().resolve("int").as_deref(),
            Some("Ouroboros\\Validation\\Validator\\IntegerValidator")
        );
    }

    #[test]
    fn test_resolve_short_name() {
        let names = resolver();
        assert_eq!(
            names.resolve("notEmpty").as_deref(),
            Some("Ouroboros\\Validation\\Validator\\NotEmptyValidator")
        );
        assert_eq!(
            names.resolve("EmailAddress").as_deref(),
            Some("Ouroboros\\Validation\\Validator\\EmailAddressValidator")
        );
    }

    #[test]
    fn test_resolve_registered_identifier_unchanged() {
        let names = resolver();
        names
            .registry
            .register_default::<NotEmptyValidator>("Fully\\Qualified\\CustomValidator");
        assert_eq!(
            names.resolve("Fully\\Qualified\\CustomValidator").as_deref(),
            Some("Fully\\Qualified\\CustomValidator")
        );
    }

    #[test]
    fn test_resolve_unknown() {
        let names = resolver();
        assert_eq!(names.resolve("Bogus"), None);
        assert_eq!(names.resolve(""), None);
        assert_eq!(names.resolve("Fully\\Qualified\\CustomValidator"), None);
    }

    #[test]
    fn test_custom_validator_name() {
        let names = resolver();
        assert_eq!(
            names.custom_validator_name("Acme\\Blog\\Model\\Post"),
            "Acme\\Blog\\Validator\\PostValidator"
        );
        assert_eq!(names.custom_validator_name("Acme\\Post"), "Acme\\PostValidator");
    }
}
