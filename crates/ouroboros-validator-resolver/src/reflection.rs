//! Class metadata access
//!
//! The resolver never inspects types itself. It asks a [`ReflectionService`]
//! for property names and the raw tag values attached to properties and
//! methods. [`StaticReflection`] is an in-memory provider that hosts fill
//! at start-up.

use dashmap::DashMap;
use std::collections::HashMap;
use std::fmt;

/// Tag name → raw tag values, in declaration order
pub type TagsValues = HashMap<String, Vec<String>>;

/// Source of class and annotation metadata
pub trait ReflectionService: Send + Sync {
    /// Whether `class_name` denotes a known structured type
    fn class_exists(&self, class_name: &str) -> bool;

    /// Declared property names of `class_name`, in declaration order
    fn class_property_names(&self, class_name: &str) -> Vec<String>;

    /// Tags attached to one property
    fn property_tags_values(&self, class_name: &str, property_name: &str) -> TagsValues;

    /// Tags attached to one method
    fn method_tags_values(&self, class_name: &str, method_name: &str) -> TagsValues;
}

// ============================================================================
// Class Metadata
// ============================================================================

/// Metadata of a single class
///
/// # Example
///
/// ```
/// use ouroboros_validator_resolver::ClassMetadata;
///
/// let person = ClassMetadata::new("Acme\\Model\\Person")
///     .property_tag("email", "validate", "EmailAddress")
///     .property("nickname")
///     .method_tag("register", "validate", "$username NotEmpty");
///
/// assert_eq!(person.property_names().collect::<Vec<_>>(), ["email", "nickname"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassMetadata {
    name: String,
    properties: Vec<(String, TagsValues)>,
    methods: HashMap<String, TagsValues>,
}

impl ClassMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a property without tags
    pub fn property(mut self, name: &str) -> Self {
        self.property_entry(name);
        self
    }

    /// Attach a tag value to a property, declaring it if needed
    pub fn property_tag(mut self, property: &str, tag: &str, value: impl Into<String>) -> Self {
        self.property_entry(property)
            .entry(tag.to_string())
            .or_default()
            .push(value.into());
        self
    }

    /// Attach a tag value to a method
    pub fn method_tag(mut self, method: &str, tag: &str, value: impl Into<String>) -> Self {
        self.methods
            .entry(method.to_string())
            .or_default()
            .entry(tag.to_string())
            .or_default()
            .push(value.into());
        self
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }

    fn property_entry(&mut self, name: &str) -> &mut TagsValues {
        let index = match self.properties.iter().position(|(n, _)| n == name) {
            Some(index) => index,
            None => {
                self.properties.push((name.to_string(), TagsValues::new()));
                self.properties.len() - 1
            }
        };
        &mut self.properties[index].1
    }
}

// ============================================================================
// Static Reflection
// ============================================================================

/// In-memory [`ReflectionService`]
#[derive(Default)]
pub struct StaticReflection {
    classes: DashMap<String, ClassMetadata>,
}

impl StaticReflection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a class
    pub fn register(&self, class: ClassMetadata) {
        self.classes.insert(class.name.clone(), class);
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_class(self, class: ClassMetadata) -> Self {
        self.register(class);
        self
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ReflectionService for StaticReflection {
    fn class_exists(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    fn class_property_names(&self, class_name: &str) -> Vec<String> {
        self.classes
            .get(class_name)
            .map(|class| class.property_names().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn property_tags_values(&self, class_name: &str, property_name: &str) -> TagsValues {
        self.classes
            .get(class_name)
            .and_then(|class| {
                class
                    .properties
                    .iter()
                    .find(|(name, _)| name == property_name)
                    .map(|(_, tags)| tags.clone())
            })
            .unwrap_or_default()
    }

    fn method_tags_values(&self, class_name: &str, method_name: &str) -> TagsValues {
        self.classes
            .get(class_name)
            .and_then(|class| class.methods.get(method_name).cloned())
            .unwrap_or_default()
    }
}

impl fmt::Debug for StaticReflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut classes: Vec<String> = self.classes.iter().map(|e| e.key().clone()).collect();
        classes.sort();
        f.debug_struct("StaticReflection")
            .field("classes", &classes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reflection() -> StaticReflection {
        StaticReflection::new().with_class(
            ClassMetadata::new("Acme\\Model\\Post")
                .property_tag("title", "validate", "NotEmpty")
                .property_tag("title", "validate", "StringLength(maximum=80)")
                .property_tag("title", "var", "string")
                .property("body")
                .method_tag("publish", "validate", "$at NotEmpty"),
        )
    }

    #[test]
    fn test_property_names_keep_declaration_order() {
        assert_eq!(
            reflection().class_property_names("Acme\\Model\\Post"),
            vec!["title", "body"]
        );
    }

    #[test]
    fn test_property_tags() {
        let tags = reflection().property_tags_values("Acme\\Model\\Post", "title");
        assert_eq!(tags["validate"], vec!["NotEmpty", "StringLength(maximum=80)"]);
        assert_eq!(tags["var"], vec!["string"]);
        assert!(reflection()
            .property_tags_values("Acme\\Model\\Post", "body")
            .is_empty());
    }

    #[test]
    fn test_method_tags() {
        let tags = reflection().method_tags_values("Acme\\Model\\Post", "publish");
        assert_eq!(tags["validate"], vec!["$at NotEmpty"]);
        assert!(reflection()
            .method_tags_values("Acme\\Model\\Post", "delete")
            .is_empty());
    }

    #[test]
    fn test_unknown_class() {
        let reflection = reflection();
        assert!(reflection.class_exists("Acme\\Model\\Post"));
        assert!(!reflection.class_exists("Acme\\Model\\Comment"));
        assert!(reflection.class_property_names("Acme\\Model\\Comment").is_empty());
    }
}
