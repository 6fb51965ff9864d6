//! Validator registry - identifier to factory mapping
//!
//! The registry is populated at start-up and consulted by the resolver both
//! to answer "is this identifier known" and to construct fresh instances.
//! Every call to [`ValidatorRegistry::create`] yields a new, unconfigured
//! validator, so instances never share options.

use crate::builtin::{self, VALIDATOR_SUFFIX};
use crate::errors::RegistryError;
use crate::validator::{BoxedValidator, Validator};
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Constructs a fresh validator instance
pub type ValidatorFactory = Arc<dyn Fn() -> Result<BoxedValidator, RegistryError> + Send + Sync>;

/// Thread-safe registry of validator factories keyed by identifier
pub struct ValidatorRegistry {
    factories: DashMap<String, ValidatorFactory>,
}

impl ValidatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: DashMap::new(),
        }
    }

    /// Create a registry holding the built-in validators under `namespace`
    pub fn with_builtins(namespace: &str) -> Self {
        let registry = Self::new();
        registry.register_builtins(namespace);
        registry
    }

    /// Register the built-in validators under `namespace`
    pub fn register_builtins(&self, namespace: &str) {
        let id = |name: &str| format!("{}{}{}", namespace, name, VALIDATOR_SUFFIX);

        self.register_default::<builtin::NotEmptyValidator>(id("NotEmpty"));
        self.register_default::<builtin::EmailAddressValidator>(id("EmailAddress"));
        self.register_default::<builtin::StringLengthValidator>(id("StringLength"));
        self.register_default::<builtin::RegularExpressionValidator>(id("RegularExpression"));
        self.register_default::<builtin::AlphanumericValidator>(id("Alphanumeric"));
        self.register_default::<builtin::UuidValidator>(id("Uuid"));
        self.register_default::<builtin::TextValidator>(id("Text"));
        self.register_default::<builtin::IntegerValidator>(id("Integer"));
        self.register_default::<builtin::FloatValidator>(id("Float"));
        self.register_default::<builtin::NumberValidator>(id("Number"));
        self.register_default::<builtin::NumberRangeValidator>(id("NumberRange"));
        self.register_default::<builtin::BooleanValidator>(id("Boolean"));
        self.register_default::<builtin::RawValidator>(id("Raw"));

        debug!(namespace = %namespace, count = self.factories.len(), "Registered built-in validators");
    }

    /// Register a factory; an existing entry with the same identifier is replaced
    pub fn register<F>(&self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<BoxedValidator, RegistryError> + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        debug!(identifier = %identifier, "Registering validator");
        self.factories.insert(identifier, Arc::new(factory));
    }

    /// Register a validator type constructed through `Default`
    pub fn register_default<V>(&self, identifier: impl Into<String>)
    where
        V: Validator + Default + 'static,
    {
        self.register(identifier, || Ok(Box::new(V::default()) as BoxedValidator));
    }

    /// Remove a registration; returns whether it existed
    pub fn unregister(&self, identifier: &str) -> bool {
        self.factories.remove(identifier).is_some()
    }

    /// Check if an identifier is registered
    pub fn is_registered(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    /// Construct a new instance of the validator registered as `identifier`
    pub fn create(&self, identifier: &str) -> Result<BoxedValidator, RegistryError> {
        // Clone the factory out so the shard lock is not held while it runs.
        let factory = self
            .factories
            .get(identifier)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| RegistryError::NotRegistered(identifier.to_string()))?;
        factory()
    }

    /// All registered identifiers, sorted
    pub fn identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> =
            self.factories.iter().map(|entry| entry.key().clone()).collect();
        identifiers.sort();
        identifiers
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.identifiers())
            .finish()
    }
}
