//! Conjunction building
//!
//! Class-level validation is best-effort: a property whose annotation cannot
//! be resolved contributes nothing and is logged. Method-level validation is
//! an explicit contract, so any failure there is returned as an error before
//! a single value is validated.

use crate::annotation::{parse_annotation, ParsedAnnotation};
use crate::config::ResolverConfig;
use crate::error::{OpenError, ResolverError, ResolverResult};
use crate::naming::NameResolver;
use crate::reflection::ReflectionService;
use ouroboros_validators::{
    BoxedValidator, GenericObjectValidator, ValidatorConjunction, ValidatorOptions,
    ValidatorRegistry,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, trace, warn};

/// Builds validator trees from reflected annotations
pub struct ConjunctionBuilder {
    reflection: Arc<dyn ReflectionService>,
    registry: Arc<ValidatorRegistry>,
    names: NameResolver,
    config: ResolverConfig,
}

impl ConjunctionBuilder {
    pub fn new(
        reflection: Arc<dyn ReflectionService>,
        registry: Arc<ValidatorRegistry>,
        config: ResolverConfig,
    ) -> Self {
        let names = NameResolver::new(Arc::clone(&registry), &config);
        Self {
            reflection,
            registry,
            names,
            config,
        }
    }

    pub fn names(&self) -> &NameResolver {
        &self.names
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `name`, construct a fresh instance and apply `options`
    pub fn try_create_validator(
        &self,
        name: &str,
        options: &ValidatorOptions,
    ) -> ResolverResult<BoxedValidator> {
        let identifier = self
            .names
            .resolve(name)
            .ok_or_else(|| ResolverError::ValidatorNotFound(name.to_string()))?;
        self.open(&identifier, Some(options))
    }

    fn open(
        &self,
        identifier: &str,
        options: Option<&ValidatorOptions>,
    ) -> ResolverResult<BoxedValidator> {
        let unopenable = |source: OpenError| ResolverError::UnopenableRegistryTarget {
            identifier: identifier.to_string(),
            source,
        };

        let mut validator = self
            .registry
            .create(identifier)
            .map_err(|e| unopenable(e.into()))?;
        if let Some(options) = options {
            validator
                .set_options(options)
                .map_err(|e| unopenable(e.into()))?;
        }
        Ok(validator)
    }

    // ========================================================================
    // Per-class
    // ========================================================================

    /// Build the conjunction for `data_type`
    ///
    /// Holds a [`GenericObjectValidator`] when at least one property validator
    /// resolved, followed by the type's own validator when one is registered
    /// by convention. An empty conjunction imposes no constraint.
    pub fn build_base_conjunction(&self, data_type: &str) -> ResolverResult<ValidatorConjunction> {
        debug!(data_type = %data_type, "Building base validator conjunction");
        let mut conjunction = ValidatorConjunction::new();

        if self.reflection.class_exists(data_type) {
            let object_validator = self.build_object_validator(data_type)?;
            if !object_validator.is_empty() {
                conjunction.add_validator(Box::new(object_validator));
            }
        }

        let custom_name = self.names.custom_validator_name(data_type);
        match self.names.resolve(&custom_name) {
            // constructed as registered, without options
            Some(identifier) => match self.open(&identifier, None) {
                Ok(validator) => {
                    debug!(data_type = %data_type, validator = %identifier, "Adding custom type validator");
                    conjunction.add_validator(validator);
                }
                Err(err) => {
                    warn!(data_type = %data_type, validator = %identifier, error = %err, "Skipping custom type validator");
                }
            },
            None => {
                trace!(data_type = %data_type, candidate = %custom_name, "No custom type validator")
            }
        }

        Ok(conjunction)
    }

    fn build_object_validator(&self, data_type: &str) -> ResolverResult<GenericObjectValidator> {
        let strict = self.config.strict_property_annotations;
        let mut object_validator = GenericObjectValidator::new();

        for property in self.reflection.class_property_names(data_type) {
            let tags = self.reflection.property_tags_values(data_type, &property);
            let Some(annotations) = tags.get(&self.config.annotation_tag) else {
                continue;
            };

            for annotation in annotations {
                let parsed = parse_annotation(annotation);
                if parsed.has_diagnostics() {
                    let location = format!("{}::{}", data_type, property);
                    if strict {
                        error!(location = %location, annotation = %annotation, "Malformed validate annotation");
                        return Err(ResolverError::MalformedAnnotation {
                            location,
                            diagnostics: parsed.diagnostics,
                        });
                    }
                    log_diagnostics(&location, annotation, &parsed);
                }

                for spec in &parsed.validators {
                    match self.try_create_validator(&spec.name, &spec.options) {
                        Ok(validator) => {
                            object_validator.add_property_validator(&property, validator)
                        }
                        Err(err) if strict => {
                            error!(data_type = %data_type, property = %property, validator = %spec.name, error = %err, "Unresolvable property validator");
                            return Err(ResolverError::UnresolvableProperty {
                                data_type: data_type.to_string(),
                                property: property.clone(),
                                validator: spec.name.clone(),
                                reason: err.to_string(),
                            });
                        }
                        Err(err) => {
                            warn!(data_type = %data_type, property = %property, validator = %spec.name, error = %err, "Skipping unresolvable property validator");
                        }
                    }
                }
            }
        }

        Ok(object_validator)
    }

    // ========================================================================
    // Per-method
    // ========================================================================

    /// Build one conjunction per annotated argument of a method
    ///
    /// Validators are appended in encounter order; several annotations may
    /// target the same argument.
    pub fn build_argument_conjunctions(
        &self,
        class_name: &str,
        method_name: &str,
    ) -> ResolverResult<BTreeMap<String, ValidatorConjunction>> {
        let mut conjunctions: BTreeMap<String, ValidatorConjunction> = BTreeMap::new();
        let tags = self.reflection.method_tags_values(class_name, method_name);
        let Some(annotations) = tags.get(&self.config.annotation_tag) else {
            return Ok(conjunctions);
        };
        let location = format!("{}->{}()", class_name, method_name);

        for annotation in annotations {
            let parsed = parse_annotation(annotation);
            if parsed.has_diagnostics() {
                if self.config.strict_method_annotations {
                    error!(location = %location, annotation = %annotation, "Malformed validate annotation");
                    return Err(ResolverError::MalformedAnnotation {
                        location,
                        diagnostics: parsed.diagnostics,
                    });
                }
                log_diagnostics(&location, annotation, &parsed);
            }
            if parsed.is_empty() {
                continue;
            }

            let Some(argument) = parsed.argument_name.clone() else {
                error!(location = %location, annotation = %annotation, "Validate annotation does not name an argument");
                return Err(ResolverError::MissingArgumentName {
                    class_name: class_name.to_string(),
                    method_name: method_name.to_string(),
                    annotation: annotation.clone(),
                });
            };

            for spec in &parsed.validators {
                let validator = self
                    .try_create_validator(&spec.name, &spec.options)
                    .map_err(|err| {
                        error!(location = %location, validator = %spec.name, error = %err, "Unresolvable argument validator");
                        ResolverError::UnresolvableValidator {
                            class_name: class_name.to_string(),
                            method_name: method_name.to_string(),
                            validator: spec.name.clone(),
                            reason: err.to_string(),
                        }
                    })?;
                conjunctions
                    .entry(argument.clone())
                    .or_default()
                    .add_validator(validator);
            }
        }

        debug!(location = %location, arguments = conjunctions.len(), "Built argument validator conjunctions");
        Ok(conjunctions)
    }
}

fn log_diagnostics(location: &str, annotation: &str, parsed: &ParsedAnnotation) {
    for diagnostic in &parsed.diagnostics {
        warn!(
            location = %location,
            annotation = %annotation,
            kind = %diagnostic.kind,
            offset = diagnostic.offset,
            "{}",
            diagnostic.message
        );
    }
}
