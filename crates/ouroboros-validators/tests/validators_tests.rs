//! Registry and composite validator tests

use ouroboros_validators::builtin::*;
use ouroboros_validators::*;

fn create(registry: &ValidatorRegistry, name: &str, options: ValidatorOptions) -> BoxedValidator {
    let identifier = format!("{}{}Validator", BUILTIN_NAMESPACE, name);
    let mut validator = registry.create(&identifier).unwrap();
    validator.set_options(&options).unwrap();
    validator
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_identifiers_sorted() {
    let registry = ValidatorRegistry::with_builtins(BUILTIN_NAMESPACE);
    let identifiers = registry.identifiers();
    let mut sorted = identifiers.clone();
    sorted.sort();
    assert_eq!(identifiers, sorted);
    assert!(identifiers.iter().all(|id| id.starts_with(BUILTIN_NAMESPACE)));
    assert!(identifiers.iter().all(|id| id.ends_with(VALIDATOR_SUFFIX)));
}

#[test]
fn test_registry_custom_namespace() {
    let registry = ValidatorRegistry::with_builtins("App\\Validators\\");
    assert!(registry.is_registered("App\\Validators\\StringLengthValidator"));
    assert!(!registry.is_registered("Ouroboros\\Validation\\Validator\\StringLengthValidator"));
}

#[test]
fn test_registry_options_are_per_instance() {
    let registry = ValidatorRegistry::with_builtins(BUILTIN_NAMESPACE);
    let short = create(&registry, "StringLength", ValidatorOptions::new().with("maximum", "2"));
    let long = create(&registry, "StringLength", ValidatorOptions::new().with("maximum", "10"));

    let value = Value::from("hello");
    assert!(short.validate(&value).is_err());
    assert!(long.validate(&value).is_ok());
}

// ============================================================================
// Composition
// ============================================================================

#[test]
fn test_person_tree() {
    let registry = ValidatorRegistry::with_builtins(BUILTIN_NAMESPACE);

    let mut person = GenericObjectValidator::new();
    person.add_property_validator("name", create(&registry, "NotEmpty", ValidatorOptions::new()));
    person.add_property_validator(
        "name",
        create(
            &registry,
            "StringLength",
            ValidatorOptions::new().with("minimum", "3").with("maximum", "50"),
        ),
    );
    person.add_property_validator(
        "email",
        create(&registry, "EmailAddress", ValidatorOptions::new()),
    );
    person.add_property_validator(
        "age",
        create(
            &registry,
            "NumberRange",
            ValidatorOptions::new().with("minimum", "0").with("maximum", "150"),
        ),
    );

    let mut conjunction = ValidatorConjunction::new();
    conjunction.add_validator(Box::new(person));

    let valid = Value::object([
        ("name", Value::from("Ada")),
        ("email", Value::from("ada@example.com")),
        ("age", Value::Int(36)),
    ]);
    assert!(conjunction.validate(&valid).is_ok());

    let invalid = Value::object([
        ("name", Value::from("")),
        ("email", Value::from("ada")),
        ("age", Value::Int(200)),
    ]);
    let errors = conjunction.validate(&invalid).unwrap_err();
    // NotEmpty + StringLength on name, format on email, range on age
    assert_eq!(errors.len(), 4);
    assert_eq!(errors.for_field("name").count(), 2);
    assert_eq!(errors.for_field("email").count(), 1);
    assert_eq!(errors.for_field("age").count(), 1);
}

#[test]
fn test_nested_conjunction_with_location() {
    let mut inner = ValidatorConjunction::new();
    inner.add_validator(Box::new(NotEmptyValidator));
    let mut outer = ValidatorConjunction::new();
    outer.add_validator(Box::new(inner));
    outer.add_validator(Box::new(IntegerValidator));

    let mut ctx = ValidationContext::with_location("argument");
    let mut errors = ValidationErrors::new();
    outer.check(&Value::Null, &mut ctx, &mut errors);

    assert_eq!(errors.len(), 2);
    assert!(errors.as_slice().iter().all(|e| e.location == "argument"));
}

#[test]
fn test_shape_equality() {
    let build = || {
        let mut object = GenericObjectValidator::new();
        object.add_property_validator("email", Box::new(EmailAddressValidator));
        let mut conjunction = ValidatorConjunction::new();
        conjunction.add_validator(Box::new(object));
        conjunction
    };
    assert_eq!(build().shape(), build().shape());
}

#[cfg(feature = "serde")]
#[test]
fn test_json_round_trip() {
    let json = serde_json::json!({"email": "a@b.com", "age": 3});
    let value = Value::from(json.clone());
    assert_eq!(value.get_property("age"), Some(&Value::Int(3)));
    assert_eq!(serde_json::Value::from(value), json);
}
