//! Schema File Tests
//!
//! Schemas written to disk, loaded through the registry and used to
//! validate documents:
//! - Registry loading is deterministic
//! - Compiled definitions behave like hand-built ones
//! - Shape conflicts are reported with their location

use std::collections::BTreeMap;
use std::fs;

use serde_json::{json, Value};
use tempfile::TempDir;
use treecheck::config::ValidatorConfig;
use treecheck::rules::{Context, ErrorKind};
use treecheck::schema::{SchemaDocument, SchemaError, SchemaRegistry};
use treecheck::validator::Validator;

// =============================================================================
// Helper Functions
// =============================================================================

fn orders_schema() -> Value {
    json!({
        "schema_id": "orders",
        "schema_version": "v2",
        "description": "customer orders",
        "root": {
            "validators": ["non_nullable", "is_map"],
            "fields": {
                "customer": {
                    "validators": ["non_nullable", "string", "lower_case", { "max_length": { "max": 8 } }]
                },
                "items": {
                    "validators": ["is_list", { "min_size": { "min": 1 } }],
                    "list_of": {
                        "validators": ["is_map"],
                        "fields": {
                            "sku": { "validators": ["non_nullable", "string", "upper_case"] },
                            "price": { "validators": ["non_nullable", "number", { "float_precision": { "precision": 2 } }] },
                            "quantity": { "validators": ["integer"] }
                        },
                        "accept_not_defined_property": true
                    }
                }
            }
        }
    })
}

fn setup_registry() -> (TempDir, SchemaRegistry) {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("orders.json"), orders_schema().to_string()).unwrap();

    let mut registry = SchemaRegistry::new(tmp.path());
    registry.load_all().unwrap();
    (tmp, registry)
}

// =============================================================================
// Registry Tests
// =============================================================================

#[test]
fn test_registry_loads_schema_files() {
    let (_tmp, registry) = setup_registry();

    assert_eq!(registry.keys(), vec![("orders", "v2")]);
    let schema = registry.require("orders", "v2").unwrap();
    assert_eq!(schema.description(), Some("customer orders"));
}

#[test]
fn test_saved_schema_reloads_identically() {
    let (tmp, registry) = setup_registry();
    let original = registry.require("orders", "v2").unwrap().document().clone();

    let mut copy = original.clone();
    copy.schema_version = "v3".to_string();
    registry.save_schema(&copy).unwrap();

    let mut reloaded = SchemaRegistry::new(tmp.path());
    reloaded.load_all().unwrap();
    assert_eq!(reloaded.schema_count(), 2);
    assert_eq!(reloaded.require("orders", "v3").unwrap().document().root, original.root);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_valid_order() {
    let (_tmp, registry) = setup_registry();
    let schema = registry.require("orders", "v2").unwrap();

    let doc = json!({
        "customer": "jane",
        "items": [
            { "sku": "AB-1", "price": 9.99, "quantity": 2 },
            { "sku": "CD-2", "price": 15 }
        ]
    });

    let report = Validator::default()
        .validate(&Context::background(), &doc, schema.definition())
        .unwrap();
    assert!(report.valid, "report: {:?}", report);
}

#[test]
fn test_invalid_order_reports_every_path() {
    let (_tmp, registry) = setup_registry();
    let schema = registry.require("orders", "v2").unwrap();

    let doc = json!({
        "customer": "Jane Doe Inc",
        "items": [
            { "sku": "ab-1", "price": 9.999 },
            { "price": 1, "colour": "red" }
        ],
        "note": "x"
    });

    let report = Validator::default()
        .validate(&Context::background(), &doc, schema.definition())
        .unwrap();

    let mut expected = BTreeMap::new();
    expected.insert("$".to_string(), vec!["unexpected field note".to_string()]);
    expected.insert(
        "$.customer".to_string(),
        vec![
            "\"Jane Doe Inc\" is not lower cased".to_string(),
            "expected at most 8 characters, got 12".to_string(),
        ],
    );
    expected.insert(
        "$.items.[0].price".to_string(),
        vec!["expected precision 2, actual precision 3".to_string()],
    );
    expected.insert(
        "$.items.[0].sku".to_string(),
        vec!["\"ab-1\" is not upper cased".to_string()],
    );
    expected.insert(
        "$.items.[1]".to_string(),
        vec![
            "field sku not defined".to_string(),
            "unexpected field colour".to_string(),
        ],
    );

    assert!(!report.valid);
    assert_eq!(report.errors, expected);
}

#[test]
fn test_template_messages_from_config() {
    let (_tmp, registry) = setup_registry();
    let schema = registry.require("orders", "v2").unwrap();

    let mut templates: BTreeMap<ErrorKind, String> = ErrorKind::ALL
        .iter()
        .map(|kind| (*kind, kind.as_str().to_string()))
        .collect();
    templates.insert(ErrorKind::MinSize, "mindestens {min} Einträge, {actual} erhalten".into());

    let config = ValidatorConfig {
        separator: "/".to_string(),
        message_templates: Some(templates),
    };
    let validator = Validator::from_config(&config).unwrap();

    let report = validator
        .validate(
            &Context::background(),
            &json!({"customer": "jane", "items": []}),
            schema.definition(),
        )
        .unwrap();

    assert_eq!(report.at("$/items"), ["mindestens 1 Einträge, 0 erhalten"]);
    assert_eq!(report.error_count(), 1);
}

// =============================================================================
// Compilation Error Tests
// =============================================================================

#[test]
fn test_conflicting_shape_reports_location() {
    let text = json!({
        "schema_id": "bad",
        "schema_version": "v1",
        "root": {
            "fields": {
                "items": {
                    "list_of": {
                        "fields": {},
                        "list_of": {}
                    }
                }
            }
        }
    })
    .to_string();

    let err = SchemaDocument::from_json("bad.json", &text)
        .unwrap()
        .compile()
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::ConflictingShape {
            path: "$.items.[0]".to_string()
        }
    );
}

#[test]
fn test_unknown_rule_is_malformed() {
    let text = json!({
        "schema_id": "bad",
        "schema_version": "v1",
        "root": { "validators": ["is_email"] }
    })
    .to_string();

    let err = SchemaDocument::from_json("bad.json", &text).unwrap_err();
    assert_eq!(err.code(), "TC_SCHEMA_MALFORMED");
}
