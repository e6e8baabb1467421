/// Contract tests for check report JSON schema compliance.
use strictstate_core::types::PropertyId;
use strictstate_core::value::Value;
use strictstate_enforce::inspect::StateInspector;
use strictstate_enforce::types::{CheckReport, ViolationKind};

use super::common::fixtures::{inheritance_registry, order_registry, run_parent_constructor, CHILD};
use super::test_schema_helpers::validate_against_schema;

const SCHEMA: &str = include_str!("../schemas/check_report.schema.json");

#[test]
fn clean_report_matches_schema() {
    let registry = inheritance_registry();
    let inspector = StateInspector::new(&registry);
    let mut object = registry.instantiate(&CHILD.into()).unwrap();
    run_parent_constructor(&mut object);

    let report = inspector.check_all(&Value::from(object)).unwrap().report();
    assert_eq!(report.status, "ok");
    assert_eq!(report.properties_checked, 2);
    assert!(report.violations.is_empty());

    let json_value = serde_json::to_value(&report).unwrap();
    validate_against_schema(&json_value, SCHEMA);
}

#[test]
fn uninitialized_report_matches_schema() {
    let registry = inheritance_registry();
    let inspector = StateInspector::new(&registry);
    let object = registry.instantiate(&CHILD.into()).unwrap();

    let report = inspector.check_all(&Value::from(object)).unwrap().report();
    assert_eq!(report.status, "error");

    let json_value = serde_json::to_value(&report).unwrap();
    validate_against_schema(&json_value, SCHEMA);
    assert_eq!(json_value["violations"][0]["kind"], "uninitialized");
    assert_eq!(json_value["violations"][0]["actual"]["state"], "absent");
    assert_eq!(json_value["violations"][0]["expected"][0], "int");
}

#[test]
fn mismatch_report_matches_schema() {
    let registry = order_registry();
    let inspector = StateInspector::new(&registry);
    let mut order = registry.instantiate(&"App\\Order".into()).unwrap();
    order.assign(
        PropertyId::new("App\\Order", "items"),
        Value::Array(vec![Value::Int(1), Value::Null]),
    );
    order.assign(PropertyId::new("App\\Order", "total"), Value::from("12.50"));

    let report = inspector.check_all(&Value::from(order)).unwrap().report();
    assert_eq!(report.violations.len(), 2);

    let json_value = serde_json::to_value(&report).unwrap();
    validate_against_schema(&json_value, SCHEMA);
    assert_eq!(json_value["violations"][0]["expected"][0], "\\App\\LineItem[]");
    assert_eq!(json_value["violations"][1]["actual"]["value"]["type"], "string");
}

#[test]
fn report_deserializes_back() {
    let registry = inheritance_registry();
    let inspector = StateInspector::new(&registry);
    let object = registry.instantiate(&CHILD.into()).unwrap();
    let report = inspector.check_all(&Value::from(object)).unwrap().report();

    let json = serde_json::to_string(&report).unwrap();
    let back: CheckReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.class, report.class);
    assert_eq!(back.violations.len(), 1);
    assert_eq!(back.violations[0].report.kind, ViolationKind::Uninitialized);
    assert_eq!(back.violations[0].report, report.violations[0].report);
}

#[test]
fn report_with_keyword_like_class_names_deserializes_back() {
    use strictstate_core::registry::ClassRegistry;
    use strictstate_core::types::{ClassDeclaration, PropertyDeclaration, Visibility};

    let mut registry = ClassRegistry::new();
    registry
        .register(ClassDeclaration::new("Parent").with_property(
            PropertyDeclaration::new("next", Visibility::Public).with_annotation("self|\\Self[]"),
        ))
        .unwrap();
    registry.register(ClassDeclaration::new("Self")).unwrap();
    let inspector = StateInspector::new(&registry);

    let mut object = registry.instantiate(&"Parent".into()).unwrap();
    object.assign(PropertyId::new("Parent", "next"), Value::Int(1));
    let report = inspector.check_all(&Value::from(object)).unwrap().report();

    let json_value = serde_json::to_value(&report).unwrap();
    validate_against_schema(&json_value, SCHEMA);
    let back: CheckReport = serde_json::from_value(json_value).unwrap();
    assert_eq!(back.violations[0].report, report.violations[0].report);
}
