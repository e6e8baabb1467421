// Tests for unions, nullables, class types, and typed collections.

use strictstate_core::config::{ConformanceConfig, StrictConfig};
use strictstate_core::object::Object;
use strictstate_core::types::PropertyId;
use strictstate_core::value::Value;
use strictstate_enforce::inspect::StateInspector;
use strictstate_enforce::types::ViolationKind;

use super::common::fixtures::{line_item, order_registry};

fn order_id() -> PropertyId {
    PropertyId::new("App\\Entity", "id")
}

fn items() -> PropertyId {
    PropertyId::new("App\\Order", "items")
}

#[test]
fn test_union_accepts_any_member() {
    let registry = order_registry();
    let inspector = StateInspector::new(&registry);
    let mut order = registry.instantiate(&"App\\Order".into()).unwrap();

    for id in [Value::Int(42), Value::from("ord-42")] {
        order.assign(order_id(), id);
        let target = Value::from(order.clone());
        assert!(inspector.check(&target, &"App\\Entity".into()).unwrap().is_clean());
    }

    order.assign(order_id(), Value::Float(4.2));
    let target = Value::from(order);
    let outcome = inspector.check(&target, &"App\\Entity".into()).unwrap();
    let (_, report) = outcome.violations().next().unwrap();
    assert_eq!(report.kind, ViolationKind::TypeMismatch);
    assert_eq!(report.message, "expected int|string, got float 4.2");
}

#[test]
fn test_typed_collection_checks_every_element() {
    let registry = order_registry();
    let inspector = StateInspector::new(&registry);
    let mut order = registry.instantiate(&"App\\Order".into()).unwrap();

    order.assign(
        items(),
        Value::Array(vec![
            line_item(&registry, 1, "SKU-1"),
            line_item(&registry, 2, "SKU-2"),
        ]),
    );
    assert!(inspector.check_all(&Value::from(order.clone())).unwrap().is_clean());

    order.assign(
        items(),
        Value::Array(vec![line_item(&registry, 1, "SKU-1"), Value::from("SKU-2")]),
    );
    let outcome = inspector.check_all(&Value::from(order)).unwrap();
    assert_eq!(outcome.violation_count(), 1);
    let (property, report) = outcome.violations().next().unwrap();
    assert_eq!(property, &items());
    assert_eq!(report.kind, ViolationKind::TypeMismatch);
}

#[test]
fn test_class_type_rejects_unrelated_objects() {
    let registry = order_registry();
    let inspector = StateInspector::new(&registry);
    let mut order = registry.instantiate(&"App\\Order".into()).unwrap();
    order.assign(items(), Value::Array(vec![Value::from(Object::new("App\\Entity"))]));

    let outcome = inspector.check_all(&Value::from(order)).unwrap();
    assert_eq!(outcome.violation_count(), 1);
}

#[test]
fn test_self_resolves_to_declaring_class() {
    let registry = order_registry();
    let inspector = StateInspector::new(&registry);
    let parent_order = registry.instantiate(&"App\\Order".into()).unwrap();
    let mut order = registry.instantiate(&"App\\Order".into()).unwrap();
    let parent = PropertyId::new("App\\Order", "parentOrder");

    order.assign(parent.clone(), Value::from(parent_order));
    assert!(inspector.check_all(&Value::from(order.clone())).unwrap().is_clean());

    order.assign(parent.clone(), Value::from(Object::new("App\\LineItem")));
    let outcome = inspector.check_all(&Value::from(order)).unwrap();
    assert_eq!(
        outcome.violations().map(|(p, _)| p.clone()).collect::<Vec<_>>(),
        vec![parent]
    );
}

#[test]
fn test_float_property_rejects_int_unless_lenient() {
    let registry = order_registry();
    let mut order = registry.instantiate(&"App\\Order".into()).unwrap();
    order.assign(PropertyId::new("App\\Order", "total"), Value::Int(10));
    let target = Value::from(order);

    let strict = StateInspector::new(&registry);
    assert_eq!(strict.check_all(&target).unwrap().violation_count(), 1);

    let config = StrictConfig {
        conformance: ConformanceConfig {
            strict_scalars: false,
            ..ConformanceConfig::default()
        },
        ..StrictConfig::default()
    };
    let lenient = StateInspector::with_config(&registry, &config);
    assert!(lenient.check_all(&target).unwrap().is_clean());
}

#[test]
fn test_absent_as_null_lets_nullable_properties_pass() {
    let registry = order_registry();
    let mut order = registry.instantiate(&"App\\Order".into()).unwrap();
    order.unset(&PropertyId::new("App\\Order", "parentOrder"));
    let target = Value::from(order);

    let strict = StateInspector::new(&registry);
    let outcome = strict.check_all(&target).unwrap();
    assert_eq!(
        outcome.violations().next().map(|(_, r)| r.kind),
        Some(ViolationKind::Uninitialized)
    );

    let config = StrictConfig {
        conformance: ConformanceConfig {
            absent_as_null: true,
            ..ConformanceConfig::default()
        },
        ..StrictConfig::default()
    };
    let relaxed = StateInspector::with_config(&registry, &config);
    assert!(relaxed.check_all(&target).unwrap().is_clean());
}
