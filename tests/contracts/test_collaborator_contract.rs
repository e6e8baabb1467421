/// Contract tests for the checker's three collaborator traits.
///
/// Any implementation of `TypeCheckApplier`, `TypeFinder`, and
/// `PropertyEnumerator` must be usable in place of the registry-backed ones.
use std::collections::HashMap;

use strictstate_core::object::Object;
use strictstate_core::types::{ClassName, ModelError, PropertyId};
use strictstate_core::value::{PropertyValue, Value};
use strictstate_enforce::apply::ApplyTypeChecks;
use strictstate_enforce::checker::{ObjectStateChecker, TypeCheckApplier};
use strictstate_types::descriptor::TypeDescriptor;
use strictstate_types::enumerator::PropertyEnumerator;
use strictstate_types::finder::{DocBlockTypeFinder, TypeFinder};

use super::common::fixtures::{inheritance_registry, CHILD, PARENT};

/// Lists whatever slots the object happens to hold, ignoring scope.
struct SlotEnumerator;

impl PropertyEnumerator for SlotEnumerator {
    fn properties(&self, target: &Object, _scope: &ClassName) -> Result<Vec<PropertyId>, ModelError> {
        Ok(target.slots().iter().map(|s| s.property.clone()).collect())
    }
}

/// Types looked up from a fixed table.
struct TableFinder(HashMap<PropertyId, Vec<TypeDescriptor>>);

impl TypeFinder for TableFinder {
    fn find_types(&self, property: &PropertyId, _declaring: &ClassName) -> Vec<TypeDescriptor> {
        self.0.get(property).cloned().unwrap_or_default()
    }
}

/// Verdict is the number of declared types.
struct CountingApplier;

impl TypeCheckApplier for CountingApplier {
    type Verdict = usize;

    fn apply(&self, types: &[TypeDescriptor], _value: &PropertyValue) -> usize {
        types.len()
    }
}

#[test]
fn custom_collaborators_plug_into_the_checker() {
    let mut object = Object::new("Anything");
    object.assign(PropertyId::new("Anything", "a"), Value::Int(1));
    object.assign(PropertyId::new("Anything", "b"), Value::Null);

    let mut table = HashMap::new();
    table.insert(
        PropertyId::new("Anything", "a"),
        vec![TypeDescriptor::Int, TypeDescriptor::String],
    );
    let checker = ObjectStateChecker::new(CountingApplier, TableFinder(table), SlotEnumerator);

    let outcome = checker.check(&Value::from(object), &"Unrelated".into()).unwrap();
    let verdicts: Vec<usize> = outcome.verdicts.iter().map(|v| v.verdict).collect();
    assert_eq!(verdicts, vec![2, 0]);
    assert_eq!(outcome.scope.as_str(), "Unrelated");
}

#[test]
fn registry_finder_composes_with_closure_enumerator() {
    let registry = inheritance_registry();
    let checker = ObjectStateChecker::new(
        ApplyTypeChecks::default(),
        DocBlockTypeFinder::new(&registry),
        |_: &Object, _: &ClassName| -> Result<Vec<PropertyId>, ModelError> {
            Ok(vec![PropertyId::new(PARENT, "count")])
        },
    );

    let mut object = Object::new(CHILD);
    object.assign(PropertyId::new(PARENT, "count"), Value::from("three"));
    let outcome = checker.check(&Value::from(object), &CHILD.into()).unwrap();
    assert_eq!(outcome.violation_count(), 1);
}
