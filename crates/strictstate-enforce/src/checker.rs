use strictstate_core::object::Object;
use strictstate_core::types::ClassName;
use strictstate_core::value::{PropertyValue, Value};
use strictstate_types::descriptor::{display_types, TypeDescriptor};
use strictstate_types::enumerator::PropertyEnumerator;
use strictstate_types::finder::TypeFinder;

use crate::types::{CheckError, CheckOutcome, PropertyVerdict};

/// Decides whether a property value conforms to its declared types.
///
/// The verdict type is owned by the applier; the checker forwards it
/// without looking at it. Any `Fn(&[TypeDescriptor], &PropertyValue) -> V`
/// is an applier with verdict `V`.
pub trait TypeCheckApplier {
    type Verdict;

    fn apply(&self, types: &[TypeDescriptor], value: &PropertyValue) -> Self::Verdict;
}

impl<F, V> TypeCheckApplier for F
where
    F: Fn(&[TypeDescriptor], &PropertyValue) -> V,
{
    type Verdict = V;

    fn apply(&self, types: &[TypeDescriptor], value: &PropertyValue) -> V {
        self(types, value)
    }
}

/// Validates every property of an object within a class scope.
///
/// Stateless: each `check` call enumerates, resolves, and applies afresh.
/// The target is only ever read.
#[derive(Debug, Clone)]
pub struct ObjectStateChecker<A, F, E> {
    apply_type_checks: A,
    find_types: F,
    enumerator: E,
}

impl<A, F, E> ObjectStateChecker<A, F, E>
where
    A: TypeCheckApplier,
    F: TypeFinder,
    E: PropertyEnumerator,
{
    pub fn new(apply_type_checks: A, find_types: F, enumerator: E) -> Self {
        Self {
            apply_type_checks,
            find_types,
            enumerator,
        }
    }

    /// Check `target` within `scope`.
    ///
    /// Fails with [`CheckError::InvalidInput`] before touching any
    /// collaborator when `target` is not an object. Otherwise calls the type
    /// finder and then the applier exactly once per enumerated property, in
    /// enumeration order, and returns the applier's verdicts.
    pub fn check(
        &self,
        target: &Value,
        scope: &ClassName,
    ) -> Result<CheckOutcome<A::Verdict>, CheckError> {
        match target {
            Value::Object(object) => self.check_object(object, scope),
            other => Err(CheckError::invalid_input(other)),
        }
    }

    pub fn check_object(
        &self,
        object: &Object,
        scope: &ClassName,
    ) -> Result<CheckOutcome<A::Verdict>, CheckError> {
        let properties = self.enumerator.properties(object, scope)?;
        tracing::debug!(
            class = %object.class(),
            scope = %scope,
            properties = properties.len(),
            "checking object state"
        );

        let mut verdicts = Vec::with_capacity(properties.len());
        for property in properties {
            let value = self.enumerator.read(object, &property);
            let types = self.find_types.find_types(&property, &property.declaring_class);
            tracing::trace!(
                property = %property,
                types = %display_types(&types),
                value = %value.describe(),
                "applying type checks"
            );
            let verdict = self.apply_type_checks.apply(&types, &value);
            verdicts.push(PropertyVerdict { property, verdict });
        }

        Ok(CheckOutcome {
            class: object.class().clone(),
            scope: scope.clone(),
            verdicts,
        })
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
