use std::collections::HashSet;

use strictstate_core::object::Object;
use strictstate_core::registry::ClassRegistry;
use strictstate_core::types::{ClassName, ModelError, PropertyId, Visibility};
use strictstate_core::value::PropertyValue;

/// Lists the properties of an object visible from a class scope, and reads
/// them regardless of visibility.
///
/// Each returned [`PropertyId`] carries its true declaring class. The order
/// must be stable for a given `(target, scope)` pair.
pub trait PropertyEnumerator {
    fn properties(&self, target: &Object, scope: &ClassName) -> Result<Vec<PropertyId>, ModelError>;

    /// Current value of an enumerated property. Never mutates `target`.
    fn read(&self, target: &Object, property: &PropertyId) -> PropertyValue {
        target.read(property)
    }
}

impl<F> PropertyEnumerator for F
where
    F: Fn(&Object, &ClassName) -> Result<Vec<PropertyId>, ModelError>,
{
    fn properties(&self, target: &Object, scope: &ClassName) -> Result<Vec<PropertyId>, ModelError> {
        self(target, scope)
    }
}

/// Reflection-style enumeration over a [`ClassRegistry`].
///
/// Yields the scope's own instance properties (any visibility) in declaration
/// order, then each ancestor's non-private instance properties that are not
/// redeclared closer to the scope. Static properties are never listed.
#[derive(Debug, Clone, Copy)]
pub struct ReflectionEnumerator<'r> {
    registry: &'r ClassRegistry,
}

impl<'r> ReflectionEnumerator<'r> {
    pub fn new(registry: &'r ClassRegistry) -> Self {
        Self { registry }
    }
}

impl PropertyEnumerator for ReflectionEnumerator<'_> {
    fn properties(&self, target: &Object, scope: &ClassName) -> Result<Vec<PropertyId>, ModelError> {
        let chain = self.registry.ancestors(target.class())?;
        let start = chain
            .iter()
            .position(|c| &c.name == scope)
            .ok_or_else(|| ModelError::ScopeNotInHierarchy {
                class: target.class().clone(),
                scope: scope.clone(),
            })?;

        let mut seen = HashSet::new();
        let mut properties = Vec::new();
        for (depth, class) in chain[start..].iter().enumerate() {
            for prop in class.properties.iter().filter(|p| !p.is_static) {
                if depth > 0 && prop.visibility == Visibility::Private {
                    continue;
                }
                if !seen.insert(prop.name.as_str()) {
                    continue;
                }
                properties.push(PropertyId::new(class.name.clone(), prop.name.clone()));
            }
        }
        Ok(properties)
    }

    fn read(&self, target: &Object, property: &PropertyId) -> PropertyValue {
        self.registry.read_property(target, property)
    }
}
