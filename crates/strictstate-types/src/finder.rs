use strictstate_core::registry::ClassRegistry;
use strictstate_core::types::{ClassName, PropertyId};

use crate::annotation::{parse_annotation, TypeContext};
use crate::descriptor::TypeDescriptor;

/// Resolves the declared types of a property.
///
/// Called once per enumerated property with the class that declared it.
/// An empty result means the property is untyped.
///
/// Any `Fn(&PropertyId, &ClassName) -> Vec<TypeDescriptor>` is a `TypeFinder`.
pub trait TypeFinder {
    fn find_types(&self, property: &PropertyId, declaring_class: &ClassName) -> Vec<TypeDescriptor>;
}

impl<F> TypeFinder for F
where
    F: Fn(&PropertyId, &ClassName) -> Vec<TypeDescriptor>,
{
    fn find_types(&self, property: &PropertyId, declaring_class: &ClassName) -> Vec<TypeDescriptor> {
        self(property, declaring_class)
    }
}

/// Reads types from the annotations recorded in a [`ClassRegistry`].
///
/// Unknown properties and unparseable annotations resolve to an empty set;
/// the latter is logged at warn level.
#[derive(Debug, Clone, Copy)]
pub struct DocBlockTypeFinder<'r> {
    registry: &'r ClassRegistry,
}

impl<'r> DocBlockTypeFinder<'r> {
    pub fn new(registry: &'r ClassRegistry) -> Self {
        Self { registry }
    }
}

impl TypeFinder for DocBlockTypeFinder<'_> {
    fn find_types(&self, property: &PropertyId, declaring_class: &ClassName) -> Vec<TypeDescriptor> {
        let Some(class) = self.registry.get(declaring_class) else {
            return vec![];
        };
        let Some(annotation) = class
            .property(&property.name)
            .and_then(|p| p.annotation.as_deref())
        else {
            return vec![];
        };

        let ctx = TypeContext {
            declaring_class: Some(&class.name),
            parent: class.parent.as_ref(),
        };
        match parse_annotation(annotation, &ctx) {
            Ok(types) => types,
            Err(e) => {
                tracing::warn!(
                    property = %property,
                    annotation,
                    error = %e,
                    "unparseable type annotation, treating property as untyped"
                );
                vec![]
            }
        }
    }
}
