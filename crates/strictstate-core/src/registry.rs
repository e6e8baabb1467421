use std::collections::{HashMap, HashSet};

use crate::object::Object;
use crate::types::{
    ClassDeclaration, ClassName, ModelError, PropertyDeclaration, PropertyId, Visibility,
};
use crate::value::{PropertyValue, Value};

/// In-memory table of class declarations.
///
/// Parents may be registered after their children; the hierarchy is only
/// validated when it is walked.
#[derive(Debug, Default, Clone)]
pub struct ClassRegistry {
    classes: HashMap<ClassName, ClassDeclaration>,
    order: Vec<ClassName>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Fails if a class with the same name exists.
    pub fn register(&mut self, class: ClassDeclaration) -> Result<(), ModelError> {
        if self.classes.contains_key(&class.name) {
            return Err(ModelError::DuplicateClass(class.name));
        }
        self.order.push(class.name.clone());
        self.classes.insert(class.name.clone(), class);
        Ok(())
    }

    pub fn get(&self, name: &ClassName) -> Option<&ClassDeclaration> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &ClassName) -> bool {
        self.classes.contains_key(name)
    }

    /// All registered classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.order.iter().filter_map(|n| self.classes.get(n))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The inheritance chain of `name`, most-derived first.
    pub fn ancestors(&self, name: &ClassName) -> Result<Vec<&ClassDeclaration>, ModelError> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(name);
        while let Some(class_name) = current {
            if !seen.insert(class_name) {
                return Err(ModelError::CyclicInheritance(class_name.clone()));
            }
            let class = self
                .classes
                .get(class_name)
                .ok_or_else(|| ModelError::UnknownClass(class_name.clone()))?;
            chain.push(class);
            current = class.parent.as_ref();
        }
        Ok(chain)
    }

    /// Whether `class` is `ancestor` or inherits from it. Unknown classes and
    /// broken hierarchies answer `false`.
    pub fn is_a(&self, class: &ClassName, ancestor: &ClassName) -> bool {
        match self.ancestors(class) {
            Ok(chain) => chain.iter().any(|c| &c.name == ancestor),
            Err(_) => false,
        }
    }

    /// Look up the declaration behind a property identity.
    pub fn property(&self, id: &PropertyId) -> Option<&PropertyDeclaration> {
        self.classes.get(&id.declaring_class)?.property(&id.name)
    }

    /// Create an instance of `name` with declared defaults applied, root
    /// class first. Properties without a default stay uninitialized.
    pub fn instantiate(&self, name: &ClassName) -> Result<Object, ModelError> {
        let chain = self.ancestors(name)?;
        let mut obj = Object::new(name.clone());
        for class in chain.iter().rev() {
            for prop in class.properties.iter().filter(|p| !p.is_static) {
                if let Some(default) = &prop.default {
                    let declared = PropertyId::new(class.name.clone(), prop.name.clone());
                    obj.assign(self.slot_id(name, &declared), default.clone());
                }
            }
        }
        Ok(obj)
    }

    /// The slot backing `property` on an instance of `class`.
    ///
    /// A private property owns its slot. Non-private declarations of one
    /// name share a single slot, keyed by the declaration closest to `class`.
    pub fn slot_id(&self, class: &ClassName, property: &PropertyId) -> PropertyId {
        let shared = self
            .property(property)
            .is_some_and(|p| !p.is_static && p.visibility != Visibility::Private);
        if !shared {
            return property.clone();
        }
        let Ok(chain) = self.ancestors(class) else {
            return property.clone();
        };
        chain
            .iter()
            .find(|c| {
                c.property(&property.name)
                    .is_some_and(|p| !p.is_static && p.visibility != Visibility::Private)
            })
            .map(|c| PropertyId::new(c.name.clone(), property.name.clone()))
            .unwrap_or_else(|| property.clone())
    }

    /// Read `property` from `obj` through its resolved slot.
    pub fn read_property(&self, obj: &Object, property: &PropertyId) -> PropertyValue {
        obj.read(&self.slot_id(obj.class(), property))
    }

    /// Assign `property` on `obj` through its resolved slot.
    pub fn write_property(&self, obj: &mut Object, property: &PropertyId, value: Value) {
        let slot = self.slot_id(obj.class(), property);
        obj.assign(slot, value);
    }
}
