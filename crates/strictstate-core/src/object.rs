use serde::{Deserialize, Serialize};

use crate::types::{ClassName, PropertyId};
use crate::value::{PropertyValue, Value};

/// One initialized property slot on an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub property: PropertyId,
    pub value: Value,
}

/// A live object instance.
///
/// Only initialized properties occupy a slot. A declared property with no
/// slot reads back as [`PropertyValue::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    class: ClassName,
    #[serde(default)]
    slots: Vec<Slot>,
}

impl Object {
    /// Create an object of `class` with no initialized properties.
    ///
    /// Use [`ClassRegistry::instantiate`](crate::registry::ClassRegistry::instantiate)
    /// to get declared defaults applied.
    pub fn new(class: impl Into<ClassName>) -> Self {
        Self {
            class: class.into(),
            slots: vec![],
        }
    }

    pub fn class(&self) -> &ClassName {
        &self.class
    }

    /// Read a property slot without touching it.
    pub fn read(&self, property: &PropertyId) -> PropertyValue {
        match self.slot(property) {
            Some(slot) => PropertyValue::Present(slot.value.clone()),
            None => PropertyValue::Absent,
        }
    }

    pub fn is_initialized(&self, property: &PropertyId) -> bool {
        self.slot(property).is_some()
    }

    /// Assign a value, initializing the slot if needed.
    pub fn assign(&mut self, property: PropertyId, value: Value) {
        match self.slots.iter_mut().find(|s| s.property == property) {
            Some(slot) => slot.value = value,
            None => self.slots.push(Slot { property, value }),
        }
    }

    /// Remove a slot, returning the property to the uninitialized state.
    pub fn unset(&mut self, property: &PropertyId) -> Option<Value> {
        let idx = self.slots.iter().position(|s| &s.property == property)?;
        Some(self.slots.remove(idx).value)
    }

    /// Initialized slots in assignment order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn slot(&self, property: &PropertyId) -> Option<&Slot> {
        self.slots.iter().find(|s| &s.property == property)
    }
}
