
use std::cell::RefCell;

use strictstate_core::types::{ClassName, PropertyId};
use strictstate_core::value::PropertyValue;
use strictstate_types::descriptor::TypeDescriptor;

/// Records every collaborator call made by a checker, in order.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct CallLog {
    pub finds: RefCell<Vec<(PropertyId, ClassName)>>,
    pub applies: RefCell<Vec<(Vec<TypeDescriptor>, PropertyValue)>>,
}

#[allow(dead_code)]
impl CallLog {
    pub fn record_find(&self, property: &PropertyId, declaring: &ClassName) {
        self.finds
            .borrow_mut()
            .push((property.clone(), declaring.clone()));
    }

    pub fn record_apply(&self, types: &[TypeDescriptor], value: &PropertyValue) {
        self.applies
            .borrow_mut()
            .push((types.to_vec(), value.clone()));
    }

    pub fn find_count(&self) -> usize {
        self.finds.borrow().len()
    }

    pub fn apply_count(&self) -> usize {
        self.applies.borrow().len()
    }
}
