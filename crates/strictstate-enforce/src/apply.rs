use strictstate_core::config::ConformanceConfig;
use strictstate_core::registry::ClassRegistry;
use strictstate_core::value::{PropertyValue, Value};
use strictstate_types::descriptor::{display_types, TypeDescriptor};

use crate::checker::TypeCheckApplier;
use crate::conformance::TypeConformance;
use crate::types::{ViolationKind, ViolationReport};

/// Default type-check applier.
///
/// - An empty descriptor set passes: the property is untyped.
/// - An uninitialized property fails with [`ViolationKind::Uninitialized`],
///   unless `absent_as_null` is set and a declared type accepts null.
/// - A value matching no declared type fails with [`ViolationKind::TypeMismatch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyTypeChecks<'r> {
    conformance: TypeConformance<'r>,
    absent_as_null: bool,
}

impl<'r> ApplyTypeChecks<'r> {
    pub fn new(conformance: TypeConformance<'r>) -> Self {
        Self {
            conformance,
            absent_as_null: false,
        }
    }

    pub fn from_config(registry: &'r ClassRegistry, config: &ConformanceConfig) -> Self {
        Self {
            conformance: TypeConformance::new()
                .with_registry(registry)
                .strict_scalars(config.strict_scalars),
            absent_as_null: config.absent_as_null,
        }
    }

    pub fn absent_as_null(mut self, enabled: bool) -> Self {
        self.absent_as_null = enabled;
        self
    }
}

impl TypeCheckApplier for ApplyTypeChecks<'_> {
    type Verdict = Result<(), ViolationReport>;

    fn apply(&self, types: &[TypeDescriptor], value: &PropertyValue) -> Self::Verdict {
        if types.is_empty() {
            return Ok(());
        }
        let kind = match value {
            PropertyValue::Absent => {
                if self.absent_as_null && self.conformance.conforms_any(types, &Value::Null) {
                    return Ok(());
                }
                ViolationKind::Uninitialized
            }
            PropertyValue::Present(v) => {
                if self.conformance.conforms_any(types, v) {
                    return Ok(());
                }
                ViolationKind::TypeMismatch
            }
        };
        let expected = display_types(types);
        let message = match value {
            PropertyValue::Absent => format!("expected {expected}, but the property was never initialized"),
            PropertyValue::Present(Value::Null) => format!("expected {expected}, got null"),
            // already prefixed with their kind
            PropertyValue::Present(v @ (Value::Array(_) | Value::Object(_) | Value::Callable(_))) => {
                format!("expected {expected}, got {}", v.describe())
            }
            PropertyValue::Present(v) => {
                format!("expected {expected}, got {} {}", v.type_name(), v.describe())
            }
        };
        Err(ViolationReport {
            kind,
            expected: types.to_vec(),
            actual: value.clone(),
            message,
        })
    }
}
