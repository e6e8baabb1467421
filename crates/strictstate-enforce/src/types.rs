use serde::{Deserialize, Serialize};
use strictstate_core::types::{ClassName, ModelError, PropertyId};
use strictstate_core::value::{PropertyValue, Value};
use strictstate_types::descriptor::TypeDescriptor;

/// Errors raised by [`ObjectStateChecker::check`](crate::checker::ObjectStateChecker::check).
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The target was not an object. Raised before any property is visited.
    #[error("Expected an object, got {found} ({value})")]
    InvalidInput { found: String, value: String },

    /// The property enumerator rejected the target or scope.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CheckError {
    pub fn invalid_input(received: &Value) -> Self {
        CheckError::InvalidInput {
            found: received.type_name().to_string(),
            value: received.describe(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Declared but never assigned.
    Uninitialized,
    /// Holds a value outside every declared type.
    TypeMismatch,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Uninitialized => "uninitialized",
            ViolationKind::TypeMismatch => "type_mismatch",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a property's value does not conform to its declared types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationReport {
    pub kind: ViolationKind,
    pub expected: Vec<TypeDescriptor>,
    pub actual: PropertyValue,
    pub message: String,
}

/// The applier's verdict for one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyVerdict<V> {
    pub property: PropertyId,
    pub verdict: V,
}

/// Every verdict produced by one `check` call, in enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome<V> {
    pub class: ClassName,
    pub scope: ClassName,
    pub verdicts: Vec<PropertyVerdict<V>>,
}

impl<V> CheckOutcome<V> {
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn verdict(&self, property: &PropertyId) -> Option<&V> {
        self.verdicts
            .iter()
            .find(|v| &v.property == property)
            .map(|v| &v.verdict)
    }
}

impl CheckOutcome<Result<(), ViolationReport>> {
    /// Properties that failed, in enumeration order.
    pub fn violations(&self) -> impl Iterator<Item = (&PropertyId, &ViolationReport)> {
        self.verdicts
            .iter()
            .filter_map(|v| v.verdict.as_ref().err().map(|report| (&v.property, report)))
    }

    pub fn violation_count(&self) -> usize {
        self.violations().count()
    }

    pub fn is_clean(&self) -> bool {
        self.verdicts.iter().all(|v| v.verdict.is_ok())
    }

    /// Flatten into a serializable report.
    pub fn report(&self) -> CheckReport {
        CheckReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            class: self.class.clone(),
            scope: self.scope.clone(),
            status: if self.is_clean() { "ok" } else { "error" }.to_string(),
            properties_checked: self.len(),
            violations: self
                .violations()
                .map(|(property, report)| PropertyViolation {
                    property: property.clone(),
                    report: report.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub version: String,
    pub class: ClassName,
    pub scope: ClassName,
    pub status: String, // "ok" | "error"
    pub properties_checked: usize,
    pub violations: Vec<PropertyViolation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyViolation {
    pub property: PropertyId,
    #[serde(flatten)]
    pub report: ViolationReport,
}
