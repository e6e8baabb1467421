use strictstate_core::config::StrictConfig;
use strictstate_core::registry::ClassRegistry;
use strictstate_core::types::ClassName;
use strictstate_core::value::Value;
use strictstate_types::enumerator::ReflectionEnumerator;
use strictstate_types::finder::DocBlockTypeFinder;

use crate::apply::ApplyTypeChecks;
use crate::checker::ObjectStateChecker;
use crate::types::{CheckError, CheckOutcome, ViolationReport};

pub type Verdict = Result<(), ViolationReport>;

/// An [`ObjectStateChecker`] wired to a class registry: reflection-style
/// enumeration, doc-block type lookup, and the default applier.
pub struct StateInspector<'r> {
    checker: ObjectStateChecker<ApplyTypeChecks<'r>, DocBlockTypeFinder<'r>, ReflectionEnumerator<'r>>,
}

impl<'r> StateInspector<'r> {
    pub fn new(registry: &'r ClassRegistry) -> Self {
        Self::with_config(registry, &StrictConfig::default())
    }

    /// Create an inspector configured from a `StrictConfig`.
    pub fn with_config(registry: &'r ClassRegistry, config: &StrictConfig) -> Self {
        Self {
            checker: ObjectStateChecker::new(
                ApplyTypeChecks::from_config(registry, &config.conformance),
                DocBlockTypeFinder::new(registry),
                ReflectionEnumerator::new(registry),
            ),
        }
    }

    /// Check `target` within `scope`.
    pub fn check(&self, target: &Value, scope: &ClassName) -> Result<CheckOutcome<Verdict>, CheckError> {
        self.checker.check(target, scope)
    }

    /// Check `target` within its own class, covering own and inherited
    /// properties.
    pub fn check_all(&self, target: &Value) -> Result<CheckOutcome<Verdict>, CheckError> {
        match target {
            Value::Object(object) => self.checker.check_object(object, object.class()),
            other => Err(CheckError::invalid_input(other)),
        }
    }
}
