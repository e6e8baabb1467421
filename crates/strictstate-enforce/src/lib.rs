//! Object state enforcement for strictstate.
//!
//! Inspects a live object within a class scope and hands every property's
//! declared types and current value to a type-check applier:
//! - [`checker`]: The [`ObjectStateChecker`](checker::ObjectStateChecker) and the applier contract
//! - [`conformance`]: Whether a value satisfies a type descriptor
//! - [`apply`]: The default applier, producing [`ViolationReport`](types::ViolationReport)s
//! - [`inspect`]: A registry- and config-backed checker ready for use
//! - [`types`]: Outcomes, reports, and errors

pub mod types;
pub mod conformance;
pub mod apply;
pub mod checker;
pub mod inspect;
