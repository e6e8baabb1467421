//! Type metadata for strictstate: what a property is declared to hold, and
//! which properties a class scope exposes.
//!
//! - [`descriptor`]: The closed [`TypeDescriptor`](descriptor::TypeDescriptor) variant
//! - [`annotation`]: Parser for the doc-comment type mini-language (`@var int|null`)
//! - [`finder`]: The [`TypeFinder`](finder::TypeFinder) contract and its registry-backed default
//! - [`enumerator`]: The [`PropertyEnumerator`](enumerator::PropertyEnumerator) contract
//!   and its reflection-style default

pub mod annotation;
pub mod descriptor;
pub mod enumerator;
pub mod finder;
