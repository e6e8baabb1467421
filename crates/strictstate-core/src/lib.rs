//! Core object model, class registry, and configuration for strictstate.
//!
//! This crate provides the foundational data structures used across all strictstate crates:
//! - [`types`]: Class and property identities, declarations, and error types
//! - [`value`]: Runtime values and the explicit uninitialized state
//! - [`object`]: Object instances and their property slots
//! - [`registry`]: The [`ClassRegistry`](registry::ClassRegistry) of declared classes
//! - [`manifest`]: Loading class declarations from JSON manifests
//! - [`config`]: Configuration loading from `.strictstate/strictstate.json`

pub mod config;
pub mod manifest;
pub mod object;
pub mod registry;
pub mod types;
pub mod value;
