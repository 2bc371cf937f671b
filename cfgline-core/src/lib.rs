//! Core shared library for the CfgLine grammar tools.
//!
//! This crate exposes the reusable primitives the grammar and CLI crates
//! depend on: the canonical error type, configuration loading and logging
//! setup.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::CoreConfig;
pub use errors::{CfgLineError, ConfigError, Result as CoreResult};
