//! Core library components.
//!
//! Secret loading and merging, environment sinks, stores and configuration.

pub mod config;
pub mod constants;
pub mod env;
pub mod injector;
pub mod store;
pub mod validation;
