//! CLI library for testing purposes

pub mod batch;
pub mod check;
pub mod config;
pub mod logging;
pub mod transpile;
pub mod validation;
pub mod view;

pub use config::{Config, TranspileFlags, load_config, resolve_transpile};
