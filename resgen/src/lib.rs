#![forbid(unsafe_code)]
//! Resource module generator for Java-style locale properties files.
//!
//! Reads a `key=value` properties file and writes a generated JavaScript/TypeScript
//! module holding one object literal that maps every key to its quoted value,
//! followed by a default export.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use resgen::{TranspileOptions, transpile, transpile_auto};
//!
//! // Default output: `const resources = { ... }; export default resources;`
//! transpile_auto("res/Cres_en.properties", "src/res.ts")?;
//!
//! // Or tweak the generated module
//! let options = TranspileOptions::new().with_object_name("messages");
//! let report = transpile("res/Cres_de.properties", "src/res_de.ts", &options)?;
//! println!("{} entries", report.entries);
//! # Ok::<(), resgen::Error>(())
//! ```
//!
//! # Supported Formats
//!
//! - **Properties**: `key=value` per line input, read with BOM detection
//! - **Module**: `.ts` / `.js` / `.mjs` / `.cjs` generated object literal module
//! - **JSON**: `.json` object with the same members, in input order

pub mod error;
pub mod formats;
pub mod inspect;
pub mod options;
pub mod traits;
pub mod transpiler;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::{FormatType, infer_format_from_extension},
    inspect::{Diagnostic, inspect, inspect_file},
    options::{ParseOptions, TranspileOptions},
    transpiler::{
        TranspileReport, infer_language_from_path, transpile, transpile_auto, transpile_str,
    },
    types::{Quote, ResourceEntry},
};
