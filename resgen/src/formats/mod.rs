//! All supported resource file formats for resgen.
//!
//! This module re-exports the main types for each format and provides
//! the [`FormatType`] enum for generic format handling across the crate.

pub mod json;
pub mod module;
pub mod properties;

use std::{
    fmt::{Display, Formatter},
    path::Path,
};

// Reexporting the formats for easier access
pub use json::JsonMap;
pub use module::ScriptModule;
pub use properties::Format as PropertiesFormat;

/// Represents all supported resource file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Java-style `.properties` input.
    Properties,
    /// Generated JavaScript/TypeScript object-literal module.
    Module,
    /// JSON object with the same members as the module.
    Json,
}

/// Implements [`std::fmt::Display`] for [`FormatType`].
///
/// # Example
/// ```rust
/// use resgen::formats::FormatType;
/// assert_eq!(FormatType::Properties.to_string(), "properties");
/// assert_eq!(FormatType::Module.to_string(), "module");
/// assert_eq!(FormatType::Json.to_string(), "json");
/// ```
impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Properties => write!(f, "properties"),
            FormatType::Module => write!(f, "module"),
            FormatType::Json => write!(f, "json"),
        }
    }
}

impl FormatType {
    /// Maps a bare file extension (no dot, any case) to its format.
    ///
    /// `properties` is the input format; `ts`, `js`, `mjs` and `cjs` are
    /// modules; `json` is JSON.
    pub fn from_extension(extension: &str) -> Option<FormatType> {
        match extension.to_ascii_lowercase().as_str() {
            "properties" => Some(FormatType::Properties),
            "ts" | "js" | "mjs" | "cjs" => Some(FormatType::Module),
            "json" => Some(FormatType::Json),
            _ => None,
        }
    }

    /// Whether this format can be the target of a transpile.
    pub fn is_output(&self) -> bool {
        !matches!(self, FormatType::Properties)
    }
}

/// Infers the format from a file extension.
///
/// # Example
/// ```rust
/// use resgen::{FormatType, infer_format_from_extension};
/// assert_eq!(infer_format_from_extension("src/res.ts"), Some(FormatType::Module));
/// assert_eq!(infer_format_from_extension("Cres_en.properties"), Some(FormatType::Properties));
/// assert_eq!(infer_format_from_extension("notes.txt"), None);
/// ```
pub fn infer_format_from_extension<P: AsRef<Path>>(path: P) -> Option<FormatType> {
    FormatType::from_extension(path.as_ref().extension()?.to_str()?)
}
