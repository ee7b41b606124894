//! Options controlling how a properties file is read and the module is generated.

/// Default first line of every generated module.
pub const DEFAULT_HEADER: &str = "// GENERATED AUTOMATICALLY DO NOT CHANGE!!!";

/// Default name of the exported object.
pub const DEFAULT_OBJECT_NAME: &str = "resources";

/// Read behavior for properties parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Reject non-blank lines that have no `=` instead of keeping them.
    pub strict: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Options for [`crate::transpile`] and [`crate::transpile_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileOptions {
    /// Name of the declared object (and of the default export).
    pub object_name: String,
    /// Comment written above the declaration; may span several lines, empty writes nothing.
    pub header: String,
    /// Whether to append `export default <object_name>;`.
    pub export_default: bool,
    /// See [`ParseOptions::strict`].
    pub strict: bool,
    /// Create missing parent directories of the destination.
    pub create_dirs: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        TranspileOptions {
            object_name: DEFAULT_OBJECT_NAME.to_string(),
            header: DEFAULT_HEADER.to_string(),
            export_default: true,
            strict: false,
            create_dirs: false,
        }
    }
}

impl TranspileOptions {
    /// Creates default options, producing the stock `resources` module.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object_name(mut self, object_name: impl Into<String>) -> Self {
        self.object_name = object_name.into();
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_export_default(mut self, export_default: bool) -> Self {
        self.export_default = export_default;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new().with_strict(self.strict)
    }
}
