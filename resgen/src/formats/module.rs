//! Generated JavaScript/TypeScript resource module.
//!
//! ```text
//! // GENERATED AUTOMATICALLY DO NOT CHANGE!!!
//! const resources = {
//!   ok: 'Hello, world',
//!   quoted: "It's fine",
//! };
//! export default resources;
//! ```
//!
//! Values are emitted verbatim between the chosen quotes. A value holding both
//! quote characters produces a broken literal; [`crate::inspect::inspect`] reports those.

use std::io::Write;

use crate::{
    error::Error,
    formats::properties,
    options::TranspileOptions,
    traits::Writer,
    types::ResourceEntry,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptModule {
    pub header: String,
    pub object_name: String,
    pub export_default: bool,
    pub entries: Vec<ResourceEntry>,
}

impl ScriptModule {
    pub fn new(entries: Vec<ResourceEntry>, options: &TranspileOptions) -> Self {
        ScriptModule {
            header: options.header.clone(),
            object_name: options.object_name.clone(),
            export_default: options.export_default,
            entries,
        }
    }
}

impl From<properties::Format> for ScriptModule {
    fn from(value: properties::Format) -> Self {
        ScriptModule::new(value.entries, &TranspileOptions::default())
    }
}

impl Writer for ScriptModule {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        for line in self.header.lines() {
            writeln!(writer, "{}", line)?;
        }

        writeln!(writer, "const {} = {{", self.object_name)?;
        for entry in &self.entries {
            writeln!(writer, "{}", entry.member_line())?;
        }
        writeln!(writer, "}};")?;

        if self.export_default {
            writeln!(writer, "export default {};", self.object_name)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Parser;
    use indoc::indoc;

    fn render(module: &ScriptModule) -> String {
        module.to_string_lossy().unwrap()
    }

    #[test]
    fn test_default_module_layout() {
        let format = properties::Format::from_str("ok = Hello, world\nquoted = It's fine").unwrap();
        let rendered = render(&ScriptModule::from(format));
        assert_eq!(
            rendered,
            indoc! {r#"
                // GENERATED AUTOMATICALLY DO NOT CHANGE!!!
                const resources = {
                  ok: 'Hello, world',
                  quoted: "It's fine",
                };
                export default resources;
            "#}
        );
    }

    #[test]
    fn test_empty_module_has_no_members() {
        let rendered = render(&ScriptModule::from(properties::Format::default()));
        assert_eq!(
            rendered,
            indoc! {"
                // GENERATED AUTOMATICALLY DO NOT CHANGE!!!
                const resources = {
                };
                export default resources;
            "}
        );
    }

    #[test]
    fn test_custom_name_without_header_or_export() {
        let options = TranspileOptions::new()
            .with_object_name("messages")
            .with_header("")
            .with_export_default(false);
        let module = ScriptModule::new(vec![ResourceEntry::new("a", "b")], &options);
        assert_eq!(render(&module), "const messages = {\n  a: 'b',\n};\n");
    }

    #[test]
    fn test_multi_line_header() {
        let options = TranspileOptions::new().with_header("// line one\n// line two");
        let module = ScriptModule::new(Vec::new(), &options);
        assert!(render(&module).starts_with("// line one\n// line two\nconst resources = {\n"));
    }
}
