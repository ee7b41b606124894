//! File-level transpile operation: properties file in, generated module out.
//!
//! The input is read and rendered completely before the destination is
//! opened, so a failed read never creates or truncates the output file. Once
//! writing starts, a failure leaves whatever was written in place.

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use unic_langid::LanguageIdentifier;

use crate::{
    error::Error,
    formats::{FormatType, JsonMap, PropertiesFormat, ScriptModule, infer_format_from_extension},
    options::TranspileOptions,
    traits::Writer,
};

/// Summary of one successful [`transpile`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: FormatType,
    /// Number of member entries written.
    pub entries: usize,
    /// Locale inferred from the input file name, if any.
    pub language: Option<String>,
}

/// Transpiles properties text into module text.
///
/// ```rust
/// use resgen::{TranspileOptions, transpile_str};
/// let module = transpile_str("ok = Hello, world\n", &TranspileOptions::default())?;
/// assert!(module.contains("  ok: 'Hello, world',\n"));
/// # Ok::<(), resgen::Error>(())
/// ```
pub fn transpile_str(input: &str, options: &TranspileOptions) -> Result<String, Error> {
    let format = PropertiesFormat::parse_str_with(input, &options.parse_options())?;
    ScriptModule::new(format.entries, options).to_string_lossy()
}

/// Transpiles the properties file at `input` into `output`.
///
/// The output format follows the destination extension (`.ts`, `.js`, `.mjs`,
/// `.cjs` or `.json`). The destination is overwritten in place.
///
/// # Errors
///
/// - [`Error::UnsupportedFormat`] when the destination extension is not an output format;
/// - [`Error::Read`] / [`Error::MalformedLine`] when the input cannot be read or parsed,
///   in which case the destination is untouched;
/// - [`Error::Write`] when creating directories or writing the destination fails.
pub fn transpile<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &TranspileOptions,
) -> Result<TranspileReport, Error> {
    let input = input.as_ref();
    let output = output.as_ref();

    let format = infer_format_from_extension(output)
        .filter(FormatType::is_output)
        .ok_or_else(|| {
            Error::UnsupportedFormat(format!(
                "cannot generate `{}`, expected a .ts, .js, .mjs, .cjs or .json destination",
                output.display()
            ))
        })?;

    tracing::debug!(input = %input.display(), "reading properties");
    let language = infer_language_from_path(input);
    let properties = PropertiesFormat::read_from_with(input, &options.parse_options())?
        .with_language(language.clone());
    let entries = properties.len();

    let rendered = match format {
        FormatType::Json => JsonMap::from(properties).to_string_lossy()?,
        _ => ScriptModule::new(properties.entries, options).to_string_lossy()?,
    };

    if options.create_dirs {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;
        }
    }

    tracing::debug!(output = %output.display(), %format, entries, "writing generated file");
    std::fs::write(output, rendered).map_err(|e| Error::write(output, e))?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        entries,
        "generated resource file"
    );

    Ok(TranspileReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        format,
        entries,
        language,
    })
}

/// Transpiles with [`TranspileOptions::default`].
pub fn transpile_auto<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<TranspileReport, Error> {
    transpile(input, output, &TranspileOptions::default())
}

/// Infers a locale from a resource bundle file name.
///
/// Follows the `<base>_<language>[_<Script>][_<REGION>][_<variant>]` naming
/// convention. The stem is read from the end: the shortest trailing run made
/// of a lowercase language segment followed only by script, region or variant
/// segments wins, and it must parse as a language identifier. The base name
/// itself is never taken as the language.
///
/// ```rust
/// use resgen::infer_language_from_path;
/// assert_eq!(infer_language_from_path("res/Cres_en.properties"), Some("en".to_string()));
/// assert_eq!(infer_language_from_path("Messages_pt_BR.properties"), Some("pt-BR".to_string()));
/// assert_eq!(infer_language_from_path("my_app_en.properties"), Some("en".to_string()));
/// assert_eq!(infer_language_from_path("Cres.properties"), None);
/// ```
pub fn infer_language_from_path<P: AsRef<Path>>(path: P) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let segments: Vec<&str> = stem.split('_').collect();

    let first = segments.len().saturating_sub(MAX_LOCALE_SEGMENTS).max(1);
    (first..segments.len()).rev().find_map(|start| {
        let (language, rest) = segments[start..].split_first()?;
        if !LANGUAGE_SUBTAG.is_match(language) || !rest.iter().all(|s| TRAILING_SUBTAG.is_match(s)) {
            return None;
        }
        segments[start..]
            .join("-")
            .parse::<LanguageIdentifier>()
            .ok()
            .map(|id| id.to_string())
    })
}

// language, script, region, variant
const MAX_LOCALE_SEGMENTS: usize = 4;

lazy_static! {
    static ref LANGUAGE_SUBTAG: Regex = Regex::new(r"^[a-z]{2,3}$").unwrap();
    // Script (`Hant`), region (`BR`, `419`) or variant (`valencia`, `1996`).
    static ref TRAILING_SUBTAG: Regex =
        Regex::new(r"^(?:[A-Z][a-z]{3}|[A-Z]{2}|[0-9]{3}|[A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3})$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_transpile_str_round_trip_examples() {
        let module = transpile_str(
            "ok = Hello, world\n\nquoted = It's fine\n",
            &TranspileOptions::default(),
        )
        .unwrap();
        assert_eq!(
            module,
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
    fn test_transpile_str_strict_propagates_malformed_line() {
        let options = TranspileOptions::new().with_strict(true);
        assert!(matches!(
            transpile_str("a=1\nbad\n", &options),
            Err(Error::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_transpile_writes_module() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("Cres_en.properties");
        let output = tmp.path().join("res.ts");
        std::fs::write(&input, "a = 1\nb = 2\n").unwrap();

        let report = transpile_auto(&input, &output).unwrap();
        assert_eq!(report.entries, 2);
        assert_eq!(report.language.as_deref(), Some("en"));
        assert_eq!(report.format, FormatType::Module);

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("  a: '1',\n  b: '2',\n"));
    }

    #[test]
    fn test_transpile_rejects_unknown_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("Cres_en.properties");
        std::fs::write(&input, "a = 1\n").unwrap();

        let err = transpile_auto(&input, tmp.path().join("res.txt")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(!tmp.path().join("res.txt").exists());
    }

    #[test]
    fn test_transpile_creates_parent_dirs_when_asked() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("Cres.properties");
        let output = tmp.path().join("nested/dir/res.js");
        std::fs::write(&input, "a = 1\n").unwrap();

        let options = TranspileOptions::new().with_create_dirs(true);
        let report = transpile(&input, &output, &options).unwrap();
        assert!(output.exists());
        assert_eq!(report.language, None);
    }

    #[test]
    fn test_transpile_missing_parent_dir_is_write_error() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("Cres.properties");
        std::fs::write(&input, "a = 1\n").unwrap();

        let err = transpile_auto(&input, tmp.path().join("absent/res.ts")).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }

    #[test]
    fn test_infer_language_from_path() {
        assert_eq!(
            infer_language_from_path("Cres_de.properties"),
            Some("de".to_string())
        );
        assert_eq!(
            infer_language_from_path("a/b/Messages_zh_Hant_TW.properties"),
            Some("zh-Hant-TW".to_string())
        );
        assert_eq!(
            infer_language_from_path("Messages_pt_BR.properties"),
            Some("pt-BR".to_string())
        );
        assert_eq!(
            infer_language_from_path("Strings_old_de.properties"),
            Some("de".to_string())
        );
        assert_eq!(
            infer_language_from_path("my_app_en.properties"),
            Some("en".to_string())
        );
        assert_eq!(
            infer_language_from_path("ui_res_en.properties"),
            Some("en".to_string())
        );
        assert_eq!(
            infer_language_from_path("my_app_es_419.properties"),
            Some("es-419".to_string())
        );
        assert_eq!(infer_language_from_path("Cres_EN.properties"), None);
        assert_eq!(infer_language_from_path("Cres_en_XX_YY_ZZ.properties"), None);
        assert_eq!(infer_language_from_path("en.properties"), None);
    }
}
