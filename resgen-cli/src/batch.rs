use std::collections::HashSet;
use std::path::{Path, PathBuf};

use resgen::{FormatType, TranspileOptions, TranspileReport, infer_language_from_path, transpile};
use unic_langid::LanguageIdentifier;

use crate::validation::{parse_language_code, validate_object_name, validate_output_path};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub out_dir: String,
    /// Extension of generated files, without the dot; picks the output format.
    pub extension: String,
    /// Only transpile these languages; empty means all. Any spelling accepted
    /// by [`parse_language_code`] works (`pt_BR`, `EN`).
    pub languages: Vec<String>,
    pub transpile: TranspileOptions,
}

/// Destination for one input: `res_<lang>.<ext>`, or `res.<ext>` without a locale.
pub fn output_path_for(out_dir: &Path, language: Option<&str>, extension: &str) -> PathBuf {
    match language {
        Some(lang) => out_dir.join(format!("res_{}.{}", lang, extension)),
        None => out_dir.join(format!("res.{}", extension)),
    }
}

fn matches_filter(language: Option<&str>, filter: &[LanguageIdentifier]) -> bool {
    language
        .and_then(|lang| lang.parse::<LanguageIdentifier>().ok())
        .is_some_and(|id| filter.contains(&id))
}

/// Expand a glob pattern into matching files, sorted.
pub fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>, String> {
    let paths = glob::glob(pattern).map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;

    let mut files = Vec::new();
    for path in paths {
        let path = path.map_err(|e| format!("Cannot read {}: {}", e.path().display(), e))?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Run the batch command: every matched properties file to its own module.
///
/// All destinations are planned before anything is written; the run stops at
/// the first failing file.
pub fn run_batch_command(
    pattern: &str,
    options: &BatchOptions,
) -> Result<Vec<TranspileReport>, String> {
    let format = FormatType::from_extension(&options.extension)
        .filter(FormatType::is_output)
        .ok_or_else(|| {
            format!(
                "Unsupported extension: {} (expected ts, js, mjs, cjs or json)",
                options.extension
            )
        })?;
    validate_object_name(&options.transpile.object_name)?;
    let languages = options
        .languages
        .iter()
        .map(|lang| parse_language_code(lang))
        .collect::<Result<Vec<_>, _>>()?;

    let inputs = expand_pattern(pattern)?;
    if inputs.is_empty() {
        return Err(format!("No files match pattern: {}", pattern));
    }

    let out_dir = Path::new(&options.out_dir);
    let mut seen = HashSet::new();
    let mut plan = Vec::new();
    for input in inputs {
        let language = infer_language_from_path(&input);
        if !languages.is_empty() && !matches_filter(language.as_deref(), &languages) {
            tracing::debug!(input = %input.display(), "skipped by language filter");
            continue;
        }

        let output = output_path_for(out_dir, language.as_deref(), &options.extension);
        if !seen.insert(output.clone()) {
            return Err(format!(
                "Several inputs map to {}; name files with a locale suffix like Cres_en.properties",
                output.display()
            ));
        }
        plan.push((input, output));
    }

    if plan.is_empty() {
        return Err("No files left after language filtering".to_string());
    }

    let mut reports = Vec::with_capacity(plan.len());
    for (input, output) in plan {
        validate_output_path(&output.to_string_lossy(), options.transpile.create_dirs)?;
        let report = transpile(&input, &output, &options.transpile).map_err(|e| e.report())?;
        println!(
            "✅ {} -> {} ({} entries)",
            report.input.display(),
            report.output.display(),
            report.entries
        );
        reports.push(report);
    }

    tracing::info!(files = reports.len(), %format, "batch finished");
    Ok(reports)
}
