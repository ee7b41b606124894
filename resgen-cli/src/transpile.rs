use resgen::{TranspileReport, transpile};

use crate::config::{Config, TranspileFlags, resolve_transpile};
use crate::validation::{validate_file_path, validate_object_name, validate_output_path};

/// Run the transpile command: one properties file to one generated module.
pub fn run_transpile_command(
    flags: &TranspileFlags,
    config: &Config,
) -> Result<TranspileReport, String> {
    let job = resolve_transpile(flags, config);
    tracing::debug!(input = %job.input, output = %job.output, "resolved transpile job");

    validate_file_path(&job.input)?;
    validate_output_path(&job.output, job.options.create_dirs)?;
    validate_object_name(&job.options.object_name)?;

    let report = transpile(&job.input, &job.output, &job.options).map_err(|e| e.report())?;

    println!(
        "✅ Generated {} ({} entr{})",
        report.output.display(),
        report.entries,
        if report.entries == 1 { "y" } else { "ies" }
    );
    Ok(report)
}
