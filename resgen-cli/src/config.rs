//! `resgen.toml` configuration and flag/config/default resolution.

use std::path::Path;

use resgen::TranspileOptions;
use serde::Deserialize;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "resgen.toml";

/// Built-in source file, relative to the project root.
pub const DEFAULT_INPUT: &str =
    "./aggregate-api/src/main/java/com/tibbo/aggregate/common/res/Cres_en.properties";

/// Built-in destination file, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "./frontend/typescript-api/src/res.ts";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub transpile: TranspileSection,
}

/// `[transpile]` table. Every field is optional; unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranspileSection {
    pub input: Option<String>,
    pub output: Option<String>,
    pub object_name: Option<String>,
    pub header: Option<String>,
    pub export_default: Option<bool>,
    pub strict: Option<bool>,
    pub create_dirs: Option<bool>,
}

/// Transpile settings given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranspileFlags {
    pub input: Option<String>,
    pub output: Option<String>,
    pub object_name: Option<String>,
    pub header: Option<String>,
    pub no_export: bool,
    pub strict: bool,
    pub create_dirs: bool,
}

/// Fully resolved transpile job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileJob {
    pub input: String,
    pub output: String,
    pub options: TranspileOptions,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid configuration: {}", e))
    }
}

/// Loads the configuration.
///
/// An explicitly named file must exist. The default file is optional.
pub fn load_config(explicit: Option<&str>) -> Result<Config, String> {
    let (path, required) = match explicit {
        Some(path) => (path, true),
        None => (DEFAULT_CONFIG_FILE, false),
    };

    if !Path::new(path).is_file() {
        if required {
            return Err(format!("Config file does not exist: {}", path));
        }
        tracing::debug!(path, "no configuration file, using defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read config file {}: {}", path, e))?;
    let config = Config::from_toml(&content).map_err(|e| format!("{} ({})", e, path))?;
    tracing::debug!(path, "loaded configuration");
    Ok(config)
}

/// Merges flags over the config file over built-in defaults.
pub fn resolve_transpile(flags: &TranspileFlags, config: &Config) -> TranspileJob {
    let section = &config.transpile;
    let defaults = TranspileOptions::default();

    let options = TranspileOptions {
        object_name: flags
            .object_name
            .clone()
            .or_else(|| section.object_name.clone())
            .unwrap_or(defaults.object_name),
        header: flags
            .header
            .clone()
            .or_else(|| section.header.clone())
            .unwrap_or(defaults.header),
        export_default: if flags.no_export {
            false
        } else {
            section.export_default.unwrap_or(defaults.export_default)
        },
        strict: flags.strict || section.strict.unwrap_or(defaults.strict),
        create_dirs: flags.create_dirs || section.create_dirs.unwrap_or(defaults.create_dirs),
    };

    TranspileJob {
        input: flags
            .input
            .clone()
            .or_else(|| section.input.clone())
            .unwrap_or_else(|| DEFAULT_INPUT.to_string()),
        output: flags
            .output
            .clone()
            .or_else(|| section.output.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        options,
    }
}
