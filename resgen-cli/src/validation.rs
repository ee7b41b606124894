use std::path::Path;

use resgen::infer_format_from_extension;
use unic_langid::LanguageIdentifier;

/// Validate file path exists and is a regular file
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);
    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }
    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }
    Ok(())
}

/// Validate the destination of a transpile: known extension, and an existing
/// parent directory unless directories will be created.
pub fn validate_output_path(path: &str, create_dirs: bool) -> Result<(), String> {
    let path_obj = Path::new(path);

    match infer_format_from_extension(path_obj) {
        Some(format) if format.is_output() => {}
        _ => {
            return Err(format!(
                "Unsupported output file: {} (expected .ts, .js, .mjs, .cjs or .json)",
                path
            ));
        }
    }

    if path_obj.is_dir() {
        return Err(format!("Output path is a directory: {}", path));
    }

    if !create_dirs {
        if let Some(parent) = path_obj.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(format!(
                    "Output directory does not exist: {} (use --create-dirs)",
                    parent.display()
                ));
            }
        }
    }

    Ok(())
}

/// Validate a language code, e.g. `en` or `pt-BR`, and return its canonical
/// identifier; `pt_BR`, `pt-br` and `pt-BR` all give the same value.
pub fn parse_language_code(lang: &str) -> Result<LanguageIdentifier, String> {
    if lang.trim().is_empty() {
        return Err("Language code cannot be empty".to_string());
    }
    lang.trim()
        .parse::<LanguageIdentifier>()
        .map_err(|_| format!("Invalid language code: {}", lang))
}

/// Validate a JavaScript identifier used as the generated object name
pub fn validate_object_name(name: &str) -> Result<(), String> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(format!("Invalid object name: '{}'", name))
    }
}
