use resgen::formats::PropertiesFormat;
use resgen::{ParseOptions, infer_language_from_path};
use unicode_width::UnicodeWidthChar;

/// Values longer than this many display columns are cut unless `--full` is given.
const MAX_VALUE_WIDTH: usize = 50;

/// Truncate to at most `max_width` display columns, appending `...` when cut.
pub fn truncate_to_width(value: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in value.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            out.push_str("...");
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

/// Print a view of the entries in a properties file.
pub fn run_view_command(input: &str, full: bool, json: bool) -> Result<(), String> {
    let format = PropertiesFormat::read_from_with(input, &ParseOptions::default())
        .map_err(|e| e.report())?
        .with_language(infer_language_from_path(input));

    if json {
        let rendered = serde_json::to_string_pretty(&format.entries)
            .map_err(|e| format!("Error serializing to JSON: {}", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("File: {}", input);
    println!(
        "Language: {}",
        format.language.as_deref().unwrap_or("(unknown)")
    );
    println!("Entries: {}", format.len());

    for (i, entry) in format.entries.iter().enumerate() {
        println!("\n  Entry {}: {}", i + 1, entry.key);
        let value = if full {
            entry.raw_value.clone()
        } else {
            truncate_to_width(&entry.raw_value, MAX_VALUE_WIDTH)
        };
        println!("    Value: {}", value);
        println!("    Emits: {}", entry.quoted_value());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_value_untouched() {
        assert_eq!(truncate_to_width("Hello", 50), "Hello");
    }

    #[test]
    fn test_truncate_long_value() {
        let value = "a".repeat(60);
        assert_eq!(truncate_to_width(&value, 50), format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn test_truncate_counts_wide_characters() {
        // Each of these takes two columns.
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本語...");
    }
}
