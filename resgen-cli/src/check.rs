use resgen::{Diagnostic, inspect_file};

/// Run the check command. Returns the diagnostics found; printing is done here.
pub fn run_check_command(input: &str, json: bool) -> Result<Vec<Diagnostic>, String> {
    let diagnostics = inspect_file(input).map_err(|e| e.report())?;

    if json {
        let rendered = serde_json::to_string_pretty(&diagnostics)
            .map_err(|e| format!("Error serializing to JSON: {}", e))?;
        println!("{}", rendered);
    } else if diagnostics.is_empty() {
        println!("✅ {}: no problems found", input);
    } else {
        for diagnostic in &diagnostics {
            println!("{}: {}", input, diagnostic);
        }
        println!("❌ {} problem(s) found", diagnostics.len());
    }

    Ok(diagnostics)
}
