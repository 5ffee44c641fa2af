use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;

/// Print a payload in the selected format. Text mode pretty-prints the JSON
/// too; the typed models have no bespoke table rendering.
pub fn output_data(output_format: OutputFormat, data: &impl Serialize) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "success": true, "data": data }))?
            );
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
    }
    Ok(())
}

/// Print a success acknowledgement in the selected format.
pub fn output_success(output_format: OutputFormat, message: &str) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "success": true, "message": message }))?
            );
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}
