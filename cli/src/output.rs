//! Output formatting for `inspect`.

use cmdline_keys_core::{CommandLineParser, ParamDecl};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Snapshot of a parser after decoding and overlay.
#[derive(Debug, Serialize)]
pub struct Inspection<'a> {
    pub app_name: &'a str,
    pub app_path: &'a str,
    pub declarations: &'a [ParamDecl],
    pub ignored: &'a [String],
    pub errors: Vec<String>,
}

impl<'a> Inspection<'a> {
    pub fn of(parser: &'a CommandLineParser) -> Self {
        Self {
            app_name: parser.app_name(),
            app_path: parser.path_to_application(),
            declarations: parser.declarations(),
            ignored: parser.ignored(),
            errors: parser.errors().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Formats an inspection in the requested output format.
pub fn format_inspection(
    inspection: &Inspection<'_>,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(inspection)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(inspection).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(inspection_to_table(inspection)),
    }
}

fn inspection_to_table(inspection: &Inspection<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!("Application: {}", inspection.app_name));
    if !inspection.app_path.is_empty() {
        out.push_str(&format!("  Path: {}", inspection.app_path));
    }
    out.push('\n');

    if !inspection.declarations.is_empty() {
        out.push_str("\nParameters:\n");
        let max_keys = inspection
            .declarations
            .iter()
            .map(|d| d.keys.join(" ").len())
            .max()
            .unwrap_or(4);

        for decl in inspection.declarations {
            let slot = match decl.position {
                Some(position) => format!("#{position}"),
                None => "-".to_string(),
            };
            out.push_str(&format!(
                "  {:<3} {:<width$}  [{}]  {}\n",
                slot,
                decl.keys.join(" "),
                decl.default_value,
                decl.help_message,
                width = max_keys
            ));
        }
    }

    if !inspection.ignored.is_empty() {
        out.push_str("\nIgnored:\n");
        for token in inspection.ignored {
            out.push_str(&format!("  {token}\n"));
        }
    }

    if !inspection.errors.is_empty() {
        out.push_str("\nErrors:\n");
        for error in &inspection.errors {
            out.push_str(&format!("  {error}\n"));
        }
    }

    out
}
