//! Output formatting: JSON, compact JSON, YAML.
//!
//! Records are printed to stdout in the selected format; everything else
//! (logs, warnings) goes to stderr.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Render any serializable value in the chosen format.
pub fn render<T: Serialize + ?Sized>(format: OutputFormat, data: &T) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(output_error)?,
        OutputFormat::JsonCompact => serde_json::to_string(data).map_err(output_error)?,
        OutputFormat::Yaml => serde_yaml::to_string(data).map_err(output_error)?,
    };
    Ok(rendered)
}

/// Render and print to stdout.
pub fn print<T: Serialize + ?Sized>(format: OutputFormat, data: &T) -> Result<(), CliError> {
    let output = render(format, data)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end())?;
    Ok(())
}

fn output_error(e: impl std::fmt::Display) -> CliError {
    CliError::Output {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn yaml_and_compact_json() {
        let value = json!({ "id": "d1", "name": "core" });
        assert_eq!(
            render(OutputFormat::JsonCompact, &value).expect("renders"),
            r#"{"id":"d1","name":"core"}"#
        );
        assert_eq!(
            render(OutputFormat::Yaml, &value).expect("renders"),
            "id: d1\nname: core\n"
        );
    }

    #[test]
    fn gone_state_renders_as_null() {
        let gone: Option<serde_json::Value> = None;
        assert_eq!(render(OutputFormat::Json, &gone).expect("renders"), "null");
    }
}
