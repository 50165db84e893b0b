//! Output formatters for lint diagnostics.

mod text;

pub use text::*;

use crate::linter::LintResult;
use serde::Serialize;

/// Output format for lint results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain `file:line:col` terminal output
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Format lint results according to the specified format
pub fn format_results(
    results: &[LintResult],
    sources: &[(String, String)],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => format_text(results, sources),
        OutputFormat::Json => format_json(results, sources),
    }
}

/// 1-indexed line and column for a byte offset
pub(crate) fn line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = (offset - line_start) as u32 + 1;
    (line, column)
}

/// JSON output structure for a single file
#[derive(Debug, Serialize)]
pub struct JsonFileResult {
    pub file: String,
    pub messages: Vec<JsonMessage>,
    #[serde(rename = "errorCount")]
    pub error_count: usize,
    #[serde(rename = "warningCount")]
    pub warning_count: usize,
}

/// JSON output structure for a single message
#[derive(Debug, Serialize)]
pub struct JsonMessage {
    #[serde(rename = "ruleId")]
    pub rule_id: &'static str,
    pub severity: u8,
    pub message: String,
    pub line: u32,
    pub column: u32,
    #[serde(rename = "endLine")]
    pub end_line: u32,
    #[serde(rename = "endColumn")]
    pub end_column: u32,
}

/// Format results as JSON
fn format_json(results: &[LintResult], sources: &[(String, String)]) -> String {
    let source_for = |filename: &str| {
        sources
            .iter()
            .find(|(f, _)| f == filename)
            .map(|(_, s)| s.as_str())
            .unwrap_or("")
    };

    let json_results: Vec<JsonFileResult> = results
        .iter()
        .map(|r| {
            let source = source_for(&r.filename);
            JsonFileResult {
                file: r.filename.clone(),
                messages: r
                    .diagnostics
                    .iter()
                    .map(|d| {
                        let (line, column) = line_col(source, d.start);
                        let (end_line, end_column) = line_col(source, d.end);
                        JsonMessage {
                            rule_id: d.rule_name,
                            severity: match d.severity {
                                crate::diagnostic::Severity::Error => 2,
                                crate::diagnostic::Severity::Warning => 1,
                            },
                            message: d.message.to_string(),
                            line,
                            column,
                            end_line,
                            end_column,
                        }
                    })
                    .collect(),
                error_count: r.error_count,
                warning_count: r.warning_count,
            }
        })
        .collect();

    serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;

    #[test]
    fn test_line_col() {
        assert_eq!(line_col("abc", 0), (1, 1));
        assert_eq!(line_col("abc\ndef", 4), (2, 1));
        assert_eq!(line_col("abc\ndef", 6), (2, 3));
    }

    #[test]
    fn test_json_output_shape() {
        let linter = Linter::new();
        let source = "<Checkbox />".to_string();
        let result = linter.lint_source(&source, "test.tsx");
        let json = format_results(
            &[result],
            &[("test.tsx".to_string(), source)],
            OutputFormat::Json,
        );

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let file = &parsed[0];
        assert_eq!(file["file"], "test.tsx");
        assert_eq!(file["errorCount"], 1);
        let message = &file["messages"][0];
        assert_eq!(message["ruleId"], "checkbox-needs-labelling");
        assert_eq!(message["severity"], 2);
        assert_eq!(message["line"], 1);
        assert_eq!(message["column"], 1);
    }
}
