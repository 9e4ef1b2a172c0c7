//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use inkwell_domain::{Baseline, Policy};
use inkwell_extractor::DocumentFormat;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format extracted text.
    ///
    /// Table mode prints the text as-is so it can be piped.
    pub fn format_extraction(
        &self,
        filename: &str,
        format: DocumentFormat,
        text: &str,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(text.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "filename": filename,
                "format": format.as_str(),
                "text": text,
            }))?),
        }
    }

    /// Format a baseline.
    pub fn format_baseline(&self, baseline: &Baseline) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(baseline)?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record([
                    "Vocabulary richness".to_string(),
                    format!("{:.2}", baseline.vocabulary_richness),
                ]);
                builder.push_record([
                    "Avg sentence length".to_string(),
                    baseline.avg_sentence_length.to_string(),
                ]);
                builder.push_record([
                    "Passive voice".to_string(),
                    baseline.passive_voice_frequency.clone(),
                ]);
                builder.push_record(["Top keywords".to_string(), baseline.top_keywords.join(", ")]);
                builder.push_record(["Computed at".to_string(), baseline.timestamp.to_rfc3339()]);

                Ok(self.render(builder))
            }
        }
    }

    /// Format a single policy.
    pub fn format_policy(&self, policy: &Policy) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(policy)?),
            OutputFormat::Table => {
                let mut out = String::new();
                out.push_str(&self.colorize(&format!("Policy {}", policy.version), "cyan"));
                out.push_str(&format!("\nLast updated: {}\n\n", policy.last_updated.to_rfc3339()));
                out.push_str(&policy.content);
                out.push('\n');

                if !policy.rules.is_empty() {
                    out.push_str("\nRules:\n");
                    for (i, rule) in policy.rules.iter().enumerate() {
                        out.push_str(&format!("  {}. {}\n", i + 1, rule));
                    }
                }

                Ok(out)
            }
        }
    }

    /// Format the result of looking up a version that no policy carries.
    pub fn format_missing_policy(&self, version: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&serde_json::Value::Null)?),
            OutputFormat::Table => Ok(self.colorize(
                &format!("No policy with version '{}'.", version),
                "yellow",
            )),
        }
    }

    /// Format the policy history, marking the current policy.
    pub fn format_policies(&self, policies: &[Policy], current_version: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(policies)?),
            OutputFormat::Table => {
                if policies.is_empty() {
                    return Ok(self.colorize("No policies found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Version", "Last Updated", "Rules", "Current"]);

                for policy in policies {
                    let marker = if policy.has_version(current_version) { "*" } else { "" };
                    builder.push_record([
                        policy.version.clone(),
                        policy.last_updated.format("%Y-%m-%d").to_string(),
                        policy.rules.len().to_string(),
                        marker.to_string(),
                    ]);
                }

                Ok(self.render(builder))
            }
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use inkwell_domain::LinguisticProfile;

    fn create_test_baseline() -> Baseline {
        Baseline::new(
            LinguisticProfile {
                vocabulary_richness: 0.72,
                passive_voice_frequency: "low".to_string(),
                top_keywords: vec!["clarity".to_string(), "voice".to_string()],
            },
            3,
            Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        )
    }

    fn create_test_policies() -> Vec<Policy> {
        vec![
            Policy::new(
                "1.0",
                Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
                "Original work only.",
                vec!["Be original".to_string()],
            ),
            Policy::new(
                "2.0",
                Utc.with_ymd_and_hms(2025, 2, 10, 0, 0, 0).unwrap(),
                "Disclose assistance.",
                Vec::new(),
            ),
        ]
    }

    #[test]
    fn test_extraction_table_is_raw_text() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_extraction("a.txt", DocumentFormat::PlainText, "line one\nline two")
            .unwrap();
        assert_eq!(output, "line one\nline two");
    }

    #[test]
    fn test_extraction_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_extraction("a.docx", DocumentFormat::Docx, "Hello")
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["filename"], "a.docx");
        assert_eq!(json["format"], DocumentFormat::Docx.as_str());
        assert_eq!(json["text"], "Hello");
    }

    #[test]
    fn test_baseline_json_uses_wire_names() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_baseline(&create_test_baseline()).unwrap();
        assert!(output.contains("avgSentenceLength"));
        assert!(output.contains("2026-01-02T03:04:05Z"));
    }

    #[test]
    fn test_baseline_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_baseline(&create_test_baseline()).unwrap();
        assert!(output.contains("Avg sentence length"));
        assert!(output.contains("clarity, voice"));
        assert!(output.contains("0.72"));
    }

    #[test]
    fn test_policy_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let policies = create_test_policies();
        let output = formatter.format_policy(&policies[0]).unwrap();
        assert!(output.starts_with("Policy 1.0"));
        assert!(output.contains("1. Be original"));
    }

    #[test]
    fn test_policy_without_rules() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let policies = create_test_policies();
        let output = formatter.format_policy(&policies[1]).unwrap();
        assert!(!output.contains("Rules:"));
    }

    #[test]
    fn test_policies_table_marks_current() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_policies(&create_test_policies(), "2.0")
            .unwrap();
        assert!(output.contains("Version"));
        assert!(output.contains("2025-02-10"));
        assert_eq!(output.matches('*').count(), 1);
    }

    #[test]
    fn test_policies_json_is_ordered_array() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_policies(&create_test_policies(), "2.0")
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json[0]["version"], "1.0");
        assert_eq!(json[1]["version"], "2.0");
    }

    #[test]
    fn test_missing_policy() {
        let table = Formatter::new(OutputFormat::Table, false);
        assert_eq!(
            table.format_missing_policy("3.0").unwrap(),
            "No policy with version '3.0'."
        );

        let json = Formatter::new(OutputFormat::Json, false);
        assert_eq!(json.format_missing_policy("3.0").unwrap(), "null");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
