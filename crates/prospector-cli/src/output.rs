//! Output formatting for the CLI.

use crate::error::Result;
use colored::Colorize;
use prospector_domain::Lead;
use prospector_extractor::ExtractorError;

/// Output formatter.
pub struct Formatter {
    json: bool,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(json: bool, color_enabled: bool) -> Self {
        Self {
            json,
            color_enabled,
        }
    }

    /// Format a successfully extracted lead.
    pub fn format_lead(&self, lead: &Lead) -> Result<String> {
        let payload = lead.to_crm_payload();

        if self.json {
            let value = serde_json::json!({ "ok": payload });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut out = String::new();
        out.push_str(&self.success("lead extracted"));
        out.push('\n');
        out.push_str(&format!("  name:  {}\n", display(payload.name.as_deref())));
        out.push_str(&format!("  email: {}\n", display(payload.email.as_deref())));
        out.push_str(&format!("  phone: {}", display(payload.phone.as_deref())));

        Ok(out)
    }

    /// Format a terminal extraction failure.
    pub fn format_failure(&self, error: &ExtractorError) -> Result<String> {
        if self.json {
            let value = serde_json::json!({
                "err": {
                    "failure_type": error.kind().as_str(),
                    "reason": error.reason(),
                }
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        Ok(self.error(&format!("{} - {}", error.kind(), error.reason())))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Apply color if enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}

fn display(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospector_domain::LeadDraft;

    fn sample_lead() -> Lead {
        LeadDraft {
            name: Some("Test".to_string()),
            email: Some("a@b.com".to_string()),
            phone: Some("1234567890".to_string()),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_human_lead_output() {
        let formatter = Formatter::new(false, false);
        let out = formatter.format_lead(&sample_lead()).unwrap();

        assert!(out.contains("lead extracted"));
        assert!(out.contains("email: a@b.com"));
        assert!(out.contains("phone: 1234567890"));
    }

    #[test]
    fn test_json_lead_output_is_parseable() {
        let formatter = Formatter::new(true, false);
        let out = formatter.format_lead(&sample_lead()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ok"]["email"], "a@b.com");
    }

    #[test]
    fn test_json_failure_output_carries_kind_and_reason() {
        let formatter = Formatter::new(true, false);
        let err = ExtractorError::EmptyLead("no contact info".to_string());
        let out = formatter.format_failure(&err).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["err"]["failure_type"], "EMPTY_LEAD");
        assert_eq!(value["err"]["reason"], "no contact info");
    }

    #[test]
    fn test_human_failure_output_names_the_kind() {
        let formatter = Formatter::new(false, false);
        let err = ExtractorError::Provider("auth failed".to_string());
        let out = formatter.format_failure(&err).unwrap();

        assert!(out.contains("PROVIDER_ERROR"));
        assert!(out.contains("auth failed"));
    }

    #[test]
    fn test_absent_fields_render_as_dash() {
        let formatter = Formatter::new(false, false);
        let lead = LeadDraft {
            name: None,
            email: Some("a@b.com".to_string()),
            phone: None,
        }
        .validate()
        .unwrap();

        let out = formatter.format_lead(&lead).unwrap();
        assert!(out.contains("name:  -"));
        assert!(out.contains("phone: -"));
    }
}
