//! Parse LLM output into a lead draft

use crate::error::ExtractorError;
use prospector_domain::LeadDraft;
use serde_json::Value;

/// Parse the model's JSON response into a draft lead.
///
/// Any deviation from "one JSON object matching the lead schema" is a
/// `ModelInvalidOutput`; the raw response never travels further than this
/// function.
pub fn parse_response(response: &str) -> Result<LeadDraft, ExtractorError> {
    // LLMs sometimes wrap JSON in markdown code blocks despite instructions
    let json_str = strip_code_fence(response);

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::ModelInvalidOutput(format!("invalid JSON: {}", e)))?;

    if !json.is_object() {
        return Err(ExtractorError::ModelInvalidOutput(
            "response is not a JSON object".to_string(),
        ));
    }

    serde_json::from_value(json).map_err(|e| {
        ExtractorError::ModelInvalidOutput(format!("response does not match the lead schema: {}", e))
    })
}

/// Strip a markdown code fence, returning the inner content.
fn strip_code_fence(response: &str) -> String {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return String::new();
        }

        // Skip the opening line (``` or ```json) and the closing fence
        let inner = &lines[1..lines.len() - 1];
        inner.join("\n")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_object() {
        let draft =
            parse_response(r#"{"name":"Test","email":"a@b.com","phone":"1234567890"}"#).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Test"));
        assert_eq!(draft.email.as_deref(), Some("a@b.com"));
        assert_eq!(draft.phone.as_deref(), Some("1234567890"));
    }

    #[test]
    fn test_parse_with_markdown_wrapper() {
        let response = "```json\n{\"name\":null,\"email\":\"raj@abc.com\",\"phone\":null}\n```";
        let draft = parse_response(response).unwrap();
        assert_eq!(draft.email.as_deref(), Some("raj@abc.com"));
    }

    #[test]
    fn test_parse_with_bare_fence() {
        let response = "```\n{\"email\":\"raj@abc.com\"}\n```";
        let draft = parse_response(response).unwrap();
        assert_eq!(draft.email.as_deref(), Some("raj@abc.com"));
    }

    #[test]
    fn test_parse_null_fields() {
        let draft = parse_response(r#"{"name":null,"email":null,"phone":null}"#).unwrap();
        assert!(draft.name.is_none());
        assert!(draft.email.is_none());
        assert!(draft.phone.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let draft = parse_response(r#"{"email":"a@b.com","company":"Acme"}"#).unwrap();
        assert_eq!(draft.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_not_json_is_invalid_output() {
        let err = parse_response("I could not find any contact details.").unwrap_err();
        assert!(matches!(err, ExtractorError::ModelInvalidOutput(_)));
    }

    #[test]
    fn test_empty_response_is_invalid_output() {
        let err = parse_response("").unwrap_err();
        assert!(matches!(err, ExtractorError::ModelInvalidOutput(_)));
    }

    #[test]
    fn test_json_array_is_invalid_output() {
        let err = parse_response(r#"[{"email":"a@b.com"}]"#).unwrap_err();
        assert!(matches!(err, ExtractorError::ModelInvalidOutput(_)));
    }

    #[test]
    fn test_wrongly_typed_field_is_invalid_output() {
        let err = parse_response(r#"{"email":42}"#).unwrap_err();
        assert!(matches!(err, ExtractorError::ModelInvalidOutput(_)));
    }

    #[test]
    fn test_lone_fence_is_invalid_output() {
        let err = parse_response("```").unwrap_err();
        assert!(matches!(err, ExtractorError::ModelInvalidOutput(_)));
    }

    #[test]
    fn test_strip_fence_passthrough() {
        assert_eq!(strip_code_fence(r#"{"a":1}"#), r#"{"a":1}"#);
    }

    #[test]
    fn test_strip_fence_with_language_tag() {
        let stripped = strip_code_fence("```json\n{\"a\":1}\n```");
        assert_eq!(stripped, r#"{"a":1}"#);
    }
}
