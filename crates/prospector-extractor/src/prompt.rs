//! LLM prompt engineering for lead extraction

/// Builds the extraction prompt for one block of raw text
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and format specification
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The text to analyze
        prompt.push_str("Text to analyze:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\n");

        // 3. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

// Prompt discipline: instruct the format only; validation enforces structure.
const EXTRACTION_INSTRUCTIONS: &str = r#"Extract lead contact details from the following text.
Return ONLY valid JSON with exactly these keys: name, email, phone.
Use null for any value that is not present in the text.
Do not add other keys, commentary, or formatting."#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (a single JSON object, nothing else):
{"name": "string or null", "email": "string or null", "phone": "string or null"}

Remember: return ONLY valid JSON, no markdown code blocks, no explanations."#;
