//! Demo command implementation.
//!
//! Runs four illustrative inputs through the pipeline against the real
//! provider: clean, messy, partial, and garbage text.

use crate::commands::provider_from_env;
use crate::error::Result;
use crate::output::Formatter;
use prospector_extractor::{ExtractorConfig, LeadExtractor};
use std::process::ExitCode;

/// The built-in demo inputs.
pub const DEMO_INPUTS: [(&str, &str); 4] = [
    (
        "Clean input",
        "Hi, I'm Ankit. Email: ankit@gmail.com, phone 9876543210",
    ),
    (
        "Messy input",
        "Call me \u{1F4DE} 9\u{FE0F}\u{20E3}8\u{FE0F}\u{20E3}7\u{FE0F}\u{20E3}6\u{FE0F}\u{20E3}5\u{FE0F}\u{20E3}4\u{FE0F}\u{20E3}3\u{FE0F}\u{20E3}2\u{FE0F}\u{20E3}1\u{FE0F}\u{20E3}0\u{FE0F}\u{20E3} — Rohit",
    ),
    ("Partial input", "Interested in demo, email is raj@abc.com"),
    ("Garbage input", "hello"),
];

/// Execute the demo command.
///
/// Individual outcomes (including typed failures) are the demo's point, so
/// the command succeeds as long as every input produced a result.
pub async fn execute_demo(model_override: Option<&str>, formatter: &Formatter) -> Result<ExitCode> {
    let provider = provider_from_env(model_override)?;
    let extractor = LeadExtractor::new(provider, ExtractorConfig::default());

    println!("--- prospector demo ---\n");

    for (label, text) in DEMO_INPUTS {
        println!("[{}] input: {:?}", label, truncate(text, 60));

        match extractor.extract(text).await {
            Ok(lead) => println!("{}\n", formatter.format_lead(&lead)?),
            Err(e) => println!("{}\n", formatter.format_failure(&e)?),
        }
    }

    println!("--- done ---");
    Ok(ExitCode::SUCCESS)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}
