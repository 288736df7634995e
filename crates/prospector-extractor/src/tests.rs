//! Integration tests for the extraction pipeline

#[cfg(test)]
mod tests {
    use crate::{extract_lead, ExtractorConfig, FailureKind, LeadExtractor};
    use prospector_domain::CallFailure;
    use prospector_llm::MockCall;
    use std::time::{Duration, Instant};

    const VALID_RESPONSE: &str = r#"{"name":"Test","email":"a@b.com","phone":"1234567890"}"#;

    /// Default config with a near-zero backoff so retry tests stay fast.
    fn test_config() -> ExtractorConfig {
        ExtractorConfig {
            backoff_base_ms: 1,
            ..ExtractorConfig::default()
        }
    }

    fn extractor(call: MockCall) -> LeadExtractor<MockCall> {
        LeadExtractor::new(call, test_config())
    }

    #[tokio::test]
    async fn test_valid_response_yields_lead_and_payload() {
        let call = MockCall::new(VALID_RESPONSE);

        let lead = extract_lead("anything", call).await.unwrap();

        assert_eq!(lead.name(), Some("Test"));
        assert_eq!(lead.email().unwrap().as_str(), "a@b.com");
        assert_eq!(lead.phone().unwrap().as_str(), "1234567890");

        let payload = lead.to_crm_payload();
        assert_eq!(payload.name.as_deref(), Some("Test"));
        assert_eq!(payload.email.as_deref(), Some("a@b.com"));
        assert_eq!(payload.phone.as_deref(), Some("1234567890"));
    }

    #[tokio::test]
    async fn test_empty_lead_is_terminal_after_one_call() {
        let call = MockCall::new(r#"{"name":"Ankit"}"#);
        let counter = call.clone();

        let err = extractor(call).extract("hello").await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::EmptyLead);
        assert_eq!(counter.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_fault_is_terminal_after_one_call() {
        let call = MockCall::failing(CallFailure::Provider("invalid api key".to_string()));
        let counter = call.clone();

        let err = extractor(call).extract("hello").await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::Provider);
        assert!(err.reason().contains("invalid api key"));
        assert_eq!(counter.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_exhausts_the_attempt_budget() {
        let call = MockCall::new("This is not JSON");
        let counter = call.clone();

        let err = extractor(call).extract("hello").await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::ModelInvalidOutput);
        assert_eq!(counter.call_count(), 3);
    }

    #[tokio::test]
    async fn test_invalid_email_exhausts_the_attempt_budget() {
        let call = MockCall::new(r#"{"email":"not-an-email"}"#);
        let counter = call.clone();

        let err = extractor(call).extract("hello").await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::ModelInvalidOutput);
        assert!(err.reason().contains("email"));
        assert_eq!(counter.call_count(), 3);
    }

    #[tokio::test]
    async fn test_recovers_on_third_attempt_after_invalid_json() {
        let call = MockCall::script(vec![
            Ok("garbage".to_string()),
            Ok("{\"broken\":".to_string()),
            Ok(VALID_RESPONSE.to_string()),
        ]);
        let counter = call.clone();

        let lead = extractor(call).extract("hello").await.unwrap();

        assert_eq!(lead.email().unwrap().as_str(), "a@b.com");
        assert_eq!(counter.call_count(), 3);
    }

    #[tokio::test]
    async fn test_recovers_after_timeout_signals() {
        let call = MockCall::script(vec![
            Err(CallFailure::Timeout("simulated".to_string())),
            Err(CallFailure::Timeout("simulated".to_string())),
            Ok(VALID_RESPONSE.to_string()),
        ]);
        let counter = call.clone();

        let lead = extractor(call).extract("hello").await.unwrap();

        assert!(lead.has_contact());
        assert_eq!(counter.call_count(), 3);
    }

    #[tokio::test]
    async fn test_timeout_surfaced_when_every_attempt_times_out() {
        let call = MockCall::failing(CallFailure::Timeout("simulated".to_string()));
        let counter = call.clone();

        let err = extractor(call).extract("hello").await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::Timeout);
        assert_eq!(counter.call_count(), 3);
    }

    #[tokio::test]
    async fn test_phone_is_normalized_in_the_result() {
        let call = MockCall::new(r#"{"name":"Rohit","phone":"987-654-3210"}"#);

        let lead = extractor(call).extract("hello").await.unwrap();

        assert_eq!(lead.phone().unwrap().as_str(), "9876543210");
        assert_eq!(lead.email(), None);
    }

    #[tokio::test]
    async fn test_short_phone_is_invalid_output() {
        let call = MockCall::new(r#"{"phone":"123"}"#);
        let counter = call.clone();

        let err = extractor(call).extract("hello").await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::ModelInvalidOutput);
        assert!(err.reason().contains("10-15 digits"));
        assert_eq!(counter.call_count(), 3);
    }

    #[tokio::test]
    async fn test_markdown_fenced_response_parses() {
        let call = MockCall::new(format!("```json\n{VALID_RESPONSE}\n```"));

        let lead = extractor(call).extract("hello").await.unwrap();
        assert_eq!(lead.email().unwrap().as_str(), "a@b.com");
    }

    #[tokio::test]
    async fn test_backoff_waits_base_then_double() {
        let call = MockCall::script(vec![
            Ok("garbage".to_string()),
            Ok("garbage".to_string()),
            Ok(VALID_RESPONSE.to_string()),
        ]);
        let config = ExtractorConfig {
            backoff_base_ms: 50,
            ..ExtractorConfig::default()
        };

        let started = Instant::now();
        let lead = LeadExtractor::new(call, config).extract("hello").await.unwrap();
        let elapsed = started.elapsed();

        assert!(lead.has_contact());
        // Two waits: 50ms before attempt 2, 100ms before attempt 3
        assert!(
            elapsed >= Duration::from_millis(150),
            "waited only {elapsed:?}"
        );
        assert!(elapsed < Duration::from_secs(2), "waited {elapsed:?}");
    }

    #[tokio::test]
    async fn test_garbage_input_text_still_returns_a_result() {
        // The input text is arbitrary; only the model response drives the outcome
        let call = MockCall::new(r#"{"name":"Ankit"}"#);

        let err = extractor(call)
            .extract("\u{1F4DE} 9\u{FE0F}\u{20E3} ~~ \0 garbage")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::EmptyLead);
    }

    #[tokio::test]
    async fn test_extractor_is_shareable_across_tasks() {
        let call = MockCall::new(VALID_RESPONSE);
        let extractor = std::sync::Arc::new(extractor(call));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let extractor = std::sync::Arc::clone(&extractor);
                tokio::spawn(async move { extractor.extract(&format!("text {i}")).await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
    }
}
