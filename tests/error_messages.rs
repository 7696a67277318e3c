//! Tests to ensure error messages are actionable and consistent
//!
//! These tests go through the public API only.

use opengraph::{Config, InitializationError, OpenGraphClient, OpenGraphError};

#[test]
fn test_config_validation_errors_are_descriptive() {
    let mut config = Config {
        timeout_seconds: 0,
        ..Default::default()
    };
    let result = config.validate();
    assert!(result.is_err(), "Zero timeout_seconds should fail validation");
    if let Err(e) = result {
        assert_eq!(e.field, "timeout_seconds");
        assert!(
            e.message.contains("greater than 0"),
            "Error should mention minimum value"
        );
    }

    config = Config {
        user_agent: String::new(),
        ..Default::default()
    };
    let result = config.validate();
    assert!(result.is_err(), "Empty user_agent should fail validation");
    if let Err(e) = result {
        assert_eq!(e.field, "user_agent");
    }
}

#[test]
fn test_client_rejects_invalid_config() {
    let config = Config {
        timeout_seconds: 0,
        ..Default::default()
    };
    let err = OpenGraphClient::new(&config).unwrap_err();
    assert!(matches!(err, InitializationError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("Configuration error: invalid timeout_seconds"));
}

#[tokio::test]
async fn test_invalid_url_message_names_input() {
    let client = OpenGraphClient::new(&Config::default()).unwrap();
    let err = client.parse_str("random string").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid URL: random string");
    assert_eq!(err.kind(), "invalid_url");
}

#[test]
fn test_parsing_error_message_mentions_encoding() {
    let err = opengraph::decode_body(&[0xc3, 0x28]).unwrap_err();
    assert!(matches!(err, OpenGraphError::Parsing(_)));
    assert!(err.to_string().starts_with("Parsing error: response body is not valid UTF-8"));
}

#[test]
fn test_extraction_never_errors_on_plain_text() {
    for input in ["", "plain text", "<meta", "<meta property=\"og:title\"", "<<<>>>"] {
        let og = opengraph::extract(input).expect("extract should not fail on any text");
        assert!(og.is_empty(), "{input:?} should yield an empty record");
    }
}
