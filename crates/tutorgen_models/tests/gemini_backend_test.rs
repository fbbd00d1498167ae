//! Gemini REST backend against a mock server.

use serde_json::json;
use std::time::Duration;
use tutorgen_error::GeminiErrorKind;
use tutorgen_models::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiBackend, GeminiConfig, GenerationBackend,
    GenerationClient, RetryPolicy, SAFETY_SETTINGS,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-test:generateContent";

async fn backend_for(server: &MockServer) -> GeminiBackend {
    let config = GeminiConfig::builder()
        .api_key("test-key")
        .model("gemini-test")
        .base_url(server.uri())
        .build()
        .unwrap();
    GeminiBackend::new(config).unwrap()
}

#[tokio::test]
async fn test_sends_prompt_and_safety_settings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Explain attention"}]}],
            "safetySettings": [
                {"category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                {"category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                {"category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"},
                {"category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_MEDIUM_AND_ABOVE"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Attention weighs tokens."}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server).await;
    let text = backend.generate_content("Explain attention").await.unwrap();
    assert_eq!(text, "Attention weighs tokens.");
}

#[tokio::test]
async fn test_429_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .await
        .generate_content("x")
        .await
        .unwrap_err();
    assert!(err.is_rate_limited());
    assert_eq!(
        err.kind,
        GeminiErrorKind::ResourceExhausted("Quota exceeded".to_string())
    );
}

#[tokio::test]
async fn test_throttle_code_in_body_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"code": 429, "message": "Try again later"}
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .await
        .generate_content("x")
        .await
        .unwrap_err();
    assert!(err.is_rate_limited());
    assert_eq!(
        err.kind,
        GeminiErrorKind::ResourceExhausted("Try again later".to_string())
    );
}

#[tokio::test]
async fn test_other_status_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .await
        .generate_content("x")
        .await
        .unwrap_err();
    assert!(!err.is_rate_limited());
    assert_eq!(
        err.kind,
        GeminiErrorKind::HttpError {
            status_code: 400,
            message: "API key not valid".to_string()
        }
    );
}

#[tokio::test]
async fn test_blocked_response_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .await
        .generate_content("x")
        .await
        .unwrap_err();
    assert_eq!(
        err.kind,
        GeminiErrorKind::EmptyResponse("prompt blocked: SAFETY".to_string())
    );
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = backend_for(&server)
        .await
        .generate_content("x")
        .await
        .unwrap_err();
    assert!(matches!(err.kind, GeminiErrorKind::ResponseParsing(_)));
}

#[tokio::test]
async fn test_client_retries_real_backend_on_429() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        })))
        .mount(&server)
        .await;

    let client = GenerationClient::new(
        backend_for(&server).await,
        RetryPolicy::new(3, Duration::from_millis(5)).unwrap(),
        tutorgen_models::TokioSleeper,
    );
    assert_eq!(client.generate("x").await.unwrap(), "ok");
}

#[cfg(feature = "api")]
#[tokio::test]
#[ignore] // Requires GEMINI_API_KEY and network access
async fn test_live_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let key = std::env::var("GEMINI_API_KEY")?;
    let client = GenerationClient::gemini(GeminiConfig::with_api_key(key))?;
    let text = client.generate("In one sentence, what is overfitting?").await?;
    assert!(!text.is_empty());
    Ok(())
}

#[test]
fn test_safety_settings_wire_names() {
    let json = serde_json::to_value(SAFETY_SETTINGS).unwrap();
    assert_eq!(json[0]["category"], "HARM_CATEGORY_HARASSMENT");
    assert_eq!(json[1]["category"], "HARM_CATEGORY_HATE_SPEECH");
    assert_eq!(json[2]["category"], "HARM_CATEGORY_SEXUALLY_EXPLICIT");
    assert_eq!(json[3]["category"], "HARM_CATEGORY_DANGEROUS_CONTENT");
    for setting in json.as_array().unwrap() {
        assert_eq!(setting["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }
}

#[test]
fn test_empty_key_rejected() {
    let err = GeminiBackend::new(GeminiConfig::with_api_key("  ")).unwrap_err();
    assert_eq!(err.kind, GeminiErrorKind::MissingApiKey);
}

#[test]
fn test_debug_redacts_key() {
    let config = GeminiConfig::with_api_key("secret-key");
    assert!(!format!("{:?}", config).contains("secret-key"));
}

#[test]
fn test_builder_defaults() {
    let config = GeminiConfig::builder().api_key("k").build().unwrap();
    assert_eq!(config.model(), DEFAULT_MODEL);
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
}
