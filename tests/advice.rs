mod common;

use healthbot::ai::chat::ChatClient;
use healthbot::messages::WARNING_MARKER;
use healthbot::{AdviceGenerator, AdviceStatus, UnknownSourceError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CHAT_PATH: &str = "/openai/v1/chat/completions";

#[tokio::test]
async fn afri_advice_with_reachable_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(header("authorization", "Bearer k"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-chat",
            "max_tokens": 512,
            "n": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            common::chat_body("\n This may be a common cold. Rest and drink fluids. \n"),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = common::data_dir();
    let assistant = common::assistant(&dir, Some("k"), &server.uri());

    let advice = assistant.advise_text("I have a cough", "afri").await.unwrap();
    assert_eq!(advice.status, AdviceStatus::Generated);
    let (text, places) = advice.into_parts();
    assert_eq!(text, "This may be a common cold. Rest and drink fluids.");
    assert!(!text.starts_with(WARNING_MARKER));
    assert!(places.is_empty());
}

#[tokio::test]
async fn prompt_is_a_single_user_message_with_examples() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(common::chat_body("Rest."), "application/json"),
        )
        .mount(&server)
        .await;

    let dir = common::data_dir();
    let client = ChatClient::new(
        Some("k".into()),
        "test-chat",
        Some(&format!("{}{CHAT_PATH}", server.uri())),
    );
    let generator = AdviceGenerator::new(common::store(&dir), client).with_examples(1);
    generator
        .generate("I have a fever and a headache", "usmle")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");

    let prompt = messages[0]["content"].as_str().unwrap();
    assert!(prompt.contains("Example Symptom: fever and headache\nAdvice Given: rest and fluids"));
    assert!(!prompt.contains("chest pain"));
    assert!(prompt.contains("Patient: \"I have a fever and a headache\""));
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
}

#[tokio::test]
async fn unreachable_endpoint_returns_warning_text() {
    let dir = common::data_dir();
    let assistant = common::assistant(&dir, Some("k"), "http://127.0.0.1:1");

    let advice = assistant
        .advise_text("I have a fever", "usmle")
        .await
        .unwrap();
    assert_eq!(advice.status, AdviceStatus::Fallback);
    let (text, places) = advice.into_parts();
    assert!(text.starts_with(WARNING_MARKER));
    assert!(text.contains("advice request failed"));
    assert!(text.contains("error sending request"));
    assert!(places.is_empty());
}

#[tokio::test]
async fn error_status_returns_warning_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let dir = common::data_dir();
    let assistant = common::assistant(&dir, Some("k"), &server.uri());

    let advice = assistant.advise_text("headache", "usmle").await.unwrap();
    assert!(advice.is_fallback());
    assert!(advice.text.starts_with(WARNING_MARKER));
    assert!(advice.text.contains("429"));
    assert!(advice.text.contains("rate limited"));
}

#[tokio::test]
async fn malformed_response_returns_warning_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"choices":[]}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let dir = common::data_dir();
    let assistant = common::assistant(&dir, Some("k"), &server.uri());

    let advice = assistant.advise_text("rash", "afri").await.unwrap();
    assert!(advice.is_fallback());
    assert!(advice.text.contains("missing chat choice"));
}

#[tokio::test]
async fn missing_api_key_returns_warning_text_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = common::data_dir();
    let assistant = common::assistant(&dir, None, &server.uri());

    let advice = assistant.advise_text("cough", "usmle").await.unwrap();
    assert!(advice.is_fallback());
    assert!(advice.text.contains("GROQ_API_KEY"));
}

#[tokio::test]
async fn unknown_dataset_propagates() {
    let dir = common::data_dir();
    let assistant = common::assistant(&dir, Some("k"), "http://127.0.0.1:1");

    let err = assistant.advise_text("cough", "bogus").await.unwrap_err();
    assert_eq!(err, UnknownSourceError("bogus".into()));
}
