//! Tests for the ask command

use httpmock::prelude::*;
use serde_json::json;
use simula::commands::ask;
use simula::{Config, GeminiClient};

fn config_with_brain(dir: &tempfile::TempDir) -> Config {
    let path = dir.path().join("pinns_brain.json");
    std::fs::write(
        &path,
        json!([
            {"subject": "A", "predicate": "is_a", "object": "B"},
            {"subject": "C", "predicate": "is_a", "object": "D"}
        ])
        .to_string(),
    )
    .unwrap();

    let mut config = Config::defaults();
    config.brain_files = vec![path, dir.path().join("the_well_brain.json")];
    config
}

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test_key", "gemini-flash-latest")
        .unwrap()
        .with_base_url(server.base_url())
}

#[tokio::test]
async fn test_ask_answers_from_matching_facts() {
    let server = MockServer::start_async().await;
    let gen_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/models/gemini-flash-latest:generateContent")
            .is_true(|req| {
                let body = String::from_utf8_lossy(req.body().as_ref());
                body.contains("A is is_a B") && body.contains("USER QUESTION: What is B")
            });
        then.status(200).json_body(json!({
            "candidates": [{ "content": { "parts": [{ "text": "B is the type of A." }] } }]
        }));
    });

    let dir = tempfile::tempdir().unwrap();
    let config = config_with_brain(&dir);

    let answer = ask::answer_question(&config, client(&server), "What is B")
        .await
        .unwrap();

    assert_eq!(answer.as_deref(), Some("B is the type of A."));
    gen_mock.assert_calls(1);
}

#[tokio::test]
async fn test_ask_without_matches_skips_api() {
    let server = MockServer::start_async().await;
    let gen_mock = server.mock(|when, then| {
        when.method(POST);
        then.status(500);
    });

    let dir = tempfile::tempdir().unwrap();
    let config = config_with_brain(&dir);

    let answer = ask::answer_question(&config, client(&server), "what is the")
        .await
        .unwrap();

    assert!(answer.is_none());
    gen_mock.assert_calls(0);
}

#[tokio::test]
async fn test_ask_propagates_api_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST);
        then.status(503).body("overloaded");
    });

    let dir = tempfile::tempdir().unwrap();
    let config = config_with_brain(&dir);

    let err = ask::answer_question(&config, client(&server), "D")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("overloaded"));
}
