//! Tests for the curriculum architect command

use httpmock::prelude::*;
use serde_json::json;
use simula::commands::architect;
use simula::{Config, GeminiClient};

#[tokio::test]
async fn test_architect_writes_blueprint() {
    let server = MockServer::start_async().await;
    let gen_mock = server.mock(|when, then| {
        when.method(POST).is_true(|req| {
            let body = String::from_utf8_lossy(req.body().as_ref());
            body.contains("Burgers equation is models shock simulation")
        });
        then.status(200).json_body(json!({
            "candidates": [{ "content": { "parts": [{
                "text": "```json\n{\"training_pack_id\": \"pack_001_grounded\", \"scientific_basis\": \"Derived from Internal Knowledge Graph\"}\n```"
            }] } }]
        }));
    });

    let dir = tempfile::tempdir().unwrap();
    let brain = dir.path().join("pinns_brain.json");
    std::fs::write(
        &brain,
        json!([
            {"subject": "Burgers equation", "predicate": "models", "object": "shock simulation"}
        ])
        .to_string(),
    )
    .unwrap();

    let mut config = Config::defaults();
    config.brain_files = vec![brain];
    let output = dir.path().join("grounded_training_pack.json");

    let client = GeminiClient::new("test_key", "gemini-flash-latest")
        .unwrap()
        .with_base_url(server.base_url());

    let blueprint = architect::design_and_save(&config, client, "pour", "Panda", &output)
        .await
        .unwrap();

    assert_eq!(blueprint["training_pack_id"], "pack_001_grounded");
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(saved, blueprint);
    gen_mock.assert_calls(1);
}
