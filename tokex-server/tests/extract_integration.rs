//! Integration tests for the extract endpoint wire contract.
//!
//! Runs the real router on a random port and exercises it with an HTTP
//! client: persistence of well-formed records, rejection of malformed
//! bodies, preflight, and unknown paths.

mod common;

use common::server::TestServer;

fn sample_record() -> serde_json::Value {
    serde_json::json!({
        "fileName": "My Design System",
        "extractedAt": "2026-08-25T12:00:00.000Z",
        "stats": {
            "colors": 1,
            "textStyles": 0,
            "components": 0,
            "variables": 0,
            "effects": 0,
            "frames": 0
        },
        "colors": [
            { "name": "Primary", "hex": "#ff0000", "type": "solid",
              "rgba": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 } }
        ],
        "typography": [],
        "effects": [],
        "styles": { "grids": [] },
        "variables": [],
        "components": [],
        "frames": []
    })
}

#[tokio::test]
async fn test_extract_persists_to_both_locations() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.extract_url())
        .json(&sample_record())
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert_eq!(body["ok"], true);

    let store_path = server.store_dir().join("my-design-system.json");
    assert_eq!(body["path"], store_path.display().to_string());

    let stored = tokio::fs::read_to_string(&store_path)
        .await
        .expect("store copy");
    let latest = tokio::fs::read_to_string(server.output_path())
        .await
        .expect("latest copy");
    assert_eq!(stored, latest);

    // Pretty-printed, and the content round-trips.
    assert!(stored.contains("\n  \"fileName\""));
    let reparsed: serde_json::Value = serde_json::from_str(&stored).expect("reparse");
    assert_eq!(reparsed, sample_record());

    server.shutdown().await;
}

#[tokio::test]
async fn test_second_record_overwrites_latest_copy() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let mut first = sample_record();
    first["fileName"] = serde_json::json!("App One");
    let mut second = sample_record();
    second["fileName"] = serde_json::json!("App Two");

    for record in [&first, &second] {
        let response = client
            .post(server.extract_url())
            .json(record)
            .send()
            .await
            .expect("request");
        assert_eq!(response.status(), 200);
    }

    // Both store files exist; the latest copy holds the second record.
    assert!(server.store_dir().join("app-one.json").exists());
    assert!(server.store_dir().join("app-two.json").exists());
    let latest = tokio::fs::read_to_string(server.output_path())
        .await
        .expect("latest copy");
    let value: serde_json::Value = serde_json::from_str(&latest).expect("parse");
    assert_eq!(value["fileName"], "App Two");

    server.shutdown().await;
}

#[tokio::test]
async fn test_malformed_body_yields_400_with_error() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.extract_url())
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.expect("json body");
    assert!(body["error"].is_string());

    // Nothing was written.
    assert!(!server.output_path().exists());

    server.shutdown().await;
}

#[tokio::test]
async fn test_preflight_returns_204() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .request(reqwest::Method::OPTIONS, server.extract_url())
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 204);

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_method_on_extract_path_yields_404() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .get(server.extract_url())
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 404);

    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_path_yields_404() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/nope", server.base_url()))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), 404);

    server.shutdown().await;
}
