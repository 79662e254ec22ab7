use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::embedding::{EmbedderConfig, FixtureEmbedder, SentenceEmbedder};
use crate::engine::SimilarityEngine;
use crate::gateway::{HandlerState, create_router_with_state};

fn stub_router() -> Router {
    let embedder = SentenceEmbedder::load(EmbedderConfig::stub()).expect("load stub embedder");
    let engine = Arc::new(SimilarityEngine::new(Arc::new(embedder)));
    create_router_with_state(HandlerState::new(engine, true))
}

fn failing_router() -> Router {
    let engine = Arc::new(SimilarityEngine::new(Arc::new(FixtureEmbedder::failing(4))));
    create_router_with_state(HandlerState::new(engine, false))
}

fn check_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/check")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse body")
}

#[tokio::test]
async fn test_healthz_returns_ok() {
    let response = stub_router()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ready_reports_embedder_mode() {
    let response = stub_router()
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["components"]["embedder_mode"], "stub");
}

#[tokio::test]
async fn test_check_identical_texts_lexical() {
    let request = check_request(serde_json::json!({
        "candidateText": "The system works. It is fast.",
        "referenceText": "The system works. It is fast.",
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["sentence"], "The system works");
    assert_eq!(records[0]["source"], "The system works");
    assert_eq!(records[0]["similarityPercent"], 100.0);
}

#[tokio::test]
async fn test_check_defaults_to_eighty_percent_threshold() {
    // Paraphrased sentences: lexical bigram overlap sits well below the
    // default threshold, so no records come back.
    let request = check_request(serde_json::json!({
        "candidateText": "AI is used in medicine.",
        "referenceText": "AI applications in medicine are increasingly common.",
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["records"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_check_zero_threshold_reports_best_match() {
    let request = check_request(serde_json::json!({
        "candidateText": "Completely different words.",
        "referenceText": "Nothing shared whatsoever.",
        "thresholdPercent": 0,
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["records"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_check_empty_reference_returns_empty_records() {
    let request = check_request(serde_json::json!({
        "candidateText": "Some candidate sentence.",
        "referenceText": "",
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["records"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_check_missing_candidate_text_is_bad_request() {
    let request = check_request(serde_json::json!({
        "referenceText": "Only a reference.",
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_check_non_string_candidate_is_bad_request() {
    let request = check_request(serde_json::json!({
        "candidateText": 42,
        "referenceText": "Reference.",
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_out_of_range_threshold_is_bad_request() {
    let request = check_request(serde_json::json!({
        "candidateText": "Text.",
        "referenceText": "Text.",
        "thresholdPercent": 150,
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("threshold"));
}

#[tokio::test]
async fn test_check_unknown_mode_is_bad_request() {
    let request = check_request(serde_json::json!({
        "candidateText": "Text.",
        "referenceText": "Text.",
        "mode": "hybrid",
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_semantic_with_stub_embedder() {
    let request = check_request(serde_json::json!({
        "candidateText": "Exactly the same sentence.",
        "referenceText": "Exactly the same sentence.",
        "mode": "semantic",
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["similarityPercent"], 100.0);
}

#[tokio::test]
async fn test_check_semantic_embedding_failure_is_service_unavailable() {
    let request = check_request(serde_json::json!({
        "candidateText": "Candidate.",
        "referenceText": "Reference.",
        "mode": "semantic",
    }));

    let response = failing_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response).await;
    assert_eq!(body["code"], 503);
    // The client-facing message must not leak internal diagnostics.
    assert!(!body["error"].as_str().unwrap().contains("fixture"));
}

#[tokio::test]
async fn test_check_lexical_succeeds_even_when_embedder_is_broken() {
    let request = check_request(serde_json::json!({
        "candidateText": "Same text here.",
        "referenceText": "Same text here.",
        "mode": "lexical",
    }));

    let response = failing_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["records"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_response_contains_only_records_field() {
    let request = check_request(serde_json::json!({
        "candidateText": "A sentence.",
        "referenceText": "A sentence.",
    }));

    let response = stub_router().oneshot(request).await.unwrap();
    let body = json_body(response).await;

    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("records"));
}
