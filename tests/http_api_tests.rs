//! HTTP-level tests driving the axum router directly.

#![cfg(feature = "http-server")]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use sentinela_rdw::config::ServerConfig;
use sentinela_rdw::http::{create_router, AppState};
use sentinela_rdw::services::DatasetStore;

fn test_app() -> (Router, DatasetStore) {
    let store = DatasetStore::new();
    let state = AppState::new(store.clone());
    (create_router(state, &ServerConfig::default()), store)
}

fn sample_batch_json() -> &'static str {
    r#"[
        {"patientId": "PID-1", "collectionDate": "2024-01-01", "age": 40, "sex": "M",
         "city": "Goiânia", "rdwPercent": 15.0},
        {"patientId": "PID-2", "collectionDate": "2024-01-02", "age": 70, "sex": "F",
         "city": "Goiânia", "rdwPercent": 13.0},
        {"patientId": "PID-3", "collectionDate": "2024-01-01", "age": 25, "sex": "F",
         "city": "Anápolis", "rdwPercent": 12.4}
    ]"#
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_before_upload() {
    let (app, _) = test_app();
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["dataset_loaded"], false);
}

#[tokio::test]
async fn test_statistics_requires_dataset() {
    let (app, _) = test_app();
    let response = app.oneshot(get("/v1/statistics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NO_DATASET");
}

#[tokio::test]
async fn test_upload_then_query_statistics() {
    let (app, _) = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/v1/datasets", sample_batch_json()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let upload = body_json(response).await;
    assert_eq!(upload["record_count"], 3);
    assert!(upload["checksum"].as_str().unwrap().len() == 64);

    let response = app.oneshot(get("/v1/statistics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;
    assert_eq!(stats["total_patients"], 3);
    assert_eq!(stats["active_cities"], 2);
    assert_eq!(stats["elevated_rdw_count"], 1);
}

#[tokio::test]
async fn test_upload_empty_batch_rejected() {
    let (app, store) = test_app();
    let response = app
        .oneshot(post_json("/v1/datasets", "[]"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_FORMAT");
    assert!(!store.is_loaded());
}

#[tokio::test]
async fn test_invalid_upload_preserves_previous_dataset() {
    let (app, store) = test_app();

    app.clone()
        .oneshot(post_json("/v1/datasets", sample_batch_json()))
        .await
        .unwrap();
    let before = store.current().unwrap();

    let bad = r#"[{"collectionDate": "2024-01-01"}]"#;
    let response = app
        .oneshot(post_json("/v1/datasets", bad))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let after = store.current().unwrap();
    assert_eq!(after.dataset_id, before.dataset_id);
}

#[tokio::test]
async fn test_municipalities_and_single_city() {
    let (app, _) = test_app();
    app.clone()
        .oneshot(post_json("/v1/datasets", sample_batch_json()))
        .await
        .unwrap();

    let response = app.clone().oneshot(get("/v1/municipalities")).await.unwrap();
    let cities = body_json(response).await;
    assert_eq!(cities.as_array().unwrap().len(), 2);
    assert_eq!(cities[0]["name"], "Goiânia");

    let response = app
        .clone()
        .oneshot(get("/v1/municipalities/Goi%C3%A2nia"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let goiania = body_json(response).await;
    assert_eq!(goiania["patient_count"], 2);
    assert_eq!(goiania["avg_rdw"], 14.0);
    assert_eq!(goiania["status"], "normal");

    let response = app
        .oneshot(get("/v1/municipalities/Palmas"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comparison_query_parameters() {
    let (app, _) = test_app();
    app.clone()
        .oneshot(post_json("/v1/datasets", sample_batch_json()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/v1/municipalities/comparison?limit=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;
    assert_eq!(view.as_array().unwrap().len(), 1);
    assert_eq!(view[0]["name"], "Goiânia");

    let response = app
        .oneshot(get("/v1/municipalities/comparison?sort_key=avg_rdw"))
        .await
        .unwrap();
    let view = body_json(response).await;
    assert_eq!(view[0]["name"], "Goiânia"); // avg 14.0 vs 12.4
}

#[tokio::test]
async fn test_temporal_demographics_histogram_and_export() {
    let (app, _) = test_app();
    app.clone()
        .oneshot(post_json("/v1/datasets", sample_batch_json()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get("/v1/temporal/Goi%C3%A2nia"))
        .await
        .unwrap();
    let series = body_json(response).await;
    assert_eq!(series.as_array().unwrap().len(), 2);
    assert_eq!(series[0]["date"], "2024-01-01");

    let response = app.clone().oneshot(get("/v1/demographics/age")).await.unwrap();
    let by_age = body_json(response).await;
    assert!(!by_age.as_array().unwrap().is_empty());

    let response = app
        .clone()
        .oneshot(get("/v1/demographics/income"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.clone().oneshot(get("/v1/histogram")).await.unwrap();
    let bins = body_json(response).await;
    assert_eq!(bins.as_array().unwrap().len(), 20);

    let response = app.oneshot(get("/v1/export")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let export = body_json(response).await;
    assert_eq!(export["records"].as_array().unwrap().len(), 3);
    assert_eq!(export["statistics"]["total_patients"], 3);
}

#[tokio::test]
async fn test_dataset_info_endpoint() {
    let (app, _) = test_app();

    let response = app.clone().oneshot(get("/v1/datasets/current")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    app.clone()
        .oneshot(post_json("/v1/datasets", sample_batch_json()))
        .await
        .unwrap();

    let response = app.oneshot(get("/v1/datasets/current")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let info = body_json(response).await;
    assert_eq!(info["record_count"], 3);
}
