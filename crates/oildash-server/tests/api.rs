use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use oildash_server::{router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
    let app = router(Arc::new(AppState::new()));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();
    (status, body)
}

async fn get_json(uri: &str) -> Value {
    let (status, body) = get(uri).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    serde_json::from_slice(&body).unwrap()
}

fn categories(chart: &Value) -> Vec<&str> {
    chart["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn serves_the_dashboard_page() {
    let app = router(Arc::new(AppState::new()));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Vegetable Oil Sustainability Dashboard"));
}

#[tokio::test]
async fn default_view_shows_the_full_dataset() {
    let data = get_json("/api/charts").await;

    assert_eq!(data["matched"], 6);
    assert_eq!(
        categories(&data["production"]),
        [
            "Palm Oil",
            "Soybean Oil",
            "Rapeseed Oil",
            "Sunflower Oil",
            "Groundnut Oil",
            "Cottonseed Oil",
        ]
    );
    assert_eq!(data["production"]["values"][0], 78.229);
    assert_eq!(data["yield"]["values"][0], 0.75);
}

#[tokio::test]
async fn water_threshold_drops_thirsty_varieties() {
    let data = get_json("/api/charts?water=5000").await;

    assert_eq!(data["matched"], 4);
    assert_eq!(
        categories(&data["production"]),
        ["Palm Oil", "Soybean Oil", "Rapeseed Oil", "Cottonseed Oil"]
    );
}

#[tokio::test]
async fn fertilizer_threshold_keeps_low_input_varieties() {
    let data = get_json("/api/charts?fertilizer=100").await;

    assert_eq!(data["matched"], 3);
    assert_eq!(
        categories(&data["production"]),
        ["Soybean Oil", "Sunflower Oil", "Groundnut Oil"]
    );
}

#[tokio::test]
async fn zero_thresholds_return_empty_charts() {
    let data = get_json("/api/charts?water=0&fertilizer=0&labour=0&land_use=0").await;

    assert_eq!(data["matched"], 0);
    assert!(categories(&data["production"]).is_empty());
    assert!(categories(&data["yield"]).is_empty());
}

#[tokio::test]
async fn out_of_range_thresholds_are_clamped() {
    let data = get_json("/api/charts?water=999999&land_use=-3").await;

    assert_eq!(data["thresholds"]["water"], 8000.0);
    assert_eq!(data["thresholds"]["land_use"], 0.0);
}

#[tokio::test]
async fn both_charts_describe_the_same_subset() {
    let data = get_json("/api/charts?labour=120").await;

    assert_eq!(
        categories(&data["production"]),
        categories(&data["yield"])
    );
    assert_eq!(
        data["production"]["colors"].as_array().unwrap(),
        data["yield"]["colors"].as_array().unwrap()
    );
}

#[tokio::test]
async fn sliders_endpoint_describes_four_controls() {
    let data = get_json("/api/sliders").await;

    let ids: Vec<&str> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["water", "fertilizer", "labour", "land_use"]);

    for spec in data.as_array().unwrap() {
        assert_eq!(spec["default"], spec["max"]);
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let data = get_json("/health").await;
    assert_eq!(data["status"], "ok");
    assert!(data["version"].as_str().is_some());
}
