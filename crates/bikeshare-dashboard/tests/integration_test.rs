//! Router behaviour end to end, without binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use bikeshare_common::test_utils::{date, generate_daily_records, records_to_csv, write_temp_csv};
use bikeshare_config::Config;
use bikeshare_dashboard::{router, AppState};
use bikeshare_data::Dataset;
use tower::ServiceExt;

fn app() -> axum::Router {
    let file = write_temp_csv(&records_to_csv(&generate_daily_records(date(2011, 1, 1), 90)));
    let dataset = Dataset::load(file.path()).unwrap();
    router(AppState::new(dataset, Config::default()))
}

async fn get(uri: &str) -> (StatusCode, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_page_defaults_to_dataset_bounds() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dashboard for Bike Rental"));
    assert!(body.contains("value=\"2011-01-01\""));
    assert!(body.contains("value=\"2011-03-31\""));
    assert!(body.contains("/charts/hourly?start=2011-01-01&end=2011-03-31"));
}

#[tokio::test]
async fn test_page_with_empty_parameters() {
    let (status, body) = get("/?start=&end=2011-01-31").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/charts/yearly?start=2011-01-01&end=2011-01-31"));
}

#[tokio::test]
async fn test_inverted_range_shows_zero_metrics() {
    let (status, body) = get("/?start=2011-03-01&end=2011-02-01").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Total Users</div><div class=\"metric-value\">0<"));
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let (status, body) = get("/?start=2011-13-01").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("start"));
}

#[tokio::test]
async fn test_unknown_chart_is_not_found() {
    let (status, _) = get("/charts/weekly").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_chart_with_malformed_date_is_rejected() {
    let (status, _) = get("/charts/monthly?end=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires system fonts"]
async fn test_chart_is_png() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/charts/monthly?start=2011-01-01&end=2011-02-28")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..4], b"\x89PNG");
}
