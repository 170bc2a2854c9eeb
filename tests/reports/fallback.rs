use std::time::{Duration, Instant};

use httpmock::{Method::GET, MockServer};
use loan_reports::{ReportClient, ReportError, Reports};
use url::Url;

use crate::common::{client_for, january, unreachable_client};

#[tokio::test]
async fn unreachable_api_serves_every_mock_payload() {
    let client = unreachable_client();
    let reports = Reports::new(&client, january());

    let kpis = reports.kpis().await.unwrap();
    assert!(kpis.amount_loaned > rust_decimal::Decimal::ZERO);
    assert!(!reports.monthly_evolution().await.unwrap().is_empty());
    assert_eq!(reports.installments_status().await.unwrap().len(), 3);
    assert_eq!(reports.top_clients(5).await.unwrap().len(), 5);
    assert!(!reports.delinquents().await.unwrap().is_empty());
    assert!(!reports.due_soon().await.unwrap().is_empty());
    assert!(reports.stats().await.unwrap().total_clients > 0);
}

#[tokio::test]
async fn server_error_falls_back() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/reports/delinquents");
        then.status(500).body("boom");
    });

    let client = client_for(&server);
    let rows = Reports::new(&client, january()).delinquents().await.unwrap();
    mock.assert();
    assert_eq!(rows.len(), 4);
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/reports/kpis");
        then.status(200)
            .header("content-type", "application/json")
            .body("{\"unexpected\": [");
    });

    let client = client_for(&server);
    let kpis = Reports::new(&client, january()).kpis().await.unwrap();
    mock.assert();
    assert_eq!(kpis.amount_loaned, rust_decimal::Decimal::new(15_000_000, 2));
}

#[tokio::test]
async fn mock_top_clients_honour_limit() {
    let client = unreachable_client();
    let clients = Reports::new(&client, january()).top_clients(2).await.unwrap();
    assert_eq!(clients.len(), 2);
}

#[tokio::test]
async fn fallback_waits_the_simulated_delay() {
    let client = ReportClient::builder()
        .base_url(Url::parse("http://127.0.0.1:1/").unwrap())
        .fallback_delay(Duration::from_millis(150))
        .build()
        .unwrap();

    let started = Instant::now();
    Reports::new(&client, january()).kpis().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(150));
}

#[tokio::test]
async fn disabled_fallback_surfaces_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/reports/due-soon");
        then.status(503).body("maintenance");
    });

    let client = ReportClient::builder()
        .base_url(crate::common::base_url(&server))
        .fallback(false)
        .build()
        .unwrap();
    let err = Reports::new(&client, january()).due_soon().await.unwrap_err();
    mock.assert();

    match err {
        ReportError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.contains("/api/reports/due-soon"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
