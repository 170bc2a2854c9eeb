use httpmock::{Method::GET, MockServer};
use loan_reports::{InstallmentStatus, ReportKind, Reports};
use rust_decimal::Decimal;

use crate::common::{client_for, day, january, mock_report};

#[tokio::test]
async fn offline_kpis_decode_numbers_and_strings() {
    let server = MockServer::start();
    let mock = mock_report(&server, ReportKind::Kpis);

    let client = client_for(&server);
    let kpis = Reports::new(&client, january()).kpis().await.unwrap();
    mock.assert();

    assert_eq!(kpis.amount_loaned, Decimal::new(1_200_005, 1));
    assert_eq!(kpis.amount_received, Decimal::from(80_000));
    assert_eq!(kpis.amount_pending, Decimal::new(4_000_050, 2));
    assert_eq!(kpis.interest_revenue, Decimal::new(950_025, 2));
}

#[tokio::test]
async fn offline_monthly_evolution_keeps_source_order() {
    let server = MockServer::start();
    let mock = mock_report(&server, ReportKind::MonthlyEvolution);

    let client = client_for(&server);
    let points = Reports::new(&client, january())
        .monthly_evolution()
        .await
        .unwrap();
    mock.assert();

    let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(months, ["2024-01", "2024-02", "2024-03"]);
    assert_eq!(points[1].loaned, Decimal::from(25_000));
}

#[tokio::test]
async fn offline_installments_status_maps_statuses() {
    let server = MockServer::start();
    let mock = mock_report(&server, ReportKind::InstallmentsStatus);

    let client = client_for(&server);
    let buckets = Reports::new(&client, january())
        .installments_status()
        .await
        .unwrap();
    mock.assert();

    let statuses: Vec<InstallmentStatus> = buckets.iter().map(|b| b.status).collect();
    assert_eq!(
        statuses,
        [
            InstallmentStatus::Paid,
            InstallmentStatus::Outstanding,
            InstallmentStatus::Overdue
        ]
    );
    assert_eq!(buckets.iter().map(|b| b.count).sum::<u64>(), 200);
}

#[tokio::test]
async fn offline_top_clients_sends_limit() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/reports/top-clients")
            .query_param("limit", "10")
            .query_param("startDate", "2024-01-01")
            .query_param("endDate", "2024-01-31");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("top-clients"));
    });

    let client = client_for(&server);
    let clients = Reports::new(&client, january()).top_clients(10).await.unwrap();
    mock.assert();

    assert_eq!(clients.len(), 6);
    assert_eq!(clients[0].name, "Maria Silva");
}

#[tokio::test]
async fn offline_delinquents_and_due_soon() {
    let server = MockServer::start();
    let m1 = mock_report(&server, ReportKind::Delinquents);
    let m2 = mock_report(&server, ReportKind::DueSoon);

    let client = client_for(&server);
    let reports = Reports::new(&client, january());
    let delinquents = reports.delinquents().await.unwrap();
    let due = reports.due_soon().await.unwrap();
    m1.assert();
    m2.assert();

    assert_eq!(delinquents.len(), 3);
    assert_eq!(delinquents[0].overdue_installments, 4);
    assert_eq!(delinquents[0].tax_id, "123.456.789-01");

    assert_eq!(due.len(), 3);
    assert_eq!(due[1].due_date, day(2024, 1, 15));
    assert_eq!(due[2].amount, Decimal::from(640));
}

#[tokio::test]
async fn offline_dashboard_stats() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/dashboard/stats");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("dashboard-stats"));
    });

    let client = client_for(&server);
    let stats = Reports::new(&client, january()).stats().await.unwrap();
    mock.assert();

    assert_eq!(stats.total_clients, 42);
    assert_eq!(stats.pending_charges, 17);
    assert_eq!(stats.overdue_charges, 5);
    assert_eq!(stats.total_pending, Decimal::new(83_005, 1));
}

#[tokio::test]
async fn base_url_with_path_prefix_is_kept() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/backoffice/api/reports/kpis");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("kpis"));
    });

    let client = loan_reports::ReportClient::builder()
        .base_url(url::Url::parse(&format!("{}/backoffice", server.base_url())).unwrap())
        .fallback(false)
        .build()
        .unwrap();
    Reports::new(&client, january()).kpis().await.unwrap();
    mock.assert();
}
