use serde::de::DeserializeOwned;

use super::fallback;
use super::model::{
    DashboardStats, DelinquentRecord, DueSoonRecord, InstallmentBucket, KpiSnapshot,
    MonthlyPoint, TopClient,
};
use super::wire::{
    BucketNode, DelinquentNode, DueSoonNode, KpisNode, MonthlyNode, StatsNode, TopClientNode,
};
use crate::core::{DateRange, ReportClient, ReportError, ReportKind, net};

async fn fetch_json<W: DeserializeOwned>(
    client: &ReportClient,
    kind: ReportKind,
    range: &DateRange,
    extra: &[(&str, String)],
) -> Result<W, ReportError> {
    let mut url = client.report_url(kind.as_str())?;
    {
        let mut qp = url.query_pairs_mut();
        for (k, v) in extra {
            qp.append_pair(k, v);
        }
        for (k, v) in range.query_pairs() {
            qp.append_pair(k, &v);
        }
    }

    tracing::debug!(report = %kind, %url, "fetching report");
    let resp = client.send(client.http().get(url)).await?;
    let text = net::get_text(resp, kind.as_str()).await?;
    net::decode(&text, kind.as_str())
}

fn convert<W, T: From<W>>(nodes: Vec<W>) -> Vec<T> {
    nodes.into_iter().map(T::from).collect()
}

pub(crate) async fn kpis(
    client: &ReportClient,
    range: &DateRange,
) -> Result<KpiSnapshot, ReportError> {
    let live = fetch_json::<KpisNode>(client, ReportKind::Kpis, range, &[])
        .await
        .map(KpiSnapshot::from);
    client.degrade("kpis", live, fallback::kpis).await
}

pub(crate) async fn monthly_evolution(
    client: &ReportClient,
    range: &DateRange,
) -> Result<Vec<MonthlyPoint>, ReportError> {
    let live = fetch_json::<Vec<MonthlyNode>>(client, ReportKind::MonthlyEvolution, range, &[])
        .await
        .map(convert);
    client
        .degrade("monthly-evolution", live, fallback::monthly_evolution)
        .await
}

pub(crate) async fn installments_status(
    client: &ReportClient,
    range: &DateRange,
) -> Result<Vec<InstallmentBucket>, ReportError> {
    let live = fetch_json::<Vec<BucketNode>>(client, ReportKind::InstallmentsStatus, range, &[])
        .await
        .map(convert);
    client
        .degrade("installments-status", live, fallback::installments_status)
        .await
}

pub(crate) async fn top_clients(
    client: &ReportClient,
    range: &DateRange,
    limit: usize,
) -> Result<Vec<TopClient>, ReportError> {
    let extra = [("limit", limit.to_string())];
    let live = fetch_json::<Vec<TopClientNode>>(client, ReportKind::TopClients, range, &extra)
        .await
        .map(convert);
    client
        .degrade("top-clients", live, || fallback::top_clients(limit))
        .await
}

pub(crate) async fn delinquents(
    client: &ReportClient,
    range: &DateRange,
) -> Result<Vec<DelinquentRecord>, ReportError> {
    let live = fetch_json::<Vec<DelinquentNode>>(client, ReportKind::Delinquents, range, &[])
        .await
        .map(convert);
    client.degrade("delinquents", live, fallback::delinquents).await
}

pub(crate) async fn due_soon(
    client: &ReportClient,
    range: &DateRange,
) -> Result<Vec<DueSoonRecord>, ReportError> {
    let live = fetch_json::<Vec<DueSoonNode>>(client, ReportKind::DueSoon, range, &[])
        .await
        .map(convert);
    client
        .degrade("due-soon", live, || fallback::due_soon(crate::core::today()))
        .await
}

pub(crate) async fn dashboard_stats(client: &ReportClient) -> Result<DashboardStats, ReportError> {
    let live = async {
        let url = client.stats_url()?;
        tracing::debug!(%url, "fetching dashboard stats");
        let resp = client.send(client.http().get(url)).await?;
        let text = net::get_text(resp, "dashboard-stats").await?;
        net::decode::<StatsNode>(&text, "dashboard-stats")
    }
    .await
    .map(DashboardStats::from);
    client
        .degrade("dashboard-stats", live, fallback::dashboard_stats)
        .await
}
