use crate::core::{DateRange, ExportFormat, ReportClient, ReportError, ReportKind, net};
use crate::reports::fallback;

async fn fetch_live(
    client: &ReportClient,
    kind: ReportKind,
    format: ExportFormat,
    range: &DateRange,
) -> Result<Vec<u8>, ReportError> {
    let mut url = client.report_url(&format!("{kind}/export"))?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("format", format.as_str());
        for (k, v) in range.query_pairs() {
            qp.append_pair(k, &v);
        }
    }

    tracing::debug!(report = %kind, %format, %url, "requesting export");
    let resp = client.send(client.http().get(url)).await?;
    let body = net::get_bytes(resp).await?;
    if body.is_empty() {
        return Err(ReportError::Data(format!("{kind} export: empty document")));
    }
    Ok(body)
}

pub(crate) async fn fetch_export(
    client: &ReportClient,
    kind: ReportKind,
    format: ExportFormat,
    range: &DateRange,
) -> Result<Vec<u8>, ReportError> {
    let live = fetch_live(client, kind, format, range).await;
    client
        .degrade("export", live, || fallback::export_placeholder(kind, range))
        .await
}
