//! The whole dashboard page, plus a plain-text rendering for terminals.

use std::fmt;

use chrono::NaiveDate;

use super::charts::{BarChart, LineChart, PieChart};
use super::kpi::{KpiCard, kpi_cards};
use super::tables::{DelinquentsTable, DueSoonTable, SortKey, SortState};
use super::{Section, format, section};
use crate::charges::LateChargePolicy;
use crate::dashboard::DashboardSnapshot;

/// Inputs a page needs beyond the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    /// Reference date for due-date urgency and late charges.
    pub today: NaiveDate,
    pub delinquents_sort: SortState,
    pub due_soon_sort: SortState,
    pub charges: LateChargePolicy,
}

impl ViewOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            delinquents_sort: SortState::new(SortKey::Amount),
            due_soon_sort: SortState::new(SortKey::Date),
            charges: LateChargePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// `Período: 01/01/2024 a 31/01/2024`, plus the selected client if any.
    pub header: String,
    /// Banner spinner while any dataset is in flight. Loaded sections still render.
    pub loading_banner: bool,
    pub kpis: Section<Vec<KpiCard>>,
    pub monthly_evolution: Section<LineChart>,
    pub installments_status: Section<PieChart>,
    pub top_clients: Section<BarChart>,
    pub delinquents: Section<DelinquentsTable>,
    pub due_soon: Section<DueSoonTable>,
}

/// What the page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// A request was rejected with 401. Overrides every section.
    LoginRequired,
    Dashboard(Box<DashboardView>),
}

impl Page {
    pub fn build(snapshot: &DashboardSnapshot, opts: &ViewOptions) -> Self {
        if snapshot.session_expired {
            return Self::LoginRequired;
        }
        Self::Dashboard(Box::new(DashboardView::build(snapshot, opts)))
    }
}

impl DashboardView {
    pub fn build(snapshot: &DashboardSnapshot, opts: &ViewOptions) -> Self {
        let data = &snapshot.data;
        let range = snapshot.filter.range;

        let mut header = format!(
            "Período: {} a {}",
            format::date(range.start()),
            format::date(range.end())
        );
        if let Some(client) = &snapshot.filter.client_id {
            header.push_str(&format!(" · Cliente: {client}"));
        }

        Self {
            header,
            loading_banner: data.any_loading(),
            kpis: section(&data.kpis, "", kpi_cards),
            monthly_evolution: section(
                &data.monthly_evolution,
                "Sem movimentação no período",
                |p| LineChart::build(p),
            ),
            installments_status: section(
                &data.installments_status,
                "Nenhuma parcela no período",
                |b| PieChart::build(b),
            ),
            top_clients: section(&data.top_clients, "Nenhum cliente no período", |c| {
                BarChart::build(c)
            }),
            delinquents: section(&data.delinquents, "Nenhum cliente inadimplente", |r| {
                DelinquentsTable::build(r, opts.delinquents_sort)
            }),
            due_soon: section(&data.due_soon, "Nenhuma parcela a vencer", |r| {
                DueSoonTable::build(r, opts.due_soon_sort, opts.today, &opts.charges)
            }),
        }
    }
}

/* ---------------- Text rendering ---------------- */

fn write_section<V>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    s: &Section<V>,
    body: impl FnOnce(&mut fmt::Formatter<'_>, &V) -> fmt::Result,
) -> fmt::Result {
    writeln!(f, "\n== {title} ==")?;
    match s {
        Section::Loading => writeln!(f, "  carregando..."),
        Section::Error(msg) => writeln!(f, "  erro: {msg}"),
        Section::Empty(msg) => writeln!(f, "  {msg}"),
        Section::Content(v) => body(f, v),
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        if self.loading_banner {
            writeln!(f, "[atualizando...]")?;
        }

        write_section(f, "Indicadores", &self.kpis, |f, cards| {
            for c in cards {
                writeln!(f, "  {:<20} {:>18}", c.title, c.value)?;
            }
            Ok(())
        })?;

        write_section(f, "Evolução mensal", &self.monthly_evolution, |f, chart| {
            for p in &chart.points {
                writeln!(
                    f,
                    "  {:<8} emprestado {:>16}  recebido {:>16}",
                    p.label, p.loaned_label, p.received_label
                )?;
            }
            let ticks: Vec<&str> = chart.y_ticks.iter().map(|t| t.label.as_str()).collect();
            writeln!(f, "  eixo: {}", ticks.join(" | "))
        })?;

        write_section(f, "Status das parcelas", &self.installments_status, |f, pie| {
            for s in &pie.slices {
                writeln!(f, "  {}", s.legend)?;
            }
            writeln!(f, "  total: {}", pie.total)
        })?;

        write_section(f, "Top clientes", &self.top_clients, |f, chart| {
            for b in &chart.bars {
                let width = (b.ratio * 30.0).round() as usize;
                writeln!(
                    f,
                    "  {:<20} {:<30} {:>16} ({})",
                    b.name,
                    "#".repeat(width),
                    b.value_label,
                    b.share_label
                )?;
            }
            Ok(())
        })?;

        write_section(f, "Inadimplentes", &self.delinquents, |f, table| {
            for r in &table.rows {
                writeln!(
                    f,
                    "  {:<20} {:<20} {:<12} {:?} {:>16}",
                    r.name, r.tax_id, r.installments_label, r.severity, r.amount_label
                )?;
            }
            writeln!(f, "  total: {}", table.total_label)
        })?;

        write_section(f, "A vencer", &self.due_soon, |f, table| {
            for r in &table.rows {
                writeln!(
                    f,
                    "  {:<20} {:<20} {} {:>16} {:<14} {}",
                    r.name,
                    r.tax_id,
                    r.due_label,
                    r.amount_label,
                    r.urgency_label,
                    r.updated_amount_label.as_deref().unwrap_or("")
                )?;
            }
            writeln!(f, "  total: {}", table.total_label)
        })
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoginRequired => writeln!(f, "Sessão expirada. Faça login novamente."),
            Self::Dashboard(view) => write!(f, "{view}"),
        }
    }
}
