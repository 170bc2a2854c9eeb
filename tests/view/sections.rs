use loan_reports::view::kpi::{kpi_cards, stats_cards};
use loan_reports::view::page::{DashboardView, ViewOptions};
use loan_reports::view::section;
use loan_reports::{
    DashboardData, DashboardSnapshot, DashboardStats, DatasetState, Filter, KpiSnapshot, Page,
    Section, TopClient,
};
use rust_decimal::Decimal;

use crate::common::{day, january};

fn kpis() -> KpiSnapshot {
    KpiSnapshot {
        amount_loaned: Decimal::from(150_000),
        amount_received: Decimal::new(8_750_050, 2),
        amount_pending: Decimal::from(62_500),
        interest_revenue: Decimal::ZERO,
    }
}

fn snapshot(data: DashboardData) -> DashboardSnapshot {
    DashboardSnapshot {
        filter: Filter::new(january()),
        data,
        session_expired: false,
        generation: 0,
    }
}

#[test]
fn loading_wins_over_everything() {
    let s: Section<usize> = section(&DatasetState::<Vec<u8>>::Loading, "nada", |v| v.len());
    assert_eq!(s, Section::Loading);
    let s: Section<usize> = section(&DatasetState::<Vec<u8>>::NotStarted, "nada", |v| v.len());
    assert_eq!(s, Section::Loading);
}

#[test]
fn error_then_empty_then_content() {
    let failed = DatasetState::<Vec<u8>>::Failed("boom".into());
    assert_eq!(section(&failed, "nada", |v| v.len()), Section::Error("boom".into()));

    let empty = DatasetState::Loaded(Vec::<u8>::new());
    assert_eq!(section(&empty, "nada", |v| v.len()), Section::Empty("nada"));

    let full = DatasetState::Loaded(vec![1u8, 2, 3]);
    assert_eq!(section(&full, "nada", |v| v.len()), Section::Content(3));
}

#[test]
fn zero_kpis_are_content_not_empty() {
    let zero = KpiSnapshot {
        amount_loaned: Decimal::ZERO,
        amount_received: Decimal::ZERO,
        amount_pending: Decimal::ZERO,
        interest_revenue: Decimal::ZERO,
    };
    let s = section(&DatasetState::Loaded(zero), "", kpi_cards);
    assert_eq!(s.content().unwrap()[0].value, "R$ 0,00");
}

#[test]
fn kpi_card_titles_and_values() {
    let cards = kpi_cards(&kpis());
    let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
    assert_eq!(
        titles,
        ["Valor emprestado", "Valor recebido", "Valor pendente", "Receita de juros"]
    );
    assert_eq!(cards[0].value, "R$ 150.000,00");
    assert_eq!(cards[1].value, "R$ 87.500,50");
}

#[test]
fn stats_cards_mix_counts_and_currency() {
    let cards = stats_cards(&DashboardStats {
        total_clients: 42,
        pending_charges: 17,
        overdue_charges: 5,
        total_pending: Decimal::new(83_005, 1),
        total_received: Decimal::from(51_000),
    });
    assert_eq!(cards.len(), 5);
    assert_eq!(cards[0].value, "42");
    assert_eq!(cards[3].value, "R$ 8.300,50");
}

#[test]
fn sections_are_independent() {
    let data = DashboardData {
        kpis: DatasetState::Loaded(kpis()),
        monthly_evolution: DatasetState::Loading,
        installments_status: DatasetState::Failed("HTTP error".into()),
        top_clients: DatasetState::Loaded(vec![TopClient {
            name: "Ana".into(),
            total: Decimal::from(10),
        }]),
        delinquents: DatasetState::Loaded(Vec::new()),
        due_soon: DatasetState::NotStarted,
    };
    let view = DashboardView::build(&snapshot(data), &ViewOptions::new(day(2024, 1, 15)));

    assert!(view.loading_banner);
    assert!(view.kpis.content().is_some());
    assert_eq!(view.monthly_evolution, Section::Loading);
    assert_eq!(view.installments_status, Section::Error("HTTP error".into()));
    assert_eq!(view.top_clients.content().unwrap().bars.len(), 1);
    assert_eq!(view.delinquents, Section::Empty("Nenhum cliente inadimplente"));
    assert_eq!(view.due_soon, Section::Loading);
}

#[test]
fn header_shows_period_and_client() {
    let mut snap = snapshot(DashboardData::default());
    snap.filter = Filter::new(january()).with_client("Maria");
    let page = Page::build(&snap, &ViewOptions::new(day(2024, 1, 15)));

    let Page::Dashboard(view) = &page else {
        panic!("expected dashboard page");
    };
    assert_eq!(view.header, "Período: 01/01/2024 a 31/01/2024 · Cliente: Maria");
    assert!(!view.loading_banner);

    let text = page.to_string();
    assert!(text.starts_with("Período: 01/01/2024"));
    assert!(text.contains("== Indicadores =="));
    assert!(text.contains("carregando..."));
}

#[test]
fn expired_session_overrides_loaded_data() {
    let mut snap = snapshot(DashboardData {
        kpis: DatasetState::Loaded(kpis()),
        ..DashboardData::default()
    });
    snap.session_expired = true;

    let page = Page::build(&snap, &ViewOptions::new(day(2024, 1, 15)));
    assert_eq!(page, Page::LoginRequired);
    assert!(page.to_string().contains("Sessão expirada"));
}
