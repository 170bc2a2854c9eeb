use super::format;
use crate::reports::{DashboardStats, KpiSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
}

impl KpiCard {
    fn new(title: &'static str, value: String) -> Self {
        Self { title, value }
    }
}

pub fn kpi_cards(kpis: &KpiSnapshot) -> Vec<KpiCard> {
    vec![
        KpiCard::new("Valor emprestado", format::brl(kpis.amount_loaned)),
        KpiCard::new("Valor recebido", format::brl(kpis.amount_received)),
        KpiCard::new("Valor pendente", format::brl(kpis.amount_pending)),
        KpiCard::new("Receita de juros", format::brl(kpis.interest_revenue)),
    ]
}

pub fn stats_cards(stats: &DashboardStats) -> Vec<KpiCard> {
    vec![
        KpiCard::new("Clientes", stats.total_clients.to_string()),
        KpiCard::new("Cobranças pendentes", stats.pending_charges.to_string()),
        KpiCard::new("Cobranças vencidas", stats.overdue_charges.to_string()),
        KpiCard::new("Total pendente", format::brl(stats.total_pending)),
        KpiCard::new("Total recebido", format::brl(stats.total_received)),
    ]
}
