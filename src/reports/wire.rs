use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::model::{
    DashboardStats, DelinquentRecord, DueSoonRecord, InstallmentBucket, InstallmentStatus,
    KpiSnapshot, MonthlyPoint, TopClient,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KpisNode {
    #[serde(default)]
    pub(crate) amount_loaned: Decimal,
    #[serde(default)]
    pub(crate) amount_received: Decimal,
    #[serde(default)]
    pub(crate) amount_pending: Decimal,
    #[serde(default)]
    pub(crate) interest_revenue: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MonthlyNode {
    pub(crate) month: String,
    #[serde(default)]
    pub(crate) loaned: Decimal,
    #[serde(default)]
    pub(crate) received: Decimal,
}

// The back office stores statuses in Portuguese; the reports API uses English.
#[derive(Deserialize)]
pub(crate) enum StatusNode {
    #[serde(rename = "paid", alias = "Pago")]
    Paid,
    #[serde(rename = "outstanding", alias = "Pendente")]
    Outstanding,
    #[serde(rename = "overdue", alias = "Vencido")]
    Overdue,
}

#[derive(Deserialize)]
pub(crate) struct BucketNode {
    pub(crate) status: StatusNode,
    pub(crate) count: u64,
}

#[derive(Deserialize)]
pub(crate) struct TopClientNode {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) total: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DelinquentNode {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) tax_id: String,
    pub(crate) overdue_installments: u32,
    #[serde(default)]
    pub(crate) amount_due: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DueSoonNode {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) tax_id: String,
    pub(crate) due_date: NaiveDate,
    #[serde(default)]
    pub(crate) amount: Decimal,
}

// `/api/dashboard/stats` keeps the back office's snake_case Portuguese keys.
#[derive(Deserialize)]
pub(crate) struct StatsNode {
    pub(crate) total_clientes: u64,
    pub(crate) cobrancas_pendentes: u64,
    pub(crate) cobrancas_vencidas: u64,
    #[serde(default)]
    pub(crate) valor_total_pendente: Decimal,
    #[serde(default)]
    pub(crate) valor_total_recebido: Decimal,
}

impl From<KpisNode> for KpiSnapshot {
    fn from(n: KpisNode) -> Self {
        Self {
            amount_loaned: n.amount_loaned,
            amount_received: n.amount_received,
            amount_pending: n.amount_pending,
            interest_revenue: n.interest_revenue,
        }
    }
}

impl From<MonthlyNode> for MonthlyPoint {
    fn from(n: MonthlyNode) -> Self {
        Self {
            month: n.month,
            loaned: n.loaned,
            received: n.received,
        }
    }
}

impl From<BucketNode> for InstallmentBucket {
    fn from(n: BucketNode) -> Self {
        let status = match n.status {
            StatusNode::Paid => InstallmentStatus::Paid,
            StatusNode::Outstanding => InstallmentStatus::Outstanding,
            StatusNode::Overdue => InstallmentStatus::Overdue,
        };
        Self {
            status,
            count: n.count,
        }
    }
}

impl From<TopClientNode> for TopClient {
    fn from(n: TopClientNode) -> Self {
        Self {
            name: n.name,
            total: n.total,
        }
    }
}

impl From<DelinquentNode> for DelinquentRecord {
    fn from(n: DelinquentNode) -> Self {
        Self {
            name: n.name,
            tax_id: n.tax_id,
            overdue_installments: n.overdue_installments,
            amount_due: n.amount_due,
        }
    }
}

impl From<DueSoonNode> for DueSoonRecord {
    fn from(n: DueSoonNode) -> Self {
        Self {
            name: n.name,
            tax_id: n.tax_id,
            due_date: n.due_date,
            amount: n.amount,
        }
    }
}

impl From<StatsNode> for DashboardStats {
    fn from(n: StatsNode) -> Self {
        Self {
            total_clients: n.total_clientes,
            pending_charges: n.cobrancas_pendentes,
            overdue_charges: n.cobrancas_vencidas,
            total_pending: n.valor_total_pendente,
            total_received: n.valor_total_recebido,
        }
    }
}
