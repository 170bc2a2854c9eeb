//! Line, pie and bar chart view models.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use super::format;
use crate::reports::{InstallmentBucket, MonthlyPoint, TopClient};

/// Slices under this share of the total get no in-slice label.
pub const MIN_SLICE_LABEL_PERCENT: f64 = 5.0;

/// The bar chart never shows more clients than this.
pub const MAX_BARS: usize = 5;

const Y_TICKS: usize = 5;

/// `value / sum * 100` for each value; all zeros when the sum is zero.
pub fn shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total * 100.0).collect()
}

fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/* ---------------- Line ---------------- */

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub loaned: Decimal,
    pub received: Decimal,
    /// Tooltip text, full currency form.
    pub loaned_label: String,
    pub received_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: Decimal,
    pub label: String,
}

/// Loaned vs. received per month, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub points: Vec<LinePoint>,
    /// Evenly spaced from zero up to a rounded maximum.
    pub y_ticks: Vec<AxisTick>,
}

impl LineChart {
    pub fn build(points: &[MonthlyPoint]) -> Self {
        let max = points
            .iter()
            .flat_map(|p| [p.loaned, p.received])
            .max()
            .unwrap_or(Decimal::ZERO);

        Self {
            points: points
                .iter()
                .map(|p| LinePoint {
                    label: format::month_label(&p.month),
                    loaned: p.loaned,
                    received: p.received,
                    loaned_label: format::brl(p.loaned),
                    received_label: format::brl(p.received),
                })
                .collect(),
            y_ticks: y_ticks(to_f64(max)),
        }
    }
}

fn y_ticks(max: f64) -> Vec<AxisTick> {
    let step = nice_step(max / (Y_TICKS - 1) as f64);
    (0..Y_TICKS)
        .map(|i| {
            let value = Decimal::from_f64(step * i as f64).unwrap_or(Decimal::ZERO);
            AxisTick {
                label: format::brl_axis(value),
                value,
            }
        })
        .collect()
}

/// Smallest 1/2/5 × 10ⁿ not below `raw`.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/* ---------------- Pie ---------------- */

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: &'static str,
    pub count: u64,
    /// Unrounded share of the total, in percent.
    pub percent: f64,
    /// `Pagas: 145 (58,9%)`
    pub legend: String,
    /// `59%`, or `None` when the slice is too thin to label.
    pub slice_label: Option<String>,
}

/// Installments by status.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub total: u64,
}

impl PieChart {
    pub fn build(buckets: &[InstallmentBucket]) -> Self {
        let counts: Vec<f64> = buckets.iter().map(|b| b.count as f64).collect();
        let slices = buckets
            .iter()
            .zip(shares(&counts))
            .map(|(b, pct)| PieSlice {
                label: b.status.label(),
                count: b.count,
                percent: pct,
                legend: format!("{}: {} ({})", b.status.label(), b.count, format::percent(pct, 1)),
                slice_label: (pct >= MIN_SLICE_LABEL_PERCENT).then(|| format::percent(pct, 0)),
            })
            .collect();

        Self {
            slices,
            total: buckets.iter().map(|b| b.count).sum(),
        }
    }
}

/* ---------------- Bar ---------------- */

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub value: Decimal,
    pub value_label: String,
    /// Share of the displayed bars' total, in percent.
    pub share: f64,
    pub share_label: String,
    /// Length relative to the longest bar, in `0.0..=1.0`.
    pub ratio: f64,
}

/// The largest borrowers, first five only, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub total: Decimal,
    pub total_label: String,
}

impl BarChart {
    pub fn build(clients: &[TopClient]) -> Self {
        let shown = &clients[..clients.len().min(MAX_BARS)];
        let values: Vec<f64> = shown.iter().map(|c| to_f64(c.total)).collect();
        let max = values.iter().copied().fold(0.0_f64, f64::max);
        let total: Decimal = shown.iter().map(|c| c.total).sum();

        let bars = shown
            .iter()
            .zip(values.iter().zip(shares(&values)))
            .map(|(c, (v, share))| Bar {
                name: c.name.clone(),
                value: c.total,
                value_label: format::brl(c.total),
                share,
                share_label: format::percent(share, 1),
                ratio: if max > 0.0 { v / max } else { 0.0 },
            })
            .collect();

        Self {
            bars,
            total,
            total_label: format::brl(total),
        }
    }
}
