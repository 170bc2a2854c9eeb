use std::sync::Arc;
use std::time::Duration;

use loan_reports::{Dashboard, DashboardData, DatasetState, DateRange, Filter};
use rust_decimal::Decimal;

use super::scripted::Scripted;
use crate::common::{day, january};

fn february() -> DateRange {
    DateRange::new(day(2024, 2, 2), day(2024, 2, 29)).unwrap()
}

#[tokio::test]
async fn set_filter_bumps_generation() {
    let dash = Dashboard::new(Arc::new(Scripted::default()), Filter::new(january()));
    assert_eq!(dash.set_filter(Filter::new(february())), 1);
    assert_eq!(dash.set_filter(Filter::new(january())), 2);
    assert_eq!(dash.snapshot().generation, 2);
}

#[tokio::test]
async fn slow_response_for_old_filter_is_discarded() {
    let mut source = Scripted::default();
    // January answers long after February.
    source.delay_for.insert(day(2024, 1, 1), Duration::from_millis(300));
    let dash = Dashboard::new(Arc::new(source), Filter::new(january()));

    let stale = dash.refresh();
    let fresh = async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        dash.apply_filter(Filter::new(february())).await;
    };
    tokio::join!(stale, fresh);

    let snap = dash.snapshot();
    assert_eq!(snap.filter.range, february());
    // February's tag is its start day, 2; January's would be 1.
    assert_eq!(snap.data.kpis.data().unwrap().amount_loaned, Decimal::TWO);
    assert_eq!(snap.data.delinquents.data().unwrap()[0].name, "from 2024-02-02");
    assert!(!snap.data.any_loading());
}

#[tokio::test]
async fn responses_after_filter_change_without_refresh_are_dropped() {
    let mut source = Scripted::default();
    source.delay_for.insert(day(2024, 1, 1), Duration::from_millis(100));
    let dash = Dashboard::new(Arc::new(source), Filter::new(january()));

    let stale = dash.refresh();
    let change = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        dash.set_filter(Filter::new(february()));
    };
    tokio::join!(stale, change);

    // the January results arrived after the change and were ignored
    let snap = dash.snapshot();
    assert_eq!(snap.data, DashboardData::default());
    assert!(!snap.data.any_loading());
}

#[tokio::test]
async fn set_filter_drops_data_of_previous_range() {
    let dash = Dashboard::new(Arc::new(Scripted::default()), Filter::new(january()));
    dash.refresh().await;
    assert!(dash.snapshot().data.kpis.data().is_some());

    dash.set_filter(Filter::new(february()));
    let snap = dash.snapshot();
    assert_eq!(snap.data.kpis, DatasetState::NotStarted);
    assert_eq!(snap.data.delinquents, DatasetState::NotStarted);
}
