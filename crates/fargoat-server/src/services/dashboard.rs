//! Mock dashboard feed
//!
//! The updater owns the write side of two watch channels and replaces the
//! chart and table snapshots wholesale on every tick. Handlers hold the
//! read side and clone out the latest `Arc`, so a reader sees either the
//! previous snapshot or the next one in full.

use chrono::Utc;
use fargoat_core::{ChartData, RowStatus, TableRow, CHART_SERIES_LEN, TABLE_ROWS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Create a connected updater/feed pair. Until the first tick the feed
/// serves an empty chart and an empty table.
pub fn channel(period: Duration) -> (DashboardUpdater, DashboardFeed) {
    let (chart_tx, chart_rx) = watch::channel(Arc::new(ChartData::default()));
    let (table_tx, table_rx) = watch::channel(Arc::new(Vec::new()));

    (
        DashboardUpdater {
            chart_tx,
            table_tx,
            period,
        },
        DashboardFeed { chart_rx, table_rx },
    )
}

/// Read side, cloned into every request
#[derive(Clone)]
pub struct DashboardFeed {
    chart_rx: watch::Receiver<Arc<ChartData>>,
    table_rx: watch::Receiver<Arc<Vec<TableRow>>>,
}

impl DashboardFeed {
    pub fn chart(&self) -> Arc<ChartData> {
        self.chart_rx.borrow().clone()
    }

    pub fn table(&self) -> Arc<Vec<TableRow>> {
        self.table_rx.borrow().clone()
    }
}

/// Write side, owned by the background task
pub struct DashboardUpdater {
    chart_tx: watch::Sender<Arc<ChartData>>,
    table_tx: watch::Sender<Arc<Vec<TableRow>>>,
    period: Duration,
}

impl DashboardUpdater {
    /// Run the tick loop on the runtime. The first tick fires immediately.
    pub fn spawn(self) -> JoinHandle<()> {
        info!("Starting dashboard updater, period={:?}", self.period);
        tokio::spawn(self.run(StdRng::from_entropy()))
    }

    async fn run<R: Rng + Send>(self, mut rng: R) {
        let mut interval = tokio::time::interval(self.period);
        loop {
            interval.tick().await;
            self.tick(&mut rng);
        }
    }

    /// Generate and publish one chart and one table snapshot.
    pub fn tick<R: Rng>(&self, rng: &mut R) {
        let chart = generate_chart(rng, Utc::now().timestamp());
        let table = generate_table(rng);

        info!(
            "Dashboard updated: chart@{} values={:.2?}, table rows={}",
            chart.timestamp,
            chart.values,
            table.len()
        );
        debug!("Updated ChartData: {:?}", chart);
        debug!("Updated TableData: {:?}", table);

        self.chart_tx.send_replace(Arc::new(chart));
        self.table_tx.send_replace(Arc::new(table));
    }
}

fn generate_chart<R: Rng>(rng: &mut R, timestamp: i64) -> ChartData {
    ChartData {
        timestamp,
        values: (0..CHART_SERIES_LEN)
            .map(|_| rng.gen_range(-100.0..100.0))
            .collect(),
        labels: (0..CHART_SERIES_LEN)
            .map(|i| format!("Series {}", i))
            .collect(),
    }
}

fn generate_table<R: Rng>(rng: &mut R) -> Vec<TableRow> {
    (0..TABLE_ROWS as i32)
        .map(|i| TableRow {
            id: i,
            name: format!("Item {}", i),
            value: rng.gen_range(0.0..1000.0),
            status: RowStatus::ALL[rng.gen_range(0..RowStatus::ALL.len())],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_generated_shapes() {
        let chart = generate_chart(&mut rng(), 1_700_000_000);
        assert_eq!(chart.timestamp, 1_700_000_000);
        assert_eq!(chart.values.len(), CHART_SERIES_LEN);
        assert_eq!(chart.labels, vec!["Series 0", "Series 1", "Series 2", "Series 3", "Series 4"]);
        assert!(chart.values.iter().all(|v| (-100.0..100.0).contains(v)));

        let table = generate_table(&mut rng());
        assert_eq!(table.len(), TABLE_ROWS);
        for (i, row) in table.iter().enumerate() {
            assert_eq!(row.id, i as i32);
            assert_eq!(row.name, format!("Item {}", i));
            assert!((0.0..1000.0).contains(&row.value));
        }
    }

    #[test]
    fn test_feed_starts_empty() {
        let (_updater, feed) = channel(Duration::from_secs(5));
        assert_eq!(*feed.chart(), ChartData::default());
        assert!(feed.table().is_empty());
    }

    #[test]
    fn test_tick_replaces_snapshots_wholesale() {
        let (updater, feed) = channel(Duration::from_secs(5));
        let mut rng = rng();

        updater.tick(&mut rng);
        let first_chart = feed.chart();
        let first_table = feed.table();
        let first_chart_copy = (*first_chart).clone();

        updater.tick(&mut rng);
        let second_chart = feed.chart();
        let second_table = feed.table();

        assert!(!Arc::ptr_eq(&first_chart, &second_chart));
        assert!(!Arc::ptr_eq(&first_table, &second_table));
        assert_eq!(second_chart.values.len(), CHART_SERIES_LEN);
        assert_eq!(second_table.len(), TABLE_ROWS);
        assert_ne!(first_chart.values, second_chart.values);

        // A snapshot already handed out is never mutated by later ticks
        assert_eq!(*first_chart, first_chart_copy);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_updater_ticks_on_interval() {
        let (updater, feed) = channel(Duration::from_secs(5));
        let mut chart_rx = feed.chart_rx.clone();
        let handle = tokio::spawn(updater.run(rng()));

        // First tick fires immediately
        chart_rx.changed().await.unwrap();
        let first = feed.chart();
        assert_eq!(first.values.len(), CHART_SERIES_LEN);

        // Next one after the period elapses
        chart_rx.changed().await.unwrap();
        let second = feed.chart();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(feed.table().len(), TABLE_ROWS);

        handle.abort();
    }

    fn assert_consistent_chart(chart: &ChartData) {
        if *chart == ChartData::default() {
            return;
        }
        assert_eq!(chart.values.len(), CHART_SERIES_LEN);
        assert_eq!(chart.labels.len(), CHART_SERIES_LEN);
    }

    fn assert_consistent_table(table: &[TableRow]) {
        if table.is_empty() {
            return;
        }
        assert_eq!(table.len(), TABLE_ROWS);
        for (i, row) in table.iter().enumerate() {
            assert_eq!(row.id, i as i32);
            assert_eq!(row.name, format!("Item {}", i));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_readers_see_whole_snapshots() {
        let (updater, feed) = channel(Duration::from_secs(5));
        let done = Arc::new(std::sync::atomic::AtomicBool::new(false));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let feed = feed.clone();
                let done = done.clone();
                tokio::spawn(async move {
                    let mut reads = 0u64;
                    loop {
                        assert_consistent_chart(&feed.chart());
                        assert_consistent_table(&feed.table());
                        reads += 1;
                        if done.load(std::sync::atomic::Ordering::Relaxed) {
                            return reads;
                        }
                        tokio::task::yield_now().await;
                    }
                })
            })
            .collect();

        let writer = tokio::task::spawn_blocking(move || {
            let mut rng = StdRng::seed_from_u64(11);
            for _ in 0..500 {
                updater.tick(&mut rng);
            }
        });
        writer.await.unwrap();
        done.store(true, std::sync::atomic::Ordering::Relaxed);

        for reader in readers {
            // A panicked assertion surfaces here as a JoinError
            assert!(reader.await.unwrap() > 0);
        }
        assert_consistent_chart(&feed.chart());
        assert_eq!(feed.table().len(), TABLE_ROWS);
    }
}
