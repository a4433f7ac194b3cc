use crate::question::Table;
use crate::record::SessionRecord;

/// How many of the latest sessions the trend charts show.
pub const RECENT_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlobalStats {
    pub total_sessions: usize,
    /// Mean accuracy over every session, 0 when there are none.
    pub average_accuracy: f64,
    pub best_duration: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub best_accuracy: f64,
    pub best_duration: u64,
    pub perfect_scores: usize,
    pub average_accuracy: f64,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableStats {
    NoData,
    Summary(TableSummary),
}

/// Everything the progress screens show, derived from the full history.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub global: GlobalStats,
    pub tables: Vec<(Table, TableStats)>,
    pub recent_accuracy: Vec<f64>,
    pub recent_durations: Vec<u64>,
    /// Mean accuracy per table, indexed by `table - 1`; 0 for tables never played.
    pub table_average_accuracy: Vec<f64>,
}

impl Statistics {
    pub fn compute(records: &[SessionRecord]) -> Self {
        let tables: Vec<(Table, TableStats)> = Table::all()
            .map(|table| (table, table_stats(records, table)))
            .collect();

        let table_average_accuracy = tables
            .iter()
            .map(|(_, stats)| match stats {
                TableStats::Summary(s) => s.average_accuracy,
                TableStats::NoData => 0.0,
            })
            .collect();

        let recent = &records[records.len().saturating_sub(RECENT_WINDOW)..];

        Self {
            global: global_stats(records),
            tables,
            recent_accuracy: recent.iter().map(|r| r.accuracy).collect(),
            recent_durations: recent.iter().map(|r| r.duration).collect(),
            table_average_accuracy,
        }
    }

    pub fn table(&self, table: Table) -> &TableStats {
        &self.tables[(table.get() - 1) as usize].1
    }
}

fn global_stats(records: &[SessionRecord]) -> GlobalStats {
    GlobalStats {
        total_sessions: records.len(),
        average_accuracy: mean(records.iter().map(|r| r.accuracy)),
        best_duration: records.iter().map(|r| r.duration).min(),
    }
}

fn table_stats(records: &[SessionRecord], table: Table) -> TableStats {
    let games: Vec<&SessionRecord> = records
        .iter()
        .filter(|r| r.covers(table.get()))
        .collect();

    let Some(best_duration) = games.iter().map(|r| r.duration).min() else {
        return TableStats::NoData;
    };

    TableStats::Summary(TableSummary {
        best_accuracy: games.iter().map(|r| r.accuracy).fold(0.0, f64::max),
        best_duration,
        perfect_scores: games.iter().filter(|r| r.is_perfect()).count(),
        average_accuracy: mean(games.iter().map(|r| r.accuracy)),
        total: games.len(),
    })
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// `MM:SS`, minutes not capped at 59.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_best_time(seconds: Option<u64>) -> String {
    seconds.map(format_clock).unwrap_or_else(|| "--:--".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::TableSelection;
    use chrono::{Duration, TimeZone, Utc};

    fn record(selection: TableSelection, duration: u64, correct: u32, total: u32) -> SessionRecord {
        let date = Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap()
            + Duration::minutes(duration as i64);
        SessionRecord::new(date, selection, duration, correct, total - correct, total)
    }

    fn single(n: u8) -> TableSelection {
        TableSelection::Single(Table::new(n).unwrap())
    }

    #[test]
    fn empty_history_degrades_to_sentinels() {
        let stats = Statistics::compute(&[]);
        assert_eq!(stats.global, GlobalStats::default());
        assert!(stats.tables.iter().all(|(_, s)| *s == TableStats::NoData));
        assert!(stats.recent_accuracy.is_empty());
        assert_eq!(stats.table_average_accuracy, vec![0.0; 10]);
        assert_eq!(format_best_time(stats.global.best_duration), "--:--");
    }

    #[test]
    fn global_stats_average_and_best_time() {
        let records = vec![
            record(single(2), 90, 10, 10),
            record(single(3), 45, 5, 10),
        ];
        let stats = Statistics::compute(&records);
        assert_eq!(stats.global.total_sessions, 2);
        assert_eq!(stats.global.average_accuracy, 75.0);
        assert_eq!(stats.global.best_duration, Some(45));
    }

    #[test]
    fn master_session_counts_once_per_table() {
        let records = vec![record(TableSelection::Master, 240, 80, 100)];
        let stats = Statistics::compute(&records);
        for table in Table::all() {
            let TableStats::Summary(s) = stats.table(table) else {
                panic!("table {} has no data", table.get());
            };
            assert_eq!(s.total, 1);
            assert_eq!(s.average_accuracy, 80.0);
            assert_eq!(s.best_duration, 240);
        }
        assert_eq!(stats.table_average_accuracy, vec![80.0; 10]);
    }

    #[test]
    fn per_table_summary() {
        let records = vec![
            record(single(7), 60, 10, 10),
            record(single(7), 40, 6, 10),
            record(single(4), 30, 9, 10),
            record(TableSelection::Master, 300, 50, 100),
        ];
        let stats = Statistics::compute(&records);
        let TableStats::Summary(seven) = stats.table(Table::new(7).unwrap()) else {
            panic!("expected data for table 7");
        };
        assert_eq!(seven.total, 3);
        assert_eq!(seven.best_accuracy, 100.0);
        assert_eq!(seven.best_duration, 40);
        assert_eq!(seven.perfect_scores, 1);
        assert_eq!(seven.average_accuracy, 70.0);
    }

    #[test]
    fn unknown_tables_in_history_are_ignored() {
        let mut odd = record(single(1), 10, 10, 10);
        odd.tables = vec![12];
        let stats = Statistics::compute(&[odd]);
        assert!(stats.tables.iter().all(|(_, s)| *s == TableStats::NoData));
        assert_eq!(stats.global.total_sessions, 1);
    }

    #[test]
    fn recent_series_keep_last_ten() {
        let records: Vec<SessionRecord> = (0..15)
            .map(|i| record(single(5), 100 + i, (i % 11) as u32, 10))
            .collect();
        let stats = Statistics::compute(&records);
        assert_eq!(stats.recent_durations, (105..115).collect::<Vec<u64>>());
        assert_eq!(stats.recent_accuracy.len(), RECENT_WINDOW);
        assert_eq!(stats.recent_accuracy[0], 50.0);
    }

    #[test]
    fn formats_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(75), "01:15");
        assert_eq!(format_clock(3600), "60:00");
    }
}
