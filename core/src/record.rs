use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::TableSelection;

/// One finished quiz, as kept in the progress history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub date: DateTime<Utc>,
    pub tables: Vec<u8>,
    /// Whole seconds from the first question to the last answer.
    pub duration: u64,
    pub correct: u32,
    pub wrong: u32,
    /// Percentage in `0.0..=100.0`.
    pub accuracy: f64,
    pub total_questions: u32,
}

impl SessionRecord {
    pub fn new(
        date: DateTime<Utc>,
        selection: TableSelection,
        duration: u64,
        correct: u32,
        wrong: u32,
        total_questions: u32,
    ) -> Self {
        Self {
            date,
            tables: selection.tables().into_iter().map(u8::from).collect(),
            duration,
            correct,
            wrong,
            accuracy: accuracy(correct, wrong),
            total_questions,
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.accuracy == 100.0
    }

    pub fn covers(&self, table: u8) -> bool {
        self.tables.contains(&table)
    }
}

/// `correct / (correct + wrong) * 100`, or 0 when nothing was answered.
pub fn accuracy(correct: u32, wrong: u32) -> f64 {
    let total = correct + wrong;
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::Table;
    use chrono::TimeZone;

    #[test]
    fn accuracy_is_exact_percentage() {
        assert_eq!(accuracy(7, 3), 70.0);
        assert_eq!(accuracy(10, 0), 100.0);
        assert_eq!(accuracy(0, 0), 0.0);
    }

    #[test]
    fn master_record_lists_every_table() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let record = SessionRecord::new(date, TableSelection::Master, 300, 80, 20, 100);
        assert_eq!(record.tables, (1..=10).collect::<Vec<u8>>());
        assert_eq!(record.accuracy, 80.0);
    }

    #[test]
    fn serializes_with_camel_case_and_iso_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let table = Table::new(7).unwrap();
        let record = SessionRecord::new(date, TableSelection::Single(table), 42, 10, 0, 10);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-03-01T12:00:00Z");
        assert_eq!(json["tables"], serde_json::json!([7]));
        assert_eq!(json["totalQuestions"], 10);
        assert_eq!(json["accuracy"], 100.0);
    }

    #[test]
    fn reads_records_written_with_millisecond_dates() {
        let json = r#"{"date":"2024-05-02T08:15:30.123Z","tables":[3],"duration":61,
            "correct":9,"wrong":1,"accuracy":90,"totalQuestions":10}"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tables, vec![3]);
        assert_eq!(record.accuracy, 90.0);
        assert!(!record.is_perfect());
    }
}
