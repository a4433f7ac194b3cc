use chrono::{Duration, TimeZone, Utc};
use tt_core::stats::TableStats;
use tt_core::store::{Backend, FileBackend, HISTORY_KEY};
use tt_core::{
    Language, ProgressStore, QuizEvent, Session, SessionRecord, Statistics, Table, TableSelection,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

fn play_perfect_quiz(selection: TableSelection, seed: u64) -> SessionRecord {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = Utc.with_ymd_and_hms(2024, 9, 2, 15, 0, 0).unwrap();
    let mut session = Session::new();
    session.start(selection, start, &mut rng).unwrap();

    let first_question = start + Duration::seconds(4);
    session.poll(first_question);
    let finished = first_question + Duration::seconds(37);

    let mut completed = None;
    while let Some(question) = session.current_question().copied() {
        for event in session.submit(&question.answer().to_string(), finished).unwrap() {
            if let QuizEvent::Completed(record) = event {
                completed = Some(record);
            }
        }
    }
    completed.expect("quiz should complete")
}

#[test]
fn perfect_seven_table_quiz_is_recorded_and_survives_restart() {
    let dir = TempDir::new().unwrap();
    let seven = TableSelection::Single(Table::new(7).unwrap());

    let record = play_perfect_quiz(seven, 1);
    assert_eq!(record.tables, vec![7]);
    assert_eq!((record.correct, record.wrong), (10, 0));
    assert_eq!(record.accuracy, 100.0);
    assert_eq!(record.total_questions, 10);
    assert_eq!(record.duration, 37);

    let mut store = ProgressStore::open(FileBackend::new(dir.path()));
    store.append(record.clone()).unwrap();

    let reopened = ProgressStore::open(FileBackend::new(dir.path()));
    assert_eq!(reopened.records().last(), Some(&record));

    let stats = Statistics::compute(reopened.records());
    match stats.table(Table::new(7).unwrap()) {
        TableStats::Summary(summary) => assert_eq!(summary.perfect_scores, 1),
        TableStats::NoData => panic!("table 7 should have data"),
    }
    assert_eq!(stats.table(Table::new(6).unwrap()), &TableStats::NoData);
}

#[test]
fn replays_append_distinct_entries_in_order() {
    let dir = TempDir::new().unwrap();
    let mut store = ProgressStore::open(FileBackend::new(dir.path()));

    let first = play_perfect_quiz(TableSelection::Master, 2);
    let second = play_perfect_quiz(TableSelection::Single(Table::new(3).unwrap()), 3);
    store.append(first.clone()).unwrap();
    store.append(second.clone()).unwrap();
    store.append(second.clone()).unwrap();

    let loaded = ProgressStore::open(FileBackend::new(dir.path())).load_all();
    assert_eq!(loaded, vec![first, second.clone(), second]);
}

#[test]
fn corrupt_history_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    let mut backend = FileBackend::new(dir.path());
    backend.write(HISTORY_KEY, "[{\"date\": 12").unwrap();

    let mut store = ProgressStore::open(backend);
    assert!(store.records().is_empty());

    let record = play_perfect_quiz(TableSelection::Single(Table::new(2).unwrap()), 4);
    store.append(record.clone()).unwrap();
    assert_eq!(store.load_all(), vec![record]);
}

#[test]
fn language_toggle_leaves_history_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = ProgressStore::open(FileBackend::new(dir.path()));
    store
        .append(play_perfect_quiz(TableSelection::Master, 5))
        .unwrap();
    let before = store.load_all();

    let language = store.load_language().toggle();
    store.save_language(language).unwrap();

    let reopened = ProgressStore::open(FileBackend::new(dir.path()));
    assert_eq!(reopened.load_language(), Language::No);
    assert_eq!(reopened.load_all(), before);
}
