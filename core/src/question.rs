use rand::Rng;

use crate::error::QuizError;

pub const MIN_TABLE: u8 = 1;
pub const MAX_TABLE: u8 = 10;
pub const QUESTIONS_PER_TABLE: u8 = 10;

/// A times table between 1 and 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Table(u8);

impl Table {
    pub fn new(n: u8) -> Result<Self, QuizError> {
        if (MIN_TABLE..=MAX_TABLE).contains(&n) {
            Ok(Self(n))
        } else {
            Err(QuizError::InvalidTable(n))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Table> {
        (MIN_TABLE..=MAX_TABLE).map(Table)
    }

    /// Localization key for this table's title, e.g. `table-7`.
    pub fn key(self) -> String {
        format!("table-{}", self.0)
    }
}

impl From<Table> for u8 {
    fn from(t: Table) -> u8 {
        t.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableSelection {
    Single(Table),
    Master,
}

impl TableSelection {
    pub fn tables(&self) -> Vec<Table> {
        match self {
            TableSelection::Single(t) => vec![*t],
            TableSelection::Master => Table::all().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Question {
    pub table: u8,
    pub multiplier: u8,
    pub answer: i64,
}

impl Question {
    pub fn new(table: Table, multiplier: u8) -> Self {
        Self {
            table: table.get(),
            multiplier,
            answer: table.get() as i64 * multiplier as i64,
        }
    }

    pub fn answer(&self) -> i64 {
        self.answer
    }

    pub fn display(&self) -> String {
        format!("{} × {} = ?", self.table, self.multiplier)
    }
}

/// Builds one question per (table, multiplier) pair in the selection, then
/// shuffles them.
pub fn generate_questions<R: Rng + ?Sized>(
    selection: TableSelection,
    rng: &mut R,
) -> Vec<Question> {
    let mut questions = Vec::new();
    for table in selection.tables() {
        for multiplier in 1..=QUESTIONS_PER_TABLE {
            questions.push(Question::new(table, multiplier));
        }
    }
    shuffle(&mut questions, rng);
    questions
}

/// Fisher–Yates: walk from the last index down to 1, swapping each slot with
/// a uniformly chosen index in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn table_rejects_out_of_range() {
        assert_eq!(Table::new(0), Err(QuizError::InvalidTable(0)));
        assert_eq!(Table::new(11), Err(QuizError::InvalidTable(11)));
        assert_eq!(Table::new(10).map(Table::get), Ok(10));
    }

    #[test]
    fn single_table_has_each_multiplier_once() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=10 {
            let table = Table::new(n).unwrap();
            let questions = generate_questions(TableSelection::Single(table), &mut rng);
            assert_eq!(questions.len(), 10);
            assert!(questions.iter().all(|q| q.table == n));
            let multipliers: HashSet<u8> = questions.iter().map(|q| q.multiplier).collect();
            assert_eq!(multipliers, (1..=10).collect());
        }
    }

    #[test]
    fn master_mode_covers_all_pairs() {
        let mut rng = StdRng::seed_from_u64(1);
        let questions = generate_questions(TableSelection::Master, &mut rng);
        assert_eq!(questions.len(), 100);
        let pairs: HashSet<(u8, u8)> = questions.iter().map(|q| (q.table, q.multiplier)).collect();
        assert_eq!(pairs.len(), 100);
    }

    #[test]
    fn answer_is_product() {
        let q = Question::new(Table::new(7).unwrap(), 8);
        assert_eq!(q.answer(), 56);
        assert_eq!(q.display(), "7 × 8 = ?");
    }

    #[test]
    fn generated_answers_match_their_factors() {
        let mut rng = StdRng::seed_from_u64(9);
        for q in generate_questions(TableSelection::Master, &mut rng) {
            assert_eq!(q.answer, q.table as i64 * q.multiplier as i64);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_not_identity_biased() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut first_slot = [0u32; 4];
        for _ in 0..4000 {
            let mut items = [0usize, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            first_slot[items[0]] += 1;
        }
        // Each value should land first roughly a quarter of the time.
        for count in first_slot {
            assert!((800..1200).contains(&count), "skewed count {count}");
        }
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut one = [5];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, [5]);
    }
}
