//! The quiz lifecycle: `Idle → Countdown → Active → Completed`, or `Aborted`
//! when the player quits.
//!
//! Every transition takes the current time as an argument and returns the
//! events the presentation layer should render. Nothing here touches a clock,
//! a screen or the disk.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::QuizError;
use crate::question::{generate_questions, Question, Table, TableSelection};
use crate::record::SessionRecord;
use crate::timer::{tick_interval, Ticker, TimerKind};

pub const COUNTDOWN_START: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownValue {
    Number(u8),
    Go,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { given: i64, answer: i64 },
    Skipped { answer: i64 },
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    CountdownStarted { selection: TableSelection },
    CountdownStep(CountdownValue),
    QuestionShown {
        index: usize,
        total: usize,
        question: Question,
    },
    ScoreChanged { correct: u32, answered: u32 },
    ElapsedTick { seconds: u64 },
    Feedback(Feedback),
    TimerCancelled(TimerKind),
    Completed(SessionRecord),
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Idle,
    Countdown,
    Active,
    Completed,
    Aborted,
}

impl PhaseKind {
    fn describe(self) -> &'static str {
        match self {
            PhaseKind::Idle => "idle",
            PhaseKind::Countdown => "counting down",
            PhaseKind::Active => "active",
            PhaseKind::Completed => "completed",
            PhaseKind::Aborted => "aborted",
        }
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Countdown {
        // `None` once "Go" is showing.
        showing: Option<u8>,
        ticker: Ticker,
    },
    Active {
        started_at: DateTime<Utc>,
        ticker: Ticker,
    },
    Completed {
        record: SessionRecord,
    },
    Aborted,
}

impl Phase {
    fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::Countdown { .. } => PhaseKind::Countdown,
            Phase::Active { .. } => PhaseKind::Active,
            Phase::Completed { .. } => PhaseKind::Completed,
            Phase::Aborted => PhaseKind::Aborted,
        }
    }

    fn ticker(&self) -> Option<&Ticker> {
        match self {
            Phase::Countdown { ticker, .. } | Phase::Active { ticker, .. } => Some(ticker),
            _ => None,
        }
    }
}

/// The menu's pending choice before a quiz starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionDraft {
    table: Option<Table>,
}

impl SelectionDraft {
    pub fn select(&mut self, table: Table) {
        self.table = Some(table);
    }

    pub fn selected(&self) -> Option<Table> {
        self.table
    }

    /// The single-table selection, or `NoSelection` if nothing was picked.
    pub fn custom(&self) -> Result<TableSelection, QuizError> {
        self.table
            .map(TableSelection::Single)
            .ok_or(QuizError::NoSelection)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    selection: Option<TableSelection>,
    questions: Vec<Question>,
    index: usize,
    correct: u32,
    wrong: u32,
    phase: Phase,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            selection: None,
            questions: Vec::new(),
            index: 0,
            correct: 0,
            wrong: 0,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn selection(&self) -> Option<TableSelection> {
        self.selection
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    /// Position of the current question, zero-based.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Active { .. } => self.questions.get(self.index),
            _ => None,
        }
    }

    /// Seconds since the first question appeared, while the quiz is running.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> Option<u64> {
        match &self.phase {
            Phase::Active { started_at, .. } => Some(whole_seconds(*started_at, now)),
            _ => None,
        }
    }

    /// When the currently owned timer next fires, if any.
    pub fn next_timer_due(&self) -> Option<DateTime<Utc>> {
        self.phase.ticker().map(Ticker::next_due)
    }

    pub fn record(&self) -> Option<&SessionRecord> {
        match &self.phase {
            Phase::Completed { record } => Some(record),
            _ => None,
        }
    }

    /// Generates a fresh question set and begins the countdown.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        selection: TableSelection,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Vec<QuizEvent>, QuizError> {
        match self.phase {
            Phase::Idle | Phase::Completed { .. } | Phase::Aborted => {}
            _ => return Err(self.invalid("start a quiz")),
        }

        let questions = generate_questions(selection, rng);
        log::debug!("Starting quiz with {} questions", questions.len());
        self.selection = Some(selection);
        self.questions = questions;
        self.index = 0;
        self.correct = 0;
        self.wrong = 0;
        self.phase = Phase::Countdown {
            showing: Some(COUNTDOWN_START),
            ticker: Ticker::start(TimerKind::Countdown, now, tick_interval()),
        };

        Ok(vec![
            QuizEvent::CountdownStarted { selection },
            QuizEvent::CountdownStep(CountdownValue::Number(COUNTDOWN_START)),
        ])
    }

    /// Starts over with the same table selection.
    pub fn play_again<R: Rng + ?Sized>(
        &mut self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Vec<QuizEvent>, QuizError> {
        let finished = matches!(self.phase, Phase::Completed { .. } | Phase::Aborted);
        match (finished, self.selection) {
            (true, Some(selection)) => self.start(selection, now, rng),
            (true, None) => Err(QuizError::NoSelection),
            (false, _) => Err(self.invalid("play again")),
        }
    }

    /// Advances whichever timer the current phase owns.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Vec<QuizEvent> {
        let mut events = Vec::new();
        let mut countdown_done = false;
        match &mut self.phase {
            Phase::Countdown { showing, ticker } => {
                for _ in 0..ticker.poll(now) {
                    match *showing {
                        Some(n) if n > 1 => {
                            *showing = Some(n - 1);
                            events.push(QuizEvent::CountdownStep(CountdownValue::Number(n - 1)));
                        }
                        Some(_) => {
                            *showing = None;
                            events.push(QuizEvent::CountdownStep(CountdownValue::Go));
                        }
                        None => {
                            countdown_done = true;
                            break;
                        }
                    }
                }
            }
            Phase::Active { started_at, ticker } => {
                if ticker.poll(now) > 0 {
                    events.push(QuizEvent::ElapsedTick {
                        seconds: whole_seconds(*started_at, now),
                    });
                }
            }
            _ => {}
        }
        if countdown_done {
            events.extend(self.enter_active(now));
        }
        events
    }

    /// Scores a typed answer. Only the leading integer counts, so `"42abc"`
    /// reads as 42; input without one is reported and leaves the question and
    /// counters untouched.
    pub fn submit(&mut self, input: &str, now: DateTime<Utc>) -> Result<Vec<QuizEvent>, QuizError> {
        let question = self.active_question("submit an answer")?;
        let answer = question.answer();

        let Some(given) = parse_answer(input) else {
            return Ok(vec![QuizEvent::Feedback(Feedback::InvalidInput)]);
        };

        let feedback = if given == answer {
            self.correct += 1;
            Feedback::Correct
        } else {
            self.wrong += 1;
            Feedback::Incorrect { given, answer }
        };
        Ok(self.advance(feedback, now))
    }

    /// Counts the current question as wrong and reveals its answer.
    pub fn skip(&mut self, now: DateTime<Utc>) -> Result<Vec<QuizEvent>, QuizError> {
        let answer = self.active_question("skip a question")?.answer();
        self.wrong += 1;
        Ok(self.advance(Feedback::Skipped { answer }, now))
    }

    /// Abandons the quiz without producing a record.
    pub fn quit(&mut self) -> Result<Vec<QuizEvent>, QuizError> {
        let kind = match &self.phase {
            Phase::Countdown { ticker, .. } | Phase::Active { ticker, .. } => ticker.kind(),
            _ => return Err(self.invalid("quit")),
        };
        log::debug!("Quiz aborted at question {}", self.index + 1);
        self.phase = Phase::Aborted;
        Ok(vec![QuizEvent::TimerCancelled(kind), QuizEvent::Aborted])
    }

    fn enter_active(&mut self, now: DateTime<Utc>) -> Vec<QuizEvent> {
        self.phase = Phase::Active {
            started_at: now,
            ticker: Ticker::start(TimerKind::Elapsed, now, tick_interval()),
        };
        let mut events = vec![QuizEvent::TimerCancelled(TimerKind::Countdown)];
        events.push(self.question_shown());
        events.push(self.score_changed());
        events
    }

    fn advance(&mut self, feedback: Feedback, now: DateTime<Utc>) -> Vec<QuizEvent> {
        self.index += 1;
        let mut events = vec![QuizEvent::Feedback(feedback), self.score_changed()];
        if self.index < self.questions.len() {
            events.push(self.question_shown());
        } else {
            events.extend(self.complete(now));
        }
        events
    }

    fn complete(&mut self, now: DateTime<Utc>) -> Vec<QuizEvent> {
        let Phase::Active { started_at, .. } = self.phase else {
            return Vec::new();
        };
        let Some(selection) = self.selection else {
            return Vec::new();
        };

        let record = SessionRecord::new(
            now,
            selection,
            whole_seconds(started_at, now),
            self.correct,
            self.wrong,
            self.questions.len() as u32,
        );
        log::debug!(
            "Quiz completed: {} correct, {} wrong in {}s",
            record.correct,
            record.wrong,
            record.duration
        );
        self.phase = Phase::Completed {
            record: record.clone(),
        };
        vec![
            QuizEvent::TimerCancelled(TimerKind::Elapsed),
            QuizEvent::Completed(record),
        ]
    }

    fn active_question(&self, action: &'static str) -> Result<Question, QuizError> {
        self.current_question()
            .copied()
            .ok_or_else(|| self.invalid(action))
    }

    fn question_shown(&self) -> QuizEvent {
        QuizEvent::QuestionShown {
            index: self.index,
            total: self.questions.len(),
            question: self.questions[self.index],
        }
    }

    fn score_changed(&self) -> QuizEvent {
        QuizEvent::ScoreChanged {
            correct: self.correct,
            answered: self.correct + self.wrong,
        }
    }

    fn invalid(&self, action: &'static str) -> QuizError {
        QuizError::InvalidTransition {
            action,
            phase: self.phase.kind().describe(),
        }
    }
}

/// Reads an optional sign and the run of digits after leading whitespace,
/// ignoring whatever follows. Saturates instead of overflowing.
fn parse_answer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn whole_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    (to - from).num_seconds().max(0) as u64
}
