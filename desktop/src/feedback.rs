use chrono::{DateTime, Duration, Utc};
use tt_core::Feedback;

/// How long an answer's feedback lingers once the next question is up.
pub fn linger() -> Duration {
    Duration::milliseconds(800)
}

/// The feedback line under the answer box.
#[derive(Debug, Clone, Default)]
pub struct FeedbackLine {
    current: Option<Feedback>,
    clear_at: Option<DateTime<Utc>>,
}

impl FeedbackLine {
    pub fn show(&mut self, feedback: Feedback) {
        self.current = Some(feedback);
        self.clear_at = None;
    }

    /// Starts the linger countdown for whatever is showing.
    pub fn question_shown(&mut self, now: DateTime<Utc>) {
        if self.current.is_some() {
            self.clear_at = Some(now + linger());
        }
    }

    pub fn poll(&mut self, now: DateTime<Utc>) {
        if self.clear_at.is_some_and(|due| now >= due) {
            self.reset();
        }
    }

    pub fn current(&self) -> Option<&Feedback> {
        self.current.as_ref()
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.clear_at
    }

    pub fn reset(&mut self) {
        self.current = None;
        self.clear_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn feedback_clears_after_next_question() {
        let mut line = FeedbackLine::default();
        line.show(Feedback::Correct);
        line.question_shown(t0());
        assert_eq!(line.next_due(), Some(t0() + linger()));

        line.poll(t0() + Duration::milliseconds(799));
        assert_eq!(line.current(), Some(&Feedback::Correct));

        line.poll(t0() + linger());
        assert_eq!(line.current(), None);
        assert_eq!(line.next_due(), None);
    }

    #[test]
    fn feedback_stays_until_a_question_appears() {
        let mut line = FeedbackLine::default();
        line.show(Feedback::InvalidInput);
        line.poll(t0() + Duration::seconds(60));
        assert_eq!(line.current(), Some(&Feedback::InvalidInput));
    }

    #[test]
    fn new_feedback_replaces_pending_clear() {
        let mut line = FeedbackLine::default();
        line.show(Feedback::Correct);
        line.question_shown(t0());
        line.show(Feedback::Skipped { answer: 21 });
        line.poll(t0() + Duration::seconds(1));
        assert_eq!(line.current(), Some(&Feedback::Skipped { answer: 21 }));
    }

    #[test]
    fn first_question_arms_nothing() {
        let mut line = FeedbackLine::default();
        line.question_shown(t0());
        assert_eq!(line.next_due(), None);
    }
}
