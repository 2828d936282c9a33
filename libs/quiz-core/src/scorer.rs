//! Score keeping and the log of missed questions.

use crate::types::{ErrorRecord, ScoreSummary};

/// Running score for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorer {
    correct_count: u32,
    total_count: u32,
    error_log: Vec<ErrorRecord>,
}

impl Scorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one answer. Returns whether it was correct.
    ///
    /// Correctness is an exact string comparison; misses are appended to the
    /// error log.
    pub fn record_answer(
        &mut self,
        given: &str,
        correct: &str,
        question_text: &str,
        phonetic_form: &str,
    ) -> bool {
        self.total_count += 1;
        let is_correct = given == correct;
        if is_correct {
            self.correct_count += 1;
        } else {
            self.error_log.push(ErrorRecord {
                question_text: question_text.to_string(),
                correct_answer_text: correct.to_string(),
                given_answer_text: given.to_string(),
                phonetic_form: phonetic_form.to_string(),
            });
        }
        is_correct
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn incorrect_count(&self) -> u32 {
        self.total_count - self.correct_count
    }

    /// Share of correct answers in percent; zero before the first answer.
    pub fn percentage_correct(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        f64::from(self.correct_count) / f64::from(self.total_count) * 100.0
    }

    pub fn error_log(&self) -> &[ErrorRecord] {
        &self.error_log
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            correct: self.correct_count,
            incorrect: self.incorrect_count(),
            total: self.total_count,
            percentage_correct: self.percentage_correct(),
        }
    }

    /// Zero the counters and clear the error log together.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
