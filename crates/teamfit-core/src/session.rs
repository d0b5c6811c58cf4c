//! Quiz session state machine.
//!
//! A session walks the bank one question at a time. Answering never moves
//! the step and moving never requires an answer, so questions can be skipped
//! and revisited freely until the last `advance` completes the quiz.

use crate::error::QuizError;
use crate::model::{Answers, Question, QuestionBank};
use crate::scoring::{self, Ranking, Tally};

/// Where a session is in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the question at `step`.
    InProgress { step: usize },
    /// Every question has been passed.
    Complete,
}

/// Answers plus the current step over a question bank.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: QuestionBank,
    answers: Answers,
    step: usize,
}

impl QuizSession {
    /// Start a session at the first question.
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            answers: Answers::new(),
            step: 0,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn state(&self) -> SessionState {
        if self.step >= self.bank.len() {
            SessionState::Complete
        } else {
            SessionState::InProgress { step: self.step }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == SessionState::Complete
    }

    /// The question at the current step, `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.question_at(self.step)
    }

    /// Record (or replace) the answer for `question_id`. The step is unchanged.
    pub fn select_choice(&mut self, question_id: &str, choice_index: usize) -> Result<(), QuizError> {
        self.bank.resolve(question_id, choice_index)?;
        let previous = self.answers.upsert(question_id, choice_index);
        tracing::debug!(question = question_id, choice_index, ?previous, "choice selected");
        Ok(())
    }

    /// Answer the question at the current step.
    pub fn select_current(&mut self, choice_index: usize) -> Result<(), QuizError> {
        let id = self
            .current_question()
            .map(|q| q.id.clone())
            .ok_or(QuizError::NoCurrentQuestion)?;
        self.select_choice(&id, choice_index)
    }

    /// Chosen index for `question_id`, if answered.
    pub fn selected_choice(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id)
    }

    /// Move to the next question, or to `Complete` after the last one.
    pub fn advance(&mut self) {
        self.step = (self.step + 1).min(self.bank.len());
        if self.is_complete() {
            tracing::debug!(answered = self.answers.len(), "quiz complete");
        }
    }

    /// Move to the previous question. No effect on the first question or once complete.
    pub fn retreat(&mut self) {
        if !self.is_complete() {
            self.step = self.step.saturating_sub(1);
        }
    }

    /// Drop all answers and go back to the first question.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.step = 0;
        tracing::debug!("session reset");
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Current tally of the recorded answers.
    pub fn tally(&self) -> Tally {
        // Answers are resolved against the same bank on selection.
        scoring::compute_tally(self.answers.iter(), &self.bank)
            .expect("session answers are validated against the bank on selection")
    }

    pub fn ranking(&self) -> Ranking {
        scoring::rank_tally(&self.tally())
    }

    pub fn max_possible(&self) -> Tally {
        scoring::max_possible(&self.bank)
    }
}
