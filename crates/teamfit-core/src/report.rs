//! Quiz result types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Answers, Category};
use crate::scoring::{percent, RankedCategory, Tally};
use crate::session::QuizSession;

/// A finished quiz: scores, ranking and the answers that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    /// Unique result identifier.
    pub id: Uuid,
    /// When the result was computed.
    pub created_at: DateTime<Utc>,
    /// Summary of the question bank.
    pub bank: BankSummary,
    /// Recorded answers, keyed by question id.
    pub answers: Answers,
    /// Score per team.
    pub tally: Tally,
    /// Highest reachable score per team.
    pub max_possible: Tally,
    /// Teams sorted by score, highest first.
    pub ranking: Vec<RankedCategory>,
    /// The top-ranked team.
    pub best: Category,
    /// The second-ranked team.
    #[serde(default)]
    pub runner_up: Option<Category>,
}

/// Summary of a question bank (without the questions themselves).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub title: String,
    pub question_count: usize,
}

/// One row of the "how your answers scored" table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLine {
    pub category: Category,
    pub score: u32,
    pub max: u32,
    pub percent: u32,
}

impl QuizResult {
    /// Snapshot the scores of a session.
    pub fn from_session(session: &QuizSession) -> Self {
        let bank = session.bank();
        let ranking = session.ranking();
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: BankSummary {
                id: bank.id().to_string(),
                title: bank.title().to_string(),
                question_count: bank.len(),
            },
            answers: session.answers().clone(),
            tally: session.tally(),
            max_possible: session.max_possible(),
            best: ranking.best().category,
            runner_up: ranking.runner_up().map(|r| r.category),
            ranking: ranking.entries().to_vec(),
        }
    }

    /// Number of questions that received an answer.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Score lines in ranking order.
    pub fn score_lines(&self) -> Vec<ScoreLine> {
        self.ranking
            .iter()
            .map(|r| {
                let max = self.max_possible.get(r.category);
                ScoreLine {
                    category: r.category,
                    score: r.score,
                    max,
                    percent: percent(r.score, max),
                }
            })
            .collect()
    }

    /// Save the result as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize result")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write result to {}", path.display()))?;
        Ok(())
    }

    /// Load a result from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read result from {}", path.display()))?;
        let result: QuizResult =
            serde_json::from_str(&content).context("failed to parse result JSON")?;
        Ok(result)
    }
}
