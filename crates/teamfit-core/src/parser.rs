//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Category, Choice, Question, QuestionBank, Weights};
use crate::scoring::max_possible;

/// Intermediate TOML structure for parsing question bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    #[serde(default)]
    choices: Vec<TomlChoice>,
}

#[derive(Debug, Deserialize)]
struct TomlChoice {
    label: String,
    #[serde(default)]
    weights: BTreeMap<String, u32>,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let choices = q
                .choices
                .into_iter()
                .map(|c| {
                    let mut weights = BTreeMap::new();
                    for (key, weight) in c.weights {
                        let category = Category::from_key(&key).with_context(|| {
                            format!(
                                "question '{}', choice '{}': unknown team: {}",
                                q.id, c.label, key
                            )
                        })?;
                        if weights.insert(category, weight).is_some() {
                            anyhow::bail!(
                                "question '{}', choice '{}': duplicate weight for the {} team",
                                q.id,
                                c.label,
                                category
                            );
                        }
                    }
                    let weights: Weights = weights.into_iter().collect();
                    Ok(Choice {
                        label: c.label,
                        weights,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(Question {
                id: q.id,
                text: q.text,
                choices,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let bank = QuestionBank::new(
        parsed.bank.id,
        parsed.bank.title,
        parsed.bank.description,
        questions,
    )
    .with_context(|| format!("invalid question bank: {}", source_path.display()))?;

    tracing::debug!(
        bank = bank.id(),
        questions = bank.len(),
        "loaded question bank from {}",
        source_path.display()
    );

    Ok(bank)
}

/// Recursively load all `.toml` question bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for issues that don't prevent scoring.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for question in bank.questions() {
        for (i, choice) in question.choices.iter().enumerate() {
            if choice.weights.is_empty() {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id.clone()),
                    message: format!("choice {} ('{}') has no weights", i + 1, choice.label),
                });
            }
        }

        let mut labels = HashSet::new();
        for choice in &question.choices {
            if !labels.insert(choice.label.trim()) {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id.clone()),
                    message: format!("duplicate choice label: {}", choice.label),
                });
            }
        }

        if question.choices.len() > 1
            && question
                .choices
                .windows(2)
                .all(|pair| pair[0].weights == pair[1].weights)
        {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "all choices carry identical weights".into(),
            });
        }

        if question.text.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question text is empty".into(),
            });
        }
    }

    let max = max_possible(bank);
    for (category, value) in max.iter() {
        if value == 0 {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("no question can score the {} team", category),
            });
        }
    }

    warnings
}
