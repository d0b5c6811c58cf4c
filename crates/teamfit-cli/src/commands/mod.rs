pub mod init;
pub mod questions;
pub mod score;
pub mod take;
pub mod teams;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use teamfit_core::catalog;
use teamfit_core::config::TeamfitConfig;
use teamfit_core::model::QuestionBank;
use teamfit_core::parser;

/// Pick the question bank: explicit flag, then config, then the built-in bank.
pub fn load_bank(explicit: Option<&Path>, config: &TeamfitConfig) -> Result<QuestionBank> {
    let chosen: Option<PathBuf> = explicit
        .map(Path::to_path_buf)
        .or_else(|| config.question_bank.clone());

    match chosen {
        Some(path) => parser::parse_bank(&path),
        None => catalog::builtin_bank(),
    }
}
