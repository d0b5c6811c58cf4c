//! The `teamfit score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use teamfit_core::config::load_config_from;
use teamfit_core::model::Answer;
use teamfit_core::report::QuizResult;
use teamfit_core::session::QuizSession;

use crate::render;

fn parse_answers(answers: &str) -> Result<Vec<Answer>> {
    answers
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Answer>().map_err(|e| anyhow::anyhow!(e)))
        .collect()
}

pub fn execute(
    answers_str: String,
    bank_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = super::load_bank(bank_path.as_deref(), &config)?;
    let answers = parse_answers(&answers_str)?;

    let mut session = QuizSession::new(bank);
    for answer in &answers {
        session
            .select_choice(&answer.question_id, answer.choice_index)
            .with_context(|| {
                format!(
                    "invalid answer '{}={}'",
                    answer.question_id, answer.choice_index
                )
            })?;
    }
    while !session.is_complete() {
        session.advance();
    }

    let result = QuizResult::from_session(&session);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "text" => {
            let stdout = std::io::stdout();
            render::print_result(
                &mut stdout.lock(),
                &result,
                config.bar_width,
                config.show_runner_up,
            )?;
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_list() {
        let answers = parse_answers(" interest=0, skills = 2 ,,").unwrap();
        assert_eq!(
            answers,
            vec![Answer::new("interest", 0), Answer::new("skills", 2)]
        );
        assert!(parse_answers("").unwrap().is_empty());
        assert!(parse_answers("interest").is_err());
    }
}
