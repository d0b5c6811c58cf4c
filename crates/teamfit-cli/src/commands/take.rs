//! The `teamfit take` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use teamfit_core::config::{load_config_from, TeamfitConfig};
use teamfit_core::report::QuizResult;
use teamfit_core::session::QuizSession;
use teamfit_report::html::write_html_report;

use crate::render;

/// One line of user input at a question prompt.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// 1-based choice number.
    Choose(usize),
    Continue,
    Back,
    Reset,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" | "n" | "next" | "c" | "continue" => Input::Continue,
        "b" | "back" => Input::Back,
        "r" | "reset" => Input::Reset,
        "q" | "quit" | "exit" => Input::Quit,
        other => match other.parse::<usize>() {
            Ok(n) => Input::Choose(n),
            Err(_) => Input::Unknown(line.to_string()),
        },
    }
}

/// Drive a session from line-based input until it completes or the user quits.
///
/// Returns `false` if the user quit (or input ended) before the last question.
fn run_quiz(
    session: &mut QuizSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    writeln!(out, "{}", session.bank().title())?;
    if !session.bank().description().is_empty() {
        writeln!(out, "{}", session.bank().description())?;
    }
    writeln!(
        out,
        "Type a number to choose, Enter to continue, b to go back, r to reset, q to quit."
    )?;

    let total = session.bank().len();
    let mut redraw = true;

    while let Some(question) = session.current_question() {
        if redraw {
            let selected = session.selected_choice(&question.id);
            render::print_question(out, question, session.step(), total, selected)?;
        }
        let choice_count = question.choices.len();

        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        redraw = true;
        match parse_input(&line) {
            Input::Choose(n) if (1..=choice_count).contains(&n) => {
                session.select_current(n - 1)?;
            }
            Input::Choose(_) => {
                writeln!(out, "Pick a number between 1 and {choice_count}.")?;
                redraw = false;
            }
            Input::Continue => session.advance(),
            Input::Back => {
                if session.step() == 0 {
                    writeln!(out, "Already at the first question.")?;
                    redraw = false;
                } else {
                    session.retreat();
                }
            }
            Input::Reset => {
                session.reset();
                writeln!(out, "Answers cleared.")?;
            }
            Input::Quit => return Ok(false),
            Input::Unknown(text) => {
                writeln!(out, "Unrecognized input: {text}")?;
                redraw = false;
            }
        }
    }

    Ok(true)
}

fn save_outputs(result: &QuizResult, config: &TeamfitConfig, save: bool, html: bool) -> Result<()> {
    let timestamp = result.created_at.format("%Y-%m-%dT%H%M%S");
    if save {
        let path = config.output_dir.join(format!("result-{timestamp}.json"));
        result.save_json(&path)?;
        eprintln!("Result saved to: {}", path.display());
    }
    if html {
        let path = config.output_dir.join(format!("result-{timestamp}.html"));
        write_html_report(result, &path)?;
        eprintln!("HTML result: {}", path.display());
    }
    Ok(())
}

pub fn execute(
    bank_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    save: bool,
    html: bool,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = super::load_bank(bank_path.as_deref(), &config)?;
    tracing::info!(bank = bank.id(), questions = bank.len(), "starting quiz");

    let mut session = QuizSession::new(bank);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !run_quiz(&mut session, &mut stdin.lock(), &mut out)? {
        writeln!(out, "\nQuiz not finished, no result.")?;
        return Ok(());
    }

    let result = QuizResult::from_session(&session);
    render::print_result(&mut out, &result, config.bar_width, config.show_runner_up)?;
    save_outputs(&result, &config, save, html)?;

    Ok(())
}
