//! Terminal rendering of questions, teams and results.

use std::io::{self, Write};

use comfy_table::{Cell, Table};

use teamfit_core::model::{Category, Question};
use teamfit_core::report::QuizResult;

/// A fixed-width progress bar, e.g. `######--------------`.
pub fn bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

/// Print one question with its numbered choices, marking the selected one.
pub fn print_question(
    out: &mut impl Write,
    question: &Question,
    step: usize,
    total: usize,
    selected: Option<usize>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Question {} of {}", step + 1, total)?;
    writeln!(out, "{}", question.text)?;
    for (i, choice) in question.choices.iter().enumerate() {
        let mark = if selected == Some(i) { "[x]" } else { "[ ]" };
        writeln!(out, "  {mark} {}. {}", i + 1, choice.label)?;
    }
    Ok(())
}

/// Print the full description of a team.
pub fn print_team(out: &mut impl Write, category: Category) -> io::Result<()> {
    let info = category.info();
    writeln!(out, "{} ({})", info.name, category.key())?;
    writeln!(out, "  {}", info.tagline)?;
    writeln!(out, "  {}", info.summary)?;
    writeln!(out, "  Typical roles:")?;
    for role in info.roles {
        writeln!(out, "    - {role}")?;
    }
    writeln!(out, "  Core responsibilities:")?;
    for item in info.core {
        writeln!(out, "    - {item}")?;
    }
    Ok(())
}

/// Print the best fit, the score table and the runner-up hint.
pub fn print_result(
    out: &mut impl Write,
    result: &QuizResult,
    bar_width: usize,
    show_runner_up: bool,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Your best fit:")?;
    print_team(out, result.best)?;
    writeln!(
        out,
        "  What working this role feels like: {}.",
        result.best.info().cadence
    )?;

    let mut table = Table::new();
    table.set_header(vec!["Team", "Score", "Max", "%", ""]);
    for line in result.score_lines() {
        table.add_row(vec![
            Cell::new(line.category.info().name),
            Cell::new(line.score),
            Cell::new(line.max),
            Cell::new(format!("{}%", line.percent)),
            Cell::new(bar(line.percent, bar_width)),
        ]);
    }

    writeln!(out)?;
    writeln!(
        out,
        "How your answers scored ({} of {} questions answered):",
        result.answered_count(),
        result.bank.question_count
    )?;
    writeln!(out, "{table}")?;

    if show_runner_up {
        if let Some(runner_up) = result.runner_up {
            writeln!(
                out,
                "Runner-up: {} (see `teamfit teams --team {}`)",
                runner_up.info().name,
                runner_up.key()
            )?;
        }
    }
    Ok(())
}
