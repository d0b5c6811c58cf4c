//! The `teamfit teams` command.

use std::io::Write;

use anyhow::Result;

use teamfit_core::model::Category;

use crate::render;

pub fn execute(team: Option<String>) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match team {
        Some(key) => {
            let category: Category = key.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            render::print_team(&mut out, category)?;
            writeln!(
                out,
                "  What working this role feels like: {}.",
                category.info().cadence
            )?;
        }
        None => {
            for (i, category) in Category::ALL.into_iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                render::print_team(&mut out, category)?;
            }
        }
    }

    Ok(())
}
