//! The `teamfit questions` command.

use std::path::PathBuf;

use anyhow::Result;

use teamfit_core::config::load_config_from;

pub fn execute(bank_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = super::load_bank(bank_path.as_deref(), &config)?;

    println!("{} ({} questions)", bank.title(), bank.len());
    for (i, question) in bank.questions().iter().enumerate() {
        println!("\n{}. [{}] {}", i + 1, question.id, question.text);
        for (j, choice) in question.choices.iter().enumerate() {
            let weights: Vec<String> = choice
                .weights
                .iter()
                .map(|(category, weight)| format!("{category}+{weight}"))
                .collect();
            println!("   {j}: {} ({})", choice.label, weights.join(", "));
        }
    }

    Ok(())
}
