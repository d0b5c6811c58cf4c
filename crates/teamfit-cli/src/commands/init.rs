//! The `teamfit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create teamfit.toml
    if std::path::Path::new("teamfit.toml").exists() {
        println!("teamfit.toml already exists, skipping.");
    } else {
        std::fs::write("teamfit.toml", SAMPLE_CONFIG)?;
        println!("Created teamfit.toml");
    }

    // Create example question bank
    std::fs::create_dir_all("banks")?;
    let example_path = std::path::Path::new("banks/example.toml");
    if example_path.exists() {
        println!("banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit banks/example.toml or write your own bank");
    println!("  2. Run: teamfit validate --bank banks/example.toml");
    println!("  3. Run: teamfit take --bank banks/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# teamfit configuration

# Question bank to use instead of the built-in one.
# question_bank = "banks/example.toml"

output_dir = "./teamfit-results"
show_runner_up = true
bar_width = 20
"#;

const EXAMPLE_BANK: &str = r#"[bank]
id = "example"
title = "Example Team Fit"
description = "A short example question bank to get started"

[[questions]]
id = "interest"
text = "Which sounds most interesting to you?"

[[questions.choices]]
label = "Catching hackers trying to get in"
weights = { blue = 3 }

[[questions.choices]]
label = "Pretending to be the hacker"
weights = { red = 3 }

[[questions.choices]]
label = "Bringing both sides together"
weights = { purple = 3 }

[[questions]]
id = "build"
text = "Do you prefer fixing or building?"

[[questions.choices]]
label = "Fixing problems"
weights = { blue = 3 }

[[questions.choices]]
label = "Building new features"
weights = { yellow = 2, green = 1 }

[[questions.choices]]
label = "Building labs and networks"
weights = { black = 3 }

[[questions]]
id = "people"
text = "Would you enjoy writing rules and training others?"

[[questions.choices]]
label = "Yes, I like teaching and rules"
weights = { white = 3, orange = 1 }

[[questions.choices]]
label = "No, I'd rather do hands-on work"
weights = { blue = 2, red = 2 }
"#;
