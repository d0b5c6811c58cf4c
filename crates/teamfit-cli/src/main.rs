//! teamfit CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "teamfit",
    version,
    about = "Find the cybersecurity team that fits you"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz interactively
    Take {
        /// Question bank TOML file (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Save the result as JSON in the output directory
        #[arg(long)]
        save: bool,

        /// Also write an HTML result page in the output directory
        #[arg(long)]
        html: bool,
    },

    /// Score a set of answers without prompting
    Score {
        /// Answers as question=index pairs, e.g. "interest=0,skills=2" (indices start at 0)
        #[arg(long, default_value = "")]
        answers: String,

        /// Question bank TOML file (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Explore the teams
    Teams {
        /// Show a single team (e.g. "blue")
        #[arg(long)]
        team: Option<String>,
    },

    /// List the questions of a bank
    Questions {
        /// Question bank TOML file (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to question bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create starter config and example question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("teamfit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            bank,
            config,
            save,
            html,
        } => commands::take::execute(bank, config, save, html),
        Commands::Score {
            answers,
            bank,
            config,
            format,
        } => commands::score::execute(answers, bank, config, format),
        Commands::Teams { team } => commands::teams::execute(team),
        Commands::Questions { bank, config } => commands::questions::execute(bank, config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
