//! Fabrica CLI — build demo problems and export solver input files.

use clap::{Parser, Subcommand};

mod commands;
mod scenarios;

#[derive(Parser)]
#[command(name = "fabrica")]
#[command(version, about = "Fabrica — finite-element model export toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a demo scenario and export it as a .feb document.
    Export {
        /// Which scenario to build (beam, indenter, staged).
        #[arg(short, long)]
        scenario: String,

        /// Output file path.
        #[arg(short, long, default_value = "model.feb")]
        output: String,

        /// Optional JSON file for the structured warning report.
        #[arg(short, long)]
        report: Option<String>,
    },

    /// List the available demo scenarios.
    List,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            scenario,
            output,
            report,
        } => commands::export(&scenario, &output, report.as_deref()),
        Commands::List => commands::list(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
