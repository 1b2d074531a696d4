mod commands;
mod copy;
mod format;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::model::ModelArgs;
use copy::Language;

/// Investor financial model for the TAO brokerage
#[derive(Parser)]
#[command(
    name = "taom",
    version,
    about = "Investor financial model for the TAO brokerage",
    long_about = "A CLI for the TAO investor financial model. Computes the 3-year \
                  commission-capture P&L, the Downside/Base/Upside scenario table \
                  and the 12-month year-1 cash trajectory with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Language for report labels
    #[arg(long, default_value = "en", global = true)]
    lang: Language,
}

#[derive(Subcommand)]
enum Commands {
    /// 3-year annual P&L
    Pnl(ModelArgs),
    /// Downside / Base / Upside scenario table
    Sensitivity(ModelArgs),
    /// 12-month year-1 cash trajectory
    Cash(ModelArgs),
    /// Full evaluation: P&L, scenarios and cash in one pass
    Model(ModelArgs),
    /// Investor report with formatted, localised figures
    Report(ModelArgs),
    /// Print the reference configuration
    Defaults,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Pnl(args) => commands::model::run_pnl(args),
        Commands::Sensitivity(args) => commands::model::run_sensitivity(args),
        Commands::Cash(args) => commands::model::run_cash(args),
        Commands::Model(args) => commands::model::run_model(args),
        Commands::Report(args) => commands::report::run_report(args, cli.lang),
        Commands::Defaults => commands::model::run_defaults(),
        Commands::Version => {
            println!("taom {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
