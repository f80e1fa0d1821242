use clap::Parser;
use std::fs;
use transform_check::cli::{self, CliError, ValidateOptions};

#[derive(Parser)]
#[command(name = "transform-check")]
#[command(about = "Validate ingestion transformConfigs against a sample JSON event")]
#[command(version)]
struct Cli {
    /// Path to the table config JSON
    #[arg(long)]
    table: String,

    /// Path to the sample event JSON
    #[arg(long)]
    sample: String,

    /// Pretty-print composite report values
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let table_json = fs::read_to_string(&cli.table)?;
    let sample_json = fs::read_to_string(&cli.sample)?;

    let report = cli::execute_validate(&ValidateOptions {
        table_json,
        sample_json,
    })?;

    // Null outcomes are diagnostics for the user, not process failures.
    print!("{}", report.render(cli.pretty));
    Ok(())
}
