use clap::{Parser, Subcommand};

mod cmd;
mod money;
mod tax;

#[derive(Parser, Debug)]
#[command(
    name = "taxin",
    version,
    about = "Indian Income Tax Calculator FY 2025-26"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare both regimes and recommend the cheaper one
    Compare(cmd::compare::CompareCommand),
    /// Detailed breakdown for a single regime
    Report(cmd::report::ReportCommand),
    /// Print the JSON Schema of the result document
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compare(cmd) => cmd.exec(),
        Command::Report(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
