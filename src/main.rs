use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Builds the finger-trigram classification table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify all 1000 trigrams and write the table
    Generate(cmd::generate::GenerateArgs),
    /// Print the category of one trigram
    Classify(cmd::classify::ClassifyArgs),
    /// Check an existing table file
    Verify(cmd::verify::VerifyArgs),
    /// Print category counts without writing anything
    Summary(cmd::summary::SummaryArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => cmd::generate::run(args),
        Commands::Classify(args) => cmd::classify::run(args),
        Commands::Verify(args) => cmd::verify::run(args),
        Commands::Summary(args) => cmd::summary::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
