use crate::reports;
use clap::Args;
use tracing::info;
use trigram_table::config::{OutputParams, TableConfig};
use trigram_table::error::TableResult;
use trigram_table::table::{write_table, TrigramTable};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: TableConfig,

    #[command(flatten)]
    pub output: OutputParams,

    /// Skip the category summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run(args: GenerateArgs) -> TableResult<()> {
    let classifier = args.config.classifier()?;
    info!("🚀 Classifying trigrams...");
    let table = TrigramTable::build(&classifier);

    let opts = args.output.write_options(args.config.labels);
    write_table(&table, &args.output.output, opts)?;

    if !args.quiet {
        reports::print_summary(&table, args.config.labels);
    }
    Ok(())
}
