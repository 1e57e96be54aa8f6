use crate::reports;
use clap::Args;
use trigram_table::config::TableConfig;
use trigram_table::error::TableResult;
use trigram_table::table::TrigramTable;

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub config: TableConfig,
}

pub fn run(args: SummaryArgs) -> TableResult<()> {
    let table = TrigramTable::build(&args.config.classifier()?);
    reports::print_summary(&table, args.config.labels);
    Ok(())
}
