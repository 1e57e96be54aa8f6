use clap::Args;
use trigram_table::config::TableConfig;
use trigram_table::error::TableResult;
use trigram_table::trigram::Trigram;

#[derive(Args, Debug, Clone)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub config: TableConfig,

    /// Finger names (`LPRILM`) or ids (`0,6,2`)
    pub trigram: String,
}

pub fn run(args: ClassifyArgs) -> TableResult<()> {
    let classifier = args.config.classifier()?;
    let trigram: Trigram = args.trigram.parse()?;
    let category = classifier.classify(trigram);
    println!("{}\t{}", trigram, category.label(args.config.labels));
    Ok(())
}
