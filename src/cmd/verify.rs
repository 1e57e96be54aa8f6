use crate::reports;
use clap::Args;
use std::path::PathBuf;
use trigram_table::config::TableConfig;
use trigram_table::error::{TableError, TableResult};
use trigram_table::table::{load_table, OutputFormat};
use trigram_table::verify::verify_table;

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub config: TableConfig,

    /// Table file to check
    #[arg(default_value = "table.json")]
    pub path: PathBuf,

    /// Input format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: VerifyArgs) -> TableResult<()> {
    let classifier = args.config.classifier()?;
    let raw = load_table(&args.path, args.format)?;
    let report = verify_table(&raw, &classifier);

    reports::print_verify_report(&args.path.display().to_string(), &report);

    if report.is_clean() {
        Ok(())
    } else {
        Err(TableError::Validation(format!(
            "{} problem(s) in {}",
            report.problem_count(),
            args.path.display()
        )))
    }
}
