use crate::category::LabelStyle;
use crate::classifier::{BadRedirectSet, Classifier};
use crate::error::TableResult;
use crate::table::{OutputFormat, WriteOptions};
use clap::Args;
use std::path::PathBuf;

/// Default weak-redirect fingers; names the same fingers as `BadRedirectSet::DEFAULT`.
pub const DEFAULT_BAD_REDIRECT: &str = "LP,LR,LM,RM,RR,RP";

/// Settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct TableConfig {
    /// Label vocabulary for output
    #[arg(long, value_enum, default_value_t = LabelStyle::Long)]
    pub labels: LabelStyle,

    /// Fingers that are weak for redirects, as comma-separated names
    #[arg(long, default_value = DEFAULT_BAD_REDIRECT)]
    pub bad_redirect: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            labels: LabelStyle::Long,
            bad_redirect: DEFAULT_BAD_REDIRECT.to_string(),
        }
    }
}

impl TableConfig {
    pub fn bad_redirect_set(&self) -> TableResult<BadRedirectSet> {
        BadRedirectSet::parse(&self.bad_redirect)
    }

    pub fn classifier(&self) -> TableResult<Classifier> {
        Ok(Classifier::new(self.bad_redirect_set()?))
    }
}

#[derive(Args, Debug, Clone)]
pub struct OutputParams {
    #[arg(short, long, default_value = "table.json")]
    pub output: PathBuf,

    /// Output format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write JSON on a single line
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}

impl OutputParams {
    pub fn write_options(&self, labels: LabelStyle) -> WriteOptions {
        WriteOptions {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_path(&self.output)),
            labels,
            pretty: !self.compact,
        }
    }
}
