use super::TrigramTable;
use crate::category::LabelStyle;
use crate::error::{TableError, TableResult};
use clap::ValueEnum;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::{BufWriter, Write};
use std::path::Path;
use strum_macros::Display;
use tempfile::NamedTempFile;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    /// `.csv` selects CSV; everything else is JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    pub format: OutputFormat,
    pub labels: LabelStyle,
    pub pretty: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            labels: LabelStyle::Long,
            pretty: true,
        }
    }
}

pub fn write_json<W: Write>(
    table: &TrigramTable,
    writer: W,
    labels: LabelStyle,
    pretty: bool,
) -> TableResult<()> {
    let view = table.labelled(labels);
    if pretty {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        view.serialize(&mut ser)?;
        ser.into_inner().write_all(b"\n")?;
    } else {
        let mut writer = writer;
        serde_json::to_writer(&mut writer, &view)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

pub fn write_csv<W: Write>(table: &TrigramTable, writer: W, labels: LabelStyle) -> TableResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["trigram", "category"])?;
    for (trigram, category) in table.iter() {
        wtr.write_record([trigram.key().as_str(), category.label(labels)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the table to `path` all-or-nothing.
///
/// Content goes to a temporary file in the destination directory which then
/// replaces `path` in a single rename. On failure the previous file is untouched.
pub fn write_table<P: AsRef<Path>>(
    table: &TrigramTable,
    path: P,
    opts: WriteOptions,
) -> TableResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(TableError::Config(format!(
            "Output directory '{}' does not exist",
            dir.display()
        )));
    }

    let mut tmp = NamedTempFile::new_in(dir)?;
    debug!("Staging table in {}", tmp.path().display());
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        match opts.format {
            OutputFormat::Json => write_json(table, &mut out, opts.labels, opts.pretty)?,
            OutputFormat::Csv => write_csv(table, &mut out, opts.labels)?,
        }
        out.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|e| TableError::Persist {
        path: path.display().to_string(),
        source: e.error,
    })?;

    info!(
        "💾 Wrote {} entries to {} ({}, {} labels)",
        table.len(),
        path.display(),
        opts.format,
        opts.labels
    );
    Ok(())
}
