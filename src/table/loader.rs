use super::writer::OutputFormat;
use crate::error::TableResult;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// A table as read back from disk, before any checking.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub entries: Vec<(String, String)>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    trigram: String,
    category: String,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps every member in file order, repeated keys included.
    pub fn from_json_reader<R: Read>(reader: R) -> TableResult<Self> {
        let mut de = serde_json::Deserializer::from_reader(reader);
        let entries = (&mut de).deserialize_map(EntriesVisitor)?;
        de.end()?;
        Ok(Self { entries })
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> TableResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut entries = Vec::new();
        for row in rdr.deserialize() {
            let row: CsvRow = row?;
            entries.push((row.trigram, row.category));
        }
        Ok(Self { entries })
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Vec<(String, String)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping trigram keys to category labels")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, String>()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}

pub fn load_table<P: AsRef<Path>>(path: P, format: Option<OutputFormat>) -> TableResult<RawTable> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| OutputFormat::from_path(path));
    info!("📂 Loading {} table: {}", format, path.display());

    let reader = BufReader::new(File::open(path)?);
    match format {
        OutputFormat::Json => RawTable::from_json_reader(reader),
        OutputFormat::Csv => RawTable::from_csv_reader(reader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_json_reader() {
        let json = r#"{"LPLPLP": "sft", "LPRTRP": "outroll"}"#;
        let raw = RawTable::from_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.entries[1], ("LPRTRP".to_string(), "outroll".to_string()));
    }

    #[test]
    fn test_json_reader_keeps_repeated_keys_in_order() {
        let json = r#"{"LPRILM": "inward-roll", "LPLPLP": "sft", "LPRILM": "alternation"}"#;
        let raw = RawTable::from_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw.entries[0], ("LPRILM".to_string(), "inward-roll".to_string()));
        assert_eq!(raw.entries[2], ("LPRILM".to_string(), "alternation".to_string()));
    }

    #[test]
    fn test_json_reader_rejects_trailing_data() {
        assert!(RawTable::from_json_reader(Cursor::new(r#"{"LPLPLP": "sft"} []"#)).is_err());
    }

    #[test]
    fn test_json_reader_rejects_non_string_labels() {
        assert!(RawTable::from_json_reader(Cursor::new(r#"{"LPLPLP": 3}"#)).is_err());
    }

    #[test]
    fn test_csv_reader_keeps_duplicates() {
        let raw = RawTable::from_csv_reader(Cursor::new(
            "trigram,category\nLPLPLP,sft\nLPLPLP,sfb\n",
        ))
        .unwrap();
        assert_eq!(raw.len(), 2);
    }
}
