pub mod loader;
pub mod writer;

use crate::category::{Category, LabelStyle};
use crate::classifier::Classifier;
use crate::trigram::{Trigram, TRIGRAM_COUNT};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::debug;

pub use loader::{load_table, RawTable};
pub use writer::{write_table, OutputFormat, WriteOptions};

/// The complete trigram -> category mapping, in enumeration order.
#[derive(Debug, Clone)]
pub struct TrigramTable {
    entries: Vec<(Trigram, Category)>,
}

impl TrigramTable {
    pub fn build(classifier: &Classifier) -> Self {
        let mut entries = Vec::with_capacity(TRIGRAM_COUNT);
        for trigram in Trigram::all() {
            entries.push((trigram, classifier.classify(trigram)));
        }
        debug!(
            "Classified {} trigrams (bad-redirect fingers: {})",
            entries.len(),
            classifier
                .bad_redirect
                .fingers()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(",")
        );
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Trigram, Category)> {
        self.entries.iter()
    }

    pub fn get(&self, trigram: Trigram) -> Option<Category> {
        // Enumeration order makes the position a base-10 number.
        let [a, b, c] = trigram.fingers().map(|f| f.index());
        self.entries.get(a * 100 + b * 10 + c).map(|&(_, cat)| cat)
    }

    /// Entry count per category; every category is present, possibly with zero.
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> = Category::iter().map(|c| (c, 0)).collect();
        for (_, cat) in &self.entries {
            *counts.entry(*cat).or_default() += 1;
        }
        counts
    }

    /// Serializable view that renders labels in the given vocabulary.
    pub fn labelled(&self, style: LabelStyle) -> LabelledTable<'_> {
        LabelledTable { table: self, style }
    }
}

pub struct LabelledTable<'a> {
    table: &'a TrigramTable,
    style: LabelStyle,
}

impl Serialize for LabelledTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.len()))?;
        for (trigram, category) in self.table.iter() {
            map.serialize_entry(&trigram.key(), category.label(self.style))?;
        }
        map.end()
    }
}
