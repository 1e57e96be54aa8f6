use crate::category::{Category, LabelStyle};
use crate::classifier::Classifier;
use crate::table::RawTable;
use crate::trigram::Trigram;
use std::collections::HashSet;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub key: String,
    /// Label exactly as written in the file.
    pub label: String,
    pub found: Category,
    pub expected: Category,
    /// Vocabulary of `label`; the expected label is rendered in the same one.
    pub style: LabelStyle,
}

impl Mismatch {
    pub fn expected_label(&self) -> &'static str {
        self.expected.label(self.style)
    }

    pub fn describe(&self) -> String {
        format!(
            "{}: {} (expected {})",
            self.key,
            self.label,
            self.expected_label()
        )
    }
}

/// Problems found in a table file.
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub checked: usize,
    pub missing: Vec<String>,
    pub unknown_keys: Vec<String>,
    pub duplicate_keys: Vec<String>,
    /// (key, label)
    pub unknown_labels: Vec<(String, String)>,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn problem_count(&self) -> usize {
        self.missing.len()
            + self.unknown_keys.len()
            + self.duplicate_keys.len()
            + self.unknown_labels.len()
            + self.mismatches.len()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}

/// Checks a loaded table for completeness and agreement with `classifier`.
pub fn verify_table(raw: &RawTable, classifier: &Classifier) -> VerifyReport {
    let mut report = VerifyReport {
        checked: raw.len(),
        ..Default::default()
    };
    let mut seen: HashSet<Trigram> = HashSet::with_capacity(raw.len());

    for (key, label) in &raw.entries {
        let trigram = match Trigram::parse_key(key) {
            Ok(t) if t.key() == *key => t,
            _ => {
                report.unknown_keys.push(key.clone());
                continue;
            }
        };

        if !seen.insert(trigram) {
            report.duplicate_keys.push(key.clone());
            continue;
        }

        let Some(found) = Category::from_label(label) else {
            report.unknown_labels.push((key.clone(), label.clone()));
            continue;
        };

        let expected = classifier.classify(trigram);
        if found != expected {
            report.mismatches.push(Mismatch {
                key: key.clone(),
                label: label.clone(),
                found,
                expected,
                style: found.style_of(label).unwrap_or_default(),
            });
        }
    }

    report.missing = Trigram::all()
        .filter(|t| !seen.contains(t))
        .map(|t| t.key())
        .collect();

    if report.is_clean() {
        info!("Verification Passed. {} entries checked", report.checked);
    } else {
        warn!(
            "Verification found {} problem(s) in {} entries",
            report.problem_count(),
            report.checked
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::LabelStyle;
    use crate::table::TrigramTable;

    fn raw_from(table: &TrigramTable, style: LabelStyle) -> RawTable {
        RawTable {
            entries: table
                .iter()
                .map(|(t, c)| (t.key(), c.label(style).to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_clean_table_passes() {
        let classifier = Classifier::default();
        let table = TrigramTable::build(&classifier);
        for style in [LabelStyle::Long, LabelStyle::Short] {
            let report = verify_table(&raw_from(&table, style), &classifier);
            assert!(report.is_clean(), "{:?}", report);
            assert_eq!(report.checked, 1000);
        }
    }

    #[test]
    fn test_detects_each_problem_kind() {
        let classifier = Classifier::default();
        let table = TrigramTable::build(&classifier);
        let mut raw = raw_from(&table, LabelStyle::Long);

        // Drop LPLPLP, relabel LPLPLR, break a label, add junk and a duplicate.
        raw.entries.remove(0);
        raw.entries[0].1 = "alternation".into();
        raw.entries[1].1 = "wobble".into();
        raw.entries.push(("XXYYZZ".into(), "redirect".into()));
        raw.entries.push(("lplplr".into(), "sfb".into()));
        raw.entries.push(raw.entries[5].clone());

        let report = verify_table(&raw, &classifier);
        assert_eq!(report.missing, vec!["LPLPLP".to_string()]);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].key, "LPLPLR");
        assert_eq!(report.mismatches[0].expected, Category::SameFingerBigram);
        assert_eq!(report.unknown_labels.len(), 1);
        assert_eq!(report.unknown_keys, vec!["XXYYZZ".to_string(), "lplplr".to_string()]);
        assert_eq!(report.duplicate_keys.len(), 1);
        assert_eq!(report.problem_count(), 6);
    }

    #[test]
    fn test_padded_label_is_unknown() {
        let classifier = Classifier::default();
        let table = TrigramTable::build(&classifier);
        let mut raw = raw_from(&table, LabelStyle::Long);
        let idx = raw.entries.iter().position(|(k, _)| k == "LPRILM").unwrap();
        raw.entries[idx].1 = " alternation ".into();

        let report = verify_table(&raw, &classifier);
        assert_eq!(
            report.unknown_labels,
            vec![("LPRILM".to_string(), " alternation ".to_string())]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn test_mismatch_uses_file_vocabulary() {
        let classifier = Classifier::default();
        let table = TrigramTable::build(&classifier);
        let mut raw = raw_from(&table, LabelStyle::Short);
        let idx = raw.entries.iter().position(|(k, _)| k == "LPRILM").unwrap();
        raw.entries[idx].1 = "inroll".into();

        let report = verify_table(&raw, &classifier);
        assert_eq!(report.mismatches.len(), 1);
        let m = &report.mismatches[0];
        assert_eq!(m.style, LabelStyle::Short);
        assert_eq!(m.found, Category::InwardRoll);
        assert_eq!(m.describe(), "LPRILM: inroll (expected alt)");

        raw.entries[idx].1 = "inward-roll".into();
        let report = verify_table(&raw, &classifier);
        assert_eq!(
            report.mismatches[0].describe(),
            "LPRILM: inward-roll (expected alternation)"
        );
    }

    #[test]
    fn test_historic_one_hand_labels_are_reported() {
        // Older tables read increasing ids on the left hand as inward.
        let classifier = Classifier::default();
        let table = TrigramTable::build(&classifier);
        let mut raw = raw_from(&table, LabelStyle::Short);
        let idx = raw.entries.iter().position(|(k, _)| k == "LPLRLM").unwrap();
        assert_eq!(raw.entries[idx].1, "outoneh");
        raw.entries[idx].1 = "inoneh".into();

        let report = verify_table(&raw, &classifier);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(
            report.mismatches[0].describe(),
            "LPLRLM: inoneh (expected outoneh)"
        );
    }
}
