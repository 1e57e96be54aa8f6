use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use trigram_table::category::{Category, LabelStyle};
use trigram_table::table::TrigramTable;
use trigram_table::verify::VerifyReport;

/// Rows shown per problem list before eliding.
const MAX_LISTED: usize = 10;

fn category_color(c: Category) -> Color {
    if c.is_same_finger() {
        Color::Red
    } else if c.is_redirect() {
        Color::Yellow
    } else {
        Color::Green
    }
}

pub fn print_summary(table: &TrigramTable, style: LabelStyle) {
    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    out.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
        Cell::new("Share").add_attribute(Attribute::Bold),
    ]);
    for i in 1..=2 {
        if let Some(col) = out.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let total = table.len().max(1) as f32;
    for (category, count) in table.counts() {
        out.add_row(vec![
            Cell::new(category.label(style)).fg(category_color(category)),
            Cell::new(count),
            Cell::new(format!("{:.1}%", count as f32 * 100.0 / total)),
        ]);
    }
    out.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(table.len()).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    println!("\n{}", out);
}

fn listed<T, F: Fn(&T) -> String>(items: &[T], fmt: F) -> String {
    let mut lines: Vec<String> = items.iter().take(MAX_LISTED).map(fmt).collect();
    if items.len() > MAX_LISTED {
        lines.push(format!("... and {} more", items.len() - MAX_LISTED));
    }
    lines.join("\n")
}

pub fn print_verify_report(name: &str, report: &VerifyReport) {
    println!("\n🔎 === TABLE AUDIT: {} === 🔎", name);

    let mut out = Table::new();
    out.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    out.add_row(vec![
        Cell::new("Check").add_attribute(Attribute::Bold),
        Cell::new("Problems").add_attribute(Attribute::Bold),
        Cell::new("Examples"),
    ]);
    if let Some(col) = out.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let rows = [
        ("Missing", report.missing.len(), listed(&report.missing, |k| k.clone())),
        (
            "Unknown key",
            report.unknown_keys.len(),
            listed(&report.unknown_keys, |k| k.clone()),
        ),
        (
            "Duplicate key",
            report.duplicate_keys.len(),
            listed(&report.duplicate_keys, |k| k.clone()),
        ),
        (
            "Unknown label",
            report.unknown_labels.len(),
            listed(&report.unknown_labels, |(k, l)| format!("{}: {}", k, l)),
        ),
        (
            "Mismatch",
            report.mismatches.len(),
            listed(&report.mismatches, |m| m.describe()),
        ),
    ];

    for (check, n, examples) in rows {
        let color = if n == 0 { Color::Green } else { Color::Red };
        out.add_row(vec![Cell::new(check), Cell::new(n).fg(color), Cell::new(examples)]);
    }

    println!("{}", out);
    println!(
        "{} entries checked, {}",
        report.checked,
        if report.is_clean() {
            "table is complete and consistent ✅".to_string()
        } else {
            format!("{} problem(s) ❌", report.problem_count())
        }
    );
}
