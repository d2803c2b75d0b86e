use crate::cmd::inspect::KeywordSummary;
use bidforge::solver::Solution;
use bidforge::table::OptionRow;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq)]
enum SelectionColumn {
    #[strum(serialize = "Row")]
    RowId,
    Keyword,
    Rank,
    Cost,
    Clicks,
}

/// Whole currency with thousands separators, e.g. `1234567.4` -> `1,234,567`.
pub fn format_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", rounded.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{}{}", sign, out)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_missing_keywords(missing: &[String]) {
    for kw in missing {
        println!("⚠️  '{}' is not in the table and was not pinned.", kw);
    }
}

pub fn print_selection(rows: &[OptionRow]) {
    let mut table = new_table();
    table.set_header(
        SelectionColumn::iter()
            .map(|c| Cell::new(c.to_string()).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for i in [0, 2, 3, 4] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in rows {
        let keyword = if r.is_forced_marker() {
            Cell::new(format!("{} (forced)", r.keyword)).fg(Color::Yellow)
        } else {
            Cell::new(&r.keyword)
        };
        table.add_row(vec![
            Cell::new(r.row_id),
            keyword,
            Cell::new(r.rank),
            Cell::new(format_thousands(r.cost)),
            Cell::new(format!("{}", r.clicks)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_totals(solution: &Solution) {
    println!(
        "Selected: {} keywords ({} forced)",
        solution.selected.len(),
        solution.forced_count()
    );
    println!("Budget: {}", format_thousands(solution.budget));
    println!("Total Cost: {}", format_thousands(solution.total_cost));
    println!("Total Clicks: {}", format_thousands(solution.total_clicks));
}

pub fn print_keyword_summary(summaries: &[KeywordSummary], scale: u64) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Keyword").add_attribute(Attribute::Bold),
        Cell::new("Options"),
        Cell::new("Min Cost"),
        Cell::new("Max Cost"),
        Cell::new(format!("Min Units\n/{}", format_thousands(scale as f64))),
        Cell::new("Max Clicks").fg(Color::Green),
        Cell::new("Forced"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for s in summaries {
        table.add_row(vec![
            Cell::new(&s.keyword).add_attribute(Attribute::Bold),
            Cell::new(s.options),
            Cell::new(format_thousands(s.min_cost)),
            Cell::new(format_thousands(s.max_cost)),
            Cell::new(s.min_units),
            Cell::new(format!("{}", s.max_clicks)).fg(Color::Green),
            if s.forced {
                Cell::new("yes").fg(Color::Yellow)
            } else {
                Cell::new("")
            },
        ]);
    }
    println!("\n{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(50_000.0), "50,000");
        assert_eq!(format_thousands(1_234_567.4), "1,234,567");
        assert_eq!(format_thousands(-20_000_000.0), "-20,000,000");
    }

    #[test]
    fn test_selection_header_order() {
        let names: Vec<String> = SelectionColumn::iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["Row", "Keyword", "Rank", "Cost", "Clicks"]);
    }
}
