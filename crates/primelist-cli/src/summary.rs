use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    println!();
    println!("{}", summary_table(outcome));
}

pub fn summary_table(outcome: &RunOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);

    table.add_row(vec![label_cell("Limit"), Cell::new(outcome.limit)]);
    table.add_row(vec![label_cell("Mode"), Cell::new(outcome.mode)]);
    table.add_row(vec![
        label_cell("Primes found"),
        Cell::new(outcome.quantity)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        label_cell("Largest prime"),
        match outcome.largest {
            Some(prime) => Cell::new(prime),
            None => dim_cell("-"),
        },
    ]);
    table.add_row(vec![
        label_cell("List file"),
        Cell::new(outcome.list_path.display()),
    ]);
    table.add_row(vec![
        label_cell("Prime log"),
        Cell::new(outcome.prime_log.display()),
    ]);
    table.add_row(vec![
        label_cell("Elapsed"),
        Cell::new(format!("{:.2?}", outcome.elapsed)),
    ]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Left);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Blue)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::*;
    use crate::error::PathDisplayError;
    use crate::mode::RunMode;

    fn outcome(largest: Option<u64>) -> RunOutcome {
        RunOutcome {
            limit: 30,
            mode: RunMode::NewWithNumber,
            quantity: if largest.is_some() { 10 } else { 0 },
            largest,
            list_path: PathBuf::from("lists/list_of_primes_up_to_30.txt"),
            prime_log: PathBuf::from("logs/primelog"),
            location: Err(PathDisplayError::Format {
                path: PathBuf::from("list_of_primes.txt"),
            }),
            elapsed: Duration::from_millis(3),
        }
    }

    #[test]
    fn test_summary_table_lists_outputs() {
        let mut table = summary_table(&outcome(Some(29)));
        table.force_no_tty();
        let rendered = table.to_string();
        assert!(rendered.contains("list_of_primes_up_to_30.txt"));
        assert!(rendered.contains("logs/primelog"));
        assert!(rendered.contains("29"));
    }

    #[test]
    fn test_summary_table_row_count() {
        let table = summary_table(&outcome(None));
        assert_eq!(table.row_iter().count(), 7);
    }
}
