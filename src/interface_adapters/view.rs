use crate::domain::entities::{ColumnType, DataTable};
use crate::domain::ports::StatusView;

// Terminal stand-in for the dashboard page: status messages go to stdout
// and the result table renders as aligned text.
#[derive(Clone, Default)]
pub struct TerminalView;

impl StatusView for TerminalView {
    fn show_message(&self, message: &str) {
        println!("{message}");
    }

    fn show_last_run(&self, last_run: &str) {
        println!("{last_run}");
    }

    fn render_chart(&self, table: &DataTable) {
        print!("{}", render_table(table));
    }

    fn set_refresh_enabled(&self, enabled: bool) {
        // No button to grey out in a terminal; keep the state visible in logs.
        tracing::debug!(enabled, "refresh control toggled");
    }
}

// Render the table with padded columns; number columns are right-aligned.
pub fn render_table(table: &DataTable) -> String {
    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .map(|column| column.label.chars().count())
        .collect();
    for row in &table.rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{:<width$}", column.label))
        .collect();
    push_line(&mut output, &header.join("  "));

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut output, &rule.join("  "));

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(table.columns.iter().zip(&widths))
            .map(|(cell, (column, &width))| match column.column_type {
                ColumnType::Number => format!("{cell:>width$}"),
                ColumnType::Text => format!("{cell:<width$}"),
            })
            .collect();
        push_line(&mut output, &cells.join("  "));
    }

    output
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line.trim_end());
    output.push('\n');
}
