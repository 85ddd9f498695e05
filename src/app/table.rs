use std::collections::HashSet;

use crate::models::column::Column;
use crate::models::message::JobRow;

const COLUMN_GAP: &str = "  ";

/// Plain-text rendering of the job list with per-column visibility.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    hidden: HashSet<Column>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_column_visible(&mut self, column: Column, visible: bool) {
        if visible {
            self.hidden.remove(&column);
        } else {
            self.hidden.insert(column);
        }
    }

    pub fn is_column_visible(&self, column: Column) -> bool {
        !self.hidden.contains(&column)
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|column| self.is_column_visible(*column))
            .collect()
    }

    /// Header, separator and one line per row.
    pub fn render(&self, rows: &[JobRow]) -> Vec<String> {
        let columns = self.visible_columns();
        let widths: Vec<usize> = columns
            .iter()
            .map(|column| {
                rows.iter()
                    .filter_map(|row| row.cells.get(column.index()))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(column.header().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(rows.len() + 2);
        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| pad(column.header(), width, column.is_numeric()))
            .collect();
        lines.push(header.join(COLUMN_GAP).trim_end().to_string());
        lines.push("-".repeat(widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1)));

        for row in rows {
            let cells: Vec<String> = columns
                .iter()
                .zip(&widths)
                .map(|(column, &width)| {
                    let cell = row.cells.get(column.index()).map(String::as_str).unwrap_or("");
                    pad(cell, width, column.is_numeric())
                })
                .collect();
            lines.push(cells.join(COLUMN_GAP).trim_end().to_string());
        }
        lines
    }
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{:>width$}", text, width = width)
    } else {
        format!("{:<width$}", text, width = width)
    }
}
