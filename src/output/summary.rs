//! Console summary table.

use crate::aggregate::{ResultTable, HEADER};

const INDEX_HEADER: &str = "(index)";

/// Render the data rows as an aligned, boxed text table with an index column.
pub fn render_summary(table: &ResultTable) -> String {
    let mut columns: Vec<&str> = vec![INDEX_HEADER];
    columns.extend(HEADER);

    let body: Vec<Vec<String>> = table
        .records()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![i.to_string()];
            cells.extend(row.iter().map(|c| c.replace("\r\n", ", ")));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: char, mid: char, right: char| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(&mid.to_string()), right)
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - cell.chars().count())))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    let mut out = rule('┌', '┬', '┐');
    out.push_str(&line(&header));
    out.push_str(&rule('├', '┼', '┤'));
    for row in &body {
        out.push_str(&line(row));
    }
    out.push_str(&rule('└', '┴', '┘'));
    out
}
