use anyhow::Result;
use velour_core::{Cell, EvaluationSetting, GridPage};

fn cell_text(cell: &Cell) -> &str {
    match cell {
        Cell::Text(s) => s,
        Cell::Link { href, .. } => href,
    }
}

fn header(field: &'static str, header: &'static str) -> &'static str {
    match header {
        "" => field,
        h => h,
    }
}

pub fn table(page: &GridPage) -> String {
    let headers: Vec<&str> = page.columns.iter().map(|c| header(c.field, c.header)).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &page.rows {
        for (w, cell) in widths.iter_mut().zip(&row.cells) {
            *w = (*w).max(cell_text(cell).chars().count());
        }
    }
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len();

    let mut out = String::new();
    out.push_str(&format!("{:-<1$}\n", "", total));
    for (h, w) in headers.iter().zip(&widths) {
        out.push_str(&format!("  {:<1$}", h, w));
    }
    out.push('\n');
    out.push_str(&format!("{:-<1$}\n", "", total));

    if page.is_empty() {
        out.push_str("  No evaluation settings\n");
    }
    for row in &page.rows {
        for (cell, w) in row.cells.iter().zip(&widths) {
            out.push_str(&format!("  {:<1$}", cell_text(cell), w));
        }
        out.push('\n');
    }

    out.push_str(&format!("{:-<1$}\n", "", total));
    out.push_str(&format!(
        "  Rows {}  (page {}/{})\n",
        page.range_label(),
        page.page + 1,
        page.page_count
    ));
    out
}

pub fn csv(page: &GridPage) -> String {
    let mut out = String::from("id,");
    out.push_str(
        &page
            .columns
            .iter()
            .map(|c| c.field)
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push('\n');

    for row in &page.rows {
        let cells: Vec<String> = row.cells.iter().map(|c| csv_field(cell_text(c))).collect();
        out.push_str(&format!("{},{}\n", row.id, cells.join(",")));
    }
    out
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// The settings shown on `page`, in display order. `settings` must be the
/// slice `page` was built from.
pub fn json(page: &GridPage, settings: &[EvaluationSetting]) -> Result<String> {
    let shown: Vec<&EvaluationSetting> = page
        .rows
        .iter()
        .filter_map(|row| settings.get(row.index))
        .collect();
    Ok(serde_json::to_string_pretty(&shown)?)
}
