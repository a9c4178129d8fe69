//! Column schema and client-side grid model for evaluation settings.
//!
//! The grid never owns the rows. [`GridState::view`] takes the currently held
//! settings and produces one page of rendered cells, so a fresh fetch result
//! is picked up on the next render without any merging.

use crate::routes::metrics_link;
use crate::{EvaluationSetting, Result, VelourError};
use std::cmp::Ordering;

/// Rows per page. The grid offers no other page sizes.
pub const PAGE_SIZE: usize = 5;

pub const VIEW_METRICS_LABEL: &str = "view metrics";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    DatasetName,
    ModelPredTaskType,
    DatasetGtTaskType,
    MinArea,
    MaxArea,
    ViewMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub field: &'static str,
    pub header: &'static str,
    /// Fixed width in pixels; `None` leaves the width to the renderer.
    pub width: Option<u16>,
    pub sortable: bool,
    pub filterable: bool,
    pub hideable: bool,
}

const fn data_column(id: ColumnId, field: &'static str, header: &'static str, width: Option<u16>) -> Column {
    Column {
        id,
        field,
        header,
        width,
        sortable: true,
        filterable: true,
        hideable: true,
    }
}

pub const COLUMNS: [Column; 6] = [
    data_column(ColumnId::DatasetName, "dataset_name", "Dataset", Some(200)),
    data_column(ColumnId::ModelPredTaskType, "model_pred_task_type", "Model Task Type", Some(200)),
    data_column(ColumnId::DatasetGtTaskType, "dataset_gt_task_type", "Dataset Task Type", None),
    data_column(ColumnId::MinArea, "min_area", "Min Area", None),
    data_column(ColumnId::MaxArea, "max_area", "Max Area", None),
    Column {
        id: ColumnId::ViewMetrics,
        field: "view_metrics",
        header: "",
        width: None,
        sortable: false,
        filterable: false,
        hideable: false,
    },
];

impl ColumnId {
    pub fn all() -> &'static [Column] {
        &COLUMNS
    }

    pub fn column(&self) -> &'static Column {
        match self {
            ColumnId::DatasetName => &COLUMNS[0],
            ColumnId::ModelPredTaskType => &COLUMNS[1],
            ColumnId::DatasetGtTaskType => &COLUMNS[2],
            ColumnId::MinArea => &COLUMNS[3],
            ColumnId::MaxArea => &COLUMNS[4],
            ColumnId::ViewMetrics => &COLUMNS[5],
        }
    }

    pub fn field(&self) -> &'static str {
        self.column().field
    }

    pub fn from_field(field: &str) -> Option<Self> {
        COLUMNS.iter().find(|c| c.field == field).map(|c| c.id)
    }

    fn is_numeric(&self) -> bool {
        matches!(self, ColumnId::MinArea | ColumnId::MaxArea)
    }

    fn number(&self, row: &EvaluationSetting) -> Option<f64> {
        match self {
            ColumnId::MinArea => row.min_area,
            ColumnId::MaxArea => row.max_area,
            _ => None,
        }
    }

    fn text(&self, row: &EvaluationSetting) -> String {
        match self {
            ColumnId::DatasetName => row.dataset_name.clone(),
            ColumnId::ModelPredTaskType => row.model_pred_task_type.clone(),
            ColumnId::DatasetGtTaskType => row.dataset_gt_task_type.clone(),
            ColumnId::MinArea | ColumnId::MaxArea => {
                self.number(row).map(|v| v.to_string()).unwrap_or_default()
            }
            ColumnId::ViewMetrics => VIEW_METRICS_LABEL.to_string(),
        }
    }

    fn cell(&self, row: &EvaluationSetting) -> Cell {
        match self {
            ColumnId::ViewMetrics => Cell::Link {
                label: VIEW_METRICS_LABEL,
                href: metrics_link(row.id),
            },
            _ => Cell::Text(self.text(row)),
        }
    }

    fn compare(&self, a: &EvaluationSetting, b: &EvaluationSetting) -> Ordering {
        if self.is_numeric() {
            return match (self.number(a), self.number(b)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            };
        }
        let (x, y) = (self.text(a), self.text(b));
        x.to_lowercase().cmp(&y.to_lowercase()).then_with(|| x.cmp(&y))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Link { label: &'static str, href: String },
}

impl Cell {
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(s) => s,
            Cell::Link { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub id: u64,
    /// Position of the source record in the rows passed to [`GridState::view`].
    pub index: usize,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortModel {
    pub column: ColumnId,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterModel {
    pub column: ColumnId,
    pub text: String,
}

/// One rendered page of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPage {
    /// Visible columns, in display order. Row cells line up with these.
    pub columns: Vec<Column>,
    pub rows: Vec<GridRow>,
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

impl GridPage {
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn range_label(&self) -> String {
        if self.total_rows == 0 {
            return "0–0 of 0".to_string();
        }
        let start = self.page * PAGE_SIZE + 1;
        let end = start + self.rows.len() - 1;
        format!("{}–{} of {}", start, end, self.total_rows)
    }
}

pub fn page_count(total_rows: usize) -> usize {
    total_rows.div_ceil(PAGE_SIZE).max(1)
}

/// Sort, filter, hidden columns and page position. There is no row
/// selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    page: usize,
    sort: Option<SortModel>,
    filter: Option<FilterModel>,
    hidden: Vec<ColumnId>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn sort(&self) -> Option<SortModel> {
        self.sort
    }

    pub fn filter(&self) -> Option<&FilterModel> {
        self.filter.as_ref()
    }

    pub fn is_hidden(&self, column: ColumnId) -> bool {
        self.hidden.contains(&column)
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        COLUMNS
            .iter()
            .filter(|c| !self.is_hidden(c.id))
            .copied()
            .collect()
    }

    /// Show or hide `column`. The link column cannot be hidden.
    pub fn toggle_hidden(&mut self, column: ColumnId) -> Result<()> {
        let col = column.column();
        if !col.hideable {
            return Err(VelourError::ColumnNotHideable(col.field));
        }

        match self.hidden.iter().position(|c| *c == column) {
            Some(i) => {
                self.hidden.remove(i);
            }
            None => self.hidden.push(column),
        }
        Ok(())
    }

    pub fn sort_direction(&self, column: ColumnId) -> Option<SortDirection> {
        self.sort
            .filter(|s| s.column == column)
            .map(|s| s.direction)
    }

    /// Cycle the sort on `column`: none, ascending, descending, none.
    pub fn toggle_sort(&mut self, column: ColumnId) -> Result<()> {
        let col = column.column();
        if !col.sortable {
            return Err(VelourError::ColumnNotSortable(col.field));
        }

        self.sort = match self.sort_direction(column) {
            None => Some(SortModel {
                column,
                direction: SortDirection::Ascending,
            }),
            Some(SortDirection::Ascending) => Some(SortModel {
                column,
                direction: SortDirection::Descending,
            }),
            Some(SortDirection::Descending) => None,
        };
        self.page = 0;
        Ok(())
    }

    pub fn set_sort(&mut self, column: ColumnId, direction: SortDirection) -> Result<()> {
        let col = column.column();
        if !col.sortable {
            return Err(VelourError::ColumnNotSortable(col.field));
        }
        self.sort = Some(SortModel { column, direction });
        self.page = 0;
        Ok(())
    }

    /// Filter rows whose `column` text contains `text`, case-insensitively and
    /// ignoring surrounding whitespace. Blank text clears the filter.
    pub fn set_filter(&mut self, column: ColumnId, text: &str) -> Result<()> {
        let col = column.column();
        if !col.filterable {
            return Err(VelourError::ColumnNotFilterable(col.field));
        }

        // Stored untrimmed; matching trims
        self.filter = (!text.trim().is_empty()).then(|| FilterModel {
            column,
            text: text.to_string(),
        });
        self.page = 0;
        Ok(())
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize, page_count: usize) {
        self.page = page.min(page_count.saturating_sub(1));
    }

    /// Page actually shown for `page_count` pages; the stored index may be
    /// past the end after the row set shrinks.
    fn effective_page(&self, page_count: usize) -> usize {
        self.page.min(page_count.saturating_sub(1))
    }

    pub fn next_page(&mut self, page_count: usize) {
        self.set_page(self.effective_page(page_count) + 1, page_count);
    }

    pub fn prev_page(&mut self, page_count: usize) {
        self.page = self.effective_page(page_count).saturating_sub(1);
    }

    pub fn view(&self, rows: &[EvaluationSetting]) -> GridPage {
        let mut visible: Vec<(usize, &EvaluationSetting)> = match &self.filter {
            Some(f) => {
                let needle = f.text.trim().to_lowercase();
                rows.iter()
                    .enumerate()
                    .filter(|(_, r)| f.column.text(r).to_lowercase().contains(&needle))
                    .collect()
            }
            None => rows.iter().enumerate().collect(),
        };

        if let Some(sort) = self.sort {
            visible.sort_by(|(_, a), (_, b)| {
                let ord = sort.column.compare(a, b);
                match sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        let total_rows = visible.len();
        let page_count = page_count(total_rows);
        let page = self.effective_page(page_count);
        let columns = self.visible_columns();

        let rows = visible
            .into_iter()
            .skip(page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|(index, r)| GridRow {
                id: r.id,
                index,
                cells: columns.iter().map(|c| c.id.cell(r)).collect(),
            })
            .collect();

        GridPage {
            columns,
            rows,
            page,
            page_count,
            total_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(id: u64, dataset: &str, min: Option<f64>, max: Option<f64>) -> EvaluationSetting {
        EvaluationSetting {
            id,
            model_name: None,
            dataset_name: dataset.to_string(),
            model_pred_task_type: "detection".to_string(),
            dataset_gt_task_type: "detection".to_string(),
            min_area: min,
            max_area: max,
        }
    }

    fn many(n: u64) -> Vec<EvaluationSetting> {
        (1..=n)
            .map(|i| setting(i, &format!("dataset-{:02}", i), Some(i as f64), None))
            .collect()
    }

    #[test]
    fn test_schema_shape() {
        assert_eq!(COLUMNS.len(), 6);
        let widths: Vec<_> = COLUMNS.iter().filter_map(|c| c.width).collect();
        assert_eq!(widths, vec![200, 200]);

        let link = ColumnId::ViewMetrics.column();
        assert!(!link.sortable);
        assert!(!link.filterable);
        assert!(!link.hideable);
        assert!(COLUMNS[..5].iter().all(|c| c.sortable && c.filterable));
    }

    #[test]
    fn test_single_row_cells() {
        let rows = vec![setting(1, "coco", Some(0.0), Some(1000.0))];
        let page = GridState::new().view(&rows);

        assert_eq!(page.rows.len(), 1);
        let texts: Vec<_> = page.rows[0].cells.iter().map(Cell::text).collect();
        assert_eq!(
            texts,
            vec!["coco", "detection", "detection", "0", "1000", "view metrics"]
        );
        assert_eq!(
            page.rows[0].cells[5],
            Cell::Link {
                label: "view metrics",
                href: "evaluation-settings/1".to_string()
            }
        );
    }

    #[test]
    fn test_empty_rows() {
        let page = GridState::new().view(&[]);
        assert!(page.is_empty());
        assert_eq!(page.page_count, 1);
        assert!(!page.has_next());
        assert!(!page.has_prev());
        assert_eq!(page.range_label(), "0–0 of 0");
    }

    #[test]
    fn test_missing_area_renders_empty() {
        let rows = vec![setting(2, "voc", None, None)];
        let page = GridState::new().view(&rows);
        assert_eq!(page.rows[0].cells[3].text(), "");
        assert_eq!(page.rows[0].cells[4].text(), "");
    }

    #[test]
    fn test_pagination_five_per_page() {
        let rows = many(7);
        let mut state = GridState::new();

        let first = state.view(&rows);
        assert_eq!(first.rows.len(), 5);
        assert_eq!(first.page_count, 2);
        assert!(first.has_next());
        assert_eq!(first.range_label(), "1–5 of 7");

        state.next_page(first.page_count);
        let second = state.view(&rows);
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.rows[0].id, 6);
        assert!(!second.has_next());
        assert!(second.has_prev());
        assert_eq!(second.range_label(), "6–7 of 7");

        state.next_page(second.page_count);
        assert_eq!(state.page(), 1);
        state.prev_page(second.page_count);
        state.prev_page(second.page_count);
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_page_clamped_when_rows_shrink() {
        let mut state = GridState::new();
        state.set_page(3, page_count(20));
        assert_eq!(state.page(), 3);

        let page = state.view(&many(6));
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 1);
    }

    #[test]
    fn test_paging_steps_from_shown_page_after_rows_shrink() {
        let mut state = GridState::new();
        state.set_page(3, page_count(20));

        let rows = many(6);
        let shown = state.view(&rows);
        assert_eq!(shown.page, 1);
        assert!(shown.has_prev());

        state.prev_page(shown.page_count);
        assert_eq!(state.view(&rows).page, 0);

        state.set_page(3, page_count(20));
        state.next_page(shown.page_count);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_hide_columns() {
        let rows = vec![setting(1, "coco", Some(0.0), Some(1000.0))];
        let mut state = GridState::new();

        state.toggle_hidden(ColumnId::MinArea).unwrap();
        state.toggle_hidden(ColumnId::ModelPredTaskType).unwrap();
        assert!(state.is_hidden(ColumnId::MinArea));

        let page = state.view(&rows);
        let fields: Vec<_> = page.columns.iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            vec!["dataset_name", "dataset_gt_task_type", "max_area", "view_metrics"]
        );
        let texts: Vec<_> = page.rows[0].cells.iter().map(Cell::text).collect();
        assert_eq!(texts, vec!["coco", "detection", "1000", "view metrics"]);

        state.toggle_hidden(ColumnId::MinArea).unwrap();
        assert!(!state.is_hidden(ColumnId::MinArea));
        assert_eq!(state.view(&rows).columns.len(), 5);
    }

    #[test]
    fn test_link_column_cannot_be_hidden() {
        let mut state = GridState::new();
        assert!(matches!(
            state.toggle_hidden(ColumnId::ViewMetrics),
            Err(VelourError::ColumnNotHideable("view_metrics"))
        ));
        assert_eq!(state.visible_columns().len(), 6);
    }

    #[test]
    fn test_rows_keep_source_index() {
        let rows = vec![
            setting(7, "voc", None, None),
            setting(7, "ade20k", None, None),
        ];
        let mut state = GridState::new();
        state.toggle_sort(ColumnId::DatasetName).unwrap();
        let indices: Vec<_> = state.view(&rows).rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 0]);
    }

    #[test]
    fn test_column_lookup_matches_id() {
        for col in COLUMNS.iter() {
            assert_eq!(col.id.column(), col);
        }
    }

    #[test]
    fn test_sort_cycle() {
        let rows = vec![
            setting(1, "coco", Some(50.0), None),
            setting(2, "ade20k", None, None),
            setting(3, "Voc", Some(10.0), None),
        ];
        let mut state = GridState::new();

        state.toggle_sort(ColumnId::DatasetName).unwrap();
        let ids: Vec<_> = state.view(&rows).rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        state.toggle_sort(ColumnId::DatasetName).unwrap();
        assert_eq!(state.sort_direction(ColumnId::DatasetName), Some(SortDirection::Descending));
        let ids: Vec<_> = state.view(&rows).rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        state.toggle_sort(ColumnId::DatasetName).unwrap();
        assert_eq!(state.sort(), None);
        let ids: Vec<_> = state.view(&rows).rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_numeric_sort_puts_missing_first() {
        let rows = vec![
            setting(1, "a", Some(100.0), None),
            setting(2, "b", Some(9.0), None),
            setting(3, "c", None, None),
        ];
        let mut state = GridState::new();
        state.toggle_sort(ColumnId::MinArea).unwrap();
        let ids: Vec<_> = state.view(&rows).rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_resets_page() {
        let mut state = GridState::new();
        state.set_page(1, 2);
        state.toggle_sort(ColumnId::MaxArea).unwrap();
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_link_column_never_sortable_or_filterable() {
        let mut state = GridState::new();
        state.set_sort(ColumnId::MinArea, SortDirection::Descending).unwrap();
        state.set_filter(ColumnId::DatasetName, "coco").unwrap();
        let before = state.clone();

        assert!(matches!(
            state.toggle_sort(ColumnId::ViewMetrics),
            Err(VelourError::ColumnNotSortable("view_metrics"))
        ));
        assert!(matches!(
            state.set_sort(ColumnId::ViewMetrics, SortDirection::Ascending),
            Err(VelourError::ColumnNotSortable(_))
        ));
        assert!(matches!(
            state.set_filter(ColumnId::ViewMetrics, "view"),
            Err(VelourError::ColumnNotFilterable("view_metrics"))
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_filter_narrows_and_resets_page() {
        let mut rows = many(6);
        rows.push(setting(99, "COCO-val", None, None));
        let mut state = GridState::new();
        state.set_page(1, 2);

        state.set_filter(ColumnId::DatasetName, "coco").unwrap();
        assert_eq!(state.page(), 0);
        let page = state.view(&rows);
        assert_eq!(page.total_rows, 1);
        assert_eq!(page.rows[0].id, 99);

        state.set_filter(ColumnId::DatasetName, "  ").unwrap();
        assert!(state.filter().is_none());
        assert_eq!(state.view(&rows).total_rows, 7);
    }

    #[test]
    fn test_from_field() {
        assert_eq!(ColumnId::from_field("min_area"), Some(ColumnId::MinArea));
        assert_eq!(ColumnId::from_field("view_metrics"), Some(ColumnId::ViewMetrics));
        assert_eq!(ColumnId::from_field("id"), None);
        assert_eq!(ColumnId::DatasetGtTaskType.field(), "dataset_gt_task_type");
    }
}
