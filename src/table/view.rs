//! Generic table state: search, sort, pagination and row cursor.
//!
//! The view never mutates `data` for filtering or sorting. Every query
//! recomputes the filtered set, so the current page is clamped against
//! whatever the data looks like right now.

use std::cmp::Ordering;

use crate::table::column::Column;
use crate::table::pager::{page_count, page_strip, PageMarker};

/// Placeholder rows drawn while data is loading.
pub const LOADING_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub searchable: bool,
    pub paginated: bool,
    pub rows_per_page: usize,
    pub empty_message: String,
    /// Rows can be activated (the `onRowClick` hook).
    pub clickable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            searchable: false,
            paginated: false,
            rows_per_page: 10,
            empty_message: "No data available".to_string(),
            clickable: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

/// Footer shown under a paginated table with more than one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerFrame {
    pub summary: String,
    pub strip: Vec<PageMarker>,
    pub can_prev: bool,
    pub can_next: bool,
}

/// What the table should draw right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableFrame {
    Loading {
        headers: Vec<String>,
        placeholder_rows: usize,
    },
    Empty {
        message: String,
    },
    Rows {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        selected: Option<usize>,
        pager: Option<PagerFrame>,
    },
}

pub struct TableView<T> {
    data: Vec<T>,
    columns: Vec<Column<T>>,
    config: TableConfig,
    loading: bool,
    search_term: String,
    current_page: usize,
    cursor: usize,
    sort: Option<SortState>,
}

impl<T> TableView<T> {
    pub fn new(columns: Vec<Column<T>>, config: TableConfig) -> Self {
        let config = TableConfig {
            rows_per_page: config.rows_per_page.max(1),
            ..config
        };
        Self {
            data: Vec::new(),
            columns,
            config,
            loading: false,
            search_term: String::new(),
            current_page: 1,
            cursor: 0,
            sort: None,
        }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.clamp_cursor();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replace the search term. Always returns to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        self.cursor = 0;
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut term = std::mem::take(&mut self.search_term);
        term.push(ch);
        self.set_search_term(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = std::mem::take(&mut self.search_term);
        term.pop();
        self.set_search_term(term);
    }

    /// Records matching the search term, in sort order.
    pub fn filtered(&self) -> Vec<&T> {
        let needle = self.search_term.to_lowercase();
        let mut rows: Vec<&T> = if self.config.searchable && !needle.is_empty() {
            self.data
                .iter()
                .filter(|record| self.columns.iter().any(|col| col.matches(*record, &needle)))
                .collect()
        } else {
            self.data.iter().collect()
        };

        if let Some(sort) = self.sort {
            if let Some(column) = self.columns.get(sort.column) {
                rows.sort_by(|a, b| {
                    let ordering = compare_values(&(column.value)(*a), &(column.value)(*b));
                    match sort.direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                });
            }
        }

        rows
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    pub fn page_count(&self) -> usize {
        if !self.config.paginated {
            return 1;
        }
        page_count(self.filtered_len(), self.config.rows_per_page)
    }

    /// Stored page clamped to the pages that exist for the current filter.
    pub fn current_page(&self) -> usize {
        self.current_page.clamp(1, self.page_count())
    }

    pub fn go_to_page(&mut self, page: usize) {
        let page = page.clamp(1, self.page_count());
        if page != self.current_page {
            self.cursor = 0;
        }
        self.current_page = page;
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page() + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page().saturating_sub(1));
    }

    fn start_index(&self) -> usize {
        (self.current_page() - 1) * self.config.rows_per_page
    }

    /// The slice of the filtered set on the current page.
    pub fn visible_rows(&self) -> Vec<&T> {
        let filtered = self.filtered();
        if !self.config.paginated {
            return filtered;
        }
        filtered
            .into_iter()
            .skip(self.start_index())
            .take(self.config.rows_per_page)
            .collect()
    }

    /// `Showing a to b of n entries`.
    pub fn range_summary(&self) -> String {
        let total = self.filtered_len();
        if total == 0 {
            return "Showing 0 of 0 entries".to_string();
        }
        let start = self.start_index();
        let end = if self.config.paginated {
            (start + self.config.rows_per_page).min(total)
        } else {
            total
        };
        format!("Showing {} to {} of {} entries", start + 1, end, total)
    }

    pub fn page_strip(&self) -> Vec<PageMarker> {
        page_strip(self.current_page(), self.page_count())
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Cycle a column through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, column: usize) {
        if column >= self.columns.len() {
            return;
        }
        self.sort = match self.sort {
            Some(SortState {
                column: active,
                direction: SortDirection::Ascending,
            }) if active == column => Some(SortState {
                column,
                direction: SortDirection::Descending,
            }),
            Some(SortState {
                column: active,
                direction: SortDirection::Descending,
            }) if active == column => None,
            _ => Some(SortState {
                column,
                direction: SortDirection::Ascending,
            }),
        };
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn selected_record(&self) -> Option<&T> {
        self.visible_rows().get(self.cursor).copied()
    }

    /// The full record under the cursor, when rows are clickable.
    pub fn activate(&self) -> Option<&T> {
        if !self.config.clickable || self.loading {
            return None;
        }
        self.selected_record()
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible_rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, col)| match self.sort {
                Some(sort) if sort.column == idx => {
                    let arrow = match sort.direction {
                        SortDirection::Ascending => "▲",
                        SortDirection::Descending => "▼",
                    };
                    format!("{} {}", col.header, arrow)
                }
                _ => col.header.to_string(),
            })
            .collect()
    }

    /// Build the render model for the current state.
    pub fn frame(&self) -> TableFrame {
        if self.loading {
            return TableFrame::Loading {
                headers: self.headers(),
                placeholder_rows: LOADING_ROWS,
            };
        }

        let visible = self.visible_rows();
        if visible.is_empty() {
            return TableFrame::Empty {
                message: self.config.empty_message.clone(),
            };
        }

        let rows = visible
            .iter()
            .map(|&record| self.columns.iter().map(|col| col.cell(record)).collect())
            .collect();

        let pages = self.page_count();
        let pager = (self.config.paginated && pages > 1).then(|| PagerFrame {
            summary: self.range_summary(),
            strip: self.page_strip(),
            can_prev: self.current_page() > 1,
            can_next: self.current_page() < pages,
        });

        TableFrame::Rows {
            headers: self.headers(),
            rows,
            selected: self.config.clickable.then_some(self.cursor),
            pager,
        }
    }
}

fn compare_values(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Fruit {
        name: &'static str,
        color: &'static str,
    }

    fn fruits() -> Vec<Fruit> {
        vec![
            Fruit { name: "Banana", color: "yellow" },
            Fruit { name: "apple", color: "red" },
            Fruit { name: "Cherry", color: "red" },
        ]
    }

    fn view(config: TableConfig) -> TableView<Fruit> {
        let mut view = TableView::new(
            vec![
                Column::new("name", "Name", |f: &Fruit| f.name.to_string()),
                Column::new("color", "Color", |f: &Fruit| f.color.to_string()),
            ],
            config,
        );
        view.set_data(fruits());
        view
    }

    #[test]
    fn search_ignored_when_not_searchable() {
        let mut table = view(TableConfig::default());
        table.set_search_term("red");
        assert_eq!(table.filtered().len(), 3);
    }

    #[test]
    fn sort_cycles_through_directions() {
        let mut table = view(TableConfig::default());
        table.toggle_sort(0);
        let names: Vec<_> = table.filtered().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["apple", "Banana", "Cherry"]);

        table.toggle_sort(0);
        let names: Vec<_> = table.filtered().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Cherry", "Banana", "apple"]);
        assert_eq!(table.headers()[0], "Name ▼");

        table.toggle_sort(0);
        assert_eq!(table.sort(), None);
        assert_eq!(table.filtered()[0].name, "Banana");
    }

    #[test]
    fn activate_requires_clickable() {
        let table = view(TableConfig::default());
        assert!(table.activate().is_none());

        let table = view(TableConfig {
            clickable: true,
            ..TableConfig::default()
        });
        assert_eq!(table.activate().map(|f| f.name), Some("Banana"));
    }

    #[test]
    fn cursor_stays_inside_page() {
        let mut table = view(TableConfig {
            clickable: true,
            ..TableConfig::default()
        });
        table.move_cursor(10);
        assert_eq!(table.cursor(), 2);
        table.move_cursor(-10);
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn unpaginated_has_single_page() {
        let table = view(TableConfig {
            rows_per_page: 1,
            ..TableConfig::default()
        });
        assert_eq!(table.page_count(), 1);
        assert_eq!(table.visible_rows().len(), 3);
    }
}
