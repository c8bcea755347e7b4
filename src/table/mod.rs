//! Generic searchable, sortable, paginated table engine.

mod column;
mod pager;
mod view;

pub use column::Column;
pub use pager::{page_count, page_strip, PageMarker};
pub use view::{
    PagerFrame, SortDirection, SortState, TableConfig, TableFrame, TableView, LOADING_ROWS,
};
