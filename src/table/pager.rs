/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page { number: usize, current: bool },
    Ellipsis,
}

/// Number of pages needed for `count` rows, at least one.
pub fn page_count(count: usize, rows_per_page: usize) -> usize {
    let rows_per_page = rows_per_page.max(1);
    count.div_ceil(rows_per_page).max(1)
}

/// First page, last page and the current page ±1, with an ellipsis where a
/// run of pages is skipped next to that window.
pub fn page_strip(current: usize, total: usize) -> Vec<PageMarker> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let mut strip = Vec::new();

    for page in 1..=total {
        let near_current = page + 1 >= current && page <= current + 1;
        if page == 1 || page == total || near_current {
            strip.push(PageMarker::Page {
                number: page,
                current: page == current,
            });
        } else if (current > 3 && page + 2 == current) || (current + 2 < total && page == current + 2)
        {
            strip.push(PageMarker::Ellipsis);
        }
    }

    strip
}
