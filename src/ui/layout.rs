use ratatui::layout::Rect;

pub const SIDEBAR_WIDTH: u16 = 22;
const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub sidebar: Rect,
    pub page: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    let sidebar_width = SIDEBAR_WIDTH.min(body.width);
    let sidebar = Rect {
        width: sidebar_width,
        ..body
    };
    let page = Rect {
        x: body.x + sidebar_width,
        width: body.width.saturating_sub(sidebar_width),
        ..body
    };
    Regions {
        header,
        sidebar,
        page,
        footer,
    }
}

/// Slot for the `index`-th toast, stacked down from the top-right of `area`.
/// `None` once the stack would run past the bottom edge.
pub fn toast_rect(area: Rect, index: usize) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let offset = u16::try_from(index).ok()?.checked_mul(TOAST_HEIGHT)?;
    if offset.saturating_add(TOAST_HEIGHT) > area.height {
        return None;
    }
    Some(Rect {
        x: area.x + area.width - width,
        y: area.y + offset,
        width,
        height: TOAST_HEIGHT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_screen() {
        let area = Rect::new(0, 0, 100, 30);
        let regions = layout_regions(area);
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.footer.y, 27);
        assert_eq!(regions.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(regions.page.x, SIDEBAR_WIDTH);
        assert_eq!(regions.page.width + regions.sidebar.width, 100);
        assert_eq!(regions.page.height, 24);
    }

    #[test]
    fn toasts_stop_at_the_bottom() {
        let area = Rect::new(10, 3, 60, 7);
        assert_eq!(toast_rect(area, 0), Some(Rect::new(26, 3, 44, 3)));
        assert_eq!(toast_rect(area, 1).map(|r| r.y), Some(6));
        assert_eq!(toast_rect(area, 2), None);
    }
}
