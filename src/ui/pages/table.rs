//! Draws a [`TableFrame`] produced by the table engine.

use crate::table::{PageMarker, PagerFrame, TableFrame};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, table: &TableFrame, area: Rect) {
    let header_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    match table {
        TableFrame::Loading {
            headers,
            placeholder_rows,
        } => {
            let rows = (0..*placeholder_rows).map(|_| {
                Row::new(headers.iter().map(|_| "░░░░░░░░".to_string()))
                    .style(Style::default().fg(MUTED_TEXT))
            });
            let widget = Table::new(rows, widths(headers.len()))
                .header(Row::new(headers.clone()).style(header_style));
            frame.render_widget(widget, area);
        }
        TableFrame::Empty { message } => {
            let widget = Paragraph::new(message.as_str())
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center);
            frame.render_widget(widget, area);
        }
        TableFrame::Rows {
            headers,
            rows,
            selected,
            pager,
        } => {
            let pager_height = if pager.is_some() { 2 } else { 0 };
            let [body, footer] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(pager_height)])
                    .areas(area);

            let rows = rows.iter().enumerate().map(|(idx, cells)| {
                let mut style = Style::default().fg(HEADER_TEXT);
                if *selected == Some(idx) {
                    style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
                }
                Row::new(cells.clone()).style(style)
            });
            let widget = Table::new(rows, widths(headers.len()))
                .header(Row::new(headers.clone()).style(header_style))
                .column_spacing(2);
            frame.render_widget(widget, body);

            if let Some(pager) = pager {
                frame.render_widget(Paragraph::new(pager_lines(pager)), footer);
            }
        }
    }
}

fn widths(columns: usize) -> Vec<Constraint> {
    let count = u32::try_from(columns.max(1)).unwrap_or(1);
    vec![Constraint::Ratio(1, count); columns]
}

pub(crate) fn pager_lines(pager: &PagerFrame) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_TEXT);
    let mut spans = Vec::new();
    spans.push(Span::styled(
        if pager.can_prev { "‹ Prev " } else { "       " },
        muted,
    ));
    for marker in &pager.strip {
        match marker {
            PageMarker::Page {
                number,
                current: true,
            } => spans.push(Span::styled(
                format!("[{number}] "),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            PageMarker::Page { number, .. } => {
                spans.push(Span::styled(format!("{number} "), muted))
            }
            PageMarker::Ellipsis => spans.push(Span::styled("… ", muted)),
        }
    }
    if pager.can_next {
        spans.push(Span::styled("Next ›", muted));
    }
    vec![
        Line::styled(pager.summary.clone(), muted),
        Line::from(spans),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::page_strip;

    #[test]
    fn pager_marks_current_page() {
        let pager = PagerFrame {
            summary: "Showing 6 to 10 of 12 entries".into(),
            strip: page_strip(2, 3),
            can_prev: true,
            can_next: true,
        };
        let lines = pager_lines(&pager);
        assert_eq!(lines[0].to_string(), "Showing 6 to 10 of 12 entries");
        assert_eq!(lines[1].to_string(), "‹ Prev 1 [2] 3 Next ›");
    }
}
