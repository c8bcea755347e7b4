use crate::ui::app::App;
use crate::ui::pages::table;
use crate::ui::route::Focus;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let view = app.users().table();
    let [search, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    let cursor = if app.focus() == Focus::Page { "▏" } else { "" };
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format!("{}{cursor}", view.search_term()),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), search);

    table::draw(frame, &view.frame(), body);
}
