use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const MESSAGE: &str = "Please login first";

pub fn draw(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            MESSAGE,
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled("Press Enter to go home", Style::default().fg(MUTED_TEXT)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
