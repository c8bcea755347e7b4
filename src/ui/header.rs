use crate::session::SessionIdentity;
use crate::ui::route::Route;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    route: Route,
    identity: &'a SessionIdentity,
    api_error: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(route: Route, identity: &'a SessionIdentity, api_error: Option<&'a str>) -> Self {
        Self {
            route,
            identity,
            api_error,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let user = match (&self.identity.username, self.identity.is_authenticated()) {
            (Some(username), true) => username.clone(),
            _ => "guest".to_string(),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "minidash",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.route.title(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(user, Style::default().fg(MUTED_TEXT)),
        ];
        if let Some(error) = self.api_error {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                error.to_string(),
                Style::default().fg(STATUS_ERROR),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
