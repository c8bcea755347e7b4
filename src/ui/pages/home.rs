use crate::ui::app::App;
use crate::ui::login::{LoginField, LoginFormState};
use crate::ui::route::Focus;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const LABEL_WIDTH: usize = 12;

pub fn draw(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let identity = app.session();
    if identity.is_authenticated() {
        let initial = identity.initial().unwrap_or('?');
        let username = identity.username.as_deref().unwrap_or_default();
        let email = identity.email.as_deref().unwrap_or_default();
        let lines = vec![
            Line::from(""),
            Line::styled(
                format!(" {initial} "),
                Style::default()
                    .bg(ACCENT)
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(
                format!("Welcome, {username}"),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Line::styled(email.to_string(), Style::default().fg(MUTED_TEXT)),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        return;
    }

    let editing = app.focus() == Focus::Page;
    frame.render_widget(Paragraph::new(login_lines(app.login(), editing)), area);
}

fn login_lines(form: &LoginFormState, editing: bool) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            "Register",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    for field in LoginField::ALL {
        let focused = editing && form.focused == field;
        let value = match field {
            LoginField::Password => "*".repeat(form.password.chars().count()),
            LoginField::RememberMe => {
                let mark = if form.remember_me { "x" } else { " " };
                format!("[{mark}]")
            }
            _ => form.value(field).to_string(),
        };
        let cursor = if focused && field != LoginField::RememberMe {
            "▏"
        } else {
            ""
        };
        let mut style = Style::default().fg(HEADER_TEXT);
        if focused {
            style = style.bg(ACTIVE_HIGHLIGHT);
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(format!("{value}{cursor}"), style),
        ]));
        if let Some(error) = form.errors.get(field) {
            lines.push(Line::styled(
                format!("{:<width$}{error}", "", width = LABEL_WIDTH),
                Style::default().fg(STATUS_ERROR),
            ));
        }
    }
    lines
}
