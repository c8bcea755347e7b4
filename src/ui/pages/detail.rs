use crate::api::User;
use crate::ui::app::App;
use crate::ui::detail::DetailState;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const LABEL_WIDTH: usize = 14;

pub fn draw(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lines = match app.detail() {
        DetailState::Idle => Vec::new(),
        DetailState::Loading { user_id, .. } => vec![Line::styled(
            format!("Loading user #{user_id}…"),
            Style::default().fg(MUTED_TEXT),
        )],
        DetailState::Loaded { user } => user_lines(user),
        DetailState::Failed { message, .. } => vec![
            Line::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(
                "Enter/h: Go home │ r: Retry",
                Style::default().fg(MUTED_TEXT),
            ),
        ],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn user_lines(user: &User) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(
            user.name.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!("@{}", user.username), Style::default().fg(MUTED_TEXT)),
        Line::from(""),
    ];
    lines.push(field("Email", user.email.clone()));
    lines.push(field("Phone", user.phone.clone()));
    lines.push(field("Website", user.website_url()));
    lines.push(field("Role", user.role_label().to_string()));

    lines.push(Line::from(""));
    lines.push(heading("Address"));
    let address = &user.address;
    let street = if address.suite.is_empty() {
        address.street.clone()
    } else {
        format!("{}, {}", address.street, address.suite)
    };
    lines.push(field("Street", street));
    lines.push(field("City", address.city.clone()));
    lines.push(field("Zipcode", address.zipcode.clone()));
    lines.push(field(
        "Geo",
        format!("{}, {}", address.geo.lat, address.geo.lng),
    ));

    lines.push(Line::from(""));
    lines.push(heading("Company"));
    lines.push(field("Name", user.company.name.clone()));
    lines.push(field("Catch phrase", user.company.catch_phrase.clone()));
    lines.push(field("BS", user.company.bs.clone()));
    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(text, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<width$}", width = LABEL_WIDTH),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}
