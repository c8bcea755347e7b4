use crate::form::{FieldPath, Section};
use crate::ui::app::App;
use crate::ui::create::CreateFormState;
use crate::ui::route::Focus;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const LABEL_WIDTH: usize = 15;

pub fn draw(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let editing = app.focus() == Focus::Page;
    let (lines, focus_line) = form_lines(app.create_form(), editing);
    // Keep the focused field on screen when the form is taller than the page.
    let height = usize::from(area.height.max(1));
    let scroll = focus_line.saturating_sub(height.saturating_sub(2));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

/// Form lines plus the index of the focused field's line.
fn form_lines(form: &CreateFormState, editing: bool) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut focus_line = 0;
    let mut section: Option<Section> = None;

    for path in FieldPath::ALL {
        if section != Some(path.section()) {
            if section.is_some() {
                lines.push(Line::from(""));
            }
            section = Some(path.section());
            lines.push(Line::styled(
                path.section().label(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        }

        let focused = editing && form.focused == path;
        if focused {
            focus_line = lines.len();
        }
        let marker = if path.is_required() { "*" } else { " " };
        let cursor = if focused { "▏" } else { "" };
        let mut value_style = Style::default().fg(HEADER_TEXT);
        if focused {
            value_style = value_style.bg(ACTIVE_HIGHLIGHT);
        }
        let mut spans = vec![
            Span::styled(
                format!("{:<width$}", format!("{}{marker}", path.label()), width = LABEL_WIDTH),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(format!("{}{cursor}", form.record.field(path)), value_style),
        ];
        if let Some(error) = form.errors.get(path) {
            spans.push(Span::styled(
                format!("  {error}"),
                Style::default().fg(STATUS_ERROR),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let submit = if form.submitting {
        "Submitting…"
    } else {
        "[ Enter: Create User ]"
    };
    lines.push(Line::styled(
        submit,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ));
    (lines, focus_line)
}
