use crate::ui::route::{Focus, Route};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    hints: &'static str,
}

impl Footer {
    pub fn new(route: Route, focus: Focus, allowed: bool) -> Self {
        Self {
            hints: hints_for(route, focus, allowed),
        }
    }

    pub fn hints(&self) -> &'static str {
        self.hints
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes (the hints use box-drawing separators).
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(route: Route, focus: Focus, allowed: bool) -> &'static str {
    if focus == Focus::Sidebar {
        return " ↑/↓: Move │ Enter: Open │ Ctrl+Q: Quit";
    }
    if !allowed {
        return " Enter: Go home │ Esc: Sidebar │ Ctrl+Q: Quit";
    }
    match route {
        Route::Home => " Tab: Next field │ Space: Remember me │ Enter: Submit │ Esc: Sidebar",
        Route::Users => {
            " Type: Search │ ↑/↓: Row │ ←/→: Page │ F1-F4: Sort │ Enter: Open │ Ctrl+R: Reload │ Esc: Sidebar"
        }
        Route::CreateUser => " Tab: Next field │ Enter: Submit │ Ctrl+R: Reset │ Esc: Sidebar",
        Route::UserDetail(_) => " b: Back │ h: Home │ r: Retry │ Esc: Sidebar",
    }
}
