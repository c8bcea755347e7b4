use crate::notify::NotificationKind;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, toast_rect};
use crate::ui::pages;
use crate::ui::route::{Focus, Route};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_INFO,
    STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    let header = Header::new(app.route(), app.session(), app.last_api_error());
    frame.render_widget(header.widget(), regions.header);

    draw_sidebar(frame, app, regions.sidebar);

    frame.render_widget(Clear, regions.page);
    let page_block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.route().title()),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(border_style(app.focus() == Focus::Page));
    let inner = page_block.inner(regions.page);
    frame.render_widget(page_block, regions.page);

    if !app.is_route_allowed() {
        pages::unauthorized::draw(frame, inner);
    } else {
        match app.route() {
            Route::Home => pages::home::draw(frame, app, inner),
            Route::Users => pages::users::draw(frame, app, inner),
            Route::CreateUser => pages::create::draw(frame, app, inner),
            Route::UserDetail(_) => pages::detail::draw(frame, app, inner),
        }
    }

    let footer = Footer::new(app.route(), app.focus(), app.is_route_allowed());
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    draw_toasts(frame, app, regions.page);
}

fn draw_sidebar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Sidebar;
    let lines: Vec<Line> = app
        .sidebar()
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let marker = if entry.is_current(app.route()) { "●" } else { " " };
            let mut style = Style::default().fg(HEADER_TEXT);
            if focused && idx == app.sidebar_selection() {
                style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(format!(" {marker} {}", entry.label()), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_toasts(frame: &mut Frame<'_>, app: &App, area: Rect) {
    for (index, toast) in app.notifications().items().iter().enumerate() {
        let Some(rect) = toast_rect(area, index) else {
            break;
        };
        let color = match toast.kind {
            NotificationKind::Success => STATUS_OK,
            NotificationKind::Error => STATUS_ERROR,
            NotificationKind::Info => STATUS_INFO,
        };
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let widget = Paragraph::new(toast.message.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(widget, rect);
    }
}

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(GLOBAL_BORDER)
    }
}
