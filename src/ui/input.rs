use crate::ui::app::App;
use crate::ui::create::CreateIntent;
use crate::ui::detail::DetailState;
use crate::ui::login::LoginIntent;
use crate::ui::route::{Focus, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Esc) {
        app.set_focus(Focus::Sidebar);
        return;
    }

    match app.focus() {
        Focus::Sidebar => handle_sidebar_key(app, key),
        Focus::Page if !app.is_route_allowed() => handle_unauthorized_key(app, key),
        Focus::Page => match app.route() {
            Route::Home => handle_home_key(app, key),
            Route::Users => handle_users_key(app, key),
            Route::CreateUser => handle_create_key(app, key),
            Route::UserDetail(_) => handle_detail_key(app, key),
        },
    }
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_sidebar_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_sidebar_selection(1),
        KeyCode::Enter | KeyCode::Right | KeyCode::Tab => app.activate_sidebar(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_unauthorized_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char('h')) {
        app.go_home();
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    // Signed-in home is a read-only welcome panel.
    if app.is_authenticated() {
        return;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_login(LoginIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_login(LoginIntent::FocusPrev),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_login(LoginIntent::Type(ch)),
        _ => {}
    }
}

fn handle_users_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.request_users();
        return;
    }
    if key.code == KeyCode::Enter {
        app.open_selected_user();
        return;
    }
    let table = app.users_table_mut();
    match key.code {
        KeyCode::Up => table.move_cursor(-1),
        KeyCode::Down => table.move_cursor(1),
        KeyCode::Left | KeyCode::PageUp => table.prev_page(),
        KeyCode::Right | KeyCode::PageDown => table.next_page(),
        KeyCode::Home => table.go_to_page(1),
        KeyCode::End => {
            let last = table.page_count();
            table.go_to_page(last);
        }
        KeyCode::F(n @ 1..=4) => table.toggle_sort(usize::from(n - 1)),
        KeyCode::Backspace => table.pop_search_char(),
        KeyCode::Char(ch) if is_plain(key) => table.push_search_char(ch),
        _ => {}
    }
}

fn handle_create_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'r') {
        app.reset_create_form();
        return;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_create(CreateIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_create(CreateIntent::FocusPrev),
        KeyCode::Enter => app.submit_create_form(),
        KeyCode::Backspace => app.dispatch_create(CreateIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_create(CreateIntent::Type(ch)),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    let failed = matches!(app.detail(), DetailState::Failed { .. });
    match key.code {
        KeyCode::Char('h') => app.go_home(),
        KeyCode::Enter if failed => app.go_home(),
        KeyCode::Char('r') if failed => app.retry_user(),
        KeyCode::Backspace | KeyCode::Char('b') => app.navigate(Route::Users),
        _ => {}
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
