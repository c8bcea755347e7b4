use std::time::{Duration, Instant};

use crate::api::{ApiCommand, ApiCommandSender, ApiEvent, RequestId, User};
use crate::config::Config;
use crate::form::FieldPath;
use crate::notify::{NotificationKind, NotificationQueue};
use crate::session::{Persistence, SessionIdentity, SessionStore};
use crate::table::TableView;
use crate::ui::create::{CreateFormReducer, CreateFormState, CreateIntent};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState, LOAD_FAILED_MESSAGE};
use crate::ui::login::{LoginFormState, LoginIntent, LoginReducer};
use crate::ui::mvi::Reducer;
use crate::ui::route::{sidebar_entries, Focus, Route, SidebarEntry};
use crate::ui::users::{self, UsersPage};

pub const CREATE_SUCCESS_MESSAGE: &str = "User created successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const LOGIN_INCOMPLETE_MESSAGE: &str = "Please fill in the required fields";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Register Success";

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    focus: Focus,
    sidebar_selection: usize,
    session: SessionStore,
    notifications: NotificationQueue,
    /// Login / register form on the home page (MVI pattern).
    login: LoginFormState,
    users: UsersPage,
    /// Detail page fetch state (MVI pattern).
    detail: DetailState,
    /// Create-user form (MVI pattern).
    create: CreateFormState,
    api_sender: Option<ApiCommandSender>,
    next_request: RequestId,
    last_api_error: Option<String>,
}

impl App {
    pub fn new(config: &Config, session: SessionStore) -> Self {
        let ui = &config.ui;
        Self {
            should_quit: false,
            route: Route::Home,
            focus: Focus::Sidebar,
            sidebar_selection: 0,
            session,
            notifications: NotificationQueue::new(Duration::from_millis(ui.toast_ttl_ms)),
            login: LoginFormState::default(),
            users: UsersPage::new(ui.rows_per_page),
            detail: DetailState::default(),
            create: CreateFormState::default(),
            api_sender: None,
            next_request: 1,
            last_api_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api_sender = Some(sender);
    }

    pub fn last_api_error(&self) -> Option<&str> {
        self.last_api_error.as_deref()
    }

    pub fn session(&self) -> &SessionIdentity {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn login(&self) -> &LoginFormState {
        &self.login
    }

    pub fn users(&self) -> &UsersPage {
        &self.users
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn create_form(&self) -> &CreateFormState {
        &self.create
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Whether the current route renders its page or the login prompt.
    pub fn is_route_allowed(&self) -> bool {
        !self.route.requires_auth() || self.is_authenticated()
    }

    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        sidebar_entries(self.is_authenticated())
    }

    pub fn sidebar_selection(&self) -> usize {
        self.sidebar_selection
    }

    pub fn move_sidebar_selection(&mut self, direction: i32) {
        let len = self.sidebar().len();
        let current = self.sidebar_selection.min(len.saturating_sub(1));
        self.sidebar_selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Open the highlighted sidebar entry and hand focus to the page.
    pub fn activate_sidebar(&mut self) {
        let Some(entry) = self.sidebar().get(self.sidebar_selection).copied() else {
            return;
        };
        match entry.route() {
            Some(route) => {
                self.navigate(route);
                self.focus = Focus::Page;
            }
            None => self.logout(),
        }
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(?route, "navigate");
        self.route = route;
        self.sync_sidebar_selection();
        if !self.is_route_allowed() {
            return;
        }
        match route {
            Route::Users if !self.users.has_requested() => self.request_users(),
            Route::UserDetail(id) => self.request_user(id),
            _ => {}
        }
    }

    pub fn go_home(&mut self) {
        self.navigate(Route::Home);
    }

    fn sync_sidebar_selection(&mut self) {
        let route = self.route;
        if let Some(index) = self.sidebar().iter().position(|entry| entry.is_current(route)) {
            self.sidebar_selection = index;
        }
    }

    // ========================================================================
    // Users page
    // ========================================================================

    pub fn request_users(&mut self) {
        let request = self.allocate_request();
        self.users.begin(request);
        tracing::info!(request, "fetching users");
        if !self.send_command(ApiCommand::FetchUsers { request }) {
            self.users.finish(request, None);
            self.notifications
                .enqueue(users::LOAD_FAILED_MESSAGE, NotificationKind::Error);
        }
    }

    /// Mutable access to the users table for search, paging, sort and cursor keys.
    pub fn users_table_mut(&mut self) -> &mut TableView<User> {
        self.users.table_mut()
    }

    /// Open the detail page for the row under the cursor.
    pub fn open_selected_user(&mut self) {
        let Some(id) = self.users.table().activate().map(|user| user.id) else {
            return;
        };
        self.navigate(Route::UserDetail(id));
    }

    // ========================================================================
    // Detail page (MVI pattern)
    // ========================================================================

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, detail, DetailReducer, intent);
    }

    pub fn request_user(&mut self, user_id: u64) {
        let request = self.allocate_request();
        self.dispatch_detail(DetailIntent::Request { user_id, request });
        tracing::info!(request, user_id, "fetching user");
        if !self.send_command(ApiCommand::FetchUser {
            request,
            id: user_id,
        }) {
            self.dispatch_detail(DetailIntent::Failed { request });
            self.notifications
                .enqueue(LOAD_FAILED_MESSAGE, NotificationKind::Error);
        }
    }

    /// Retry the detail fetch for the user currently shown.
    pub fn retry_user(&mut self) {
        if let Route::UserDetail(id) = self.route {
            self.request_user(id);
        }
    }

    // ========================================================================
    // Create-user form (MVI pattern)
    // ========================================================================

    pub fn dispatch_create(&mut self, intent: CreateIntent) {
        dispatch_mvi!(self, create, CreateFormReducer, intent);
    }

    /// Validate the form and, when it passes, issue exactly one create call.
    pub fn submit_create_form(&mut self) {
        let request = self.allocate_request();
        self.dispatch_create(CreateIntent::Submit { request });
        if !self.create.is_awaiting(request) {
            let failed: Vec<&str> = self
                .create
                .errors
                .failed_paths()
                .iter()
                .map(FieldPath::json_path)
                .collect();
            if !failed.is_empty() {
                tracing::debug!(?failed, "create form failed validation");
            }
            return;
        }
        tracing::info!(request, "creating user");
        let record = self.create.record.clone();
        if !self.send_command(ApiCommand::CreateUser { request, record }) {
            self.dispatch_create(CreateIntent::Completed {
                request,
                success: false,
            });
            self.notifications
                .enqueue(CREATE_FAILED_MESSAGE, NotificationKind::Error);
        }
    }

    pub fn reset_create_form(&mut self) {
        self.dispatch_create(CreateIntent::Reset);
    }

    // ========================================================================
    // Login form and session (MVI pattern)
    // ========================================================================

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login, LoginReducer, intent);
    }

    pub fn submit_login(&mut self) {
        self.dispatch_login(LoginIntent::Submit);
        if !self.login.accepted {
            self.notifications
                .enqueue(LOGIN_INCOMPLETE_MESSAGE, NotificationKind::Error);
            return;
        }

        let identity = SessionIdentity::new(self.login.username.clone(), self.login.email.clone());
        let persistence = if self.login.remember_me {
            Persistence::Durable
        } else {
            Persistence::Session
        };
        if let Err(err) = self.session.replace(identity, persistence) {
            tracing::warn!("Failed to persist session: {err}");
        }
        tracing::info!(?persistence, "logged in");
        self.dispatch_login(LoginIntent::Reset);
        self.notifications
            .enqueue(LOGIN_SUCCESS_MESSAGE, NotificationKind::Success);
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.session.clear() {
            tracing::warn!("Failed to clear stored session: {err}");
        }
        tracing::info!("logged out");
        self.dispatch_detail(DetailIntent::Reset);
        self.focus = Focus::Sidebar;
        self.go_home();
    }

    // ========================================================================
    // Events
    // ========================================================================

    pub fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::UsersLoaded { request, result } => {
                let failed = result.is_err();
                if !self.users.finish(request, result.ok()) {
                    tracing::debug!(request, "discarding stale users response");
                    return;
                }
                if failed {
                    self.notifications
                        .enqueue(users::LOAD_FAILED_MESSAGE, NotificationKind::Error);
                }
            }
            ApiEvent::UserLoaded {
                request,
                id,
                result,
            } => {
                if self.detail.pending() != Some(request) {
                    tracing::debug!(request, id, "discarding stale user response");
                    return;
                }
                match result {
                    Ok(user) => self.dispatch_detail(DetailIntent::Loaded {
                        request,
                        user: Box::new(user),
                    }),
                    Err(_) => {
                        self.dispatch_detail(DetailIntent::Failed { request });
                        self.notifications
                            .enqueue(LOAD_FAILED_MESSAGE, NotificationKind::Error);
                    }
                }
            }
            ApiEvent::UserCreated { request, result } => {
                if !self.create.is_awaiting(request) {
                    tracing::debug!(request, "discarding stale create response");
                    return;
                }
                let success = result.is_ok();
                self.dispatch_create(CreateIntent::Completed { request, success });
                match result {
                    Ok(created) => {
                        tracing::info!(request, id = ?created.id, "user created");
                        self.notifications
                            .enqueue(CREATE_SUCCESS_MESSAGE, NotificationKind::Success);
                    }
                    Err(_) => {
                        self.notifications
                            .enqueue(CREATE_FAILED_MESSAGE, NotificationKind::Error);
                    }
                }
            }
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.notifications.expire(now);
    }

    /// Cancel pending toast removals before the UI goes away.
    pub fn teardown(&mut self) {
        self.notifications.clear();
        self.api_sender = None;
    }

    fn allocate_request(&mut self) -> RequestId {
        let request = self.next_request;
        self.next_request += 1;
        request
    }

    fn send_command(&mut self, command: ApiCommand) -> bool {
        let Some(sender) = &self.api_sender else {
            self.last_api_error = Some("API worker not connected".to_string());
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_api_error = None;
                true
            }
            Err(err) => {
                tracing::warn!("API command not sent: {err}");
                self.last_api_error = Some(format!("API send failed: {}", err));
                false
            }
        }
    }
}
