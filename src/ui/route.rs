/// Pages reachable from the sidebar (and the detail page reachable from the table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Users,
    CreateUser,
    UserDetail(u64),
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Home)
    }

    pub fn title(&self) -> String {
        match self {
            Route::Home => "Home".to_string(),
            Route::Users => "Users".to_string(),
            Route::CreateUser => "Create User".to_string(),
            Route::UserDetail(id) => format!("User #{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    Home,
    Users,
    CreateUser,
    Logout,
}

impl SidebarEntry {
    pub fn label(&self) -> &'static str {
        match self {
            SidebarEntry::Home => "Home",
            SidebarEntry::Users => "Users",
            SidebarEntry::CreateUser => "Create User",
            SidebarEntry::Logout => "Logout",
        }
    }

    /// The route this entry opens; `None` for actions.
    pub fn route(&self) -> Option<Route> {
        match self {
            SidebarEntry::Home => Some(Route::Home),
            SidebarEntry::Users => Some(Route::Users),
            SidebarEntry::CreateUser => Some(Route::CreateUser),
            SidebarEntry::Logout => None,
        }
    }

    /// Whether the entry highlights as current for `route`.
    pub fn is_current(&self, route: Route) -> bool {
        match (self, route) {
            (SidebarEntry::Users, Route::UserDetail(_)) => true,
            _ => self.route() == Some(route),
        }
    }
}

/// Entries shown in the sidebar for the given auth state.
pub fn sidebar_entries(authenticated: bool) -> Vec<SidebarEntry> {
    if authenticated {
        vec![
            SidebarEntry::Home,
            SidebarEntry::Users,
            SidebarEntry::CreateUser,
            SidebarEntry::Logout,
        ]
    } else {
        vec![SidebarEntry::Home]
    }
}

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Page,
}
