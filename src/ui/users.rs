use crate::api::{RequestId, User};
use crate::table::{Column, TableConfig, TableView};

pub const EMPTY_MESSAGE: &str = "No users found.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users";

/// Users listing: the table plus the fetch it is waiting on.
pub struct UsersPage {
    table: TableView<User>,
    pending: Option<RequestId>,
    loaded: bool,
}

impl UsersPage {
    pub fn new(rows_per_page: usize) -> Self {
        let config = TableConfig {
            searchable: true,
            paginated: true,
            rows_per_page,
            empty_message: EMPTY_MESSAGE.to_string(),
            clickable: true,
        };
        Self {
            table: TableView::new(columns(), config),
            pending: None,
            loaded: false,
        }
    }

    pub fn table(&self) -> &TableView<User> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableView<User> {
        &mut self.table
    }

    /// True once a fetch has been issued; later entries reuse the data.
    pub fn has_requested(&self) -> bool {
        self.loaded || self.pending.is_some()
    }

    pub fn begin(&mut self, request: RequestId) {
        self.pending = Some(request);
        self.table.set_loading(true);
    }

    /// Apply a finished fetch. Returns `false` when the answer is stale.
    pub fn finish(&mut self, request: RequestId, users: Option<Vec<User>>) -> bool {
        if self.pending != Some(request) {
            return false;
        }
        self.pending = None;
        self.loaded = true;
        if let Some(users) = users {
            self.table.set_data(users);
        }
        self.table.set_loading(false);
        true
    }
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", |user: &User| user.name.clone()),
        Column::new("email", "Email", |user: &User| user.email.clone()),
        Column::new("phone", "Phone", |user: &User| user.phone.clone()),
        Column::new("role", "Role", |user: &User| user.role.clone().unwrap_or_default())
            .with_render(|user: &User| user.role_label().to_string()),
    ]
}
