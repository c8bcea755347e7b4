use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Email,
    Password,
    RememberMe,
}

impl LoginField {
    pub const ALL: [LoginField; 4] = [
        Self::Username,
        Self::Email,
        Self::Password,
        Self::RememberMe,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::RememberMe => "Remember me",
        }
    }

    pub fn next(&self) -> LoginField {
        match self {
            Self::Username => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::RememberMe,
            Self::RememberMe => Self::Username,
        }
    }

    pub fn prev(&self) -> LoginField {
        match self {
            Self::Username => Self::RememberMe,
            Self::Email => Self::Username,
            Self::Password => Self::Email,
            Self::RememberMe => Self::Password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }

    pub fn get(&self, field: LoginField) -> Option<&str> {
        match field {
            LoginField::Username => self.username.as_deref(),
            LoginField::Email => self.email.as_deref(),
            LoginField::Password => self.password.as_deref(),
            LoginField::RememberMe => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginFormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub focused: LoginField,
    pub errors: LoginErrors,
    /// Set by a submit that passed validation; the app reads it and logs in.
    pub accepted: bool,
}

impl UiState for LoginFormState {}

impl LoginFormState {
    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Username => &self.username,
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
            LoginField::RememberMe => "",
        }
    }

    fn value_mut(&mut self, field: LoginField) -> Option<&mut String> {
        match field {
            LoginField::Username => Some(&mut self.username),
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::RememberMe => None,
        }
    }

    /// Apply `edit` to the focused text field and drop its error.
    pub(crate) fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let field = self.focused;
        if let Some(value) = self.value_mut(field) {
            edit(value);
        }
        match field {
            LoginField::Username => self.errors.username = None,
            LoginField::Email => self.errors.email = None,
            LoginField::Password => self.errors.password = None,
            LoginField::RememberMe => {}
        }
    }
}
