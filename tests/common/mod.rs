//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use minidash::api::{ApiCommand, User};
use minidash::config::Config;
use minidash::form::{Address, Company, ContactRecord, Geo};
use minidash::session::{KeyValueStorage, SessionError, SessionStore};
use minidash::ui::app::App;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

// -- Fixtures -----------------------------------------------------------------

pub fn user(id: u64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: name.split_whitespace().next().unwrap_or(name).to_string(),
        email: email.to_string(),
        phone: format!("555-010{id}"),
        website: "example.org".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
        role: None,
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "Leanne Graham", "Sincere@april.biz"),
        user(2, "Ervin Howell", "Shanna@melissa.tv"),
        user(3, "Clementine Bauch", "Nathan@yesenia.net"),
        user(4, "Patricia Lebsack", "Julianne.OConner@kory.org"),
        user(5, "Chelsey Dietrich", "Lucio_Hettinger@annie.ca"),
        user(6, "Mrs. Dennis Schulist", "Karley_Dach@jasper.info"),
        user(7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz"),
    ]
}

/// A record that passes every validation rule.
pub fn valid_record() -> ContactRecord {
    ContactRecord {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        website: "https://ada.dev".to_string(),
        address: Address {
            street: "1 Analytical Way".to_string(),
            suite: String::new(),
            city: "London".to_string(),
            zipcode: "N1 9GU".to_string(),
            geo: Geo {
                lat: "51.5".to_string(),
                lng: "-0.12".to_string(),
            },
        },
        company: Company {
            name: "Engines Ltd".to_string(),
            catch_phrase: "Poetical science".to_string(),
            bs: "compute tables".to_string(),
        },
    }
}

// -- Storage ------------------------------------------------------------------

/// In-memory storage whose contents stay observable after being boxed.
#[derive(Clone, Default)]
pub struct SharedStorage(pub Arc<Mutex<HashMap<String, String>>>);

impl SharedStorage {
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.0.lock().get(key).cloned()
    }
}

impl KeyValueStorage for SharedStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.0.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.0.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SessionError> {
        self.0.lock().remove(key);
        Ok(())
    }
}

// -- App helpers --------------------------------------------------------------

pub struct TestApp {
    pub app: App,
    pub commands: mpsc::Receiver<ApiCommand>,
    pub durable: SharedStorage,
    pub ephemeral: SharedStorage,
}

impl TestApp {
    /// Drain every command the app has issued so far.
    pub fn drain_commands(&mut self) -> Vec<ApiCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = self.commands.try_recv() {
            commands.push(command);
        }
        commands
    }
}

pub fn make_app() -> TestApp {
    let config = Config::default();
    let durable = SharedStorage::default();
    let ephemeral = SharedStorage::default();
    let session = SessionStore::new(Box::new(durable.clone()), Box::new(ephemeral.clone()));
    let mut app = App::new(&config, session);
    let (sender, commands) = mpsc::channel(16);
    app.set_api_sender(sender);
    TestApp {
        app,
        commands,
        durable,
        ephemeral,
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        modifiers: KeyModifiers::CONTROL,
        ..press_key(KeyCode::Char(ch))
    }
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        minidash::ui::input::handle_key(app, press_key(KeyCode::Char(ch)));
    }
}

/// Sign in through the login reducer, bypassing the key handler.
pub fn sign_in(app: &mut App, username: &str, email: &str) {
    use minidash::ui::login::LoginIntent;
    for (value, last) in [(username, false), (email, false), ("secret", true)] {
        for ch in value.chars() {
            app.dispatch_login(LoginIntent::Type(ch));
        }
        if !last {
            app.dispatch_login(LoginIntent::FocusNext);
        }
    }
    app.submit_login();
}
