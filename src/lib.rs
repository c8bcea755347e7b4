//! Terminal admin dashboard over a users REST API.
//!
//! The two engines, [`table`] and [`form`], are UI-agnostic. [`ui`] wires
//! them to ratatui pages, [`session`] and [`notify`] hold the login and the
//! toast queue, and [`api`] talks to the remote service on a tokio runtime.

pub mod api;
pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod notify;
pub mod session;
pub mod shutdown;
pub mod table;
pub mod ui;
