//! One module per route; each draws into the inner area of the page block.

pub mod create;
pub mod detail;
pub mod home;
pub mod table;
pub mod unauthorized;
pub mod users;
