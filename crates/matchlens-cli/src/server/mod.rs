//! Web server for the interactive review UI.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
