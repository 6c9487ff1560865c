//! Haven Client Library
//!
//! Storage, cross-tab sync, the session with its mutation operations, view
//! models, and the Elm-style app state machine. The `haven` binary is a thin
//! command-line front end over these modules.

pub mod app;
pub mod args;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
mod handlers;
pub mod session;
pub mod storage;
pub mod store;
pub mod sync;
pub mod types;
pub mod views;

pub use app::HavenApp;
