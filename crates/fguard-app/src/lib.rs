//! # fguard-app - Application State and Orchestration
//!
//! The TEA layer of the FocusGuard client:
//!
//! - [`state`] - the Model: [`AppState`] with one state struct per view
//! - [`message`] - the [`Message`] enum fed into `update()`
//! - [`handler`] - the pure [`update`](handler::update) function and its
//!   per-view submodules; returns [`UpdateAction`](handler::UpdateAction)s
//!   for the event loop to execute
//! - [`actions`] - executes those actions by spawning API tasks that report
//!   back as messages
//! - [`poll`] - the cancellable handle for the 1-second status poll task
//! - [`config`] - toml settings loaded from the user config dir
//!
//! Nothing in `handler` performs IO; every network effect goes through an
//! `UpdateAction`, which keeps the whole state machine testable without a
//! backend.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod poll;
pub mod state;

pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Tab};
