//! HTTP chat server implementation.

mod error;
mod handler;
mod server;
mod signal;
pub mod state;
mod sweeper;

pub use error::ApiError;
pub use server::{Server, build_router};
pub use state::AppState;
pub use sweeper::{SweeperError, spawn_sweeper};
