//! Shared utilities for the Batepapo chat server.

pub mod logger;
pub mod time;
