//! Polling chat room server library.
//!
//! Participants register a name, post and fetch messages and refresh a
//! heartbeat; participants that stop sending heartbeats are evicted by a
//! periodic sweep.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
