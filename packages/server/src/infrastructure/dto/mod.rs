//! Data Transfer Objects (DTOs) for the chat application.
//!
//! - `http`: HTTP API request/response DTOs
//! - `conversion`: conversion between DTOs and domain entities

pub mod conversion;
pub mod http;
