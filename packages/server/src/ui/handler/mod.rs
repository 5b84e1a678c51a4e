//! HTTP endpoint handlers.

mod health;
mod message;
mod participant;
mod status;

pub use health::health_check;
pub use message::{delete_message, edit_message, get_messages, post_message};
pub use participant::{list_participants, register_participant};
pub use status::refresh_status;

use axum::http::HeaderMap;

use crate::domain::ParticipantName;

/// Header carrying the name of the requesting participant
pub const USER_HEADER: &str = "user";

/// Raw value of the `user` header, if present and valid UTF-8.
fn user_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// The requesting participant's name, if the header holds a well-formed name.
fn requester(headers: &HeaderMap) -> Option<ParticipantName> {
    user_header(headers).and_then(|raw| ParticipantName::new(raw).ok())
}
