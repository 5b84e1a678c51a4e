//! Message visibility filtering.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

use super::{entity::ChatMessage, value_object::ParticipantName};

/// Select the messages a participant is allowed to see.
///
/// A message is visible when the requester sent it, when it is addressed to
/// everyone, or when it is addressed to the requester.
///
/// # Arguments
///
/// * `messages` - All stored messages in insertion order
/// * `requester` - The participant asking for messages
/// * `limit` - When set, only the newest `limit` visible messages are kept
///
/// # Returns
///
/// Visible messages in chronological (insertion) order
pub fn visible_messages(
    messages: &[ChatMessage],
    requester: &ParticipantName,
    limit: Option<usize>,
) -> Vec<ChatMessage> {
    match limit {
        None => messages
            .iter()
            .filter(|m| m.is_visible_to(requester))
            .cloned()
            .collect(),
        Some(limit) => {
            // Collect newest first, then restore chronological order
            let mut selected: Vec<ChatMessage> = messages
                .iter()
                .rev()
                .filter(|m| m.is_visible_to(requester))
                .take(limit)
                .cloned()
                .collect();
            selected.reverse();
            selected
        }
    }
}
