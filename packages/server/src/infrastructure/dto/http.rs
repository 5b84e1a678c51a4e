//! HTTP API request/response DTOs.
//!
//! Request fields are optional so that missing fields are reported as
//! validation failures instead of deserialization errors.

use serde::{Deserialize, Serialize};

/// `POST /participants` body
#[derive(Debug, Default, Deserialize)]
pub struct RegisterParticipantRequest {
    pub name: Option<String>,
}

/// `POST /messages` and `PUT /messages/{id}` body
#[derive(Debug, Default, Deserialize)]
pub struct MessagePayloadRequest {
    pub to: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// `GET /messages` query
///
/// Built from the raw query pairs so that a repeated or malformed parameter
/// never rejects the request; only the first `limit` is kept.
#[derive(Debug, Default)]
pub struct MessagesQuery {
    pub limit: Option<String>,
}

impl From<Vec<(String, String)>> for MessagesQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let limit = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "limit").then_some(value));
        Self { limit }
    }
}

impl MessagesQuery {
    /// Parse `limit` from its leading integer.
    ///
    /// `None` (no limit) when there is no leading integer or it is zero.
    /// A negative value selects nothing.
    pub fn limit(&self) -> Option<usize> {
        let raw = self.limit.as_deref()?.trim_start();
        let (negative, unsigned) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        let digits_len = unsigned
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let digits = &unsigned[..digits_len];
        if digits.is_empty() || digits.bytes().all(|b| b == b'0') {
            return None;
        }
        if negative {
            return Some(0);
        }
        Some(digits.parse::<usize>().unwrap_or(usize::MAX))
    }
}

/// Participant as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

/// Message as exposed over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
}
