use crate::search::types::SearchResult;
use serde::{Deserialize, Serialize};

/// Outcome marker carried by register and index replies on both bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Error,
}

/// Reply to a registration call. `api_key` is empty on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub status: Status,
    pub api_key: String,
    pub message: String,
}

/// Reply to an index submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexAck {
    pub status: Status,
    pub message: String,
}

/// Reply to a search call. A rejected request leaves `results` empty and
/// explains itself in `error_message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
