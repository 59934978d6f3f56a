//! Wire envelopes for the socket binding.
//!
//! Payloads are JSON objects tagged by a `"type"` field:
//!
//! ```text
//! {"type":"INDEX","client_id":"C1","file_path":"/d.txt","words":{"hello":2}}
//! {"type":"INDEX_REPLY","status":"SUCCESS","message":"..."}
//! {"type":"SEARCH","query":["hello","world"]}
//! {"type":"SEARCH_REPLY","results":{"/d.txt":2}}
//! ```
//!
//! Neither request variant carries an API key, so requests arriving on this
//! binding are served unauthenticated. The HTTP binding is the authenticated
//! surface.

use crate::router::types::Status;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tagged message envelope exchanged over the socket binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Envelope {
    #[serde(rename = "INDEX")]
    Index {
        client_id: String,
        file_path: String,
        words: HashMap<String, u64>,
    },
    #[serde(rename = "SEARCH")]
    Search { query: Vec<String> },
    #[serde(rename = "INDEX_REPLY")]
    IndexReply { status: Status, message: String },
    #[serde(rename = "SEARCH_REPLY")]
    SearchReply { results: HashMap<String, u64> },
}

impl Envelope {
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
