//! Request payloads for the synchronous binding.
//!
//! Replies reuse the router's reply types (`Registration`, `IndexAck`,
//! `SearchOutcome`) serialized as-is, so they are not duplicated here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub client_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexRequest {
    pub client_id: String,
    pub api_key: String,
    pub file_path: String,
    pub word_frequencies: HashMap<String, u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub client_id: String,
    pub api_key: String,
    pub query_terms: Vec<String>,
}
