use super::types::{IndexAck, Registration, SearchOutcome, Status};
use crate::auth::manager::CredentialStore;
use crate::index::memory::DocumentIndex;
use crate::search::engine::search;
use crate::search::types::SearchResult;
use std::collections::HashMap;
use std::sync::Arc;

const INVALID_API_KEY: &str = "Invalid API Key";

/// Shared request core: authentication gate plus dispatch to the index and
/// the search engine. Both network bindings hold one `Arc<RequestRouter>`
/// and decode/encode their own wire formats around these calls.
pub struct RequestRouter {
    credentials: Arc<CredentialStore>,
    index: Arc<DocumentIndex>,
}

impl RequestRouter {
    pub fn new(credentials: Arc<CredentialStore>, index: Arc<DocumentIndex>) -> Self {
        Self { credentials, index }
    }

    pub fn handle_register(&self, client_id: &str) -> Registration {
        let api_key = self.credentials.register(client_id);
        Registration {
            status: Status::Success,
            api_key,
            message: format!("Client {} registered", client_id),
        }
    }

    /// Stores a word-frequency table for `file_path`, replacing any previous
    /// entry. Rejected requests touch nothing and report the failure in the
    /// reply value.
    pub fn handle_index(
        &self,
        client_id: &str,
        api_key: &str,
        file_path: String,
        frequencies: HashMap<String, u64>,
    ) -> IndexAck {
        if !self.credentials.validate(client_id, api_key) {
            tracing::warn!("Rejected index request from {}: invalid API key", client_id);
            return IndexAck {
                status: Status::Error,
                message: INVALID_API_KEY.to_string(),
            };
        }

        self.index.put(file_path.clone(), frequencies);
        tracing::info!("Indexed {} from client {}", file_path, client_id);

        IndexAck {
            status: Status::Success,
            message: "Document indexed successfully".to_string(),
        }
    }

    pub fn handle_search(
        &self,
        client_id: &str,
        api_key: &str,
        query_terms: &[String],
    ) -> SearchOutcome {
        if !self.credentials.validate(client_id, api_key) {
            tracing::warn!("Rejected search request from {}: invalid API key", client_id);
            return SearchOutcome {
                results: Vec::new(),
                error_message: Some(INVALID_API_KEY.to_string()),
            };
        }

        SearchOutcome {
            results: search(&self.index, query_terms),
            error_message: None,
        }
    }

    /// Index entry point for the socket binding, whose wire format carries
    /// no API key. Requests arriving there are served unauthenticated.
    pub fn index_unchecked(
        &self,
        file_path: String,
        frequencies: HashMap<String, u64>,
    ) -> IndexAck {
        self.index.put(file_path.clone(), frequencies);
        tracing::info!("Indexed {} (socket binding)", file_path);

        IndexAck {
            status: Status::Success,
            message: "Document indexed successfully".to_string(),
        }
    }

    /// Search entry point for the socket binding; see [`Self::index_unchecked`].
    pub fn search_unchecked(&self, query_terms: &[String]) -> Vec<SearchResult> {
        search(&self.index, query_terms)
    }
}
