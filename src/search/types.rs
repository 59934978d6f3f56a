use serde::{Deserialize, Serialize};

/// One matching document and its summed term frequency for the query.
/// Produced per search call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document_path: String,
    pub total_frequency: u64,
}
