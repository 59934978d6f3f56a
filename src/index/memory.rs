use dashmap::DashMap;
use std::collections::HashMap;

/// A single indexed document: its path and the term-frequency table the
/// submitting client computed for it.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentEntry {
    pub path: String,
    pub frequencies: HashMap<String, u64>,
}

/// Shared mapping from document path to term-frequency table.
///
/// Backed by `DashMap`, so concurrent `put` calls for different paths
/// proceed in parallel and callers never manage locks themselves. At most
/// one entry exists per path at any time.
pub struct DocumentIndex {
    documents: DashMap<String, HashMap<String, u64>>,
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Inserts or replaces the entry for `path`.
    ///
    /// Last write wins; frequency tables are never merged. Terms are stored
    /// exactly as submitted, so callers that want case-insensitive matching
    /// must lowercase terms before indexing.
    pub fn put(&self, path: String, frequencies: HashMap<String, u64>) {
        self.documents.insert(path, frequencies);
    }

    /// Clones every entry into an owned snapshot for one search pass.
    ///
    /// The scan does not freeze the map: a write that lands while the scan
    /// runs may or may not be reflected, which is acceptable for search.
    pub fn scan_all(&self) -> Vec<DocumentEntry> {
        self.documents
            .iter()
            .map(|entry| DocumentEntry {
                path: entry.key().clone(),
                frequencies: entry.value().clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for DocumentIndex {
    fn default() -> Self {
        Self::new()
    }
}
