use super::types::SearchResult;
use crate::index::memory::DocumentIndex;

/// Scores every indexed document by the summed frequency of the query terms.
///
/// Each query term is lowercased before lookup. The index stores terms
/// exactly as submitted, so mixed-case ingestion will not match; callers
/// are expected to lowercase terms on the way in. Documents whose sum is
/// zero are omitted, and no ordering is guaranteed among the results.
pub fn search(index: &DocumentIndex, query_terms: &[String]) -> Vec<SearchResult> {
    let normalized: Vec<String> = query_terms.iter().map(|term| term.to_lowercase()).collect();

    let mut results = Vec::new();
    for entry in index.scan_all() {
        let total_frequency: u64 = normalized
            .iter()
            .map(|term| entry.frequencies.get(term).copied().unwrap_or(0))
            .sum();

        if total_frequency > 0 {
            results.push(SearchResult {
                document_path: entry.path,
                total_frequency,
            });
        }
    }

    results
}
