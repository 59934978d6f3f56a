//! Index Module Tests
//!
//! Validates local storage mechanics and the concurrency contract.
//!
//! ## Test Scopes
//! - **Put/Scan**: Entries survive a scan, replacement semantics.
//! - **Concurrency**: Parallel writers on distinct and shared paths.

#[cfg(test)]
mod tests {
    use crate::index::memory::DocumentIndex;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn freqs(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs
            .iter()
            .map(|(term, count)| (term.to_string(), *count))
            .collect()
    }

    // ============================================================
    // PUT / SCAN TESTS
    // ============================================================

    #[test]
    fn test_put_then_scan_contains_entry() {
        let index = DocumentIndex::new();
        index.put("/docs/a.txt".to_string(), freqs(&[("hello", 2), ("world", 1)]));

        let entries = index.scan_all();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "/docs/a.txt");
        assert_eq!(entries[0].frequencies, freqs(&[("hello", 2), ("world", 1)]));
    }

    #[test]
    fn test_put_replaces_instead_of_merging() {
        let index = DocumentIndex::new();
        index.put("/docs/a.txt".to_string(), freqs(&[("hello", 2)]));
        index.put("/docs/a.txt".to_string(), freqs(&[("world", 5)]));

        let entries = index.scan_all();
        assert_eq!(entries.len(), 1);

        // The old table is gone entirely, not merged in
        assert_eq!(entries[0].frequencies, freqs(&[("world", 5)]));
        assert!(!entries[0].frequencies.contains_key("hello"));
    }

    #[test]
    fn test_scan_empty_index() {
        let index = DocumentIndex::new();
        assert!(index.scan_all().is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_one_entry_per_path() {
        let index = DocumentIndex::new();
        for i in 0..10 {
            index.put("/docs/same.txt".to_string(), freqs(&[("rev", i)]));
        }
        assert_eq!(index.len(), 1);
    }

    // ============================================================
    // CONCURRENCY TESTS
    // ============================================================

    #[test]
    fn test_concurrent_puts_distinct_paths_all_visible() {
        let index = Arc::new(DocumentIndex::new());
        let mut handles = Vec::new();

        for worker in 0..8 {
            let index = index.clone();
            handles.push(std::thread::spawn(move || {
                for doc in 0..16 {
                    let path = format!("/docs/worker{}/doc{}.txt", worker, doc);
                    index.put(path, [("term".to_string(), doc)].into_iter().collect());
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Every write must be visible regardless of interleaving
        assert_eq!(index.len(), 8 * 16);
        assert_eq!(index.scan_all().len(), 8 * 16);
    }

    #[test]
    fn test_concurrent_puts_same_path_last_write_wins() {
        let index = Arc::new(DocumentIndex::new());
        let mut handles = Vec::new();

        for writer in 0..8u64 {
            let index = index.clone();
            handles.push(std::thread::spawn(move || {
                index.put(
                    "/docs/contended.txt".to_string(),
                    [("writer".to_string(), writer)].into_iter().collect(),
                );
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Exactly one table survives, and it is one of the submitted ones
        let entries = index.scan_all();
        assert_eq!(entries.len(), 1);
        let winner = entries[0].frequencies.get("writer").copied().unwrap();
        assert!(winner < 8);
    }
}
