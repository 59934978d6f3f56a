//! Authentication Module Tests
//!
//! Validates API key issuance and the capability check.
//!
//! ## Test Scopes
//! - **Registration**: Key format, uniqueness, and destructive re-registration.
//! - **Validation**: Exact matching, unknown clients, stale keys.

#[cfg(test)]
mod tests {
    use crate::auth::manager::CredentialStore;

    // ============================================================
    // REGISTRATION TESTS
    // ============================================================

    #[test]
    fn test_register_returns_hex_key() {
        let store = CredentialStore::new();
        let key = store.register("C1");

        // 32 random bytes, hex-encoded
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_register_distinct_keys_per_client() {
        let store = CredentialStore::new();
        let key_a = store.register("C1");
        let key_b = store.register("C2");

        assert_ne!(key_a, key_b);
        assert!(store.validate("C1", &key_a));
        assert!(store.validate("C2", &key_b));
    }

    #[test]
    fn test_reregistration_invalidates_old_key() {
        let store = CredentialStore::new();
        let old_key = store.register("C1");
        let new_key = store.register("C1");

        assert_ne!(old_key, new_key);
        assert!(!store.validate("C1", &old_key), "stale key must stop validating");
        assert!(store.validate("C1", &new_key));
    }

    // ============================================================
    // VALIDATION TESTS
    // ============================================================

    #[test]
    fn test_validate_accepts_registered_pair() {
        let store = CredentialStore::new();
        let key = store.register("C1");

        assert!(store.validate("C1", &key));
    }

    #[test]
    fn test_validate_rejects_wrong_key() {
        let store = CredentialStore::new();
        store.register("C1");

        assert!(!store.validate("C1", "not-the-key"));
        assert!(!store.validate("C1", ""));
    }

    #[test]
    fn test_validate_unknown_client_is_false() {
        let store = CredentialStore::new();

        assert!(!store.validate("nobody", "anything"));
        assert!(!store.validate("nobody", ""));
    }

    #[test]
    fn test_validate_key_not_transferable_between_clients() {
        let store = CredentialStore::new();
        let key_a = store.register("C1");
        store.register("C2");

        assert!(!store.validate("C2", &key_a));
    }
}
