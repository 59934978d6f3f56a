use dashmap::DashMap;
use rand::Rng;

/// In-memory store of client API keys.
///
/// One process-wide instance is shared by every request worker; all
/// synchronization is internal. Keys never expire and are never persisted.
pub struct CredentialStore {
    api_keys: DashMap<String, String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            api_keys: DashMap::new(),
        }
    }

    /// Registers a client and returns its freshly generated API key.
    ///
    /// Re-registering an existing id replaces the previous key, which stops
    /// validating immediately. The key is returned to the caller only; there
    /// is no way to read it back out of the store.
    pub fn register(&self, client_id: &str) -> String {
        let api_key = generate_api_key();
        self.api_keys.insert(client_id.to_string(), api_key.clone());
        tracing::info!("Registered client {}", client_id);
        api_key
    }

    /// True iff `client_id` is registered and `api_key` matches exactly.
    /// Unknown clients validate to false rather than erroring.
    pub fn validate(&self, client_id: &str, api_key: &str) -> bool {
        self.api_keys
            .get(client_id)
            .map(|expected| expected.value() == api_key)
            .unwrap_or(false)
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

/// 256 bits of randomness, hex-encoded to 64 characters.
fn generate_api_key() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
