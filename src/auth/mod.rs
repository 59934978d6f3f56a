//! Client Authentication Module
//!
//! Issues and validates the per-client API keys that gate the HTTP binding.
//! Keys are opaque capability tokens: holding a valid `(client_id, api_key)`
//! pair is the entire authorization model, there are no scopes or ACLs.

pub mod manager;

#[cfg(test)]
mod tests;
