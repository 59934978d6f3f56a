//! Document Indexing & Keyword Search Service
//!
//! This library crate defines the core modules behind the server binary
//! (`main.rs`). Clients register for an API key, submit per-document
//! word-frequency tables, and query for the documents matching a set of
//! terms, ranked by summed term frequency.
//!
//! ## Architecture Modules
//! Two independent network front ends share one mutable index:
//!
//! - **`auth`**: Issues and validates the per-client API keys.
//! - **`index`**: The shared document store, a concurrent map from document
//!   path to term-frequency table.
//! - **`search`**: Frequency-sum ranking over a full index scan.
//! - **`router`**: The transport-independent request core. Enforces the
//!   API-key gate and dispatches to the index and the search engine.
//! - **`rpc`**: Synchronous HTTP request/response binding plus its client.
//! - **`socket`**: Asynchronous identity-routed socket binding, speaking
//!   length-framed `[identity, delimiter, payload]` triples, plus its client.

pub mod auth;
pub mod index;
pub mod router;
pub mod rpc;
pub mod search;
pub mod socket;
