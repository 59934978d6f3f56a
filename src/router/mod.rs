//! Request Router Module
//!
//! The transport-independent request core shared by both network bindings.
//!
//! ## Core Concepts
//! - **Capability gate**: Every authenticated entry point validates the
//!   client's `(client_id, api_key)` pair before touching the index.
//! - **Replies over errors**: Protocol failures travel as structured reply
//!   values with an ERROR status, never as Rust errors or panics, so one bad
//!   request cannot disturb other in-flight requests.
//! - **Two surfaces**: The HTTP binding uses the authenticated handlers; the
//!   socket binding's wire format carries no API key and goes through the
//!   unchecked entry points.

pub mod core;
pub mod types;
