//! Asynchronous Identity-Routed Socket Binding
//!
//! The second front end over the same router core. Messages are exchanged as
//! length-framed `[identity, delimiter, payload]` triples so that a routing
//! layer can multiplex many clients over one stream and still deliver each
//! reply to its originator.
//!
//! ## Submodules
//! - **`framing`**: The three-frame wire format and the `RoutedMessage`
//!   value type that makes echoing the identity structural.
//! - **`protocol`**: JSON envelopes tagged by a `"type"` field.
//! - **`server`**: Accept loop, per-connection dispatch, watch-channel
//!   shutdown.
//! - **`client`**: Request/reply client that speaks the same triple format.

pub mod client;
pub mod framing;
pub mod protocol;
pub mod server;
