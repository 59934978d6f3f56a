//! Synchronous RPC Binding
//!
//! HTTP request/response front end over the shared router core. One request
//! maps to one reply on the call path, so no correlation ids are needed.
//! Failures surface inside the reply payload; only undecodable request
//! bodies are rejected at the transport layer before the core is reached.

pub mod client;
pub mod handlers;
pub mod protocol;
