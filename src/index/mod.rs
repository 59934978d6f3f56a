//! Document Index Module
//!
//! The shared in-memory index both network front ends write to and search
//! reads from. Writes for distinct documents never contend on a global lock;
//! a repeated write for the same path replaces the entry wholesale.

pub mod memory;

#[cfg(test)]
mod tests;
