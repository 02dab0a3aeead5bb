//! Core logic module with pure functions
//!
//! Everything here follows the "functional core, imperative shell" pattern:
//! - Take inputs and return outputs
//! - Have no side effects beyond invoking the caller's callbacks
//! - Don't perform file system, network, or database operations

pub mod dict;
