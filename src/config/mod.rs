//! Configuration
//!
//! Harness environment contract, error taxonomy, and shared types.

pub mod types;
