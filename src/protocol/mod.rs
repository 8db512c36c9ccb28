//! Protocol adapters.
//!
//! Core verification stays harness-agnostic. Adapters define how a verdict is
//! externalized for each judging protocol.

pub mod adapter;
pub mod registry;
pub mod variants;
