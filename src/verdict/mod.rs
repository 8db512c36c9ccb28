//! Verdict classification
//!
//! Contestant-facing verdicts derived as plain values. Exit mechanics live in
//! the protocol adapters, never here.

pub mod verdict;
