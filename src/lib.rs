//! sumjudge: batch answer checker for the "sum" task
//!
//! Given a reference input file (test count followed by addend pairs) and a
//! reference output file (expected sums), sumjudge verifies a contestant's
//! whitespace-separated answer stream from standard input and externalizes
//! exactly one verdict per run.
//!
//! # Architecture
//!
//! ## Verification ([`verify`])
//! - [`verify::scanner`]: whitespace token scanning over buffered streams
//! - [`verify::verifier`]: lockstep verification of the three streams
//!
//! ## Verdict ([`verdict`])
//! - [`verdict::verdict`]: contestant-facing verdict classification
//!
//! ## Protocol Adapters ([`protocol`])
//! - [`protocol::adapter`]: verdict emission contract
//! - [`protocol::variants`]: opendata-v1 (exit 42/43) and cms-batch (score line)
//! - [`protocol::registry`]: protocol name resolution
//!
//! ## Configuration ([`config`])
//! - [`config::types`]: error taxonomy, harness environment contract, reports
//!
//! # Design Principles
//!
//! 1. **Verdicts are values** - The verification routine returns a tagged
//!    verdict; process exit mechanics live only in the binaries.
//! 2. **Contestant mistakes are verdicts, harness faults are errors** - The
//!    two taxonomies never mix. Corrupt reference data aborts without a verdict.
//! 3. **Single emission path** - Every branch routes through one adapter call,
//!    so exit codes cannot diverge between early-failure and final-success.

// Verification
pub mod verify;

// Verdict classification
pub mod verdict;

// Protocol adapters (harness-specific verdict emission)
pub mod protocol;

// Configuration & errors
pub mod config;

// CLI entrypoint wiring shared by the sumjudge/opendata-judge/cms-judge binaries.
pub mod cli;

// Re-export commonly used types for convenience
pub use config::types::{JudgeConfig, JudgeError, Result, VerdictReport};
pub use verdict::verdict::{Verdict, Verification};
pub use verify::verifier::verify;
