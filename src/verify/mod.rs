//! Answer-stream verification
//!
//! Reads the reference input, reference output, and contestant stream in
//! lockstep and derives a single verdict.

pub mod scanner;
pub mod verifier;
