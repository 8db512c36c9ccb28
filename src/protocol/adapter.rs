use std::io::Write;

use crate::config::types::Result;
use crate::verdict::verdict::Verdict;

/// Verdict emission contract for harness-specific output conventions.
///
/// Implementations write the externally visible verdict to the given streams
/// and return the process exit code. Callers invoke `emit` exactly once per
/// run, so every branch shares a single emission path.
pub trait ProtocolAdapter: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;
    fn emit(&self, verdict: Verdict, stdout: &mut dyn Write, stderr: &mut dyn Write)
        -> Result<i32>;
}
