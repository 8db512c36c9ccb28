//! Core types and error taxonomy for the sumjudge checker.
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use thiserror::Error;

use crate::verdict::verdict::{Verdict, Verification};

/// Environment variable the harness sets to the reference input path.
pub const ENV_TEST_INPUT: &str = "TEST_INPUT";
/// Environment variable the harness sets to the reference output path.
pub const ENV_TEST_OUTPUT: &str = "TEST_OUTPUT";

/// Custom error types for sumjudge.
///
/// Every variant is a harness-side fault. Contestant mistakes are never
/// errors; they surface as [`Verdict`] values instead.
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Reference data error: {0}")]
    Reference(String),
}

/// Result type alias for judge operations
pub type Result<T> = std::result::Result<T, JudgeError>;

/// Paths to the harness-supplied reference files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JudgeConfig {
    /// Reference input file: test count followed by addend pairs
    pub input: PathBuf,
    /// Reference output file: expected sums, one per test case
    pub output: PathBuf,
}

impl JudgeConfig {
    /// Resolve reference paths from explicit values, falling back on the
    /// harness environment contract (`TEST_INPUT`, `TEST_OUTPUT`).
    pub fn resolve(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self> {
        let input = match input {
            Some(path) => path,
            None => std::env::var_os(ENV_TEST_INPUT).map(PathBuf::from).ok_or_else(|| {
                JudgeError::Environment(format!(
                    "reference input path missing; pass --input or set {}",
                    ENV_TEST_INPUT
                ))
            })?,
        };
        let output = match output {
            Some(path) => path,
            None => std::env::var_os(ENV_TEST_OUTPUT).map(PathBuf::from).ok_or_else(|| {
                JudgeError::Environment(format!(
                    "reference output path missing; pass --output or set {}",
                    ENV_TEST_OUTPUT
                ))
            })?,
        };

        Ok(JudgeConfig { input, output })
    }

    /// Open both reference files for reading.
    ///
    /// The harness guarantees these files exist; failure here is an
    /// environment fault, not a verdict.
    pub fn open(&self) -> Result<(BufReader<File>, BufReader<File>)> {
        let input = File::open(&self.input).map_err(|err| {
            JudgeError::Environment(format!(
                "cannot open reference input {}: {}",
                self.input.display(),
                err
            ))
        })?;
        let output = File::open(&self.output).map_err(|err| {
            JudgeError::Environment(format!(
                "cannot open reference output {}: {}",
                self.output.display(),
                err
            ))
        })?;

        Ok((BufReader::new(input), BufReader::new(output)))
    }
}

/// Structured verdict record for audit logging.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerdictReport {
    /// Canonical protocol name the verdict was emitted with
    pub protocol: String,
    /// Final verdict
    pub verdict: Verdict,
    /// Contestant-facing message
    pub message: String,
    /// Score in {0.0, 1.0}
    pub score: f64,
    /// Test cases fully checked before the verdict was reached
    pub tests_checked: u32,
}

impl VerdictReport {
    pub fn new(protocol: &str, verification: &Verification) -> Self {
        VerdictReport {
            protocol: protocol.to_string(),
            verdict: verification.verdict,
            message: verification.verdict.message().to_string(),
            score: verification.verdict.score(),
            tests_checked: verification.tests_checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_explicit_paths() {
        let config = JudgeConfig::resolve(
            Some(PathBuf::from("/data/01.in")),
            Some(PathBuf::from("/data/01.out")),
        )
        .unwrap();

        assert_eq!(config.input, PathBuf::from("/data/01.in"));
        assert_eq!(config.output, PathBuf::from("/data/01.out"));
    }

    #[test]
    fn test_open_missing_reference_is_environment_error() {
        let config = JudgeConfig {
            input: PathBuf::from("/nonexistent/01.in"),
            output: PathBuf::from("/nonexistent/01.out"),
        };

        let err = config.open().unwrap_err();
        assert!(matches!(err, JudgeError::Environment(_)));
        assert!(err.to_string().contains("/nonexistent/01.in"));
    }

    #[test]
    fn test_report_carries_message_and_score() {
        let verification = Verification {
            verdict: Verdict::WrongAnswer,
            tests_checked: 3,
        };

        let report = VerdictReport::new("opendata-v1", &verification);
        assert_eq!(report.message, "Wrong answer");
        assert_eq!(report.score, 0.0);
        assert_eq!(report.tests_checked, 3);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["verdict"], "wrong_answer");
    }
}
