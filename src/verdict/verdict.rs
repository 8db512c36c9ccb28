//! Contestant-facing verdict classification.
use serde::{Deserialize, Serialize};

/// The three terminal verdicts a run can produce.
///
/// Exactly one verdict is externalized per invocation. Harness-side faults
/// (unreadable or inconsistent reference data) are not verdicts; they abort
/// the run as [`crate::config::types::JudgeError`] instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "correct")]
    Correct,
    #[serde(rename = "wrong_answer")]
    WrongAnswer,
    #[serde(rename = "invalid_format")]
    InvalidFormat,
}

impl Verdict {
    /// Human-readable message written to the error stream.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Correct => "Correct answer",
            Verdict::WrongAnswer => "Wrong answer",
            Verdict::InvalidFormat => "Invalid format",
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }

    /// Score for the scored protocol. Only 0/1 exists; there is no partial
    /// credit in this task.
    pub fn score(self) -> f64 {
        if self.is_correct() {
            1.0
        } else {
            0.0
        }
    }
}

/// Outcome of one verification pass: the verdict plus how far the contestant
/// stream got before the verdict was reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub verdict: Verdict,
    /// Test cases fully checked; equals the test count for Correct and for
    /// the trailing-output rejection.
    pub tests_checked: u32,
}
