use std::io::Write;

use crate::config::types::Result;
use crate::protocol::adapter::ProtocolAdapter;
use crate::verdict::verdict::Verdict;

/// Exit status the harness reads as an accepted answer.
pub const EXIT_CORRECT: i32 = 42;
/// Exit status for any rejection; wrong answers and malformed streams collapse
/// to the same status in this protocol.
pub const EXIT_REJECTED: i32 = 43;

/// Binary verdict protocol (kasiopea-style open-data contests): message on
/// stderr, verdict carried by the exit status alone.
#[derive(Debug, Clone, Default)]
pub struct OpendataAdapter;

impl ProtocolAdapter for OpendataAdapter {
    fn name(&self) -> &'static str {
        "opendata-v1"
    }

    fn emit(
        &self,
        verdict: Verdict,
        _stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<i32> {
        writeln!(stderr, "{}", verdict.message())?;
        Ok(if verdict.is_correct() {
            EXIT_CORRECT
        } else {
            EXIT_REJECTED
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(verdict: Verdict) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = OpendataAdapter
            .emit(verdict, &mut stdout, &mut stderr)
            .unwrap();
        (
            code,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    #[test]
    fn test_correct_exits_42() {
        let (code, stdout, stderr) = emit(Verdict::Correct);
        assert_eq!(code, EXIT_CORRECT);
        assert!(stdout.is_empty());
        assert_eq!(stderr, "Correct answer\n");
    }

    #[test]
    fn test_all_rejections_exit_43() {
        let (code, _, stderr) = emit(Verdict::WrongAnswer);
        assert_eq!(code, EXIT_REJECTED);
        assert_eq!(stderr, "Wrong answer\n");

        let (code, _, stderr) = emit(Verdict::InvalidFormat);
        assert_eq!(code, EXIT_REJECTED);
        assert_eq!(stderr, "Invalid format\n");
    }
}
