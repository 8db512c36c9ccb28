use std::io::Write;

use crate::config::types::Result;
use crate::protocol::adapter::ProtocolAdapter;
use crate::verdict::verdict::Verdict;

/// Scored batch protocol (CMS): score line on stdout, message on stderr,
/// exit status 0 always. The score line carries the verdict; the exit code is
/// not a pass/fail signal in this protocol.
#[derive(Debug, Clone, Default)]
pub struct CmsAdapter;

impl ProtocolAdapter for CmsAdapter {
    fn name(&self) -> &'static str {
        "cms-batch"
    }

    fn emit(
        &self,
        verdict: Verdict,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<i32> {
        writeln!(stdout, "{}", verdict.score())?;
        writeln!(stderr, "{}", verdict.message())?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(verdict: Verdict) -> (i32, String, String) {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = CmsAdapter.emit(verdict, &mut stdout, &mut stderr).unwrap();
        (
            code,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    #[test]
    fn test_correct_scores_one() {
        let (code, stdout, stderr) = emit(Verdict::Correct);
        assert_eq!(code, 0);
        assert_eq!(stdout, "1\n");
        assert_eq!(stderr, "Correct answer\n");
    }

    #[test]
    fn test_rejections_score_zero_and_still_exit_zero() {
        let (code, stdout, stderr) = emit(Verdict::WrongAnswer);
        assert_eq!(code, 0);
        assert_eq!(stdout, "0\n");
        assert_eq!(stderr, "Wrong answer\n");

        let (code, stdout, _) = emit(Verdict::InvalidFormat);
        assert_eq!(code, 0);
        assert_eq!(stdout, "0\n");
    }
}
