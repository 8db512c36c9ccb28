//! Lockstep verification of reference data against the contestant stream.
//!
//! The routine returns a tagged [`Verification`] and never terminates the
//! process; exit mechanics belong to the protocol adapters and binaries.
use std::io::BufRead;

use crate::config::types::{JudgeError, Result};
use crate::verdict::verdict::{Verdict, Verification};
use crate::verify::scanner::TokenScanner;

/// Read one integer of reference data. Anything short of a well-formed token
/// means the harness supplied corrupt files, which is fatal, never a verdict.
fn reference_i64<R: BufRead>(
    scanner: &mut TokenScanner<R>,
    file: &'static str,
    case: u32,
) -> Result<i64> {
    let token = scanner.next_token()?.ok_or_else(|| {
        JudgeError::Reference(format!(
            "reference {} file ended early at test case {}",
            file, case
        ))
    })?;
    token.parse::<i64>().map_err(|_| {
        JudgeError::Reference(format!(
            "reference {} file has non-numeric token {:?} at test case {}",
            file, token, case
        ))
    })
}

/// Verify the contestant stream against the reference input/output pair.
///
/// The three sources are consumed strictly in lockstep, one test case at a
/// time. The first contestant-side anomaly short-circuits:
/// missing/non-numeric token -> InvalidFormat, mismatching value ->
/// WrongAnswer, trailing output after the last case -> WrongAnswer.
pub fn verify<I, O, C>(input: I, reference: O, contestant: C) -> Result<Verification>
where
    I: BufRead,
    O: BufRead,
    C: BufRead,
{
    let mut input = TokenScanner::new(input);
    let mut reference = TokenScanner::new(reference);
    let mut contestant = TokenScanner::new(contestant);

    let count_token = input.next_token()?.ok_or_else(|| {
        JudgeError::Reference("reference input file is empty; expected a test count".to_string())
    })?;
    let test_count: u32 = count_token.parse().map_err(|_| {
        JudgeError::Reference(format!(
            "invalid test count {:?} in reference input",
            count_token
        ))
    })?;
    log::debug!("verifying {} test cases", test_count);

    for case in 0..test_count {
        let a = reference_i64(&mut input, "input", case)?;
        let b = reference_i64(&mut input, "input", case)?;
        let c = reference_i64(&mut reference, "output", case)?;

        // Internal consistency of the reference data itself.
        let expected = a.checked_add(b).ok_or_else(|| {
            JudgeError::Reference(format!("test case {}: addend sum overflows i64", case))
        })?;
        if expected != c {
            return Err(JudgeError::Reference(format!(
                "test case {}: input sums to {} but reference output says {}",
                case, expected, c
            )));
        }

        let answer = match contestant.next_token()? {
            Some(token) => match token.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    return Ok(Verification {
                        verdict: Verdict::InvalidFormat,
                        tests_checked: case,
                    })
                }
            },
            None => {
                return Ok(Verification {
                    verdict: Verdict::InvalidFormat,
                    tests_checked: case,
                })
            }
        };

        if answer != c {
            return Ok(Verification {
                verdict: Verdict::WrongAnswer,
                tests_checked: case,
            });
        }
    }

    // Extraneous output after the last case is a rejection, not a format error.
    if contestant.has_trailing_token()? {
        return Ok(Verification {
            verdict: Verdict::WrongAnswer,
            tests_checked: test_count,
        });
    }

    Ok(Verification {
        verdict: Verdict::Correct,
        tests_checked: test_count,
    })
}
