//! The validator framework
//!
//! A validator decides whether a raw candidate testcase conforms to the
//! problem's format contract. It owns exactly one strict stream, runs an
//! ordered list of fail-fast assertions, and only succeeds once the strict
//! trailing end-of-file check has passed.

use crate::reject::Reject;
use shinpan_stream::TokenStream;
use std::ops::RangeInclusive;
use tracing::debug;

/// One validation run over a candidate testcase stream.
///
/// Every read maps a stream failure straight to a `FAIL` rejection, so the
/// first violated constraint terminates the run.
pub struct Validator {
    stream: TokenStream,
}

impl Validator {
    /// Wrap a candidate stream. Callers open it with
    /// [`shinpan_stream::Strictness::Strict`].
    pub fn new(stream: TokenStream) -> Self {
        Self { stream }
    }

    /// Read the next line of the candidate input.
    pub fn read_line(&mut self) -> Result<String, Reject> {
        Ok(self.stream.read_line()?)
    }

    /// Read the next token of the candidate input.
    pub fn read_token(&mut self) -> Result<String, Reject> {
        Ok(self.stream.read_token()?)
    }

    /// Read an integer and require it to lie in `range`.
    pub fn read_int(&mut self, range: RangeInclusive<i64>) -> Result<i64, Reject> {
        Ok(self.stream.read_int(range)?)
    }

    /// Consume exactly one newline, pinning down line structure between
    /// token reads.
    pub fn read_newline(&mut self) -> Result<(), Reject> {
        Ok(self.stream.read_newline()?)
    }

    /// Declare a constraint over data read so far.
    pub fn ensure(&self, condition: bool, message: impl Into<String>) -> Result<(), Reject> {
        crate::reject::ensure(condition, message)
    }

    /// Direct access to the underlying stream, for checks the wrappers do
    /// not cover.
    pub fn stream(&mut self) -> &mut TokenStream {
        &mut self.stream
    }

    /// Mandatory final step: confirm no unconsumed trailing data remains,
    /// then produce the success message.
    ///
    /// When the declared reads ended with tokens, the terminating newline of
    /// the last line is still unread; it is consumed here, so a
    /// newline-terminated input validates without an explicit
    /// [`Validator::read_newline`]. Anything else left over is a violation.
    pub fn finish(mut self) -> Result<String, Reject> {
        if !self.stream.is_exhausted() {
            self.stream.read_newline()?;
        }
        self.stream.expect_eof()?;
        Ok("testcase is valid".to_string())
    }
}

/// Run `body`'s assertions over `stream`, then perform the trailing
/// end-of-file check. The returned value feeds [`crate::report`].
pub fn run_validator<F>(stream: TokenStream, body: F) -> Result<String, Reject>
where
    F: FnOnce(&mut Validator) -> Result<(), Reject>,
{
    debug!(role = %stream.role(), "starting validation run");
    let mut validator = Validator::new(stream);
    body(&mut validator)?;
    let message = validator.finish()?;
    debug!("validation run passed");
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Verdict;
    use shinpan_stream::{Strictness, StreamRole};

    fn candidate(data: &str) -> TokenStream {
        TokenStream::from_str(data, StreamRole::Candidate, Strictness::Strict)
    }

    #[test]
    fn test_assertions_run_in_order_and_fail_fast() {
        let result = run_validator(candidate("3 oops\n"), |v| {
            let n = v.read_int(1..=10)?;
            v.ensure(n % 2 == 1, "n must be odd")?;
            v.read_int(1..=10)?;
            unreachable!("second read_int must already have rejected");
        });
        let err = result.unwrap_err();
        assert_eq!(err.verdict, Verdict::Fail);
        assert!(err.message.contains("oops"));
    }

    #[test]
    fn test_trailing_data_rejected_after_assertions() {
        // The declared reads consume "5" and the rest of line one; "extra"
        // stays unread and the finish step must reject it.
        let result = run_validator(candidate("5\nextra\n"), |v| {
            v.read_int(1..=10)?;
            v.read_line()?;
            Ok(())
        });
        assert_eq!(result.unwrap_err().verdict, Verdict::Fail);
    }

    #[test]
    fn test_fully_consumed_input_passes() {
        let result = run_validator(candidate("5 7\n"), |v| {
            let a = v.read_int(1..=10)?;
            let b = v.read_int(1..=10)?;
            v.ensure(a < b, "expected increasing pair")
        });
        assert_eq!(result.unwrap(), "testcase is valid");
    }

    #[test]
    fn test_finish_consumes_only_the_terminating_newline() {
        // Token reads leave the final newline unread; finish takes it and
        // nothing more.
        let declared = |v: &mut Validator| {
            v.read_int(1..=10)?;
            v.read_int(1..=10)?;
            Ok(())
        };
        assert!(run_validator(candidate("5 7\n"), declared).is_ok());
        assert_eq!(
            run_validator(candidate("5 7\nmore\n"), declared)
                .unwrap_err()
                .verdict,
            Verdict::Fail
        );
        assert_eq!(
            run_validator(candidate("5 7"), declared).unwrap_err().verdict,
            Verdict::Fail
        );
    }
}
