//! Standard whole-stream comparison routines
//!
//! Two comparison shapes cover most problems: exact line-by-line equality
//! and whitespace-insensitive token equality. Problem-specific equivalence
//! (tolerances, answer sets) belongs in the problem's own checker body;
//! these are the defaults it falls back on.
//!
//! Attribution follows the stream roles: the answer stream is ground truth,
//! so running out of answer data mid-comparison is a judge-side `FAIL`,
//! while short or over-long output is the contestant's problem.

use crate::reject::Reject;
use shinpan_stream::TokenStream;
use tracing::trace;

/// Compare the contestant output against the answer line by line, exactly.
///
/// The first differing line yields `WRONG_ANSWER` naming the line number.
/// Output ending before the answer is `WRONG_ANSWER` (missing content);
/// output continuing past the answer is `PRESENTATION_ERROR` (trailing
/// content). Succeeds with the matched line count.
pub fn compare_lines(output: &mut TokenStream, answer: &mut TokenStream) -> Result<String, Reject> {
    let mut matched = 0usize;

    while answer.has_more_content() {
        let expected = answer.read_line()?;
        if !output.has_more_content() {
            return Err(Reject::wrong_answer(format!(
                "output ended after {} line(s), expected more",
                matched
            )));
        }
        let got = output.read_line()?;
        trace!(line = matched + 1, "comparing lines");
        if got != expected {
            return Err(Reject::wrong_answer(format!(
                "line {} differs: expected {:?}, got {:?}",
                matched + 1,
                expected,
                got
            )));
        }
        matched += 1;
    }

    if output.has_more_content() {
        return Err(Reject::presentation(format!(
            "output continues past the expected {} line(s)",
            matched
        )));
    }
    Ok(format!("{} line(s)", matched))
}

/// Compare the contestant output against the answer token by token,
/// ignoring whitespace layout (the classic word compare).
///
/// The first differing token yields `WRONG_ANSWER` with its index and both
/// values. Too few output tokens is `WRONG_ANSWER`; too many is
/// `PRESENTATION_ERROR`. Succeeds with the matched token count.
pub fn compare_tokens(
    output: &mut TokenStream,
    answer: &mut TokenStream,
) -> Result<String, Reject> {
    let mut matched = 0usize;

    while answer.has_more_content() {
        let expected = answer.read_token()?;
        if !output.has_more_content() {
            return Err(Reject::wrong_answer(format!(
                "output ended after {} token(s), expected more",
                matched
            )));
        }
        let got = output.read_token()?;
        if got != expected {
            return Err(Reject::wrong_answer(format!(
                "token {} differs: expected {:?}, got {:?}",
                matched + 1,
                expected,
                got
            )));
        }
        matched += 1;
    }

    if output.has_more_content() {
        return Err(Reject::presentation(format!(
            "output continues past the expected {} token(s)",
            matched
        )));
    }
    Ok(format!("{} token(s)", matched))
}
