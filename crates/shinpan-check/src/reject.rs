//! Verdict termination as a typed value
//!
//! A [`Reject`] is the early-exit carrier: every piece of checking and
//! validation logic returns `Result<_, Reject>`, and a single top-level
//! dispatch point ([`crate::report`]) turns the final value into the emitted
//! verdict line and the process exit code. Nothing here aborts the process.

use crate::verdict::Verdict;
use shinpan_stream::{StreamError, StreamRole};
use std::fmt;

/// A terminal non-`OK` outcome: a verdict plus its diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reject {
    pub verdict: Verdict,
    pub message: String,
}

impl Reject {
    /// A judge-side failure (`FAIL`).
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Fail,
            message: message.into(),
        }
    }

    /// A contestant-side wrong answer (`WRONG_ANSWER`).
    pub fn wrong_answer(message: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::WrongAnswer,
            message: message.into(),
        }
    }

    /// A contestant-side formatting failure (`PRESENTATION_ERROR`).
    pub fn presentation(message: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::PresentationError,
            message: message.into(),
        }
    }
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.verdict.code(), self.message)
    }
}

impl std::error::Error for Reject {}

/// Stream failures are attributed by role: the contestant answers only for
/// the content of the output stream, everything else is a judge-side
/// defect. An unopenable file is always the harness's fault, whatever the
/// stream's role.
impl From<StreamError> for Reject {
    fn from(err: StreamError) -> Self {
        if matches!(err, StreamError::Open { .. }) {
            return Reject::fail(err.to_string());
        }
        match err.role() {
            StreamRole::Output => Reject::presentation(err.to_string()),
            StreamRole::Input | StreamRole::Answer | StreamRole::Candidate => {
                Reject::fail(err.to_string())
            }
        }
    }
}

/// Evaluate a constraint, rejecting with `FAIL` when it does not hold.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), Reject> {
    if condition {
        Ok(())
    } else {
        Err(Reject::fail(message))
    }
}

/// Formatted fail-fast assertion: `ensure!(cond, "bad value {v}")` returns
/// early from the enclosing function with a `FAIL` rejection when the
/// condition is false.
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $($arg:tt)*) => {
        if !$condition {
            return Err($crate::Reject::fail(format!($($arg)*)));
        }
    };
}
