//! Verdict types for validation and checking runs
//!
//! A verdict is the final classified outcome of one run: a machine code the
//! harness parses, a fixed exit code, and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of a validator or checker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// The input is well-formed / the output is accepted.
    Ok,
    /// The contestant's output is wrong.
    WrongAnswer,
    /// The contestant's output is malformed (premature end, trailing
    /// garbage) rather than wrong in value.
    PresentationError,
    /// A judge-side defect: malformed candidate input, malformed reference
    /// answer, or a contract misuse in the checker/validator itself. Never
    /// attributed to the contestant.
    Fail,
}

impl Verdict {
    /// The machine code the harness matches on.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::WrongAnswer => "WRONG_ANSWER",
            Self::PresentationError => "PRESENTATION_ERROR",
            Self::Fail => "FAIL",
        }
    }

    /// The process exit code the harness maps back to this verdict.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::WrongAnswer => 1,
            Self::PresentationError => 2,
            Self::Fail => 3,
        }
    }

    /// Whether the run succeeded.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Whether the harness must treat this as a judge-side defect instead of
    /// a contestant-side outcome.
    pub fn is_judge_fault(&self) -> bool {
        matches!(self, Self::Fail)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}
