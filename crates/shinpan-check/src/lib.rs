//! Shinpan Check: Verdicts, Validators, and Checkers
//!
//! The verification subsystem of a judging pipeline. A **validator** decides
//! whether a candidate testcase conforms to its format contract; a
//! **checker** decides the verdict for one (input, output, answer) triple.
//! Both are stateless per invocation, single-pass, and fail fast: the first
//! violated constraint terminates the run with a [`Reject`], and a single
//! dispatch point ([`report`]) maps the outcome to the emitted verdict line
//! and the process exit code.
//!
//! # Example
//!
//! ```
//! use shinpan_check::{ensure, run_validator};
//! use shinpan_stream::{Strictness, StreamRole, TokenStream};
//!
//! let stream = TokenStream::from_str("example 1 2\n", StreamRole::Candidate, Strictness::Strict);
//! let outcome = run_validator(stream, |v| {
//!     let first = v.read_line()?;
//!     ensure(first.starts_with("example"), "testcase must start with \"example\"")
//! });
//! assert!(outcome.is_ok());
//! ```

pub mod checker;
pub mod compare;
pub mod reject;
pub mod validator;
pub mod verdict;

pub use checker::{run_checker, Checker};
pub use compare::{compare_lines, compare_tokens};
pub use reject::{ensure, Reject};
pub use validator::{run_validator, Validator};
pub use verdict::Verdict;

use std::process::ExitCode;

/// The single top-level dispatch point: emit the verdict line on the report
/// channel and map it to the process exit code.
///
/// Verdict lines go to stderr; in a judging pipeline stdout is reserved for
/// the solution's data path. The harness sees exactly one line,
/// `<CODE> <message>`.
pub fn report(outcome: Result<String, Reject>) -> ExitCode {
    let (verdict, message) = match outcome {
        Ok(message) => (Verdict::Ok, message),
        Err(reject) => (reject.verdict, reject.message),
    };
    eprintln!("{} {}", verdict.code(), message);
    ExitCode::from(verdict.exit_code())
}
