//! End-to-end validator scenarios for the example problem: the first line of
//! a testcase must start with the literal prefix "example", and no trailing
//! content may remain.

use shinpan_check::{ensure, run_validator, Reject, Verdict};
use shinpan_stream::{Strictness, StreamRole, TokenStream};

fn validate_prefix(data: &str) -> Result<String, Reject> {
    let stream = TokenStream::from_str(data, StreamRole::Candidate, Strictness::Strict);
    run_validator(stream, |v| {
        let first = v.read_line()?;
        ensure(
            first.starts_with("example"),
            format!("testcase must start with \"example\", got {:?}", first),
        )
    })
}

#[test]
fn test_well_formed_testcase_passes() {
    let outcome = validate_prefix("example 1 2\n");
    assert_eq!(outcome.unwrap(), "testcase is valid");
}

#[test]
fn test_wrong_prefix_fails_with_diagnostic() {
    let err = validate_prefix("wrongprefix 1 2\n").unwrap_err();
    assert_eq!(err.verdict, Verdict::Fail);
    assert!(err.message.contains("example"));
    assert!(err.message.contains("wrongprefix"));
}

#[test]
fn test_prefix_only_line_passes() {
    // The contract is one line starting with the prefix; a line that is
    // exactly the prefix satisfies it, provided nothing trails it.
    assert!(validate_prefix("example\n").is_ok());
}

#[test]
fn test_trailing_line_fails_eof_check() {
    let err = validate_prefix("example 1 2\nleftover\n").unwrap_err();
    assert_eq!(err.verdict, Verdict::Fail);
}

#[test]
fn test_missing_final_newline_fails() {
    let err = validate_prefix("example 1 2").unwrap_err();
    assert_eq!(err.verdict, Verdict::Fail);
}

#[test]
fn test_empty_testcase_fails() {
    let err = validate_prefix("").unwrap_err();
    assert_eq!(err.verdict, Verdict::Fail);
}

#[test]
fn test_validation_is_idempotent() {
    let data = "wrongprefix 1 2\n";
    let first = validate_prefix(data).unwrap_err();
    let second = validate_prefix(data).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_range_constrained_testcase() {
    // A richer contract: "example", then two integers in [1, 100] on the
    // same line.
    let validate = |data: &str| {
        let stream = TokenStream::from_str(data, StreamRole::Candidate, Strictness::Strict);
        run_validator(stream, |v| {
            let tag = v.read_token()?;
            v.ensure(tag == "example", "first token must be \"example\"")?;
            let a = v.read_int(1..=100)?;
            let b = v.read_int(1..=100)?;
            v.ensure(a <= b, format!("expected a <= b, got {} > {}", a, b))?;
            v.read_newline()
        })
    };

    assert!(validate("example 1 2\n").is_ok());
    assert_eq!(validate("example 2 1\n").unwrap_err().verdict, Verdict::Fail);
    assert_eq!(
        validate("example 0 2\n").unwrap_err().verdict,
        Verdict::Fail
    );
    assert_eq!(
        validate("example 1 2 3\n").unwrap_err().verdict,
        Verdict::Fail
    );
}
