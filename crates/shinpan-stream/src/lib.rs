//! Shinpan Stream: Tokenized Reading for Validators and Checkers
//!
//! A [`TokenStream`] is a forward-only cursor over the full contents of one
//! judging stream (a candidate testcase, a contestant's output, or a
//! reference answer). It hands out lines, tokens, and bounded integers, keeps
//! track of the position for diagnostics, and can confirm that the true end
//! of the stream has been reached.
//!
//! Every stream carries a [`StreamRole`] so that a failure can be attributed
//! to the right party, and a [`Strictness`] mode that decides how much
//! whitespace slack the reader tolerates.
//!
//! # Example
//!
//! ```
//! use shinpan_stream::{Strictness, StreamRole, TokenStream};
//!
//! let mut stream = TokenStream::from_str("example 1 2\n", StreamRole::Candidate, Strictness::Strict);
//! let line = stream.read_line().unwrap();
//! assert_eq!(line, "example 1 2");
//! stream.expect_eof().unwrap();
//! ```

pub mod error;
pub mod stream;

pub use error::StreamError;
pub use stream::{Position, Strictness, StreamRole, TokenStream};
