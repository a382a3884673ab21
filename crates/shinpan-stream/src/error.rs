//! Structured stream reading errors
//!
//! Every variant names the stream it came from and, where it makes sense,
//! the position of the offending byte. The rendered message is the one-line
//! diagnostic a judging harness displays.

use crate::stream::{Position, StreamRole};
use thiserror::Error;

/// A failed read or end-of-stream check on a [`crate::TokenStream`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// The stream ran out of data while more was required.
    #[error("{role} stream: unexpected end of stream while reading {wanted} at {position}")]
    UnexpectedEof {
        role: StreamRole,
        wanted: &'static str,
        position: Position,
    },

    /// `expect_eof` was called but unread content remains.
    #[error("{role} stream: extra data at {position}, expected end of stream")]
    TrailingData { role: StreamRole, position: Position },

    /// A strict-mode line carried whitespace before its newline.
    #[error("{role} stream: trailing whitespace on line {}", position.line)]
    TrailingWhitespace { role: StreamRole, position: Position },

    /// A strict-mode stream did not terminate its last line with a newline.
    #[error("{role} stream: missing final newline")]
    MissingFinalNewline { role: StreamRole },

    /// `read_newline` found something other than a newline byte.
    #[error("{role} stream: expected a newline at {position}")]
    ExpectedNewline { role: StreamRole, position: Position },

    /// A strict-mode token read met whitespace where a token must begin:
    /// a run of separator bytes, or a separator at the start of the stream.
    #[error("{role} stream: unexpected whitespace at {position}, expected a token")]
    ExtraWhitespace { role: StreamRole, position: Position },

    /// A token that was required to be an integer is not one
    /// (bad characters, a leading `+`, leading zeros, or overflow).
    #[error("{role} stream: invalid integer token {token:?} at {position}")]
    InvalidInteger {
        role: StreamRole,
        token: String,
        position: Position,
    },

    /// A well-formed integer fell outside its declared bounds.
    #[error("{role} stream: integer {value} out of range [{low}, {high}] at {position}")]
    OutOfRange {
        role: StreamRole,
        value: i64,
        low: i64,
        high: i64,
        position: Position,
    },

    /// A read was requested after `expect_eof` already confirmed the end.
    /// This is a programming-contract misuse in the calling program.
    #[error("{role} stream: read of {wanted} requested past the confirmed end of stream")]
    ReadPastEof { role: StreamRole, wanted: &'static str },

    /// The stream's backing file could not be opened or read.
    #[error("{role} stream: cannot read {path}: {reason}")]
    Open {
        role: StreamRole,
        path: String,
        reason: String,
    },
}

impl StreamError {
    /// The stream this error was raised on.
    pub fn role(&self) -> StreamRole {
        match self {
            Self::UnexpectedEof { role, .. }
            | Self::TrailingData { role, .. }
            | Self::TrailingWhitespace { role, .. }
            | Self::MissingFinalNewline { role }
            | Self::ExpectedNewline { role, .. }
            | Self::ExtraWhitespace { role, .. }
            | Self::InvalidInteger { role, .. }
            | Self::OutOfRange { role, .. }
            | Self::ReadPastEof { role, .. }
            | Self::Open { role, .. } => *role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_single_line() {
        let err = StreamError::UnexpectedEof {
            role: StreamRole::Output,
            wanted: "a line",
            position: Position::start(),
        };
        let rendered = err.to_string();
        assert!(!rendered.contains('\n'));
        assert!(rendered.contains("output stream"));
    }

    #[test]
    fn test_role_accessor() {
        let err = StreamError::MissingFinalNewline {
            role: StreamRole::Answer,
        };
        assert_eq!(err.role(), StreamRole::Answer);
    }
}
