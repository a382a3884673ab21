//! The forward-only token stream
//!
//! The whole stream is held in memory and walked by a byte cursor that never
//! rewinds. Reads are the only way to move the cursor; once `expect_eof`
//! confirms the end, any further read is an error.

use crate::error::StreamError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::Path;

/// Which party a stream belongs to.
///
/// The role decides who is blamed when a read fails: a broken answer stream
/// is a judge-side defect, a broken output stream is the contestant's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamRole {
    /// The problem input handed to the solution.
    Input,
    /// The contestant's produced output.
    Output,
    /// The reference answer.
    Answer,
    /// A candidate testcase under validation.
    Candidate,
}

impl fmt::Display for StreamRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Answer => "answer",
            Self::Candidate => "candidate",
        };
        f.write_str(name)
    }
}

/// How much whitespace slack the reader tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Validator mode. Lines must not carry trailing whitespace, the final
    /// newline is required, token reads accept exactly one separator byte,
    /// and `expect_eof` demands the cursor sit on the true last byte.
    Strict,
    /// Checker mode. Token reads skip any whitespace run, a missing final
    /// newline is tolerated, and `expect_eof` ignores trailing whitespace.
    Lenient,
}

/// A cursor position, for diagnostics. Lines and columns are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub byte: usize,
}

impl Position {
    /// The position before anything has been read.
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            byte: 0,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

fn is_ws(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// A positioned, forward-only reader over structured text input.
#[derive(Debug)]
pub struct TokenStream {
    data: Vec<u8>,
    cursor: usize,
    line: usize,
    column: usize,
    role: StreamRole,
    strictness: Strictness,
    eof_confirmed: bool,
}

impl TokenStream {
    /// Open a stream over a byte buffer.
    pub fn from_bytes(data: impl Into<Vec<u8>>, role: StreamRole, strictness: Strictness) -> Self {
        Self {
            data: data.into(),
            cursor: 0,
            line: 1,
            column: 1,
            role,
            strictness,
            eof_confirmed: false,
        }
    }

    /// Open a stream over a string slice.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(data: &str, role: StreamRole, strictness: Strictness) -> Self {
        Self::from_bytes(data.as_bytes().to_vec(), role, strictness)
    }

    /// Open a stream over the contents of a file.
    pub fn open(path: &Path, role: StreamRole, strictness: Strictness) -> Result<Self, StreamError> {
        let data = std::fs::read(path).map_err(|err| StreamError::Open {
            role,
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self::from_bytes(data, role, strictness))
    }

    /// Open a stream over everything available on standard input.
    pub fn from_stdin(role: StreamRole, strictness: Strictness) -> Result<Self, StreamError> {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .map_err(|err| StreamError::Open {
                role,
                path: "<stdin>".to_string(),
                reason: err.to_string(),
            })?;
        Ok(Self::from_bytes(data, role, strictness))
    }

    pub fn role(&self) -> StreamRole {
        self.role
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// The position of the next unread byte.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            byte: self.cursor,
        }
    }

    /// Whether the raw cursor sits at the end of the data.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.data.len()
    }

    /// Whether meaningful content remains. In lenient mode trailing
    /// whitespace does not count as content.
    pub fn has_more_content(&self) -> bool {
        match self.strictness {
            Strictness::Strict => !self.is_exhausted(),
            Strictness::Lenient => self.data[self.cursor..].iter().any(|b| !is_ws(*b)),
        }
    }

    /// Read the next line, consuming its terminating newline.
    ///
    /// Strict mode rejects trailing whitespace on the line (including a
    /// carriage return) and requires the newline to be present; lenient mode
    /// strips one trailing `\r` and accepts an unterminated last line.
    pub fn read_line(&mut self) -> Result<String, StreamError> {
        self.check_live("a line")?;
        if self.is_exhausted() {
            return Err(StreamError::UnexpectedEof {
                role: self.role,
                wanted: "a line",
                position: self.position(),
            });
        }

        let rest = &self.data[self.cursor..];
        let (content_len, consumed) = match rest.iter().position(|b| *b == b'\n') {
            Some(nl) => (nl, nl + 1),
            None => {
                if self.strictness == Strictness::Strict {
                    return Err(StreamError::MissingFinalNewline { role: self.role });
                }
                (rest.len(), rest.len())
            }
        };

        let mut content = &rest[..content_len];
        match self.strictness {
            Strictness::Strict => {
                if content.last().map_or(false, |b| is_ws(*b)) {
                    // The line may have started mid-way through token reads,
                    // so the offending column counts from self.column.
                    return Err(StreamError::TrailingWhitespace {
                        role: self.role,
                        position: Position {
                            line: self.line,
                            column: self.column + content.len() - 1,
                            byte: self.cursor + content.len() - 1,
                        },
                    });
                }
            }
            Strictness::Lenient => {
                if content.last() == Some(&b'\r') {
                    content = &content[..content.len() - 1];
                }
            }
        }

        let value = String::from_utf8_lossy(content).into_owned();
        self.advance(consumed);
        Ok(value)
    }

    /// Consume exactly one newline byte. Strict validators use this to pin
    /// down line structure between token reads.
    pub fn read_newline(&mut self) -> Result<(), StreamError> {
        self.check_live("a newline")?;
        if self.is_exhausted() {
            return Err(StreamError::UnexpectedEof {
                role: self.role,
                wanted: "a newline",
                position: self.position(),
            });
        }
        if self.data[self.cursor] != b'\n' {
            return Err(StreamError::ExpectedNewline {
                role: self.role,
                position: self.position(),
            });
        }
        self.advance(1);
        Ok(())
    }

    /// Read the next whitespace-delimited token.
    pub fn read_token(&mut self) -> Result<String, StreamError> {
        self.read_token_at("a token").map(|(token, _)| token)
    }

    /// Read the next token as an `i64` and require it to lie in `range`.
    ///
    /// The accepted format is the canonical one: an optional `-`, then
    /// digits, with no leading zeros and no `+` sign. Anything else is an
    /// `InvalidInteger`, even when a looser parse would succeed.
    pub fn read_int(&mut self, range: RangeInclusive<i64>) -> Result<i64, StreamError> {
        let (token, position) = self.read_token_at("an integer")?;

        if !canonical_integer(&token) {
            return Err(StreamError::InvalidInteger {
                role: self.role,
                token,
                position,
            });
        }
        let value: i64 = token.parse().map_err(|_| StreamError::InvalidInteger {
            role: self.role,
            token: token.clone(),
            position,
        })?;

        if !range.contains(&value) {
            return Err(StreamError::OutOfRange {
                role: self.role,
                value,
                low: *range.start(),
                high: *range.end(),
                position,
            });
        }
        Ok(value)
    }

    /// Confirm that the true end of the stream has been reached.
    ///
    /// Strict mode requires the cursor to already sit at the last byte and
    /// the data, if any, to end with a newline; lenient mode first skips any
    /// trailing whitespace and blank lines. Succeeds idempotently once
    /// confirmed.
    pub fn expect_eof(&mut self) -> Result<(), StreamError> {
        if self.eof_confirmed {
            return Ok(());
        }
        if self.strictness == Strictness::Lenient {
            self.skip_whitespace();
        }
        if !self.is_exhausted() {
            return Err(StreamError::TrailingData {
                role: self.role,
                position: self.position(),
            });
        }
        if self.strictness == Strictness::Strict
            && !self.data.is_empty()
            && self.data.last() != Some(&b'\n')
        {
            return Err(StreamError::MissingFinalNewline { role: self.role });
        }
        self.eof_confirmed = true;
        Ok(())
    }

    fn check_live(&self, wanted: &'static str) -> Result<(), StreamError> {
        if self.eof_confirmed {
            return Err(StreamError::ReadPastEof {
                role: self.role,
                wanted,
            });
        }
        Ok(())
    }

    fn read_token_at(&mut self, wanted: &'static str) -> Result<(String, Position), StreamError> {
        self.check_live(wanted)?;

        match self.strictness {
            Strictness::Lenient => self.skip_whitespace(),
            Strictness::Strict => {
                if !self.is_exhausted() && is_ws(self.data[self.cursor]) {
                    // A separator only separates: nothing may precede the
                    // first byte of the stream.
                    if self.cursor == 0 {
                        return Err(StreamError::ExtraWhitespace {
                            role: self.role,
                            position: self.position(),
                        });
                    }
                    self.advance(1);
                    if !self.is_exhausted() && is_ws(self.data[self.cursor]) {
                        return Err(StreamError::ExtraWhitespace {
                            role: self.role,
                            position: self.position(),
                        });
                    }
                }
            }
        }

        if self.is_exhausted() {
            return Err(StreamError::UnexpectedEof {
                role: self.role,
                wanted,
                position: self.position(),
            });
        }

        let start = self.position();
        let rest = &self.data[self.cursor..];
        let len = rest
            .iter()
            .position(|b| is_ws(*b))
            .unwrap_or(rest.len());
        let token = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.advance(len);
        Ok((token, start))
    }

    fn skip_whitespace(&mut self) {
        while !self.is_exhausted() && is_ws(self.data[self.cursor]) {
            self.advance(1);
        }
    }

    /// Move the cursor forward, keeping the line/column bookkeeping honest.
    fn advance(&mut self, count: usize) {
        for _ in 0..count {
            let byte = self.data[self.cursor];
            self.cursor += 1;
            if byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

fn canonical_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    // "-0" is not canonical.
    !(token.starts_with('-') && digits == "0")
}
