//! The checker framework
//!
//! A checker decides the verdict for one (input, contestant output,
//! reference answer) triple. It owns the three streams explicitly; failure
//! attribution is driven by each stream's role, so a broken answer file can
//! never cost the contestant.

use crate::reject::Reject;
use shinpan_stream::{StreamRole, TokenStream};
use tracing::debug;

/// One checking run over an (input, output, answer) triple.
#[derive(Debug)]
pub struct Checker {
    input: TokenStream,
    output: TokenStream,
    answer: TokenStream,
}

impl Checker {
    /// Wrap the three streams of one run. Roles must match: this is the
    /// contract that makes [`Reject`] attribution work.
    pub fn new(input: TokenStream, output: TokenStream, answer: TokenStream) -> Result<Self, Reject> {
        for (stream, expected) in [
            (&input, StreamRole::Input),
            (&output, StreamRole::Output),
            (&answer, StreamRole::Answer),
        ] {
            if stream.role() != expected {
                return Err(Reject::fail(format!(
                    "checker wired a {} stream where the {} stream belongs",
                    stream.role(),
                    expected
                )));
            }
        }
        Ok(Self {
            input,
            output,
            answer,
        })
    }

    /// The problem input. Checkers may read it partially or not at all.
    pub fn input(&mut self) -> &mut TokenStream {
        &mut self.input
    }

    /// The contestant's output.
    pub fn output(&mut self) -> &mut TokenStream {
        &mut self.output
    }

    /// The reference answer, treated as ground truth. A parse failure here
    /// surfaces as `FAIL`, never as a contestant verdict.
    pub fn answer(&mut self) -> &mut TokenStream {
        &mut self.answer
    }

    /// Reject outputs that emit the correct content followed by garbage.
    pub fn expect_no_trailing_output(&mut self) -> Result<(), Reject> {
        Ok(self.output.expect_eof()?)
    }
}

/// Run one checking triple through `body`. The body returns the `OK`
/// message; any rejection short-circuits. The returned value feeds
/// [`crate::report`].
pub fn run_checker<F>(
    input: TokenStream,
    output: TokenStream,
    answer: TokenStream,
    body: F,
) -> Result<String, Reject>
where
    F: FnOnce(&mut Checker) -> Result<String, Reject>,
{
    debug!("starting checking run");
    let mut checker = Checker::new(input, output, answer)?;
    let message = body(&mut checker)?;
    debug!("checking run accepted");
    Ok(message)
}
