//! Example validator: every testcase of the example problem must start with
//! the literal prefix "example" and contain nothing after its first line.
//!
//! The harness invokes this on a raw candidate input before it is fed to a
//! solution, and maps the exit code back to a verdict.

use clap::Parser;
use shinpan_check::{ensure, report, run_validator, Reject};
use shinpan_stream::{Strictness, StreamRole, TokenStream};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prefix-validator")]
#[command(about = "validate that a testcase starts with the \"example\" prefix", long_about = None)]
struct Args {
    /// path to the candidate testcase; reads standard input when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

fn run(args: Args) -> Result<String, Reject> {
    let stream = match &args.input {
        Some(path) => TokenStream::open(path, StreamRole::Candidate, Strictness::Strict)?,
        None => TokenStream::from_stdin(StreamRole::Candidate, Strictness::Strict)?,
    };

    run_validator(stream, |v| {
        let first = v.read_line()?;
        ensure(
            first.starts_with("example"),
            format!("testcase must start with \"example\", got {:?}", first),
        )
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    report(run(Args::parse()))
}
