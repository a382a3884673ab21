//! Example checker: the contestant's single output line must equal the
//! single reference-answer line exactly, with nothing trailing it.
//!
//! The harness invokes this after the solution under test has produced its
//! output: `line-checker <INPUT> <OUTPUT> <ANSWER>`.

use clap::Parser;
use shinpan_check::{report, run_checker, Reject};
use shinpan_stream::{Strictness, StreamRole, TokenStream};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "line-checker")]
#[command(about = "check a single output line against the reference answer", long_about = None)]
struct Args {
    /// path to the problem input
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// path to the contestant's output
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// path to the reference answer
    #[arg(value_name = "ANSWER")]
    answer: PathBuf,
}

fn run(args: Args) -> Result<String, Reject> {
    let input = TokenStream::open(&args.input, StreamRole::Input, Strictness::Lenient)?;
    let output = TokenStream::open(&args.output, StreamRole::Output, Strictness::Lenient)?;
    let answer = TokenStream::open(&args.answer, StreamRole::Answer, Strictness::Lenient)?;

    run_checker(input, output, answer, |chk| {
        let got = chk.output().read_line()?;
        let expected = chk.answer().read_line()?;
        if got != expected {
            return Err(Reject::wrong_answer(format!(
                "expected {:?}, got {:?}",
                expected, got
            )));
        }
        chk.expect_no_trailing_output()?;
        Ok(format!("matched {:?}", expected))
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    report(run(Args::parse()))
}
