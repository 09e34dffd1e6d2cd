use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use md2::crypto::self_test::{run_self_test, verify_known_answers, EMPTY_INPUT_DIGEST};
use md2::hex_dump::{dump, parse_digest, HexDumpMode};
use md2::io_utils::{read_all, InputSource};
use md2::{md2_digest, Md2Error, Result};

/// Computes the MD2 digest of a file or of standard input.
///
/// With no FILE, or when FILE is -, md2 reads standard input until EOF.
#[derive(Debug, Parser)]
#[command(name = "md2", version)]
struct Args {
    /// File to hash; reads standard input when omitted or "-".
    file: Option<String>,
    /// Test the hash function by computing md2("") and the RFC 1319 vectors.
    #[arg(short, long, conflicts_with_all = ["file", "check"])]
    test: bool,
    /// Print the digest with a space every 8 bytes.
    #[arg(short, long)]
    grouped: bool,
    /// Compare the digest with an expected hex value and fail on mismatch.
    #[arg(short, long, value_name = "HEX")]
    check: Option<String>,
    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

fn self_test() -> Result<()> {
    println!("md2 {}", env!("CARGO_PKG_VERSION"));

    let report = run_self_test();
    println!(
        "md2(\"\"):{} {}",
        dump(&report.digest, HexDumpMode::Canonical),
        if report.passed { "OK" } else { "NOT OK" }
    );
    if !report.passed {
        return Err(Md2Error::self_test_failed("", &EMPTY_INPUT_DIGEST, &report.digest));
    }

    let count = verify_known_answers()?;
    println!("RFC 1319 test suite: {} vectors OK", count);
    Ok(())
}

fn hash_input(args: &Args) -> Result<()> {
    let expected = args.check.as_deref().map(parse_digest).transpose()?;

    let source = InputSource::from_arg(args.file.as_deref());
    let data = read_all(&source)?;
    let digest = md2_digest(&data);
    info!("Hashed {} bytes from {}", data.len(), source);

    let mode = if args.grouped { HexDumpMode::Grouped } else { HexDumpMode::Canonical };
    let text = dump(&digest, mode);
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }

    if let Some(expected) = expected {
        if expected != digest {
            return Err(Md2Error::digest_mismatch(&expected, &digest));
        }
        debug!("Digest matches expected value");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let result = if args.test { self_test() } else { hash_input(&args) };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
