//! `escape`: read UTF-8 text, write it back as pure ASCII with `\u`
//! escapes for everything non-ASCII or non-printable.

use std::io::{BufReader, BufWriter};
use std::process;

use clap::ErrorKind;
use escape_utf8::Transcoder;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod streams;

// The transcoder owns exit codes 0 through 3 (success, invalid UTF-8, read
// failure, write failure). The CLI layer adds its own above that range.
const EXIT_FILE_ERROR: i32 = 4;
const EXIT_USAGE_ERROR: i32 = 5;

fn main() {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    process::exit(run());
}

fn run() -> i32 {
    let invocation = match args::parse_from(std::env::args()) {
        Ok(invocation) => invocation,
        Err(err) if matches!(err.kind, ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed) => {
            println!("{}", err.message);
            return 0;
        }
        Err(err) => {
            eprintln!("{}", err.message);
            eprintln!("Use the --help option to see usage instructions.");
            return EXIT_USAGE_ERROR;
        }
    };

    let input = match streams::Input::open(invocation.input.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            let path = invocation.input.as_deref().unwrap_or("<stdin>");
            eprintln!("Failed to open input file \"{path}\": {err}");
            return EXIT_FILE_ERROR;
        }
    };
    let output = match streams::Output::create(invocation.output.as_deref()) {
        Ok(output) => output,
        Err(err) => {
            let path = invocation.output.as_deref().unwrap_or("<stdout>");
            eprintln!("Failed to open output file \"{path}\": {err}");
            return EXIT_FILE_ERROR;
        }
    };

    debug!(input = ?invocation.input, output = ?invocation.output, "streams opened");

    match Transcoder::new(BufReader::new(input), BufWriter::new(output)).run() {
        Ok(bytes) => {
            debug!(bytes, "transcoding finished");
            0
        }
        Err(err) => {
            // The escaped output may share the terminal with stderr and has
            // no trailing newline; start the diagnostic on its own line.
            eprintln!();
            eprintln!("{err}");
            err.exit_code()
        }
    }
}
