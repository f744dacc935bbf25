//! Command-line grammar: an optional input file and an optional output
//! file, plus help and version flags.
//!
//! Valid shapes:
//! - no arguments: stdin to stdout
//! - `escape INPUTFILE`
//! - `escape -o OUTPUTFILE` (also `-oOUTPUTFILE`, `--output OUTPUTFILE`,
//!   `--output=OUTPUTFILE`)
//! - `escape INPUTFILE -o OUTPUTFILE`, in either order
//! - `escape -h | --help`, `escape -v | --version`
//!
//! A lone `-o` with no value is a usage error, not an input filename.

use std::ffi::OsString;

use clap::{App, Arg};

const ABOUT: &str = "Transform UTF-8 text to a representation in ASCII.";

const AFTER_HELP: &str = "\
Reads a single piece of text, either from a file or from stdin, and writes \
it out as plain ASCII (bytes 0 to 127). Printable ASCII characters pass \
through unchanged; every other character is written in escaped form as 6 \
to 8 ASCII characters. For example, U+00F1 (lowercase n with a tilde) \
becomes the 6-character string \\u00f1, and U+1F602 (face with tears \
of joy) becomes the 7-character string \\u1f602.";

/// Parsed invocation: where to read from and where to write to. `None`
/// means the corresponding standard stream.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub input: Option<String>,
    pub output: Option<String>,
}

fn app() -> App<'static, 'static> {
    App::new("escape")
        .version(env!("CARGO_PKG_VERSION"))
        .version_short("v")
        .about(ABOUT)
        .after_help(AFTER_HELP)
        .arg(
            Arg::with_name("INPUTFILE")
                .help("Path to the input file; input is read from stdin when omitted")
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("OUTPUTFILE")
                .takes_value(true)
                .help(
                    "Write output to this file instead of stdout; created if \
                     missing, overwritten otherwise",
                ),
        )
}

/// Parses an argv-shaped iterator. Help and version requests surface as
/// `clap` errors with the matching kind, carrying the text to print.
pub fn parse_from<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = app().get_matches_from_safe(args)?;
    Ok(Invocation {
        input: matches.value_of("INPUTFILE").map(str::to_owned),
        output: matches.value_of("output").map(str::to_owned),
    })
}
