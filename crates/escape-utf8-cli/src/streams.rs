//! Stream acquisition: each endpoint is either an owned file handle or one
//! of the process's standard streams.
//!
//! The distinction is carried in the type rather than an ownership flag:
//! the `File` variants own their handle and release it on drop, on every
//! exit path; the standard-stream variants borrow process-owned resources
//! that need no release.

use std::fs::File;
use std::io::{self, Read, Stdin, Stdout, Write};

/// Input endpoint: an opened file or standard input.
pub enum Input {
    Stdin(Stdin),
    File(File),
}

impl Input {
    /// Opens `path` for reading, or wraps stdin when no path was given.
    pub fn open(path: Option<&str>) -> io::Result<Self> {
        match path {
            Some(path) => File::open(path).map(Self::File),
            None => Ok(Self::Stdin(io::stdin())),
        }
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(stdin) => stdin.read(buf),
            Self::File(file) => file.read(buf),
        }
    }
}

/// Output endpoint: a created file or standard output.
pub enum Output {
    Stdout(Stdout),
    File(File),
}

impl Output {
    /// Creates `path` for writing (truncating an existing file), or wraps
    /// stdout when no path was given.
    pub fn create(path: Option<&str>) -> io::Result<Self> {
        match path {
            Some(path) => File::create(path).map(Self::File),
            None => Ok(Self::Stdout(io::stdout())),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(stdout) => stdout.write(buf),
            Self::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(stdout) => stdout.flush(),
            Self::File(file) => file.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;

    use super::{Input, Output};

    #[test]
    fn no_path_means_standard_streams() {
        assert!(matches!(Input::open(None).unwrap(), Input::Stdin(_)));
        assert!(matches!(Output::create(None).unwrap(), Output::Stdout(_)));
    }

    #[test]
    fn missing_input_file_is_an_error() {
        assert!(Input::open(Some("/nonexistent/escape-utf8-input")).is_err());
    }

    #[test]
    fn output_file_is_created_and_truncated() {
        let path = std::env::temp_dir().join(format!("escape-utf8-streams-{}", std::process::id()));
        let path = path.to_str().unwrap();

        let mut out = Output::create(Some(path)).unwrap();
        out.write_all(b"first run, longer content").unwrap();
        drop(out);

        let mut out = Output::create(Some(path)).unwrap();
        out.write_all(b"second").unwrap();
        drop(out);

        assert_eq!(fs::read(path).unwrap(), b"second");
        fs::remove_file(path).unwrap();
    }
}
