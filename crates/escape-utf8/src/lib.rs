//! Rewrites a stream of UTF-8 encoded text as pure ASCII.
//!
//! Printable ASCII (bytes 32 through 126) plus tab and line feed pass
//! through unchanged. Everything else, DEL included, is replaced by a `\u`
//! escape: a reverse solidus, a lowercase `u`, and the code point in
//! lowercase hexadecimal, zero-padded on the left to at least four digits.
//! Code points above 0xFFFF produce five or six digits, so every escape is
//! 6, 7, or 8 bytes long.
//!
//! The transcoder makes a single forward pass: it decodes one character,
//! validates it against the UTF-8 range rules (rejecting overlong and
//! out-of-range sequences), emits its ASCII form, and repeats. Input that is
//! not well-formed UTF-8 aborts the run with a typed error; whatever was
//! already written stays in the output.
//!
//! ```rust
//! use escape_utf8::transcode;
//!
//! let input: &[u8] = &[0x68, 0x69, 0xc3, 0xb1, 0x21];
//! let mut output = Vec::new();
//! let consumed = transcode(input, &mut output)?;
//! assert_eq!(output, b"hi\\u00f1!");
//! assert_eq!(consumed, 5);
//! # Ok::<(), escape_utf8::TranscodeError>(())
//! ```

mod decoder;
mod error;
mod escape_buffer;
mod transcoder;

pub use error::TranscodeError;
pub use transcoder::{Transcoder, transcode};
