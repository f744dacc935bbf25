//! The decode-validate-escape loop.
//!
//! Decoding and encoding run in lockstep: one character is decoded,
//! immediately rendered to its ASCII form, and written, with no buffering
//! beyond the current character. At every iteration boundary the output is
//! a byte-exact transcoding of all input consumed so far; escapes are
//! written with a single `write_all` so a partial escape never lands in the
//! output.

use std::io::{Read, Write};

use crate::decoder::Utf8Decoder;
use crate::error::TranscodeError;
use crate::escape_buffer::EscapeBuffer;

/// Bytes copied to the output unchanged: printable ASCII plus tab and line
/// feed. DEL (0x7f) is deliberately excluded and always escaped.
fn is_passthrough(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e | b'\t' | b'\n')
}

/// Single-pass transcoder over a pair of byte streams.
///
/// The transcoder owns both streams for the duration of the run and drops
/// them on every exit path. It performs blocking reads and writes; there is
/// no concurrency and no retry.
pub struct Transcoder<R, W> {
    decoder: Utf8Decoder<R>,
    output: W,
    escape: EscapeBuffer,
}

impl<R: Read, W: Write> Transcoder<R, W> {
    /// Wraps an opened input and output stream. Neither stream is buffered
    /// here; callers reading from files or pipes should hand in a
    /// `BufReader`/`BufWriter`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            decoder: Utf8Decoder::new(input),
            output,
            escape: EscapeBuffer::new(),
        }
    }

    /// Runs the loop to completion and returns the number of input bytes
    /// consumed.
    ///
    /// The output is flushed on every exit path, and a write or flush
    /// failure takes precedence over an input-side error in the returned
    /// diagnosis.
    ///
    /// # Errors
    ///
    /// Returns a [`TranscodeError`] when the input is not well-formed
    /// UTF-8, when the input stream fails for a reason other than clean
    /// end-of-input, or when the output stream rejects a write.
    pub fn run(mut self) -> Result<u64, TranscodeError> {
        let result = self.transcode();
        match self.output.flush() {
            Err(source) => Err(TranscodeError::Write { source }),
            Ok(()) => result.map(|()| self.decoder.bytes_consumed()),
        }
    }

    fn transcode(&mut self) -> Result<(), TranscodeError> {
        while let Some(code) = self.decoder.next_code_point()? {
            let passthrough;
            let rendered: &[u8] = match u8::try_from(code) {
                Ok(byte) if is_passthrough(byte) => {
                    passthrough = [byte];
                    &passthrough
                }
                _ => self.escape.render(code),
            };
            self.output
                .write_all(rendered)
                .map_err(|source| TranscodeError::Write { source })?;
        }
        Ok(())
    }
}

/// One-shot convenience wrapper: transcodes `input` to `output` and returns
/// the number of input bytes consumed.
///
/// # Errors
///
/// See [`Transcoder::run`].
pub fn transcode<R: Read, W: Write>(input: R, output: W) -> Result<u64, TranscodeError> {
    Transcoder::new(input, output).run()
}
