//! Byte-oriented UTF-8 decoding with strict range validation.
//!
//! The decoder pulls one logical character (1 to 4 bytes) at a time out of
//! a byte stream and validates it against RFC 3629's table of legal value
//! ranges, rejecting overlong encodings and values above 0x10FFFF. It does
//! not reject surrogate code points (0xD800 through 0xDFFF); the escape
//! format can represent them and stricter filtering is a policy decision
//! left to callers.

use std::io::{self, ErrorKind, Read};

use crate::error::TranscodeError;

/// Pulls validated Unicode code points out of a byte stream, one at a time.
///
/// The decoder performs no lookahead beyond the bytes of the character it
/// is currently assembling, and keeps a running count of successfully
/// consumed input bytes for diagnostics.
pub(crate) struct Utf8Decoder<R> {
    input: R,
    consumed: u64,
}

impl<R: Read> Utf8Decoder<R> {
    pub fn new(input: R) -> Self {
        Self { input, consumed: 0 }
    }

    /// Count of input bytes consumed so far.
    pub fn bytes_consumed(&self) -> u64 {
        self.consumed
    }

    /// Reads the next byte, retrying on `Interrupted`. `Ok(None)` is clean
    /// end-of-input.
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.consumed += 1;
                    return Ok(Some(byte[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Decodes the next code point. `Ok(None)` signals end of input on a
    /// character boundary.
    ///
    /// A stream failure mid-character maps to `TruncatedSequence` rather
    /// than `Read`: as far as the output is concerned, the character never
    /// arrived whole.
    pub fn next_code_point(&mut self) -> Result<Option<u32>, TranscodeError> {
        let offset = self.consumed;
        let lead = match self.next_byte() {
            Ok(Some(byte)) => byte,
            Ok(None) => return Ok(None),
            Err(source) => return Err(TranscodeError::Read { source, offset }),
        };

        if lead < 0x80 {
            return Ok(Some(u32::from(lead)));
        }

        // The lead byte's high bits announce the sequence length; its low
        // 5/4/3 bits seed the accumulator.
        let (len, seed) = match lead {
            0xc0..=0xdf => (2, u32::from(lead & 0x1f)),
            0xe0..=0xef => (3, u32::from(lead & 0x0f)),
            0xf0..=0xf7 => (4, u32::from(lead & 0x07)),
            _ => return Err(TranscodeError::InvalidLeadByte { byte: lead, offset }),
        };

        let mut value = seed;
        for _ in 1..len {
            let byte = match self.next_byte() {
                Ok(Some(byte)) => byte,
                Ok(None) | Err(_) => {
                    return Err(TranscodeError::TruncatedSequence { len, offset });
                }
            };
            if byte & 0xc0 != 0x80 {
                return Err(TranscodeError::InvalidContinuationByte {
                    byte,
                    offset: self.consumed - 1,
                });
            }
            value = (value << 6) | u32::from(byte & 0x3f);
        }

        let in_range = match len {
            2 => (0x80..=0x7ff).contains(&value),
            3 => (0x800..=0xffff).contains(&value),
            _ => (0x1_0000..=0x10_ffff).contains(&value),
        };
        if !in_range {
            return Err(TranscodeError::OverlongOrOutOfRange { value, len, offset });
        }
        Ok(Some(value))
    }
}
