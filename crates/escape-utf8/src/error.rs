use std::io;

use thiserror::Error;

/// Everything that can cut a transcoding run short.
///
/// The four UTF-8 variants all collapse to the same user-facing outcome
/// ("the input is not valid UTF-8") but carry enough detail to point at the
/// offending byte. Offsets count input bytes from the start of the stream
/// and refer to the first byte of the offending character, except for
/// [`TranscodeError::InvalidContinuationByte`] which points at the bad byte
/// itself.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The first byte of a character matched none of the UTF-8 lead
    /// patterns (a stray continuation byte, or `11111xxx`).
    #[error("byte {offset}: invalid UTF-8 lead byte 0x{byte:02x}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Input offset of the offending byte.
        offset: u64,
    },

    /// A non-initial byte of a multi-byte sequence did not match `10xxxxxx`.
    #[error("byte {offset}: invalid UTF-8 continuation byte 0x{byte:02x}")]
    InvalidContinuationByte {
        /// The offending byte.
        byte: u8,
        /// Input offset of the offending byte.
        offset: u64,
    },

    /// A structurally well-formed sequence decoded to a value outside the
    /// legal range for its declared length.
    #[error("byte {offset}: overlong or out-of-range {len}-byte sequence (code point 0x{value:x})")]
    OverlongOrOutOfRange {
        /// The decoded value.
        value: u32,
        /// Declared sequence length in bytes.
        len: usize,
        /// Input offset of the sequence's lead byte.
        offset: u64,
    },

    /// The input stream ended (or failed) in the middle of a multi-byte
    /// sequence.
    #[error("byte {offset}: input ended inside a {len}-byte sequence")]
    TruncatedSequence {
        /// Declared sequence length in bytes.
        len: usize,
        /// Input offset of the sequence's lead byte.
        offset: u64,
    },

    /// The input stream failed on a character boundary, for a reason other
    /// than clean end-of-input.
    #[error("byte {offset}: failed to read from input")]
    Read {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
        /// Count of input bytes consumed before the failure.
        offset: u64,
    },

    /// The output stream rejected a write or a flush.
    #[error("failed to write to output")]
    Write {
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl TranscodeError {
    /// True for the variants that mean the input was not well-formed UTF-8.
    #[must_use]
    pub fn is_invalid_utf8(&self) -> bool {
        matches!(
            self,
            Self::InvalidLeadByte { .. }
                | Self::InvalidContinuationByte { .. }
                | Self::OverlongOrOutOfRange { .. }
                | Self::TruncatedSequence { .. }
        )
    }

    /// Process exit code for this failure: 1 for malformed UTF-8, 2 for an
    /// input read failure, 3 for an output write failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidLeadByte { .. }
            | Self::InvalidContinuationByte { .. }
            | Self::OverlongOrOutOfRange { .. }
            | Self::TruncatedSequence { .. } => 1,
            Self::Read { .. } => 2,
            Self::Write { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::TranscodeError;

    #[test]
    fn utf8_variants_share_an_outcome() {
        let errors = [
            TranscodeError::InvalidLeadByte { byte: 0x80, offset: 0 },
            TranscodeError::InvalidContinuationByte { byte: 0x28, offset: 1 },
            TranscodeError::OverlongOrOutOfRange { value: 0x2f, len: 2, offset: 0 },
            TranscodeError::TruncatedSequence { len: 3, offset: 0 },
        ];
        for err in errors {
            assert!(err.is_invalid_utf8());
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn io_variants_have_distinct_codes() {
        let read = TranscodeError::Read {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "gone"),
            offset: 12,
        };
        assert!(!read.is_invalid_utf8());
        assert_eq!(read.exit_code(), 2);

        let write = TranscodeError::Write {
            source: io::Error::new(io::ErrorKind::WriteZero, "full"),
        };
        assert!(!write.is_invalid_utf8());
        assert_eq!(write.exit_code(), 3);
    }

    #[test]
    fn messages_cite_the_byte_offset() {
        let err = TranscodeError::InvalidLeadByte { byte: 0xff, offset: 41 };
        assert_eq!(err.to_string(), "byte 41: invalid UTF-8 lead byte 0xff");
    }
}
