//! Fixed-buffer rendering of code points as ASCII `\u` escapes.
//!
//! One escape is a reverse solidus, a lowercase `u`, and the code point in
//! lowercase hexadecimal, zero-padded on the left to a minimum of four
//! digits. Values at or above 0x10000 take five or six digits, so the full
//! escape is always 6, 7, or 8 bytes. This is a hard output contract, not a
//! formatting preference; tests pin it byte for byte.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders escapes into a reused 8-byte buffer.
///
/// The first two bytes hold the `\u` prefix permanently; each call rewrites
/// the digit region in place and returns a borrowed slice of the exact
/// escape. The slice is only valid until the next call, which matches how
/// the driver loop uses it: render, write, forget.
pub(crate) struct EscapeBuffer {
    buf: [u8; 8],
}

impl EscapeBuffer {
    pub fn new() -> Self {
        let mut buf = [0u8; 8];
        buf[0] = b'\\';
        buf[1] = b'u';
        Self { buf }
    }

    /// Renders the escape for `code`, which must be at most 0x10FFFF.
    pub fn render(&mut self, code: u32) -> &[u8] {
        debug_assert!(code <= 0x10_ffff);
        let digits = match code {
            0..=0xffff => 4,
            0x1_0000..=0xf_ffff => 5,
            _ => 6,
        };
        let mut rest = code;
        for slot in self.buf[2..2 + digits].iter_mut().rev() {
            *slot = HEX_DIGITS[(rest & 0xf) as usize];
            rest >>= 4;
        }
        &self.buf[..2 + digits]
    }
}
