//! End-to-end checks of the public transcoding API, byte for byte.

use escape_utf8::{TranscodeError, transcode};
use quickcheck_macros::quickcheck;

fn run(input: &[u8]) -> Result<(Vec<u8>, u64), TranscodeError> {
    let mut output = Vec::new();
    let consumed = transcode(input, &mut output)?;
    Ok((output, consumed))
}

fn is_passthrough(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e | b'\t' | b'\n')
}

fn expected_escape_len(code: u32) -> usize {
    match code {
        0..=0xffff => 6,
        0x1_0000..=0xf_ffff => 7,
        _ => 8,
    }
}

#[test]
fn documented_example_hi_ntilde_bang() {
    let (output, consumed) = run(&[0x68, 0x69, 0xc3, 0xb1, 0x21]).unwrap();
    assert_eq!(output, b"hi\\u00f1!");
    assert_eq!(consumed, 5);
}

#[test]
fn documented_example_truncated_three_byte_lead() {
    let mut output = Vec::new();
    let err = transcode(&[0xe2, 0x82][..], &mut output).unwrap_err();
    assert!(output.is_empty());
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn two_byte_lead_at_eof_is_not_success() {
    let err = run(&[0xc2]).unwrap_err();
    assert!(err.is_invalid_utf8());
}

#[test]
fn empty_input_is_a_clean_success() {
    let (output, consumed) = run(&[]).unwrap();
    assert!(output.is_empty());
    assert_eq!(consumed, 0);
}

#[test]
fn mixed_document_transcodes_byte_exact() {
    // Tab and newline survive; the euro sign, an emoji, and DEL do not.
    let input = "price:\t"
        .bytes()
        .chain("€100\n".bytes())
        .chain([0x7f])
        .chain("😂".bytes())
        .collect::<Vec<u8>>();
    let (output, consumed) = run(&input).unwrap();
    assert_eq!(
        output,
        b"price:\t\\u20ac100\n\\u007f\\u1f602"
    );
    assert_eq!(consumed, input.len() as u64);
}

#[quickcheck]
fn valid_utf8_always_transcodes_to_pure_ascii(text: String) -> bool {
    let (output, consumed) = run(text.as_bytes()).unwrap();
    output.is_ascii() && consumed == text.len() as u64
}

#[quickcheck]
fn passthrough_bytes_are_an_identity(bytes: Vec<u8>) -> bool {
    let kept: Vec<u8> = bytes.into_iter().filter(|&b| is_passthrough(b)).collect();
    let (output, _) = run(&kept).unwrap();
    output == kept
}

#[quickcheck]
fn escape_width_law_holds_for_every_char(c: char) -> bool {
    let code = c as u32;
    if code < 0x80 {
        // Might be passthrough; the width law only covers escapes.
        return true;
    }
    let (output, _) = run(c.to_string().as_bytes()).unwrap();
    output.len() == expected_escape_len(code)
}
