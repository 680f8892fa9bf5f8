//! Detecting and transcoding the Unicode encoding of a JSON document.
//!
//! `serde_json` reads UTF-8 only. A document may also arrive as UTF-16 or
//! UTF-32 in either byte order; the encoding is taken from a byte-order mark
//! when there is one, and otherwise from where NUL bytes fall in the first
//! four bytes (RFC 4627 §3), since the first two characters of JSON text are
//! always ASCII.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    Utf8,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf32Be => "UTF-32BE",
            Encoding::Utf32Le => "UTF-32LE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TranscodeError {
    #[error("{0} text ends in a partial code unit")]
    Truncated(Encoding),
    #[error("invalid {0} text")]
    Invalid(Encoding),
}

/// The encoding of `data` and the length of its byte-order mark.
pub(crate) fn sniff(data: &[u8]) -> (Encoding, usize) {
    // UTF-32LE's mark starts with UTF-16LE's, so it goes first
    match data {
        [0xEF, 0xBB, 0xBF, ..] => return (Encoding::Utf8, 3),
        [0x00, 0x00, 0xFE, 0xFF, ..] => return (Encoding::Utf32Be, 4),
        [0xFF, 0xFE, 0x00, 0x00, ..] => return (Encoding::Utf32Le, 4),
        [0xFE, 0xFF, ..] => return (Encoding::Utf16Be, 2),
        [0xFF, 0xFE, ..] => return (Encoding::Utf16Le, 2),
        _ => {}
    }
    let encoding = match data {
        [0, 0, 0, a, ..] if *a != 0 => Encoding::Utf32Be,
        [a, 0, 0, 0, ..] if *a != 0 => Encoding::Utf32Le,
        [0, a, 0, b, ..] if *a != 0 && *b != 0 => Encoding::Utf16Be,
        [a, 0, b, 0, ..] if *a != 0 && *b != 0 => Encoding::Utf16Le,
        [0, a] if *a != 0 => Encoding::Utf16Be,
        [a, 0] if *a != 0 => Encoding::Utf16Le,
        _ => Encoding::Utf8,
    };
    (encoding, 0)
}

/// `data` as UTF-8 bytes, without any byte-order mark. UTF-8 input is
/// borrowed; other encodings are decoded into a new buffer.
pub(crate) fn to_utf8(data: &[u8]) -> Result<Cow<'_, [u8]>, TranscodeError> {
    let (encoding, bom) = sniff(data);
    let body = &data[bom..];
    let text = match encoding {
        Encoding::Utf8 => return Ok(Cow::Borrowed(body)),
        Encoding::Utf16Be => utf16(body, encoding, u16::from_be_bytes)?,
        Encoding::Utf16Le => utf16(body, encoding, u16::from_le_bytes)?,
        Encoding::Utf32Be => utf32(body, encoding, u32::from_be_bytes)?,
        Encoding::Utf32Le => utf32(body, encoding, u32::from_le_bytes)?,
    };
    Ok(Cow::Owned(text.into_bytes()))
}

fn utf16(
    body: &[u8],
    encoding: Encoding,
    unit: fn([u8; 2]) -> u16,
) -> Result<String, TranscodeError> {
    if body.len() % 2 != 0 {
        return Err(TranscodeError::Truncated(encoding));
    }
    let units = body.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| TranscodeError::Invalid(encoding))
}

fn utf32(
    body: &[u8],
    encoding: Encoding,
    unit: fn([u8; 4]) -> u32,
) -> Result<String, TranscodeError> {
    if body.len() % 4 != 0 {
        return Err(TranscodeError::Truncated(encoding));
    }
    body.chunks_exact(4)
        .map(|quad| char::from_u32(unit([quad[0], quad[1], quad[2], quad[3]])))
        .collect::<Option<String>>()
        .ok_or(TranscodeError::Invalid(encoding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    fn utf32be(text: &str) -> Vec<u8> {
        text.chars().flat_map(|c| u32::from(c).to_be_bytes()).collect()
    }

    #[test]
    fn test_sniff_marks() {
        assert_eq!(sniff(b"\xEF\xBB\xBF{}"), (Encoding::Utf8, 3));
        assert_eq!(sniff(b"\xFE\xFF\x00{"), (Encoding::Utf16Be, 2));
        assert_eq!(sniff(b"\xFF\xFE{\x00"), (Encoding::Utf16Le, 2));
        assert_eq!(sniff(b"\x00\x00\xFE\xFF"), (Encoding::Utf32Be, 4));
        assert_eq!(sniff(b"\xFF\xFE\x00\x00"), (Encoding::Utf32Le, 4));
    }

    #[test]
    fn test_sniff_nul_pattern() {
        assert_eq!(sniff(b"{}"), (Encoding::Utf8, 0));
        assert_eq!(sniff(b"1"), (Encoding::Utf8, 0));
        assert_eq!(sniff(b""), (Encoding::Utf8, 0));
        assert_eq!(sniff(&utf16le("[1]")), (Encoding::Utf16Le, 0));
        assert_eq!(sniff(&utf32be("[1]")), (Encoding::Utf32Be, 0));
        assert_eq!(sniff(b"\x00{\x00}"), (Encoding::Utf16Be, 0));
        assert_eq!(sniff(b"{\x00\x00\x00"), (Encoding::Utf32Le, 0));
        assert_eq!(sniff(b"7\x00"), (Encoding::Utf16Le, 0));
        assert_eq!(sniff(b"\x007"), (Encoding::Utf16Be, 0));
    }

    #[test]
    fn test_to_utf8() {
        let utf8 = r#"{"a":"é"}"#.as_bytes();
        assert!(matches!(to_utf8(utf8), Ok(Cow::Borrowed(_))));

        let text = "{\"a\":\"é😀\"}";
        assert_eq!(&*to_utf8(&utf16le(text)).unwrap(), text.as_bytes());
        assert_eq!(&*to_utf8(&utf32be(text)).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_to_utf8_errors() {
        let mut odd = utf16le("[1]");
        odd.pop();
        assert_eq!(to_utf8(&odd), Err(TranscodeError::Truncated(Encoding::Utf16Le)));

        // Lone high surrogate
        let lone = [b'[', 0, b' ', 0, 0x00, 0xD8, b']', 0];
        assert_eq!(to_utf8(&lone), Err(TranscodeError::Invalid(Encoding::Utf16Le)));

        let beyond = [0, 0, 0, b'[', 0, 0x11, 0, 0];
        assert_eq!(to_utf8(&beyond), Err(TranscodeError::Invalid(Encoding::Utf32Be)));
        assert_eq!(
            TranscodeError::Truncated(Encoding::Utf32Be).to_string(),
            "UTF-32BE text ends in a partial code unit"
        );
    }
}
