//! Go literal unquoting, following `strconv.Unquote`.
//!
//! Handles interpreted strings (`"..."`), raw strings (`` `...` ``) and rune
//! literals (`'x'`). Callers treat failures as soft: the quoted text is kept.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnquoteError {
    #[error("literal is too short to be quoted")]
    TooShort,
    #[error("opening and closing quotes do not match")]
    MismatchedQuotes,
    #[error("unexpected {0:?} inside the literal")]
    UnexpectedChar(char),
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("rune literal must hold exactly one character")]
    InvalidRune,
    #[error("escaped bytes do not form valid UTF-8")]
    InvalidUtf8,
}

/// Strip the quotes of a Go literal and decode its escapes.
pub fn unquote(text: &str) -> Result<String, UnquoteError> {
    let mut chars = text.chars();
    let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
        return Err(UnquoteError::TooShort);
    };
    if open != close {
        return Err(UnquoteError::MismatchedQuotes);
    }
    let body = &text[open.len_utf8()..text.len() - close.len_utf8()];

    match open {
        '`' => {
            if body.contains('`') {
                return Err(UnquoteError::UnexpectedChar('`'));
            }
            Ok(body.replace('\r', ""))
        }
        '"' | '\'' => {
            let decoded = unescape(body, open)?;
            if open == '\'' && decoded.chars().count() != 1 {
                return Err(UnquoteError::InvalidRune);
            }
            Ok(decoded)
        }
        _ => Err(UnquoteError::MismatchedQuotes),
    }
}

fn unescape(body: &str, quote: char) -> Result<String, UnquoteError> {
    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => return Err(UnquoteError::UnexpectedChar('\n')),
            c if c == quote => return Err(UnquoteError::UnexpectedChar(quote)),
            '\\' => {
                let escape = chars.next().ok_or(UnquoteError::InvalidEscape)?;
                match escape {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    q if q == quote => push_char(&mut out, q),
                    'x' => out.push(hex_value(&mut chars, 2)? as u8),
                    'u' | 'U' => {
                        let digits = if escape == 'u' { 4 } else { 8 };
                        let value = hex_value(&mut chars, digits)?;
                        let c = char::from_u32(value).ok_or(UnquoteError::InvalidEscape)?;
                        push_char(&mut out, c);
                    }
                    '0'..='7' => {
                        let mut value = escape.to_digit(8).unwrap_or_default();
                        for _ in 0..2 {
                            let digit = chars
                                .next()
                                .and_then(|d| d.to_digit(8))
                                .ok_or(UnquoteError::InvalidEscape)?;
                            value = value * 8 + digit;
                        }
                        let byte = u8::try_from(value).map_err(|_| UnquoteError::InvalidEscape)?;
                        out.push(byte);
                    }
                    _ => return Err(UnquoteError::InvalidEscape),
                }
            }
            c => push_char(&mut out, c),
        }
    }

    String::from_utf8(out).map_err(|_| UnquoteError::InvalidUtf8)
}

fn hex_value(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    digits: usize,
) -> Result<u32, UnquoteError> {
    let mut value = 0u32;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|d| d.to_digit(16))
            .ok_or(UnquoteError::InvalidEscape)?;
        value = value * 16 + digit;
    }
    Ok(value)
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}
