//! Integer scanning over a line-buffered stream.
//!
//! Whitespace before the number is skipped, blank lines included, so an
//! empty Enter just waits for more input. After the number (or after a
//! failed scan) the rest of the line is discarded.

use std::io::{self, BufRead};

/// Result of scanning one selection from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// A leading integer was read.
    Int(i64),
    /// Digits were read but don't fit in an `i64`.
    Overflow,
    /// The line did not start with an integer.
    Malformed,
}

/// Scan the leading integer of a line.
///
/// Returns `None` if the line is blank.
#[must_use]
pub fn scan_line(line: &str) -> Option<Scan> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }

    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digit_len == 0 {
        return Some(Scan::Malformed);
    }

    let number = &trimmed[..sign_len + digit_len];
    Some(match number.parse::<i64>() {
        Ok(n) => Scan::Int(n),
        Err(_) => Scan::Overflow,
    })
}

/// Read lines until one holds something to scan.
///
/// Bytes that aren't UTF-8 scan as malformed. Returns `Ok(None)` at end
/// of stream.
pub fn read_selection<R: BufRead>(input: &mut R) -> io::Result<Option<Scan>> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if let Some(scan) = scan_line(&String::from_utf8_lossy(&buf)) {
            return Ok(Some(scan));
        }
    }
}

/// Consume input up to and including the next newline.
///
/// Returns `false` if the stream had already ended.
pub fn discard_line<R: BufRead>(input: &mut R) -> io::Result<bool> {
    let mut sink = Vec::new();
    Ok(input.read_until(b'\n', &mut sink)? > 0)
}
