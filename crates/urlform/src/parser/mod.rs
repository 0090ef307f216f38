//! Pull-based tokenizer over one HTTP request's query string.
//!
//! The parser owns at most one working buffer at a time: a private copy of
//! the query-string portion of the request, made by [`RequestParser::parse`].
//! A cursor into that buffer marks the start of the next unconsumed
//! `&`-delimited segment; [`RequestParser::next_pair`] splits the current
//! segment at its first `=`, writes both halves into caller-supplied
//! buffers, decodes them in place there, and advances. The caller's request
//! string is never mutated.
//!
//! States: `Idle` (no buffer) → `Ready` (buffer owned, cursor set) →
//! `Exhausted` (cursor gone). `parse` always discards any previous buffer
//! before starting over, and `end` returns to `Idle` from anywhere.

mod error;


use alloc::vec::Vec;

use bstr::ByteSlice;

pub use error::ParseError;

use crate::decode::decode_in_place;

const PROTOCOL_SUFFIX: &[u8] = b" HTTP/1.1";

/// Iteratively extracts decoded key/value pairs from an HTTP request.
///
/// One instance serves one in-flight request; it holds exactly one working
/// buffer between [`parse`](Self::parse) and [`end`](Self::end) (or the next
/// `parse`), and nothing otherwise. Access is single-threaded by contract;
/// hosts with multiple in-flight requests use one instance per request.
#[derive(Debug, Default)]
pub struct RequestParser {
    query: Option<Vec<u8>>,
    cursor: Option<usize>,
}

impl RequestParser {
    /// Creates a parser holding no working buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the query-string portion of `request` into a fresh working
    /// buffer and positions the cursor at its first pair.
    ///
    /// With `is_post` false, the query starts after the first `?` of the
    /// request line; a request line without one fails with
    /// [`ParseError::NoQueryFound`]. With `is_post` true the whole input is
    /// taken as the query. In both modes a literal `" HTTP/1.1"` marker
    /// truncates the copy at its first occurrence, so a full GET request
    /// line can be passed through unedited.
    ///
    /// Any previous working buffer is discarded first. An empty query is
    /// not an error; the parser starts out exhausted and yields zero pairs.
    ///
    /// # Errors
    ///
    /// [`ParseError::NoQueryFound`] when GET-mode input has no `?`, and
    /// [`ParseError::AllocationFailed`] when the working copy cannot be
    /// allocated. After either, the parser is idle and holds nothing.
    pub fn parse(&mut self, request: &str, is_post: bool) -> Result<(), ParseError> {
        self.end();

        let raw = request.as_bytes();
        let query = if is_post {
            raw
        } else {
            let mark = raw.find_byte(b'?').ok_or(ParseError::NoQueryFound)?;
            &raw[mark + 1..]
        };

        let mut working = Vec::new();
        working
            .try_reserve_exact(query.len())
            .map_err(|_| ParseError::AllocationFailed)?;
        working.extend_from_slice(query);

        if let Some(tail) = working.find(PROTOCOL_SUFFIX) {
            working.truncate(tail);
        }

        self.cursor = next_segment(&working, 0);
        self.query = Some(working);
        Ok(())
    }

    /// Produces the next key/value pair, decoded, in the caller's buffers.
    ///
    /// The current segment is split at its first `=`; each half is
    /// truncated to `capacity - 1` bytes of its output buffer, copied,
    /// percent/space-decoded in place there, and `0`-terminated at the
    /// decoded length. Returns the decoded key and value lengths. Nothing
    /// is ever written past either buffer's capacity; a zero-capacity
    /// buffer receives nothing and reports length 0. Truncation happens
    /// before decoding, so a `%XX` split by it stays literal.
    ///
    /// Returns `None` once the query is exhausted, with the output buffers
    /// untouched. A segment without `=` also returns `None` and leaves the
    /// cursor where it is, silently ending iteration even when well-formed
    /// segments follow; callers cannot tell the two cases apart from the
    /// return value. That matches the firmware this replaces (see
    /// DESIGN.md).
    pub fn next_pair(&mut self, key_out: &mut [u8], value_out: &mut [u8]) -> Option<(usize, usize)> {
        let query = self.query.as_deref()?;
        let start = self.cursor?;

        let segment = match query[start..].find_byte(b'&') {
            Some(rel) => &query[start..start + rel],
            None => &query[start..],
        };

        let eq = segment.find_byte(b'=')?;

        let key_len = write_bounded(&segment[..eq], key_out);
        let value_len = write_bounded(&segment[eq + 1..], value_out);

        self.cursor = next_segment(query, start + segment.len());

        Some((key_len, value_len))
    }

    /// Releases the working buffer and returns the parser to idle.
    ///
    /// Safe to call any number of times; [`parse`](Self::parse) calls it
    /// before starting over, and dropping the parser has the same effect.
    pub fn end(&mut self) {
        self.query = None;
        self.cursor = None;
    }
}

// strtok-style segmentation: delimiter runs collapse, so empty segments
// never surface as pairs.
fn next_segment(query: &[u8], mut at: usize) -> Option<usize> {
    while at < query.len() && query[at] == b'&' {
        at += 1;
    }
    (at < query.len()).then_some(at)
}

fn write_bounded(src: &[u8], out: &mut [u8]) -> usize {
    let Some(max) = out.len().checked_sub(1) else {
        return 0;
    };
    let len = src.len().min(max);
    out[..len].copy_from_slice(&src[..len]);
    let decoded = decode_in_place(&mut out[..len]);
    out[decoded] = 0;
    decoded
}
