use thiserror::Error;

/// Failures surfaced by [`RequestParser::parse`](super::RequestParser::parse).
///
/// Both variants are recoverable: the parser holds no working buffer
/// afterwards and may be reused immediately. Decoding itself never fails,
/// and a malformed segment is deliberately not represented here (it shows
/// up as end-of-pairs instead; see `RequestParser::next_pair`).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// GET-mode input carried no `?` query delimiter.
    #[error("no query string in request")]
    NoQueryFound,
    /// The working copy of the query string could not be allocated.
    #[error("failed to allocate query working buffer")]
    AllocationFailed,
}
