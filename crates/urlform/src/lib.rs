//! Query-string tokenizer and percent-decoder for embedded HTTP
//! configuration pages.
//!
//! Given the raw request line of a GET request (or the raw body of a POST),
//! [`RequestParser`] copies the query-string portion into a private working
//! buffer and then yields decoded `key=value` pairs one at a time into
//! caller-supplied fixed-capacity buffers. Percent-encoding and `+`-space
//! substitution are undone in place inside those buffers, and each output is
//! `0`-terminated within its declared capacity, so oversized input truncates
//! instead of overflowing.
//!
//! The crate is `no_std` + `alloc`; the only allocation is the working-buffer
//! copy, and it fails recoverably with [`ParseError::AllocationFailed`]
//! rather than aborting the host.
//!
//! ```rust
//! use urlform::RequestParser;
//!
//! let mut parser = RequestParser::new();
//! parser.parse("GET /?ssid=My+Net&pw=p%40ss HTTP/1.1", false)?;
//!
//! let mut key = [0u8; 32];
//! let mut value = [0u8; 64];
//! while let Some((k, v)) = parser.next_pair(&mut key, &mut value) {
//!     // key[..k] and value[..v] hold the decoded bytes.
//!     # let _ = (&key[..k], &value[..v]);
//! }
//! # Ok::<(), urlform::ParseError>(())
//! ```
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod parser;

pub use decode::decode_in_place;
pub use parser::{ParseError, RequestParser};
