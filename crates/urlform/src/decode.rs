//! In-place decoding of `+`-space substitution and percent-encoding.

/// Decodes URL-encoded bytes in place and returns the decoded length.
///
/// A single left-to-right pass applies two rewrites: `+` becomes a space,
/// and `%` followed by two more bytes collapses to the byte named by those
/// two case-insensitive hex digits. Conversion is best effort, with no error
/// path: the leading valid digits form the value (`%4x` yields `0x04`,
/// `%zz` yields `0x00`). A `%` with fewer than two bytes remaining is kept
/// literally, as are the bytes after it.
///
/// The result is `buf[..len]` for the returned `len`. Decoding never grows
/// the input, so the write position cannot overtake the read position.
pub fn decode_in_place(buf: &mut [u8]) -> usize {
    let mut read = 0;
    let mut write = 0;
    while read < buf.len() {
        match buf[read] {
            b'+' => {
                buf[write] = b' ';
                read += 1;
            }
            b'%' if read + 2 < buf.len() => {
                buf[write] = hex_pair(buf[read + 1], buf[read + 2]);
                read += 3;
            }
            other => {
                buf[write] = other;
                read += 1;
            }
        }
        write += 1;
    }
    write
}

// strtol-style: leading valid digits form the value, an invalid first digit
// yields zero. Valid and malformed input share this routine.
fn hex_pair(hi: u8, lo: u8) -> u8 {
    let Some(hi) = hex_digit(hi) else { return 0 };
    match hex_digit(lo) {
        Some(lo) => (hi << 4) | lo,
        None => hi,
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rstest::rstest;

    use super::decode_in_place;

    fn decoded(input: &str) -> Vec<u8> {
        let mut buf = input.as_bytes().to_vec();
        let len = decode_in_place(&mut buf);
        assert!(len <= input.len());
        buf.truncate(len);
        buf
    }

    #[rstest]
    #[case("", "")]
    #[case("plain", "plain")]
    #[case("My+Net", "My Net")]
    #[case("p%40ss", "p@ss")]
    #[case("a%2Bb", "a+b")]
    #[case("%41%6en", "Ann")]
    #[case("go+do+it%21", "go do it!")]
    fn rewrites(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decoded(input), expected.as_bytes());
    }

    #[rstest]
    #[case("%", "%")]
    #[case("%4", "%4")]
    #[case("a%", "a%")]
    fn truncated_escape_kept_literal(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decoded(input), expected.as_bytes());
    }

    #[rstest]
    #[case("%zz", &[0x00])]
    #[case("%4x", &[0x04])]
    #[case("%x4", &[0x00])]
    fn best_effort_hex(#[case] input: &str, #[case] expected: &[u8]) {
        assert_eq!(decoded(input), expected);
    }

    #[test]
    fn nul_byte_is_data() {
        assert_eq!(decoded("a%00b"), &[b'a', 0x00, b'b']);
    }

    #[test]
    fn mixed_case_hex() {
        assert_eq!(decoded("%2f%2F"), b"//");
    }

    #[test]
    fn undecoded_tail_left_in_place() {
        let mut buf = *b"%41%42tail";
        let len = decode_in_place(&mut buf);
        assert_eq!(&buf[..len], b"ABtail");
    }
}
