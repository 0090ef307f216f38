#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use urlform::RequestParser;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    request: &'a str,
    is_post: bool,
    key_cap: u8,
    value_cap: u8,
}

const GUARD: u8 = 0xAA;

fuzz_target!(|input: Input<'_>| {
    let mut parser = RequestParser::new();
    if parser.parse(input.request, input.is_post).is_err() {
        return;
    }

    let key_cap = usize::from(input.key_cap);
    let value_cap = usize::from(input.value_cap);

    // Every produced pair consumes at least one byte of the working buffer,
    // so iteration is bounded by the request length.
    for _ in 0..=input.request.len() {
        let mut key = [GUARD; 256];
        let mut value = [GUARD; 256];
        let Some((k, v)) = parser.next_pair(&mut key[..key_cap], &mut value[..value_cap])
        else {
            break;
        };

        assert!(key_cap == 0 || (k < key_cap && key[k] == 0));
        assert!(value_cap == 0 || (v < value_cap && value[v] == 0));
        assert!(key[key_cap..].iter().all(|&b| b == GUARD));
        assert!(value[value_cap..].iter().all(|&b| b == GUARD));
    }

    parser.end();
    parser.end();
});
