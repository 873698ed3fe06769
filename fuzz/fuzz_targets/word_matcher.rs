#![no_main]

use libfuzzer_sys::fuzz_target;
use scanrs::WordMatcher;

fuzz_target!(|input: (Vec<u8>, Vec<u8>, Vec<u8>)| {
    let (word, haystack, splits) = input;

    // Empty words are a configuration error, never a panic.
    let Ok(mut whole) = WordMatcher::new(&word) else {
        assert!(word.is_empty());
        return;
    };
    whole.update(&haystack);
    let expected = whole.finish();

    // Verify: any chunking yields the same count
    let mut split = WordMatcher::new(&word).unwrap();
    let mut rest = &haystack[..];
    let mut sizes = splits.iter().cycle();
    while !rest.is_empty() {
        let n = sizes.next().map_or(rest.len(), |&s| (s as usize).max(1)).min(rest.len());
        let (head, tail) = rest.split_at(n);
        split.update(head);
        rest = tail;
    }

    assert_eq!(split.finish(), expected);

    // Verify: matches never overlap, so the count is bounded by length
    assert!(expected <= (haystack.len() / word.len()) as u64);
});
