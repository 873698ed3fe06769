#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use scanrs::{BlockChecksum, ScanConfig, Source, checksum_bytes, scan};

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (data, capacity_words) = input;
    let capacity = (capacity_words as usize + 1) * 4;
    let config = ScanConfig::default().with_stream_capacity(capacity);

    let mut source = Source::from_reader(Cursor::new(data.clone()), &config).unwrap();

    // Verify: offsets are contiguous and chunks respect capacity
    let mut expected_offset = 0u64;
    let mut seen = Vec::with_capacity(data.len());
    while let Some(chunk) = source.next_chunk().unwrap() {
        assert_eq!(chunk.offset(), expected_offset);
        assert!(chunk.len() <= capacity);
        expected_offset = chunk.end();
        seen.extend_from_slice(&chunk);
    }
    assert_eq!(seen, data);

    // Verify: full-buffer chunking gives the one-shot checksum
    let mut source = Source::from_reader(Cursor::new(data.clone()), &config).unwrap();
    let (sum, _) = scan(&mut source, BlockChecksum::new()).unwrap();
    assert_eq!(sum, checksum_bytes(&data));
});
