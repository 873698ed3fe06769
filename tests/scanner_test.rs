// Integration tests for the scanning pipeline
// Tests cover: file vs stream sources, checksum rules, whole-word counting, edge cases

use std::io::Write;

use scanrs::{
    BlockChecksum, ScanConfig, ScanError, ScanMode, ScanOutcome, Source, WordMatcher,
    checksum_bytes, count_occurrences, run, scan,
};

fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

fn sample_text(len: usize) -> Vec<u8> {
    const WORDS: [&[u8]; 6] = [b"small", b"ssmall", b"fix", b"small,", b"(small)", b"smaller"];
    let mut out = Vec::with_capacity(len + 16);
    let mut i = 0usize;
    while out.len() < len {
        out.extend_from_slice(WORDS[i % WORDS.len()]);
        out.push(if i % 7 == 0 { b'\n' } else { b' ' });
        i += 1;
    }
    out.truncate(len);
    out
}

fn checksum_file(path: &std::path::Path, config: &ScanConfig) -> u32 {
    let mut source = Source::open(path, config).expect("open source");
    let (sum, _) = scan(&mut source, BlockChecksum::new()).expect("scan");
    sum
}

fn words_in_file(path: &std::path::Path, config: &ScanConfig, word: &str) -> u64 {
    let mut source = Source::open(path, config).expect("open source");
    let (count, _) = scan(&mut source, WordMatcher::new(word).unwrap()).expect("scan");
    count
}

// ============================================================================
// Checksum
// ============================================================================

#[test]
fn test_checksum_empty_input() {
    let file = temp_file(b"");
    assert_eq!(checksum_file(file.path(), &ScanConfig::default()), 0);

    let mut source = Source::from_reader(&b""[..], &ScanConfig::default()).unwrap();
    let (sum, summary) = scan(&mut source, BlockChecksum::new()).unwrap();
    assert_eq!(sum, 0);
    assert_eq!(summary.chunks, 0);
}

#[test]
fn test_checksum_known_value() {
    let mut data = Vec::new();
    for v in [1u32, 2, 3, 4] {
        data.extend_from_slice(&v.to_ne_bytes());
    }
    data.extend_from_slice(&[0x05, 0x00]);

    let expected = 10u32.wrapping_add(u32::from_ne_bytes([0x05, 0, 0, 0]));
    let file = temp_file(&data);
    assert_eq!(checksum_file(file.path(), &ScanConfig::default()), expected);
    assert_eq!(checksum_bytes(&data), expected);
}

#[test]
fn test_checksum_file_matches_stream() {
    // Larger than one mapped block and many stream buffers, odd length tail.
    let data: Vec<u8> = (0..300_003u32).map(|i| (i.wrapping_mul(7) + 13) as u8).collect();
    let file = temp_file(&data);

    let config = ScanConfig::default().with_block_factor(1);
    let mapped = checksum_file(file.path(), &config);

    let stream_config = ScanConfig::default().with_stream_capacity(256);
    let mut source =
        Source::from_reader(std::io::Cursor::new(data.clone()), &stream_config).unwrap();
    let (streamed, summary) = scan(&mut source, BlockChecksum::new()).unwrap();

    assert_eq!(mapped, streamed);
    assert_eq!(mapped, checksum_bytes(&data));
    assert_eq!(summary.bytes, data.len() as u64);
}

#[test]
fn test_checksum_independent_of_block_factor() {
    let data = sample_text(100_001);
    let file = temp_file(&data);

    let sums: Vec<u32> = [1, 3, 10, 64]
        .into_iter()
        .map(|f| checksum_file(file.path(), &ScanConfig::default().with_block_factor(f)))
        .collect();

    assert!(sums.windows(2).all(|w| w[0] == w[1]), "sums: {:?}", sums);
}

// ============================================================================
// Whole-word counting
// ============================================================================

#[test]
fn test_reference_examples() {
    assert_eq!(count_occurrences("small ssmall fix small", "small").unwrap(), 2);
    assert_eq!(count_occurrences("abc abc abc", "abc abc").unwrap(), 1);
    assert_eq!(count_occurrences("ls", "ls").unwrap(), 1);
}

#[test]
fn test_word_at_start_and_end_of_file() {
    let file = temp_file(b"edge middle edge");
    assert_eq!(words_in_file(file.path(), &ScanConfig::default(), "edge"), 2);
}

#[test]
fn test_words_file_matches_stream() {
    let data = sample_text(250_000);
    let file = temp_file(&data);

    let mapped = words_in_file(file.path(), &ScanConfig::default().with_block_factor(1), "small");

    let config = ScanConfig::default().with_stream_capacity(4);
    let mut source = Source::from_reader(std::io::Cursor::new(data.clone()), &config).unwrap();
    let (streamed, _) = scan(&mut source, WordMatcher::new("small").unwrap()).unwrap();

    assert_eq!(mapped, streamed);
    assert_eq!(mapped, count_occurrences(&data, "small").unwrap());
    assert!(mapped > 0);
}

#[test]
fn test_match_straddling_block_boundary() {
    let config = ScanConfig::default().with_block_factor(1);
    let sizing = temp_file(b"x");
    let block = match Source::open(sizing.path(), &config).unwrap() {
        Source::Mapped(m) => m.block_size() as usize,
        Source::Stream(_) => panic!("regular file should be mapped"),
    };

    // Place "needle" so it spans the first block boundary.
    let mut data = vec![b' '; block - 3];
    data.extend_from_slice(b"needle ");
    data.extend_from_slice(&vec![b'.'; block]);
    data.extend_from_slice(b"needle");

    let file = temp_file(&data);
    assert_eq!(words_in_file(file.path(), &config, "needle"), 2);
}

#[test]
fn test_empty_word_rejected_before_scan() {
    let mut source = Source::from_reader(&b"anything"[..], &ScanConfig::default()).unwrap();
    let err = run(&mut source, ScanMode::Words, Some(&b""[..])).unwrap_err();
    assert!(matches!(err, ScanError::Config { .. }));
    assert!(!source.is_exhausted());
}

// ============================================================================
// Sources
// ============================================================================

#[test]
fn test_open_missing_file() {
    let err = Source::open("/no/such/dir/input.bin", &ScanConfig::default()).unwrap_err();
    assert!(matches!(err, ScanError::Open { .. }));
    assert!(err.to_string().contains("cannot open file"));
}

#[test]
fn test_source_stays_exhausted() {
    let file = temp_file(b"abc");
    let mut source = Source::open(file.path(), &ScanConfig::default()).unwrap();

    assert!(source.next_chunk().unwrap().is_some());
    for _ in 0..3 {
        assert!(source.next_chunk().unwrap().is_none());
    }
    assert!(source.is_exhausted());
}

#[test]
fn test_stream_read_error_is_reported() {
    struct Broken;
    impl std::io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }
    }

    let mut source = Source::from_reader(Broken, &ScanConfig::default()).unwrap();
    let err = run(&mut source, ScanMode::Checksum, None).unwrap_err();
    assert!(matches!(err, ScanError::Io(_)));
    assert!(source.next_chunk().unwrap().is_none());
}

#[test]
fn test_stream_rejects_unaligned_capacity() {
    let config = ScanConfig::default().with_stream_capacity(6);
    assert!(config.validate().is_err());

    let err = Source::from_reader(&b"0123456789ab"[..], &config).unwrap_err();
    assert!(matches!(err, ScanError::Config { .. }));

    let err = Source::open("-", &config).unwrap_err();
    assert!(matches!(err, ScanError::Config { .. }));
}

#[test]
fn test_run_outcome_formatting() {
    let file = temp_file(b"small ssmall fix small\n");
    let mut source = Source::open(file.path(), &ScanConfig::default()).unwrap();
    let outcome = run(&mut source, ScanMode::Words, Some(&b"small"[..])).unwrap();

    assert_eq!(outcome, ScanOutcome::Words(2));
    assert_eq!(outcome.to_string(), "2");
}
