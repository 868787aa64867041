//! Tests for byte and logical seeking.

use std::io::{Cursor, Read, Seek, SeekFrom};

use super::{logical_seek, seek_to, LogicalCounter, SeekAnchor, SeekError, SeekMode};

fn rest(c: &mut Cursor<Vec<u8>>) -> Vec<u8> {
    let mut out = Vec::new();
    c.read_to_end(&mut out).unwrap();
    out
}

#[test]
fn logical_from_start_without_crlf_matches_bytes() {
    let mut c = Cursor::new(b"hello world".to_vec());
    logical_seek(&mut c, 6, SeekAnchor::FromStart).unwrap();
    assert_eq!(c.position(), 6);
    assert_eq!(rest(&mut c), b"world");
}

#[test]
fn logical_from_start_counts_crlf_once() {
    let mut c = Cursor::new(b"ab\r\ncd\r\nef".to_vec());
    logical_seek(&mut c, 3, SeekAnchor::FromStart).unwrap();
    assert_eq!(c.position(), 4);
    assert_eq!(rest(&mut c), b"cd\r\nef");
}

#[test]
fn lone_cr_is_one_character() {
    let mut c = Cursor::new(b"a\rb\r".to_vec());
    logical_seek(&mut c, 2, SeekAnchor::FromStart).unwrap();
    assert_eq!(rest(&mut c), b"b\r");
}

#[test]
fn logical_from_end_reads_tail() {
    let mut c = Cursor::new(b"line1\r\nline2\r\n".to_vec());
    // Logical length is 12: "line1\n" + "line2\n".
    logical_seek(&mut c, -6, SeekAnchor::FromEnd).unwrap();
    assert_eq!(rest(&mut c), b"line2\r\n");
}

#[test]
fn logical_to_exact_end_is_ok() {
    let mut c = Cursor::new(b"abc".to_vec());
    logical_seek(&mut c, 3, SeekAnchor::FromStart).unwrap();
    assert!(rest(&mut c).is_empty());
}

#[test]
fn logical_past_end_fails() {
    let mut c = Cursor::new(b"abc".to_vec());
    match logical_seek(&mut c, 4, SeekAnchor::FromStart) {
        Err(SeekError::OutOfRange { target, reached }) => {
            assert_eq!(target, 4);
            assert_eq!(reached, 3);
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }
}

#[test]
fn logical_before_start_fails() {
    let mut c = Cursor::new(b"abc".to_vec());
    assert!(matches!(
        logical_seek(&mut c, -4, SeekAnchor::FromEnd),
        Err(SeekError::OutOfRange { target: -1, .. })
    ));
    assert!(matches!(
        logical_seek(&mut c, -1, SeekAnchor::FromStart),
        Err(SeekError::OutOfRange { .. })
    ));
}

#[test]
fn logical_walk_ignores_prior_position() {
    let mut c = Cursor::new(b"0123456789".to_vec());
    c.seek(SeekFrom::Start(7)).unwrap();
    logical_seek(&mut c, 2, SeekAnchor::FromStart).unwrap();
    assert_eq!(rest(&mut c), b"23456789");
}

#[test]
fn logical_walk_crosses_buffer_boundary() {
    // BufReader's default buffer is 8 KiB; put a CRLF across that edge.
    let mut data = vec![b'x'; 8191];
    data.extend_from_slice(b"\r\nTAIL");
    let mut c = Cursor::new(data);
    logical_seek(&mut c, 8192, SeekAnchor::FromStart).unwrap();
    assert_eq!(rest(&mut c), b"TAIL");
}

#[test]
fn byte_exact_from_start_and_end() {
    let mut c = Cursor::new(b"ab\r\ncd".to_vec());
    seek_to(&mut c, 3, SeekAnchor::FromStart, SeekMode::ByteExact).unwrap();
    assert_eq!(rest(&mut c), b"\ncd");
    seek_to(&mut c, -2, SeekAnchor::FromEnd, SeekMode::ByteExact).unwrap();
    assert_eq!(rest(&mut c), b"cd");
}

#[test]
fn byte_exact_negative_start_fails() {
    let mut c = Cursor::new(b"abc".to_vec());
    assert!(seek_to(&mut c, -1, SeekAnchor::FromStart, SeekMode::ByteExact).is_err());
    assert!(matches!(
        seek_to(&mut c, -10, SeekAnchor::FromEnd, SeekMode::ByteExact),
        Err(SeekError::Io(_))
    ));
}

#[test]
fn byte_exact_past_end_is_allowed() {
    let mut c = Cursor::new(b"abc".to_vec());
    seek_to(&mut c, 10, SeekAnchor::FromStart, SeekMode::ByteExact).unwrap();
    assert!(rest(&mut c).is_empty());
}

#[test]
fn counter_merges_crlf_across_slices() {
    let mut counter = LogicalCounter::default();
    assert_eq!(counter.count(b"ab\r"), 3);
    assert_eq!(counter.count(b"\ncd"), 2);
    assert_eq!(counter.count(b"\r\n\n"), 2);
    assert_eq!(counter.count(b""), 0);
}
