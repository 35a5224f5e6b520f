use std::io::Cursor;

use super::*;

#[test]
fn test_histogram_of_sample() {
    let table = FrequencyTable::from_bytes(b"AAABBC").unwrap();

    assert_eq!(table[b'A'], 3);
    assert_eq!(table[b'B'], 2);
    assert_eq!(table.get(b'C'), 1);
    assert_eq!(table[b'D'], 0);
    assert_eq!(table.total(), 6);
    assert_eq!(table.distinct(), 3);
}

#[test]
fn test_empty_input_gives_empty_table() {
    let table = FrequencyTable::from_bytes(&[]).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.total(), 0);
    assert_eq!(table.iter_nonzero().count(), 0);
    assert_eq!(table, FrequencyTable::default());
}

#[test]
fn test_iter_nonzero_is_in_byte_order() {
    let table = FrequencyTable::from_bytes(&[200, 3, 200, 0, 3, 3]).unwrap();

    let entries: Vec<_> = table.iter_nonzero().collect();

    assert_eq!(entries, vec![(0, 1), (3, 3), (200, 2)]);
}

#[test]
fn test_serialized_layout_is_little_endian() {
    let mut counts = [0u32; NUM_SYMBOLS];
    counts[0] = 1;
    counts[1] = 0x0102_0304;
    counts[255] = u32::MAX;
    let table = FrequencyTable::new(counts);

    let mut out = Vec::new();
    table.write_to(&mut out).unwrap();

    assert_eq!(out.len(), TABLE_BYTES);
    assert_eq!(&out[0..4], &[1, 0, 0, 0]);
    assert_eq!(&out[4..8], &[4, 3, 2, 1]);
    assert_eq!(&out[TABLE_BYTES - 4..], &[0xFF; 4]);

    let back = FrequencyTable::read_from(&mut Cursor::new(out)).unwrap();
    assert_eq!(back, table);
}

#[test]
fn test_short_table_is_rejected() {
    let truncated = vec![0u8; TABLE_BYTES - 1];

    let result = FrequencyTable::read_from(&mut Cursor::new(truncated));

    assert!(matches!(result, Err(HuffmanError::Io(_))));
}
