//! Multithreaded chunked coding: many codec calls writing into disjoint
//! slices of one shared output buffer.
//!
//! The input is split at whole-group boundaries, each piece is handed to
//! its own thread together with the matching destination slice, and the
//! length arithmetic guarantees the slices line up.

use std::thread;
use std::time::Instant;

use chunk64::{STANDARD, decode_mem, decoded_len, encode, encode_mem, encoded_len, trailing_padding};

// Multiples of 3 (encode) and 4 (decode) keep every split on a group
// boundary.
const ENCODE_CHUNK: usize = 3 * 64 * 1024;
const DECODE_CHUNK: usize = 4 * 48 * 1024;

fn main() {
    let data: Vec<u8> = (0..12_000_000usize)
        .map(|i| (i as u32).wrapping_mul(2_654_435_761) as u8)
        .collect();
    println!("input: {} bytes", data.len());

    // Parallel encode.
    let start = Instant::now();
    let mut encoded = vec![0u8; encoded_len(data.len(), true)];
    thread::scope(|scope| {
        let dest_chunks = encoded.chunks_mut(encoded_len(ENCODE_CHUNK, true));
        for (src, dest) in data.chunks(ENCODE_CHUNK).zip(dest_chunks) {
            scope.spawn(move || encode_mem(dest, src, &STANDARD, true).unwrap());
        }
    });
    println!("encoded: {} symbols in {:?}", encoded.len(), start.elapsed());

    // Parallel decode back.
    let start = Instant::now();
    let padding_num = trailing_padding(&encoded, STANDARD.padding());
    let mut decoded = vec![0u8; decoded_len(encoded.len(), true, padding_num).unwrap()];
    thread::scope(|scope| {
        let per_chunk = decoded_len(DECODE_CHUNK, false, 0).unwrap();
        let dest_chunks = decoded.chunks_mut(per_chunk);
        for (src, dest) in encoded.chunks(DECODE_CHUNK).zip(dest_chunks) {
            scope.spawn(move || decode_mem(dest, src, &STANDARD, true).unwrap());
        }
    });
    println!("decoded: {} bytes in {:?}", decoded.len(), start.elapsed());

    assert_eq!(encoded, encode(&data, &STANDARD, true).unwrap());
    assert_eq!(decoded, data);
    println!("round trip verified");
}
