use crate::{
    CodecError, STANDARD, URL_SAFE, decode, decode_mem, decode_to, encode, encode_mem, encode_to,
    encoded_len,
};

const VECTORS_PADDED: [(&[u8], &[u8]); 6] = [
    (b"d", b"ZA=="),
    (b"dg", b"ZGc="),
    (b"def", b"ZGVm"),
    (b"defh", b"ZGVmaA=="),
    (b"defhi", b"ZGVmaGk="),
    (b"defhij", b"ZGVmaGlq"),
];

const VECTORS_UNPADDED: [(&[u8], &[u8]); 6] = [
    (b"d", b"ZA"),
    (b"dg", b"ZGc"),
    (b"def", b"ZGVm"),
    (b"defh", b"ZGVmaA"),
    (b"defhi", b"ZGVmaGk"),
    (b"defhij", b"ZGVmaGlq"),
];

#[test]
fn test_encode_vectors_padded() {
    for (plain, expected) in VECTORS_PADDED {
        assert_eq!(encode(plain, &STANDARD, true).unwrap(), expected);
    }
}

#[test]
fn test_encode_vectors_unpadded() {
    for (plain, expected) in VECTORS_UNPADDED {
        assert_eq!(encode(plain, &STANDARD, false).unwrap(), expected);
    }
}

#[test]
fn test_decode_vectors_padded() {
    for (plain, encoded) in VECTORS_PADDED {
        assert_eq!(decode(encoded, &STANDARD, true).unwrap(), plain);
    }
}

#[test]
fn test_decode_vectors_unpadded() {
    for (plain, encoded) in VECTORS_UNPADDED {
        assert_eq!(decode(encoded, &STANDARD, false).unwrap(), plain);
    }
}

#[test]
fn test_encode_length_agreement() {
    for len in 1..64usize {
        let data = vec![0xA7u8; len];
        for padded in [true, false] {
            let encoded = encode(&data, &STANDARD, padded).unwrap();
            assert_eq!(encoded.len(), encoded_len(len, padded));
        }
    }
}

#[test]
fn test_mem_codec_with_exact_buffers() {
    let mut encoded = [0u8; 8];
    encode_mem(&mut encoded, b"defhi", &STANDARD, true).unwrap();
    assert_eq!(&encoded, b"ZGVmaGk=");

    let mut decoded = [0u8; 5];
    decode_mem(&mut decoded, &encoded, &STANDARD, true).unwrap();
    assert_eq!(&decoded, b"defhi");
}

#[test]
fn test_mem_encode_unpadded_remainder() {
    let mut encoded = [0u8; 7];
    encode_mem(&mut encoded, b"defhi", &STANDARD, false).unwrap();
    assert_eq!(&encoded, b"ZGVmaGk");

    let mut decoded = [0u8; 5];
    decode_mem(&mut decoded, &encoded, &STANDARD, false).unwrap();
    assert_eq!(&decoded, b"defhi");
}

#[test]
fn test_encode_empty_input() {
    assert_eq!(encode(b"", &STANDARD, true), Err(CodecError::EmptyInput));
    let mut dest = [0u8; 4];
    assert_eq!(
        encode_mem(&mut dest, b"", &STANDARD, false),
        Err(CodecError::EmptyInput)
    );
}

#[test]
fn test_decode_rejects_malformed_lengths() {
    assert_eq!(
        decode(b"ZGc", &STANDARD, true),
        Err(CodecError::MalformedLength {
            length: 3,
            padded: true
        })
    );
    assert_eq!(
        decode(b"Z", &STANDARD, false),
        Err(CodecError::MalformedLength {
            length: 1,
            padded: false
        })
    );
    assert_eq!(
        decode(b"", &STANDARD, true),
        Err(CodecError::MalformedLength {
            length: 0,
            padded: true
        })
    );
    // A lone foreign byte is rejected on shape, before any lookup.
    for padded in [true, false] {
        assert_eq!(
            decode(b"?", &STANDARD, padded),
            Err(CodecError::MalformedLength { length: 1, padded })
        );
    }
    assert_eq!(
        decode(b"ZA", &STANDARD, true),
        Err(CodecError::MalformedLength {
            length: 2,
            padded: true
        })
    );
}

#[test]
fn test_decode_rejects_interior_padding_run() {
    // Penultimate symbol is padding, last one is not.
    assert_eq!(
        decode(b"ZG=c", &STANDARD, true),
        Err(CodecError::MalformedPadding)
    );
    assert_eq!(
        decode(b"ZG=c", &STANDARD, false),
        Err(CodecError::MalformedPadding)
    );
}

#[test]
fn test_decode_rejects_foreign_symbols() {
    assert_eq!(
        decode(b"ZGV?", &STANDARD, true),
        Err(CodecError::SymbolNotFound(b'?'))
    );
    assert_eq!(
        decode(b"\x01\x02\x03\x04", &STANDARD, false),
        Err(CodecError::SymbolNotFound(0x01))
    );
    // Three padding symbols: two are stripped, the third is no symbol.
    assert_eq!(
        decode(b"Z===", &STANDARD, true),
        Err(CodecError::SymbolNotFound(b'='))
    );
}

#[test]
fn test_url_safe_table_differs_on_last_two_symbols() {
    let data = b"\xfb\xff";
    assert_eq!(encode(data, &STANDARD, true).unwrap(), b"+/8=");
    assert_eq!(encode(data, &URL_SAFE, true).unwrap(), b"-_8=");

    assert_eq!(decode(b"-_8=", &URL_SAFE, true).unwrap(), data);
    // The standard table does not know the URL-safe symbols.
    assert_eq!(
        decode(b"-_8=", &STANDARD, true),
        Err(CodecError::SymbolNotFound(b'-'))
    );
}

#[test]
fn test_all_byte_values_round_trip() {
    let data: Vec<u8> = (0..=255u8).collect();
    for padded in [true, false] {
        let encoded = encode(&data, &STANDARD, padded).unwrap();
        assert_eq!(decode(&encoded, &STANDARD, padded).unwrap(), data);

        let encoded = encode(&data, &URL_SAFE, padded).unwrap();
        assert_eq!(decode(&encoded, &URL_SAFE, padded).unwrap(), data);
    }
}

#[test]
fn test_container_string() {
    let encoded: String = encode_to(&String::from("defhi"), &STANDARD, true).unwrap();
    assert_eq!(encoded, "ZGVmaGk=");
    let decoded: String = decode_to(&encoded, &STANDARD, true).unwrap();
    assert_eq!(decoded, "defhi");
}

#[test]
fn test_container_vec() {
    let encoded: Vec<u8> = encode_to(&b"defhij".to_vec(), &STANDARD, false).unwrap();
    assert_eq!(encoded, b"ZGVmaGlq");
    let decoded: Vec<u8> = decode_to(&encoded, &STANDARD, false).unwrap();
    assert_eq!(decoded, b"defhij");
}

#[test]
fn test_container_decode_reads_padding_count() {
    for (plain, encoded) in VECTORS_PADDED {
        let decoded: Vec<u8> = decode_to(&encoded.to_vec(), &STANDARD, true).unwrap();
        assert_eq!(decoded, plain);
    }
}
