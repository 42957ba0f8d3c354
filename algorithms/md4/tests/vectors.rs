//! Official Test Vectors for MD4
//!
//! Verifies the implementation against the RFC 1320 appendix vectors plus the
//! project's own known-answer vectors, loaded from canonical JSON.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct Vector {
    hash: String,
    input: String,
    name: String,
}

#[derive(Deserialize)]
struct TestVectors {
    vectors: Vec<Vector>,
}

#[test]
fn test_official_vectors() {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    let reader = BufReader::new(file);
    let data: TestVectors = serde_json::from_reader(reader).expect("Failed to parse JSON");

    for vector in data.vectors {
        let input_bytes = match vector.input.as_str() {
            // RFC 1320 vector 7: "1234567890" repeated eight times.
            "DIGITS_80" => "1234567890".repeat(8).into_bytes(),
            val => val.as_bytes().to_vec(),
        };

        let digest = md4::hash(&input_bytes);

        assert_eq!(digest.to_hex(), vector.hash, "Vector mismatched: {}", vector.name);
        assert_eq!(
            hex::encode(digest.to_bytes()),
            vector.hash,
            "Byte serialization mismatched: {}",
            vector.name
        );
    }
}
