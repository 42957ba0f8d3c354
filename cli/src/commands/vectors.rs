//! Self-Test Command
//!
//! Prints the built-in known-answer vectors alongside the freshly computed
//! digests for manual verification. Always exits 0 — this is a demonstration,
//! not a conformance gate (the test suite is).

/// Built-in vectors: (message, expected hex digest).
const VECTORS: &[(&str, &str)] = &[
    ("", "31d6cfe0d16ae931b73c59d7e0c089c0"),
    ("Hello world", "2f34e7edc8180b87578159ff58e87c1a"),
    ("Hi, my dear friend", "44179e75a717f84cbdc8343fed7cd33b"),
];

/// Hash each built-in vector and print expected vs. actual.
pub fn self_test() {
    for (message, expected) in VECTORS {
        let actual = md4::hash(message.as_bytes()).to_hex();
        let status = if actual == *expected { "OK" } else { "MISMATCH" };

        println!("message:  {message:?}");
        println!("expected: {expected}");
        println!("actual:   {actual}  [{status}]");
        println!();
    }
}
