//! Hash Command
//!
//! Hashes each command-line message and prints its hex digest.

/// Print one lowercase hex digest per message, in argument order.
pub fn hash_messages(messages: &[String]) {
    for message in messages {
        println!("{}", md4::hash(message.as_bytes()));
    }
}
