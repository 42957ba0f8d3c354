//! MD4 CLI
//!
//! Thin demonstration surface over the `md4` crate: hashes command-line
//! messages, or runs the built-in known-answer vectors when given none.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{hash_messages, self_test};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "md4")]
#[command(about = "MD4 message digest (RFC 1320) — legacy compatibility only", long_about = None)]
#[command(version)]
struct Cli {
    /// Messages to hash (runs the built-in test vectors when empty)
    #[arg(value_name = "MESSAGE")]
    messages: Vec<String>,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.messages.is_empty() {
        self_test();
    } else {
        hash_messages(&cli.messages);
    }

    Ok(())
}
