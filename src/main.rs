use std::io::{self, Read};

use anyhow::{Context, Result};
use bytehasher::{hash, to_spaced_hex};
use clap::Parser;
use tracing_subscriber::EnvFilter;

// Hashed when no message is given.
const DEMO_MESSAGE: &str = "hello world";

/// Prints the ByteHasher digest of each message, one per line.
#[derive(Debug, Parser)]
#[command(name = "bytehasher", version)]
struct Args {
    /// Messages to hash, as UTF-8. Defaults to "hello world".
    messages: Vec<String>,
    /// Hash the raw bytes of standard input instead of the messages.
    #[arg(long, conflicts_with = "messages")]
    stdin: bool,
    /// Print contiguous hex instead of space separated byte groups.
    #[arg(long)]
    compact: bool,
}

impl Args {
    fn inputs(&self) -> Result<Vec<Vec<u8>>> {
        if self.stdin {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("could not read standard input")?;
            return Ok(vec![buf]);
        }

        if self.messages.is_empty() {
            return Ok(vec![DEMO_MESSAGE.as_bytes().to_vec()]);
        }

        Ok(self.messages.iter().map(|m| m.as_bytes().to_vec()).collect())
    }

    fn render(&self, digest: &[u8]) -> String {
        if self.compact {
            hex::encode(digest)
        } else {
            to_spaced_hex(digest)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    for input in args.inputs()? {
        let digest = hash(&input);
        tracing::debug!(len = input.len(), "hashed input");
        println!("{}", args.render(&digest));
    }

    Ok(())
}
