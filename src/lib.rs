#![warn(missing_docs)]
//! A Rust implementation of ByteHasher, a lightweight 256-bit hash for constrained 8-bit
//! environments.
//!
//! ByteHasher pads the message to 4-byte blocks, absorbs it into a 128-byte state with a
//! data-dependent 8-bit Xorshift generator, scrambles that state and folds it down to a
//! 32-byte digest. Every step works on single bytes, which keeps it cheap on small
//! microcontrollers.
//!
//! # Security
//!
//! **ByteHasher is not a cryptographic hash.** It makes no preimage, second-preimage or
//! collision resistance claims and has no diffusion proof; its avalanche behaviour is only
//! checked empirically by the test suite. Do not use it for signatures, MACs, password
//! storage or anywhere an adversary chooses the input.
//!
//! # Example
//! ```
//! use bytehasher::{hash_str, to_spaced_hex};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!   let digest = hash_str("hello world");
//!   assert_eq!(hex::encode(digest), "35d74c4bbdab3a80ec325f50d845b00479b2f656708c9572bf6a70e654c4eb7e");
//!   println!("Result: {}", to_spaced_hex(&digest));
//!
//!   Ok(())
//! }
//! ```
//!
//! The same digest is available through the [`digest`] traits:
//! ```
//! use bytehasher::ByteHasher;
//! use digest::Digest;
//!
//! let mut h = ByteHasher::new();
//! h.update("hello ");
//! h.update("world");
//! assert_eq!(h.finalize()[..], bytehasher::hash("hello world")[..]);
//! ```

/// `bytehasher` is the one-shot hash and its [`digest`] integration.
pub mod bytehasher;
/// `error` holds the crate error type.
pub mod error;
/// `padding` is the PKCS#7 block padding applied to every message.
pub mod padding;
/// `prng` is the data-dependent 8-bit Xorshift generator driving every phase.
pub mod prng;
/// `state` is the per-computation working state: absorption, finalization and folding.
pub mod state;

pub use crate::bytehasher::{hash, hash_str, to_spaced_hex, ByteHasher, ByteHasherCore};
pub use crate::error::Error;
pub use crate::state::{DIGEST_SIZE, STATE_SIZE};
