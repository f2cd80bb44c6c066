use thiserror::Error;

/// Error returned by the fallible building blocks of the hash.
///
/// The top-level [`crate::hash`] never fails: its padding block size is fixed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The padding block size is zero, or too large for the pad length to fit in one byte.
    #[error("invalid padding block size {block_size}, expected a value in 1..=255")]
    InvalidSize {
        /// The rejected block size.
        block_size: usize,
    },
}
