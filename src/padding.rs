use crate::error::Error;

/// Padding block size, in bytes, used by the hash.
pub const BLOCK_SIZE: usize = 4;

/// pkcs7_pad returns `data` followed by PKCS#7 padding up to a multiple of `block_size`.
///
/// Each padding byte holds the number of padding bytes added. Padding is never empty: when
/// `data` is already aligned a whole block of `block_size` bytes is appended, so the result is
/// always at least one block long.
///
/// The pad length is stored in a byte, so `block_size` must lie in `1..=255`.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>, Error> {
    if block_size == 0 || block_size > u8::MAX as usize {
        return Err(Error::InvalidSize { block_size });
    }

    Ok(pad_to(data, block_size))
}

/// pad applies [`pkcs7_pad`] with the hash's [`BLOCK_SIZE`].
pub fn pad(data: &[u8]) -> Vec<u8> {
    pad_to(data, BLOCK_SIZE)
}

// block_size must already be validated.
fn pad_to(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad_len = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// pad_block pads a trailing partial block (fewer than [`BLOCK_SIZE`] bytes) into exactly one
/// block. An empty tail becomes a full block of padding.
///
/// # Panics
///
/// Panics if `tail` is a whole block or longer.
pub fn pad_block(tail: &[u8]) -> [u8; BLOCK_SIZE] {
    if tail.len() >= BLOCK_SIZE {
        panic!(
            "could not pad tail. size is {:?}, expected less than {:?}",
            tail.len(),
            BLOCK_SIZE
        );
    }

    let pad_len = (BLOCK_SIZE - tail.len()) as u8;
    let mut block = [pad_len; BLOCK_SIZE];
    block[..tail.len()].copy_from_slice(tail);
    block
}
