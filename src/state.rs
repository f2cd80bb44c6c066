use crate::prng::{Xorshift8, SEED_SIZE};

/// The size in bytes of the working state (1024 bits).
pub const STATE_SIZE: usize = 128;

/// The size in bytes of the folded digest (256 bits).
pub const DIGEST_SIZE: usize = 32;

// Two full passes over the state after the last message byte.
const DIFFUSION_ROUNDS: usize = STATE_SIZE * 2;

/// State is the context of a single hash computation: the working buffer and the generator
/// that mixes bytes into it.
///
/// A computation goes through [`State::absorb`] (or [`State::update`] followed by
/// [`State::diffuse`]), then [`State::finalize`], then [`State::fold`]. Nothing is shared
/// between two `State` values, so independent computations can run on different threads.
#[derive(Clone, Debug)]
pub struct State {
    buf: [u8; STATE_SIZE], // working state
    rng: Xorshift8,
    seed: [u8; SEED_SIZE], // first bytes of the padded message
    pos: usize,            // last position written by absorption
    len: u64,              // number of padded message bytes absorbed
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// new returns a zeroed state.
    pub fn new() -> Self {
        Self {
            buf: [0; STATE_SIZE],
            rng: Xorshift8::default(),
            seed: [0; SEED_SIZE],
            pos: 0,
            len: 0,
        }
    }

    /// reset zero-fills the working state and forgets any absorbed bytes.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// absorb runs the whole absorption phase over a padded message: the state is reset, the
    /// generator is seeded from the first four bytes, every following byte is folded into the
    /// state and two diffusion passes close the phase.
    ///
    /// # Panics
    ///
    /// Panics if `padded` is shorter than the seed.
    pub fn absorb(&mut self, padded: &[u8]) {
        if padded.len() < SEED_SIZE {
            panic!(
                "could not absorb message. size is {:?}, expected at least {:?}",
                padded.len(),
                SEED_SIZE
            );
        }

        self.reset();
        self.update(padded);
        self.diffuse();
    }

    /// update absorbs the next bytes of the padded message, without the final diffusion.
    ///
    /// Byte `i` of the message goes to position `i mod STATE_SIZE`. The first
    /// [`SEED_SIZE`] bytes are not written to the state; they seed the generator.
    pub fn update(&mut self, data: &[u8]) {
        for &b in data {
            self.absorb_byte(b);
        }
    }

    fn absorb_byte(&mut self, b: u8) {
        if self.len < SEED_SIZE as u64 {
            self.seed[self.len as usize] = b;
            if self.len + 1 == SEED_SIZE as u64 {
                self.rng = Xorshift8::new(self.seed);
            }
        } else {
            self.pos = (self.len % STATE_SIZE as u64) as usize;
            let r = self.rng.next(b);
            self.buf[self.pos] ^= r;
        }
        self.len += 1;
    }

    /// diffuse feeds the state back into itself for two full passes, starting at the last
    /// position absorption wrote to. This spreads the last message bytes over the whole state.
    pub fn diffuse(&mut self) {
        let mut pos = self.pos;
        for _ in 0..DIFFUSION_ROUNDS {
            let index = pos % STATE_SIZE;
            let r = self.rng.next(self.buf[index]);
            self.buf[index] ^= r;
            pos += 1;
        }
    }

    /// finalize reseeds the generator from each aligned 4-byte chunk of the state in turn and
    /// xors a full pass of generator output (driven with zero input) over the state after
    /// each reseed: 32 reseeds of 128 rounds.
    pub fn finalize(&mut self) {
        for i in (0..STATE_SIZE).step_by(SEED_SIZE) {
            self.rng.seed_from_slice(&self.buf[i..i + SEED_SIZE]);
            for j in 0..STATE_SIZE {
                let r = self.rng.next(0);
                self.buf[j] ^= r;
            }
        }
    }

    /// fold compresses the state into the digest. Output byte `i` is the wrapping sum of byte
    /// `i` of each 32-byte quarter of the state plus the previous output byte.
    pub fn fold(&self) -> [u8; DIGEST_SIZE] {
        let mut digest = [0u8; DIGEST_SIZE];
        let mut feedback = 0u8;

        digest.iter_mut().enumerate().for_each(|(i, out)| {
            let acc = self.buf[i]
                .wrapping_add(self.buf[i + DIGEST_SIZE])
                .wrapping_add(self.buf[i + DIGEST_SIZE * 2])
                .wrapping_add(self.buf[i + DIGEST_SIZE * 3])
                .wrapping_add(feedback);
            *out = acc;
            feedback = acc;
        });

        digest
    }

    /// as_bytes returns the working state.
    pub fn as_bytes(&self) -> &[u8; STATE_SIZE] {
        &self.buf
    }

    /// absorbed_len returns how many padded message bytes were absorbed so far.
    pub fn absorbed_len(&self) -> u64 {
        self.len
    }
}
