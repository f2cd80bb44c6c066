/// Number of seed bytes, one per register.
pub const SEED_SIZE: usize = 4;

/// Xorshift8 is a data-dependent 8-bit Xorshift generator.
///
/// Its whole context is four byte registers (x, y, z, w) which behave like a 32-bit shift
/// register. Every call to [`Xorshift8::next`] consumes one input byte and shifts all four
/// registers, so the output depends on both the seed and every byte fed so far.
///
/// All the arithmetic is done on `u8`, so every step wraps mod 256 by type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Xorshift8 {
    x: u8,
    y: u8,
    z: u8,
    w: u8,
}

impl Xorshift8 {
    /// new returns a generator seeded with the given registers, in (x, y, z, w) order.
    pub fn new(seed: [u8; SEED_SIZE]) -> Self {
        let [x, y, z, w] = seed;
        Self { x, y, z, w }
    }

    /// set_seed overwrites the four registers.
    pub fn set_seed(&mut self, a: u8, b: u8, c: u8, d: u8) {
        self.x = a;
        self.y = b;
        self.z = c;
        self.w = d;
    }

    /// seed_from_slice reseeds from the first four bytes of `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is shorter than [`SEED_SIZE`].
    pub fn seed_from_slice(&mut self, seed: &[u8]) {
        self.set_seed(seed[0], seed[1], seed[2], seed[3]);
    }

    /// next mixes `data` into the generator, advances it and returns the new `w` register.
    #[inline]
    pub fn next(&mut self, data: u8) -> u8 {
        // The high bits of x << 3 are dropped before the xor. Only the low 8 bits
        // survive the final mask anyway, so the result is the same.
        let t = self.x ^ data ^ (self.x << 3);
        let w = self.w;
        self.x = self.y;
        self.y = self.z;
        self.z = w;
        self.w = w ^ (w >> 1) ^ t ^ (t << 2);
        self.w
    }

    /// registers returns the current (x, y, z, w) state.
    pub fn registers(&self) -> [u8; SEED_SIZE] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[u8; SEED_SIZE]> for Xorshift8 {
    fn from(seed: [u8; SEED_SIZE]) -> Self {
        Self::new(seed)
    }
}
