//!
//! The 32-bit mixing hash and its internal state
//!

/// Golden ratio, an arbitrary value. Initial value of `a` and `b`.
pub const GOLDEN_RATIO: u32 = 0x9E37_79B9;

const BLOCK_SIZE: usize = 12;

/// The three accumulators, alive only for a single hash call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixState {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl MixState {
    pub fn new(seed: u32) -> Self {
        MixState {
            a: GOLDEN_RATIO,
            b: GOLDEN_RATIO,
            c: seed,
        }
    }

    /// Add one 12-byte block, little-endian, then mix.
    #[inline]
    fn absorb(&mut self, block: &[u8]) {
        self.a = self.a.wrapping_add(read_u32(&block[0..4]));
        self.b = self.b.wrapping_add(read_u32(&block[4..8]));
        self.c = self.c.wrapping_add(read_u32(&block[8..12]));
        self.mix();
    }

    /// Fold the last 0-11 bytes into the state. The lowest byte of `c` is
    /// reserved for the length and is never written here.
    #[inline]
    fn absorb_tail(&mut self, tail: &[u8]) {
        let rem = tail.len();
        if rem >= 11 {
            self.c = self.c.wrapping_add((tail[10] as u32) << 24);
        }
        if rem >= 10 {
            self.c = self.c.wrapping_add((tail[9] as u32) << 16);
        }
        if rem >= 9 {
            self.c = self.c.wrapping_add((tail[8] as u32) << 8);
        }
        if rem >= 8 {
            self.b = self.b.wrapping_add((tail[7] as u32) << 24);
        }
        if rem >= 7 {
            self.b = self.b.wrapping_add((tail[6] as u32) << 16);
        }
        if rem >= 6 {
            self.b = self.b.wrapping_add((tail[5] as u32) << 8);
        }
        if rem >= 5 {
            self.b = self.b.wrapping_add(tail[4] as u32);
        }
        if rem >= 4 {
            self.a = self.a.wrapping_add((tail[3] as u32) << 24);
        }
        if rem >= 3 {
            self.a = self.a.wrapping_add((tail[2] as u32) << 16);
        }
        if rem >= 2 {
            self.a = self.a.wrapping_add((tail[1] as u32) << 8);
        }
        if rem >= 1 {
            self.a = self.a.wrapping_add(tail[0] as u32);
        }
    }

    /// Mix the three accumulators reversibly. Each step of the sequence reads
    /// the values the previous step just wrote.
    #[inline]
    pub fn mix(&mut self) {
        let MixState { a, b, c } = self;

        *a = a.wrapping_sub(*b).wrapping_sub(*c) ^ (*c >> 13);
        *b = b.wrapping_sub(*c).wrapping_sub(*a) ^ (*a << 8);
        *c = c.wrapping_sub(*a).wrapping_sub(*b) ^ (*b >> 13);
        *a = a.wrapping_sub(*b).wrapping_sub(*c) ^ (*c >> 12);
        *b = b.wrapping_sub(*c).wrapping_sub(*a) ^ (*a << 16);
        *c = c.wrapping_sub(*a).wrapping_sub(*b) ^ (*b >> 5);
        *a = a.wrapping_sub(*b).wrapping_sub(*c) ^ (*c >> 3);
        *b = b.wrapping_sub(*c).wrapping_sub(*a) ^ (*a << 10);
        *c = c.wrapping_sub(*a).wrapping_sub(*b) ^ (*b >> 15);
    }

    pub fn finish(self) -> u32 {
        self.c
    }
}

#[inline(always)]
fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Hash a variable-length key into a 32-bit value.
///
/// `seed` is the initial value of the hash when continuing from a previous
/// run, 0 if none. Total over every input, the empty buffer included.
pub fn hash_with_seed(buffer: &[u8], seed: u32) -> u32 {
    let mut state = MixState::new(seed);

    let blocks = buffer.chunks_exact(BLOCK_SIZE);
    let tail = blocks.remainder();
    for block in blocks {
        state.absorb(block);
    }

    // length goes in unconditionally, even with no tail
    state.c = state.c.wrapping_add(buffer.len() as u32);
    state.absorb_tail(tail);
    state.mix();

    state.finish()
}

/// See [`hash_with_seed`]. Same as a seed of 0.
#[inline]
pub fn hash(buffer: &[u8]) -> u32 {
    hash_with_seed(buffer, 0)
}

/// Hash the UTF-8 encoding of `s` with a seed of 0.
///
/// Values depend on the encoding: other ports that hash, say, UTF-16 text
/// will not agree with this for non-ASCII strings.
#[inline]
pub fn hash_str(s: &str) -> u32 {
    hash(s.as_bytes())
}
