//!
//! Seeded random inputs for the property tests
//!
use alloc::vec::Vec;
use rand_core::{RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;

pub struct Random {
    rng: XorShiftRng,
}

impl Random {
    pub fn new() -> Self {
        let mut seed = [0u8; 16];
        for (i, byte) in seed.iter_mut().enumerate() {
            *byte = i as u8;
        }
        Random {
            rng: XorShiftRng::from_seed(seed),
        }
    }

    pub fn get_random(&mut self, min: u64, max: u64) -> u64 {
        let range = max - min + 1;
        let bias = (u64::MAX % range + 1) % range;

        loop {
            let random_value = self.rng.next_u64();
            if random_value >= bias {
                return min + (random_value - bias) % range;
            }
        }
    }

    pub fn get_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    pub fn get_bytes(&mut self, len: usize) -> Vec<u8> {
        let mut bytes = alloc::vec![0u8; len];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }
}
