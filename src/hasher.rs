use core::hash::{BuildHasher, Hasher};

use crate::hash::hash_with_seed;

/// `core::hash::Hasher` over [`hash_with_seed`].
///
/// Each `write` is one seeded call chained from the previous result, so
/// `write(a); write(b)` is not the same as hashing `a` and `b` concatenated.
#[derive(Debug, Clone, Copy, Default)]
pub struct JenkinsHasher {
    state: u32,
}

impl JenkinsHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl Hasher for JenkinsHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = hash_with_seed(bytes, self.state);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state as u64
    }
}

/// Builds [`JenkinsHasher`]s that all start from the same seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JenkinsBuildHasher {
    seed: u32,
}

impl JenkinsBuildHasher {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl BuildHasher for JenkinsBuildHasher {
    type Hasher = JenkinsHasher;

    #[inline]
    fn build_hasher(&self) -> JenkinsHasher {
        JenkinsHasher::with_seed(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash;

    #[test]
    fn single_write_is_a_seeded_hash() {
        let mut hasher = JenkinsHasher::new();
        hasher.write(b"hello");
        assert_eq!(hasher.finish(), 3070638494);

        let mut hasher = JenkinsBuildHasher::new(1535955511).build_hasher();
        hasher.write(b"hello");
        assert_eq!(hasher.finish(), 1928245299);
    }

    #[test]
    fn writes_chain_through_the_seed() {
        let mut hasher = JenkinsHasher::new();
        hasher.write(b"hello");
        hasher.write(b"world");
        assert_eq!(hasher.finish(), hash_with_seed(b"world", hash(b"hello")) as u64);
        assert_eq!(hasher.finish(), 2281045553);
        assert_ne!(hasher.finish(), hash(b"helloworld") as u64);
    }

    #[test]
    fn unwritten_hasher_finishes_to_seed() {
        assert_eq!(JenkinsHasher::new().finish(), 0);
        assert_eq!(JenkinsBuildHasher::new(42).build_hasher().finish(), 42);
    }

    #[test]
    fn build_hasher_is_deterministic() {
        let builder = JenkinsBuildHasher::default();
        assert_eq!(builder.seed(), 0);
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
        assert_ne!(builder.hash_one("key"), builder.hash_one("kez"));
    }
}
