//!
//! A fixed-bucket hash set that places keys with the Jenkins hash
//!
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};

use crate::hasher::JenkinsBuildHasher;

const DEFAULT_BUCKETS: usize = 16;

pub trait Set {
    type Key;
    fn new() -> Self;
    fn contains(&self, key: &Self::Key) -> bool;
    fn insert(&mut self, key: &Self::Key) -> bool;
    fn remove(&mut self, key: &Self::Key) -> bool;
    fn size(&self) -> usize;
}

pub struct Bucket<K> {
    pub data: Vec<K>,
}

/// Hash set with a bucket count fixed at construction. Keys land in bucket
/// `hash(key) % num_buckets`.
pub struct JenkinsHashSet<K, S = JenkinsBuildHasher> {
    buckets: Vec<Bucket<K>>,
    hash_builder: S,
}

impl<K: Eq + Hash> JenkinsHashSet<K> {
    pub fn with_capacity(num_buckets: usize) -> Self {
        Self::with_hasher(num_buckets, JenkinsBuildHasher::default())
    }
}

impl<K: Eq + Hash, S: BuildHasher> JenkinsHashSet<K, S> {
    /// A bucket count of 0 is treated as 1.
    pub fn with_hasher(num_buckets: usize, hash_builder: S) -> Self {
        let num_buckets = num_buckets.max(1);
        let mut buckets = Vec::with_capacity(num_buckets);
        for _ in 0..num_buckets {
            buckets.push(Bucket { data: Vec::new() });
        }

        JenkinsHashSet {
            buckets,
            hash_builder,
        }
    }

    pub fn num_buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Number of keys stored in bucket `idx`, or `None` past the last bucket.
    pub fn bucket_len(&self, idx: usize) -> Option<usize> {
        self.buckets.get(idx).map(|bucket| bucket.data.len())
    }

    pub fn bucket_index(&self, key: &K) -> usize {
        let hash = self.hash_builder.hash_one(key);
        (hash % self.buckets.len() as u64) as usize
    }
}

impl<K: Eq + Clone + Hash> Set for JenkinsHashSet<K> {
    type Key = K;

    fn new() -> Self {
        Self::with_capacity(DEFAULT_BUCKETS)
    }

    fn contains(&self, key: &K) -> bool {
        let bucket_idx = self.bucket_index(key);
        self.buckets[bucket_idx].data.contains(key)
    }

    fn insert(&mut self, key: &K) -> bool {
        let bucket_idx = self.bucket_index(key);
        let bucket = &mut self.buckets[bucket_idx];
        if !bucket.data.contains(key) {
            bucket.data.push(key.clone());
            true
        } else {
            false
        }
    }

    fn remove(&mut self, key: &K) -> bool {
        let bucket_idx = self.bucket_index(key);
        let bucket = &mut self.buckets[bucket_idx];
        if let Some(pos) = bucket.data.iter().position(|k| k == key) {
            bucket.data.swap_remove(pos);
            true
        } else {
            false
        }
    }

    fn size(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.data.len()).sum()
    }
}
