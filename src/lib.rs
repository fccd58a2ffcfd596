//!
//! Bob Jenkins' 1996 hash for hash table lookup.
//!
//! Maps an arbitrary byte sequence to a 32-bit value. Every bit of the input
//! affects every bit of the output. This is not a cryptographic hash.
//!
//! ```
//! assert_eq!(jenkinshash::hash(b"a"), 703514648);
//! assert_eq!(jenkinshash::hash_str("hello"), 3070638494);
//! ```
//!
#![no_std]

extern crate alloc;

pub mod hash;
pub mod hasher;
pub mod set;

#[cfg(test)]
mod test_utils;

pub use hash::{hash, hash_str, hash_with_seed, MixState, GOLDEN_RATIO};
pub use hasher::{JenkinsBuildHasher, JenkinsHasher};
pub use set::{JenkinsHashSet, Set};
