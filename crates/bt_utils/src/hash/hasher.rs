//! Hashers with reproducible output.
//!
//! [`FixedHashState`] seeds `foldhash` with a constant; [`NoOpHashState`]
//! returns the `u64` it is fed, for keys that are hashes already.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHashState

const SEED: u64 = 0x95EE04C4F326B271;

/// The hasher built by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A `foldhash` state with a constant seed: equal inputs hash equally in
/// every process.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use bt_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("rxid"), FixedHashState.hash_one("rxid"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        const STATE: FixedState = FixedState::with_seed(SEED);
        STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHashState

/// Keeps the last `u64` written as the hash.
///
/// Byte input is folded in little-endian order so that a `u32` and a `u64`
/// of the same value agree.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher(u64);

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0 = bytes
            .iter()
            .rev()
            .fold(self.0, |acc, byte| (acc << 8) | u64::from(*byte));
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

/// Builds [`NoOpHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use bt_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(7_u64), 7);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher::default()
    }
}

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use super::{FixedHashState, NoOpHashState};

    #[test]
    fn fixed_state_is_deterministic() {
        let a = FixedHashState.hash_one("detailMessage");
        assert_eq!(a, FixedHashState.hash_one("detailMessage"));
        assert_ne!(a, FixedHashState.hash_one("stackTrace"));
    }

    #[test]
    fn noop_passes_integers_through() {
        assert_eq!(NoOpHashState.hash_one(1234_u64), 1234);
        assert_eq!(NoOpHashState.hash_one(1234_u32), 1234);
    }
}
