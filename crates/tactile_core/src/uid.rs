//! Unique event ids
//!
//! Every motion event gets a `Uid` that is never handed out twice for the
//! lifetime of the `UidSource` it came from. The input subsystem creates one
//! source at startup and clones it into every provider; clones share the same
//! counter.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-unique identifier of a motion event
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(pub u64);

impl Uid {
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shared, monotonically increasing id counter
#[derive(Clone, Debug, Default)]
pub struct UidSource {
    last: Arc<AtomicU64>,
}

impl UidSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id. The first id is `1`.
    pub fn next(&self) -> Uid {
        Uid(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Last id handed out, `0` if none yet
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let source = UidSource::new();
        assert_eq!(source.last(), 0);
        let a = source.next();
        let b = source.next();
        assert_eq!(a, Uid(1));
        assert!(b > a);
        assert_eq!(source.last(), 2);
    }

    #[test]
    fn test_clones_share_counter() {
        let source = UidSource::new();
        let provider = source.clone();
        let a = source.next();
        let b = provider.next();
        let c = source.next();
        assert_ne!(a, b);
        assert_eq!(c.get(), 3);
    }

    #[test]
    fn test_unique_across_threads() {
        let source = UidSource::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = source.clone();
                std::thread::spawn(move || (0..100).map(|_| source.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut all: Vec<Uid> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 400);
    }
}
