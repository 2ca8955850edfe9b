//! Shared best-so-far clique: a lock-free-read size plus a mutex-guarded
//! member list, kept mutually consistent via a CAS loop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// the best clique found so far during one solve
#[derive(Debug)]
pub struct Incumbent {
    best_size: AtomicUsize,
    members: Mutex<Vec<u32>>,
}

impl Incumbent {
    /// a fresh incumbent, seeded with `initial_bound` and no known members
    pub fn new(initial_bound: usize) -> Self {
        Incumbent {
            best_size: AtomicUsize::new(initial_bound),
            members: Mutex::new(Vec::new()),
        }
    }

    /// current best size. Used on the hot path inside `expand`'s pruning
    /// check; a relaxed load may observe a slightly stale value, which only
    /// loosens pruning and never admits an incorrect result, because
    /// `update` is monotone.
    #[inline]
    pub fn get(&self) -> usize {
        self.best_size.load(Ordering::Relaxed)
    }

    /// attempt to install a new best clique of size `size`; returns `true`
    /// if this call won the race and installed `members`.
    ///
    /// The size check and the members write happen under the same lock, so
    /// two racing updates can never interleave as "smaller size wins the
    /// members write" — whichever thread gets the lock second re-checks
    /// against the size the first one just installed. `best_size` stays an
    /// atomic purely so `get()` can read it lock-free on the hot path.
    pub fn update(&self, size: usize, members: &[u32]) -> bool {
        let mut guard = self.members.lock().expect("incumbent members mutex poisoned");
        if size <= self.best_size.load(Ordering::Acquire) {
            return false;
        }
        self.best_size.store(size, Ordering::Release);
        *guard = members.to_vec();
        true
    }

    /// a snapshot of the current best members. Locking here serializes
    /// against any in-flight `update`, so the result always matches `get()`
    /// at the instant the lock is acquired.
    pub fn members(&self) -> Vec<u32> {
        self.members.lock().expect("incumbent members mutex poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_update_only_grows() {
        let inc = Incumbent::new(0);
        assert!(inc.update(3, &[1, 2, 3]));
        assert_eq!(inc.get(), 3);
        assert!(!inc.update(2, &[9, 9]));
        assert_eq!(inc.get(), 3);
        assert_eq!(inc.members(), vec![1, 2, 3]);
    }

    #[test]
    fn test_seeded_initial_bound() {
        let inc = Incumbent::new(5);
        assert_eq!(inc.get(), 5);
        assert!(!inc.update(5, &[1, 2, 3, 4, 5]));
        assert!(inc.update(6, &[0, 1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_concurrent_updates_monotone() {
        let inc = Arc::new(Incumbent::new(0));
        let mut handles = Vec::new();
        for t in 0..8 {
            let inc = Arc::clone(&inc);
            handles.push(thread::spawn(move || {
                inc.update(t + 1, &vec![t as u32; (t + 1) as usize]);
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(inc.get(), 8);
        assert_eq!(inc.members().len(), 8);
    }
}
