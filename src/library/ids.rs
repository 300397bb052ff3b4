//! Record id assignment.

use std::sync::atomic::{AtomicU32, Ordering};

/// Hands out record ids in increasing order, starting at 1 by default.
///
/// Safe to share between threads: every call to [`IdCounter::allocate`]
/// returns a different id. Once the id space is used up, allocation fails
/// rather than wrapping back to 0 (the "no id" sentinel).
#[derive(Debug)]
pub struct IdCounter {
    /// Next id to hand out, 0 once exhausted
    next: AtomicU32,
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdCounter {
    /// Create a counter whose first id is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter whose first id is `first`. A `first` of 0 is
    /// treated as 1.
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first.max(1)),
        }
    }

    /// Take the next id, or `None` if none are left.
    pub fn allocate(&self) -> Option<u32> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                if n == 0 {
                    None
                } else {
                    // u32::MAX is handed out last; 0 marks exhaustion
                    Some(n.wrapping_add(1))
                }
            })
            .ok()
    }

    /// The id the next successful allocation will return (0 if exhausted).
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::SeqCst)
    }
}
