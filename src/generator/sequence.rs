//! Per-generator sequence counter
//!
//! Read-increment-wrap as a single CAS so concurrent callers never observe
//! the same value within one cycle

use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence counter cycling through `0..=max`
#[derive(Debug)]
pub struct Sequence {
    next: AtomicU64,
    max: u64,
}

impl Sequence {
    pub const fn new(max: u64) -> Self {
        Self {
            next: AtomicU64::new(0),
            max,
        }
    }

    /// Value the next successful claim will return
    #[inline(always)]
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Acquire)
    }

    /// Next value after `current`, wrapping to 0 past `max`
    #[inline(always)]
    pub const fn successor(current: u64, max: u64) -> u64 {
        if current >= max {
            0
        } else {
            current + 1
        }
    }

    /// Take the current value and advance the counter
    #[inline]
    pub fn claim(&self) -> u64 {
        let mut current = self.peek();
        loop {
            let new = Self::successor(current, self.max);
            match self
                .next
                .compare_exchange_weak(current, new, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => {
                    if new == 0 {
                        tracing::debug!(max = self.max, "sequence wrapped to 0");
                    }
                    return current;
                }
                Err(actual) => current = actual,
            }
        }
    }
}
