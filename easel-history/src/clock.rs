// Injectable time source for the quiet-period deadline.

use std::time::Instant;

/// Time source used by [`DebouncedHistory`](crate::DebouncedHistory).
///
/// Production code uses [`SystemClock`]; tests drive a manual clock so
/// debounce behavior is checked without sleeping.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
