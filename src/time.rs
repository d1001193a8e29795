//! The engine's one external time dependency: a monotonic millisecond
//! clock. Kept as a free function so the search code reads exactly
//! like the specification (`now_ms() >= stop_time`).

use std::time::Instant;

lazy_static::lazy_static! {
    static ref EPOCH: Instant = Instant::now();
}

/// Milliseconds elapsed since the process started watching the clock
/// (the first call to `now_ms`). Monotonic, never goes backwards.
pub fn now_ms() -> u64 {
    EPOCH.elapsed().as_millis() as u64
}
