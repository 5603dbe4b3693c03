//! One process-wide [`TimeCache`](crate::TimeCache), with no synchronization.
//!
//! The state lives in relaxed atomics: reads and updates never lock and never
//! call into the OS beyond the clock read in [`update`]. Concurrent use is
//! memory safe but NOT ordered. If two threads call [`update`] at once, a
//! stale value can land last and [`now`] may step backwards, or both may
//! calibrate. Keep updates on one thread (the event loop) or behind a lock of
//! the caller's choosing.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use clock::{sys, Clock};
use log::debug;

use crate::{calibrate, project, timed_out};

static TIME: AtomicU64 = AtomicU64::new(0);
static BASE_OFFSET: AtomicU64 = AtomicU64::new(0);
static CALIBRATED: AtomicBool = AtomicBool::new(false);

/// Updates the shared cache from the system clock.
pub fn update() {
  update_with(&sys::Clock())
}

/// Updates the shared cache from `clock`. Calibrates on the first update in the process only.
pub fn update_with<C: Clock>(clock: &C) {
  let monotonic_ms = clock.monotonic_ms();
  let base_offset = if CALIBRATED.load(Ordering::Relaxed) {
    BASE_OFFSET.load(Ordering::Relaxed)
  } else {
    let unix_secs = clock.unix_secs();
    let base_offset = calibrate(unix_secs, monotonic_ms);
    debug!("Calibrated process-wide unix time at {}s (monotonic {}ms)", unix_secs, monotonic_ms);
    BASE_OFFSET.store(base_offset, Ordering::Relaxed);
    CALIBRATED.store(true, Ordering::Relaxed);
    base_offset
  };

  TIME.store(project(monotonic_ms, base_offset), Ordering::Relaxed);
}

/// Unix time as of the last [`update`]. 0 before the first one.
pub fn now() -> u64 {
  TIME.load(Ordering::Relaxed)
}

/// True once `timestamp + timeout` is at or before [`now`].
pub fn is_timeout(timestamp: u64, timeout: u64) -> bool {
  timed_out(now(), timestamp, timeout)
}
