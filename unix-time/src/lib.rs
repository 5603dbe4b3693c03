//! Cached Unix time in whole seconds, derived from a monotonic clock.
//!
//! Reading the system clock on every timeout check is wasteful, and the wall
//! clock can jump under NTP. A [`TimeCache`] ties the monotonic clock to the
//! wall clock once, on its first update, and afterwards only moves when its
//! owner calls [`TimeCache::update`] (typically once per event loop turn).
//! Every read in between returns the same value.
//!
//! [`unsync_global`] offers one process-wide instance for code that can not
//! thread a cache through its call graph. It has no internal locking.

mod cache;
pub mod unsync_global;

pub use cache::TimeCache;
pub use clock::Clock;

/// Offset from the monotonic origin to the Unix epoch, in seconds.
/// Wraps so that a monotonic reading ahead of the wall clock still projects back correctly.
pub(crate) fn calibrate(unix_secs: u64, monotonic_ms: u64) -> u64 {
  unix_secs.wrapping_sub(monotonic_ms / 1000)
}

pub(crate) fn project(monotonic_ms: u64, base_offset: u64) -> u64 {
  (monotonic_ms / 1000).wrapping_add(base_offset)
}

// Saturates: a deadline past u64::MAX never expires
pub(crate) fn timed_out(now: u64, timestamp: u64, timeout: u64) -> bool {
  timestamp.saturating_add(timeout) <= now
}
