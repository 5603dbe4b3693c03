use clock::{sys, Clock};
use log::{debug, warn};

use crate::{calibrate, project, timed_out};

/// Cached Unix time, in seconds, owned by one caller.
///
/// Starts uncalibrated with a cached time of 0. The first [`update`](TimeCache::update)
/// fixes the offset between the monotonic clock and the wall clock for the
/// lifetime of the instance, so later wall clock steps are ignored.
///
/// Updates need `&mut self`, which serializes them:
///
/// ```compile_fail
/// use unix_time::TimeCache;
///
/// let cache = TimeCache::new();
/// let shared = &cache;
/// shared.update();
/// ```
///
/// and a dropped cache can not be touched again:
///
/// ```compile_fail
/// use unix_time::TimeCache;
///
/// let mut cache = TimeCache::new();
/// drop(cache);
/// cache.update();
/// ```
#[derive(Debug)]
pub struct TimeCache<C: Clock = sys::Clock> {
  clock: C,
  time: u64,
  base_offset: Option<u64>
}

impl TimeCache {
  pub fn new() -> TimeCache {
    TimeCache::with_clock(sys::Clock())
  }
}

impl Default for TimeCache {
  fn default() -> TimeCache {
    TimeCache::new()
  }
}

impl<C: Clock> TimeCache<C> {
  pub fn with_clock(clock: C) -> TimeCache<C> {
    TimeCache {
      clock,
      time: 0,
      base_offset: None
    }
  }

  /// Re-reads the monotonic clock. Calibrates against the wall clock on the first call only.
  pub fn update(&mut self) {
    let monotonic_ms = self.clock.monotonic_ms();
    let base_offset = match self.base_offset {
      Some(base_offset) => base_offset,
      None => {
        let unix_secs = self.clock.unix_secs();
        let base_offset = calibrate(unix_secs, monotonic_ms);
        debug!("Calibrated unix time cache at {}s (monotonic {}ms)", unix_secs, monotonic_ms);
        self.base_offset = Some(base_offset);
        base_offset
      }
    };

    let time = project(monotonic_ms, base_offset);
    if time < self.time {
      warn!("Unix time cache moved backwards from {} to {}. Is the monotonic clock monotonic?", self.time, time);
    }
    self.time = time;
  }

  /// Unix time as of the last update. 0 before the first one.
  pub fn get(&self) -> u64 {
    self.time
  }

  /// True once `timestamp + timeout` is at or before the cached time.
  pub fn is_timeout(&self, timestamp: u64, timeout: u64) -> bool {
    timed_out(self.time, timestamp, timeout)
  }

  pub fn is_calibrated(&self) -> bool {
    self.base_offset.is_some()
  }

  pub fn base_offset(&self) -> Option<u64> {
    self.base_offset
  }

  pub fn clock(&self) -> &C {
    &self.clock
  }
}

#[cfg(test)]
mod tests {
  use super::TimeCache;
  use clock::mock;

  const EPOCH_2023: u64 = 1_700_000_000;

  fn calibrated(monotonic_ms: u64, unix_secs: u64) -> (TimeCache<mock::Clock>, mock::Clock) {
    let clock = mock::Clock::new(monotonic_ms, unix_secs);
    let mut cache = TimeCache::with_clock(clock.clone());
    cache.update();
    (cache, clock)
  }

  #[test]
  fn starts_uncalibrated_at_zero() {
    let cache = TimeCache::with_clock(mock::Clock::new(0, EPOCH_2023));
    assert_eq!(cache.get(), 0);
    assert!(!cache.is_calibrated());
    assert_eq!(cache.base_offset(), None);
  }

  #[test]
  fn calibrates_once() {
    let (mut cache, clock) = calibrated(2_000, EPOCH_2023);
    let base_offset = cache.base_offset();
    assert_eq!(base_offset, Some(EPOCH_2023 - 2));

    clock.tick_ms(3_000);
    cache.update();
    assert_eq!(cache.base_offset(), base_offset);
  }

  #[test]
  fn ignores_wall_clock_steps_after_calibration() {
    let (mut cache, clock) = calibrated(0, EPOCH_2023);
    clock.set_unix_secs(EPOCH_2023 - 3_600);
    clock.tick_ms(1_000);
    cache.update();
    assert_eq!(cache.get(), EPOCH_2023 + 1);
  }

  #[test]
  fn monotonic_read_after_update() {
    let (mut cache, clock) = calibrated(0, EPOCH_2023);
    let mut last = cache.get();
    for step_ms in &[0u64, 1, 250, 999, 1, 5_000, 0, 86_400_000] {
      clock.tick_ms(*step_ms);
      cache.update();
      assert!(cache.get() >= last);
      last = cache.get();
    }
  }

  #[test]
  fn get_is_idempotent() {
    let (cache, clock) = calibrated(0, EPOCH_2023);
    let first = cache.get();
    clock.tick_ms(10_000);
    assert_eq!(cache.get(), first);
    assert_eq!(cache.get(), first);
  }

  #[test]
  fn sub_second_ticks_truncate() {
    let (mut cache, clock) = calibrated(0, EPOCH_2023);
    clock.tick_ms(999);
    cache.update();
    assert_eq!(cache.get(), EPOCH_2023);
    clock.tick_ms(1);
    cache.update();
    assert_eq!(cache.get(), EPOCH_2023 + 1);
  }

  #[test]
  fn timeout_boundary() {
    let (cache, _clock) = calibrated(0, EPOCH_2023);
    let now = cache.get();
    for d in &[1u64, 5, 60, 3_600] {
      assert!(cache.is_timeout(now - d, *d));
      assert!(!cache.is_timeout(now - d + 1, *d));
    }
  }

  #[test]
  fn zero_timeout_expires_immediately() {
    let (cache, _clock) = calibrated(0, EPOCH_2023);
    assert!(cache.is_timeout(cache.get(), 0));
  }

  #[test]
  fn timeout_does_not_wrap() {
    let (cache, _clock) = calibrated(0, EPOCH_2023);
    assert!(!cache.is_timeout(u64::MAX, 1));
    assert!(!cache.is_timeout(1, u64::MAX));
  }

  #[test]
  fn end_to_end() {
    let clock = mock::Clock::new(0, EPOCH_2023);
    let mut cache = TimeCache::with_clock(&clock);
    cache.update();
    assert_eq!(cache.get(), 1_700_000_000);

    clock.tick_ms(5_000);
    cache.update();
    assert_eq!(cache.get(), 1_700_000_005);
    assert!(cache.is_timeout(1_700_000_000, 5));
    assert!(!cache.is_timeout(1_700_000_001, 5));
  }

  #[test]
  fn system_clock_cache_tracks_wall_time() {
    let mut cache = TimeCache::new();
    cache.update();
    let wall = std::time::SystemTime::now()
      .duration_since(std::time::UNIX_EPOCH)
      .expect("System clock before unix epoch")
      .as_secs();
    assert!(cache.get() + 2 >= wall && cache.get() <= wall + 2);
  }
}
