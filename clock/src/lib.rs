pub mod sys;
pub mod mock;

/// Monotonic non-decreasing clock, paired with the wall clock it is calibrated against
pub trait Clock {
  /// Milliseconds since an arbitrary, process-local origin. Never decreases.
  fn monotonic_ms(&self) -> u64;

  /// Whole seconds since the Unix epoch. Subject to NTP and manual adjustment.
  fn unix_secs(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
  fn monotonic_ms(&self) -> u64 {
    (**self).monotonic_ms()
  }

  fn unix_secs(&self) -> u64 {
    (**self).unix_secs()
  }
}
