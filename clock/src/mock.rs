use std::sync::{Arc, Mutex};
use super::Clock as ClockT;

#[derive(Debug, Clone, Copy)]
struct Readings {
  monotonic_ms: u64,
  unix_secs: u64
}

/// Hand-driven clock for tests. Clones share the same readings.
#[derive(Debug, Clone)]
pub struct Clock {
  now: Arc<Mutex<Readings>>
}

impl Clock {
  pub fn new(monotonic_ms: u64, unix_secs: u64) -> Clock {
    Clock {
      now: Arc::new(Mutex::new(Readings { monotonic_ms, unix_secs }))
    }
  }

  /// Advances both the monotonic and the wall clock.
  pub fn tick_ms(&self, amount_ms: u64) {
    let mut now = self.now.lock().expect("Could not acquire unpoisoned test clock mutex");
    let before_secs = now.monotonic_ms / 1000;
    now.monotonic_ms += amount_ms;
    now.unix_secs += now.monotonic_ms / 1000 - before_secs;
  }

  /// Steps only the wall clock, as an NTP correction would.
  pub fn set_unix_secs(&self, unix_secs: u64) {
    let mut now = self.now.lock().expect("Could not acquire unpoisoned test clock mutex");
    now.unix_secs = unix_secs;
  }
}

impl ClockT for Clock {
  fn monotonic_ms(&self) -> u64 {
    let now = self.now.lock().expect("Could not acquire unpoisoned test clock mutex");
    now.monotonic_ms
  }

  fn unix_secs(&self) -> u64 {
    let now = self.now.lock().expect("Could not acquire unpoisoned test clock mutex");
    now.unix_secs
  }
}
