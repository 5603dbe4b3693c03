use std::time::{Instant, SystemTime, UNIX_EPOCH};
use once_cell::sync::Lazy;
use log::warn;
use super::Clock as ClockT;

// Shared by every sys::Clock so readings from different handles are comparable
static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

#[derive(Debug, Clone, Copy, Default)]
pub struct Clock();

impl ClockT for Clock {
  fn monotonic_ms(&self) -> u64 {
    ORIGIN.elapsed().as_millis() as u64
  }

  fn unix_secs(&self) -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
      Ok(since_epoch) => since_epoch.as_secs(),
      Err(e) => {
        warn!("System clock is set before the unix epoch, reading it as 0: {}", e);
        0
      }
    }
  }
}
