use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info};
use net_util::{PublicKey, PUBLIC_KEY_SIZE};
use unix_time::unsync_global;

const PEERS: u8 = 4;
const TICK: Duration = Duration::from_millis(250);

//ex: RUST_LOG=debug cargo run -p unix-time-tick -- 2 40
fn main() {
  env_logger::init();
  let usage = "Usage: unix-time-tick <timeout secs> <ticks>";
  let mut args = std::env::args().skip(1);
  let timeout = args.next().expect(usage).parse::<u64>().expect(usage);
  let ticks = args.next().expect(usage).parse::<u64>().expect(usage);

  // Single threaded loop: the only caller of unsync_global::update
  let mut last_seen: HashMap<PublicKey, u64> = HashMap::new();
  for tick in 0..ticks {
    unsync_global::update();
    let now = unsync_global::now();

    // Peers take turns going quiet: each one is only heard from during its own stretch of ticks
    let heard = peer((tick / 8 % PEERS as u64) as u8);
    if last_seen.insert(heard, now).is_none() {
      info!("{:?} joined at {}", heard, now);
    }

    let expired: Vec<PublicKey> = last_seen.iter()
      .filter(|(_, seen)| unsync_global::is_timeout(**seen, timeout))
      .map(|(key, _)| *key)
      .collect();
    for key in expired {
      last_seen.remove(&key);
      info!("{:?} timed out at {} after {}s of silence", key, now, timeout);
    }

    debug!("Tick {} at {}: {} live peers", tick, now, last_seen.len());
    std::thread::sleep(TICK);
  }

  println!("Finished {} ticks at unix time {}", ticks, unsync_global::now());
}

fn peer(n: u8) -> PublicKey {
  let mut bytes = [0u8; PUBLIC_KEY_SIZE];
  bytes[0] = n;
  PublicKey::new(bytes)
}
