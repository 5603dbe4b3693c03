pub const fn max_s32(a: i32, b: i32) -> i32 {
  if a > b { a } else { b }
}

pub const fn min_u64(a: u64, b: u64) -> u64 {
  if a < b { a } else { b }
}
