//! Fixed-size peer identifiers (public keys).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;

use crate::error;

pub const PUBLIC_KEY_SIZE: usize = 32;

#[derive(Clone, Copy)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
  pub const fn new(bytes: [u8; PUBLIC_KEY_SIZE]) -> PublicKey {
    PublicKey(bytes)
  }

  pub fn from_slice(bytes: &[u8]) -> io::Result<PublicKey> {
    if bytes.len() != PUBLIC_KEY_SIZE {
      return Err(error::wrong_id_length(PUBLIC_KEY_SIZE, bytes.len()));
    }

    let mut key = [0u8; PUBLIC_KEY_SIZE];
    key.copy_from_slice(bytes);
    Ok(PublicKey(key))
  }

  pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
    &self.0
  }
}

impl PartialEq for PublicKey {
  fn eq(&self, other: &PublicKey) -> bool {
    id_equal(self, other)
  }
}

impl Eq for PublicKey {}

impl Hash for PublicKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.hash(state)
  }
}

// Leading bytes are enough to tell peers apart in logs
impl fmt::Debug for PublicKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "PublicKey(")?;
    for byte in &self.0[..4] {
      write!(f, "{:02x}", byte)?;
    }
    write!(f, "..)")
  }
}

/// Compares every byte regardless of where the first difference is.
pub fn id_equal(a: &PublicKey, b: &PublicKey) -> bool {
  a.0.iter()
    .zip(b.0.iter())
    .fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

/// Copies the key into the front of `dest`, returning the number of bytes written.
pub fn id_copy(dest: &mut [u8], src: &PublicKey) -> io::Result<usize> {
  if dest.len() < PUBLIC_KEY_SIZE {
    return Err(error::no_space_to_write());
  }

  dest[..PUBLIC_KEY_SIZE].copy_from_slice(&src.0);
  Ok(PUBLIC_KEY_SIZE)
}
