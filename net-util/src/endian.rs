//! Host/network byte order conversion.

use std::io;
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};

use crate::error;

/// Converts a multi-byte integer stored in `num` to network order, in place.
pub fn host_to_net(num: &mut [u8]) {
  if cfg!(target_endian = "little") {
    num.reverse();
  }
}

pub fn net_to_host(num: &mut [u8]) {
  host_to_net(num)
}

pub fn put_u16(mut buf: &mut [u8], value: u16) -> io::Result<()> {
  buf.write_u16::<NetworkEndian>(value).map_err(|_| error::no_space_to_write())
}

pub fn put_u32(mut buf: &mut [u8], value: u32) -> io::Result<()> {
  buf.write_u32::<NetworkEndian>(value).map_err(|_| error::no_space_to_write())
}

pub fn put_u64(mut buf: &mut [u8], value: u64) -> io::Result<()> {
  buf.write_u64::<NetworkEndian>(value).map_err(|_| error::no_space_to_write())
}

pub fn get_u16(mut buf: &[u8]) -> io::Result<u16> {
  buf.read_u16::<NetworkEndian>().map_err(|_| error::no_space_to_read())
}

pub fn get_u32(mut buf: &[u8]) -> io::Result<u32> {
  buf.read_u32::<NetworkEndian>().map_err(|_| error::no_space_to_read())
}

pub fn get_u64(mut buf: &[u8]) -> io::Result<u64> {
  buf.read_u64::<NetworkEndian>().map_err(|_| error::no_space_to_read())
}
