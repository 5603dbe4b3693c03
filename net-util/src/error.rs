use std::io;

pub fn no_space_to_write() -> io::Error {
  io::Error::new(io::ErrorKind::WriteZero, "Not enough space to write entire value")
}

pub fn no_space_to_read() -> io::Error {
  io::Error::new(io::ErrorKind::UnexpectedEof, "Not enough space to read entire value")
}

pub fn wrong_id_length(expected: usize, actual: usize) -> io::Error {
  io::Error::new(io::ErrorKind::InvalidInput, format!("Expected a {} byte id, got {} bytes", expected, actual))
}
