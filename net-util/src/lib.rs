pub mod cmp;
pub mod endian;
pub mod error;
pub mod id;
pub mod mutex;

pub use id::{PublicKey, PUBLIC_KEY_SIZE, id_copy, id_equal};
pub use mutex::{RecursiveMutex, create_recursive_mutex};
