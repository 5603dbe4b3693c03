use parking_lot::ReentrantMutex;

/// Mutex the holding thread may lock again without deadlocking.
/// Guards give shared access only; wrap the value in a `Cell`/`RefCell` to mutate.
pub type RecursiveMutex<T> = ReentrantMutex<T>;

pub fn create_recursive_mutex<T>(value: T) -> RecursiveMutex<T> {
  ReentrantMutex::new(value)
}
