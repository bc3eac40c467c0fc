mod atomic_io;
mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};
