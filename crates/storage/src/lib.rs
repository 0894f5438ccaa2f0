#![forbid(unsafe_code)]

pub mod file;
pub mod record;
pub mod repository;

pub use file::JsonFileStore;
pub use record::PersistedRecord;
pub use repository::{InMemoryStore, KeyValueStore, Storage, StorageError};
