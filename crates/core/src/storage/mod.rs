pub mod store;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

pub use store::{KeyValueStore, MemoryStore};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
