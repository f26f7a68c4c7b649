//! Storage layer for the Caramel gallery
//!
//! Blob containers backed by a local directory tree or process memory.

pub mod error;
mod fs_store;
mod memory;
pub mod traits;

pub use error::StorageError;
pub use fs_store::FsBlobStore;
pub use memory::MemoryBlobStore;
pub use traits::BlobStore;
