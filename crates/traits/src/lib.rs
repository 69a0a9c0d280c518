//! Platform abstraction traits.
//!
//! The generator never touches the filesystem or a thread pool directly; it
//! goes through these traits so that templates can come from disk, from the
//! binary itself, or from memory, and batches can run sequentially or in
//! parallel.

pub mod executor;
pub mod resource;

pub use executor::{Executor, SyncExecutor};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
