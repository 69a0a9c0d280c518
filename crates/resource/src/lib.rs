//! Template providers for the Folio document engine.
//!
//! This crate provides the concrete implementations of the
//! `ResourceProvider` trait from folio-traits.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: Loads templates from a directory on disk
//! - [`EmbeddedTemplates`]: The default page templates compiled into the binary
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from folio-traits:
//! - [`InMemoryResourceProvider`]: Pre-populated in-memory storage

mod embedded;
mod filesystem;

pub use embedded::EmbeddedTemplates;
pub use filesystem::FilesystemResourceProvider;

pub use folio_traits::InMemoryResourceProvider;
