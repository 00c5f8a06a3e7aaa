//! Airport route metadata lookup
//!
//! Builds an in-memory directory of airport and metro-area codes from a
//! tabular data file, then resolves "ORIGIN-DESTINATION" pairs against it.

pub mod api;
pub mod directory;
pub mod ingest;
pub mod resolver;

pub use directory::{Directory, DirectoryEntry, EntryKind, SourceRow};
pub use resolver::{resolve, resolve_batch, RouteResult};
