//! Local filesystem layer for snpath
//!
//! File handles, directory listing, create/delete/copy/move and stat, on top
//! of `tokio::fs`. Path strings are handled by `snpath-core`; this crate only
//! hands them to the OS.

pub mod entry;
pub mod local;
pub mod metadata;
pub mod operations;

pub use entry::{DirEntry, EntryKind};
pub use local::*;
pub use metadata::FileInfo;
pub use operations::{OpenOptions, WriteOptions};
