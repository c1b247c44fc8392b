//! Operation options

use serde::{Deserialize, Serialize};

/// How to open a file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOptions {
    pub read: bool,
    pub write: bool,
    pub append: bool,
    pub create: bool,
    pub truncate: bool,
}

impl OpenOptions {
    pub fn read_only() -> Self {
        Self { read: true, ..Default::default() }
    }

    /// Create or truncate for writing
    pub fn create_truncate() -> Self {
        Self { write: true, create: true, truncate: true, ..Default::default() }
    }

    pub fn append() -> Self {
        Self { write: true, append: true, create: true, ..Default::default() }
    }

    pub(crate) fn to_tokio(&self) -> tokio::fs::OpenOptions {
        let mut opts = tokio::fs::OpenOptions::new();
        opts.read(self.read)
            .write(self.write)
            .append(self.append)
            .create(self.create)
            .truncate(self.truncate);
        opts
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WriteOptions {
    pub overwrite: bool,
    pub create_parents: bool,
}
