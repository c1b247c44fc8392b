//! Local filesystem operations
//!
//! Thin async wrappers over `tokio::fs` that report failures as [`PathError`].

use bytes::Bytes;
use snpath_core::error::{PathError, PathResult};
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, trace};

use crate::{
    entry::DirEntry,
    metadata::FileInfo,
    operations::{OpenOptions, WriteOptions},
};

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Map an io error, naming the path for the common cases.
fn io_error(err: io::Error, path: &Path) -> PathError {
    match err.kind() {
        io::ErrorKind::NotFound => PathError::NotFound(display(path)),
        io::ErrorKind::AlreadyExists => PathError::AlreadyExists(display(path)),
        _ => PathError::Io(err),
    }
}

pub async fn exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref()).await.is_ok()
}

pub async fn is_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

pub async fn is_directory(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Stat a path without following a final symlink.
pub async fn stat(path: impl AsRef<Path>) -> PathResult<FileInfo> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path)
        .await
        .map_err(|e| io_error(e, path))?;
    Ok(FileInfo::from(&meta))
}

/// List a directory, sorted by name.
pub async fn read_dir(path: impl AsRef<Path>) -> PathResult<Vec<DirEntry>> {
    let path = path.as_ref();
    if !is_directory(path).await {
        if exists(path).await {
            return Err(PathError::NotADirectory(display(path)));
        }
        return Err(PathError::NotFound(display(path)));
    }

    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(path).await.map_err(|e| io_error(e, path))?;
    while let Some(entry) = read_dir.next_entry().await? {
        let kind = entry.file_type().await?.into();
        let name = entry.file_name().to_string_lossy().into_owned();
        trace!(dir = %path.display(), %name, "dir entry");
        entries.push(DirEntry::new(name, entry.path(), kind));
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Create a directory. An existing directory counts as success.
pub async fn create_dir(path: impl AsRef<Path>, recursive: bool) -> PathResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), recursive, "create dir");

    let result = if recursive {
        fs::create_dir_all(path).await
    } else {
        fs::create_dir(path).await
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if is_directory(path).await {
                Ok(())
            } else {
                Err(PathError::NotADirectory(display(path)))
            }
        }
        Err(e) => Err(io_error(e, path)),
    }
}

/// Delete an empty directory.
pub async fn delete_dir(path: impl AsRef<Path>) -> PathResult<()> {
    let path = path.as_ref();
    if !is_directory(path).await {
        if exists(path).await {
            return Err(PathError::NotADirectory(display(path)));
        }
        return Err(PathError::NotFound(display(path)));
    }

    let mut read_dir = fs::read_dir(path).await.map_err(|e| io_error(e, path))?;
    if read_dir.next_entry().await?.is_some() {
        return Err(PathError::DirectoryNotEmpty(display(path)));
    }

    debug!(path = %path.display(), "delete dir");
    fs::remove_dir(path).await.map_err(|e| io_error(e, path))
}

/// Delete a file. A symlink is removed itself, whatever it points at.
pub async fn delete_file(path: impl AsRef<Path>) -> PathResult<()> {
    let path = path.as_ref();
    let meta = fs::symlink_metadata(path)
        .await
        .map_err(|e| io_error(e, path))?;
    if meta.is_dir() {
        return Err(PathError::NotAFile(display(path)));
    }
    debug!(path = %path.display(), "delete file");
    fs::remove_file(path).await.map_err(|e| io_error(e, path))
}

/// Checks shared by copy and move.
async fn check_transfer(src: &Path, dst: &Path, overwrite: bool) -> PathResult<()> {
    if !exists(src).await {
        return Err(PathError::NotFound(display(src)));
    }
    if !is_file(src).await {
        return Err(PathError::NotAFile(display(src)));
    }
    if !overwrite && exists(dst).await {
        return Err(PathError::AlreadyExists(display(dst)));
    }
    Ok(())
}

/// Copy a file, returning the number of bytes copied.
pub async fn copy_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    overwrite: bool,
) -> PathResult<u64> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    check_transfer(src, dst, overwrite).await?;
    debug!(src = %src.display(), dst = %dst.display(), "copy file");
    fs::copy(src, dst).await.map_err(|e| io_error(e, src))
}

pub async fn move_file(src: impl AsRef<Path>, dst: impl AsRef<Path>, overwrite: bool) -> PathResult<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    check_transfer(src, dst, overwrite).await?;
    debug!(src = %src.display(), dst = %dst.display(), "move file");
    fs::rename(src, dst).await.map_err(|e| io_error(e, src))
}

/// Open a file. Reads, writes, seeks and flushes go through tokio's
/// `AsyncReadExt`, `AsyncWriteExt` and `AsyncSeekExt`.
pub async fn open(path: impl AsRef<Path>, options: &OpenOptions) -> PathResult<fs::File> {
    let path = path.as_ref();
    trace!(path = %path.display(), ?options, "open");
    options.to_tokio().open(path).await.map_err(|e| io_error(e, path))
}

pub async fn file_size(file: &fs::File) -> PathResult<u64> {
    Ok(file.metadata().await?.len())
}

pub async fn read_file(path: impl AsRef<Path>) -> PathResult<Bytes> {
    let path = path.as_ref();
    if is_directory(path).await {
        return Err(PathError::NotAFile(display(path)));
    }
    let data = fs::read(path).await.map_err(|e| io_error(e, path))?;
    Ok(Bytes::from(data))
}

/// Write a whole file, returning the number of bytes written.
pub async fn write_file(path: impl AsRef<Path>, data: Bytes, options: &WriteOptions) -> PathResult<u64> {
    let path = path.as_ref();

    if exists(path).await && !options.overwrite {
        return Err(PathError::AlreadyExists(display(path)));
    }

    if options.create_parents {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
    }

    debug!(path = %path.display(), len = data.len(), "write file");
    fs::write(path, &data).await.map_err(|e| io_error(e, path))?;
    Ok(data.len() as u64)
}
