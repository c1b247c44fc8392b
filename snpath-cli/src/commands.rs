// SPDX-License-Identifier: AGPL-3.0-or-later
//! CLI command implementations

use chrono::{DateTime, Utc};
use console::style;
use snpath_core::{decompose, join_with, normalize_with, PathResult, Separator};
use snpath_fs::{EntryKind, FileInfo};
use tabled::{Table, Tabled};
use tracing::debug;

use crate::config::{Config, MAX_PATH_LEN_LIMIT};

/// Resolved settings shared by the path commands
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub separator: Separator,
}

impl Settings {
    pub fn new(config: Config, separator: Option<crate::config::SeparatorSetting>) -> Self {
        let separator = separator.unwrap_or(config.separator).resolve();
        Self { config, separator }
    }

    /// Join into a buffer sized from `max_path_len`, optionally normalizing.
    fn join(&self, a: &str, b: &str, normalize: bool) -> PathResult<Vec<u8>> {
        let max = self.config.max_path_len.min(MAX_PATH_LEN_LIMIT);
        let mut buf = vec![0u8; max + 1];
        let mut len = join_with(&mut buf, a.as_bytes(), b.as_bytes(), self.separator)?;
        if normalize {
            len = normalize_with(&mut buf[..len], self.separator);
        }
        buf.truncate(len);
        Ok(buf)
    }
}

fn print_bytes(bytes: &[u8]) {
    println!("{}", String::from_utf8_lossy(bytes));
}

/// Format a timestamp for display
fn format_time(dt: Option<DateTime<Utc>>) -> String {
    dt.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_size(size: u64, human: bool) -> String {
    if human {
        bytesize::ByteSize(size).to_string()
    } else {
        size.to_string()
    }
}

fn format_kind(kind: EntryKind) -> String {
    match kind {
        EntryKind::Directory => style("d").cyan().to_string(),
        EntryKind::File => "-".to_string(),
        EntryKind::Symlink => style("l").magenta().to_string(),
        EntryKind::Unknown => "?".to_string(),
    }
}

fn format_permissions(mode: Option<u32>) -> String {
    let Some(m) = mode else {
        return "---------".to_string();
    };
    let mut out = String::with_capacity(9);
    for shift in [6, 3, 0] {
        let bits = (m >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

/// Join two path fragments
pub fn join(settings: &Settings, a: &str, b: &str, normalize: bool) -> PathResult<()> {
    let normalize = normalize || settings.config.normalize_joined;
    let joined = settings.join(a, b, normalize)?;
    debug!(a, b, normalize, "joined");
    print_bytes(&joined);
    Ok(())
}

/// Normalize each path
pub fn normalize(settings: &Settings, paths: &[String]) -> PathResult<()> {
    for path in paths {
        let mut bytes = path.clone().into_bytes();
        let len = normalize_with(&mut bytes, settings.separator);
        bytes.truncate(len);
        debug!(input = %path, output = %String::from_utf8_lossy(&bytes), "normalized");
        print_bytes(&bytes);
    }
    Ok(())
}

pub fn filename(path: &str) -> PathResult<()> {
    print_bytes(decompose::file_name(path.as_bytes()));
    Ok(())
}

pub fn stem(path: &str) -> PathResult<()> {
    print_bytes(decompose::file_stem(path.as_bytes()));
    Ok(())
}

/// Print the extension; `false` when there is none
pub fn extension(path: &str) -> PathResult<bool> {
    match decompose::extension(path.as_bytes()) {
        Some(ext) => {
            print_bytes(ext);
            Ok(true)
        }
        None => {
            debug!(path, "no extension");
            Ok(false)
        }
    }
}

/// Print the parent; `false` when the path has no separator
pub fn parent(path: &str) -> PathResult<bool> {
    match decompose::parent(path.as_bytes()) {
        Some(p) => {
            print_bytes(p);
            Ok(true)
        }
        None => Ok(false),
    }
}

pub async fn exists(path: &str) -> PathResult<bool> {
    Ok(snpath_fs::exists(path).await)
}

#[derive(Tabled)]
struct LsEntry {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Permissions")]
    perms: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Modified")]
    modified: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// List directory contents
pub async fn ls(path: &str, long: bool, all: bool, human: bool) -> PathResult<()> {
    debug!(path, "listing");
    let entries: Vec<_> = snpath_fs::read_dir(path)
        .await?
        .into_iter()
        .filter(|e| all || !e.is_hidden())
        .collect();

    if entries.is_empty() {
        println!("(empty directory)");
        return Ok(());
    }

    if !long {
        for entry in &entries {
            println!("{}", entry.name);
        }
        return Ok(());
    }

    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        let info = snpath_fs::stat(&entry.path).await?;
        rows.push(LsEntry {
            kind: format_kind(info.kind),
            perms: format_permissions(info.mode),
            size: format_size(info.size, human),
            modified: format_time(info.modified),
            name: entry.name,
        });
    }
    println!("{}", Table::new(rows));
    Ok(())
}

fn print_info(path: &str, info: &FileInfo) {
    println!("  Path: {}", path);
    println!("  Type: {:?}", info.kind);
    println!("  Size: {} ({})", info.size, bytesize::ByteSize(info.size));
    if let Some(mode) = info.mode {
        println!("  Mode: {:o} ({})", mode & 0o7777, format_permissions(Some(mode)));
    }
    println!("  Modified: {}", format_time(info.modified));
    println!("  Accessed: {}", format_time(info.accessed));
    println!("  Changed: {}", format_time(info.changed));
}

/// Show file/directory information
pub async fn stat(path: &str) -> PathResult<()> {
    debug!(path, "stat");
    let info = snpath_fs::stat(path).await?;
    print_info(path, &info);
    Ok(())
}

/// Create directories
pub async fn mkdir(paths: &[String], parents: bool) -> PathResult<()> {
    for path in paths {
        snpath_fs::create_dir(path, parents).await?;
        println!("Created {}", path);
    }
    Ok(())
}

/// Remove files
pub async fn rm(paths: &[String], force: bool) -> PathResult<()> {
    for path in paths {
        match snpath_fs::delete_file(path).await {
            Ok(()) => println!("Removed {}", path),
            Err(e) if force && e.is_not_found() => debug!(path = %path, "already gone"),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Remove empty directories
pub async fn rmdir(paths: &[String]) -> PathResult<()> {
    for path in paths {
        snpath_fs::delete_dir(path).await?;
        println!("Removed {}", path);
    }
    Ok(())
}

/// Copy a file
pub async fn cp(source: &str, dest: &str, force: bool) -> PathResult<()> {
    let copied = snpath_fs::copy_file(source, dest, force).await?;
    println!("Copied {} -> {} ({})", source, dest, bytesize::ByteSize(copied));
    Ok(())
}

/// Move or rename a file
pub async fn mv(source: &str, dest: &str, force: bool) -> PathResult<()> {
    snpath_fs::move_file(source, dest, force).await?;
    println!("Moved {} -> {}", source, dest);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(max_path_len: usize) -> Settings {
        let config = Config { max_path_len, ..Config::default() };
        Settings::new(config, Some(crate::config::SeparatorSetting::Slash))
    }

    #[test]
    fn test_settings_join() {
        let s = settings(64);
        assert_eq!(s.join("a/b", "c/d", false).unwrap(), b"a/b/c/d");
        assert_eq!(s.join("a/b", "../c", true).unwrap(), b"a/c");
    }

    #[test]
    fn test_settings_join_respects_max_len() {
        let s = settings(3);
        assert_eq!(s.join("a", "b", false).unwrap(), b"a/b");
        let err = s.join("ab", "c", false).unwrap_err();
        assert!(err.is_capacity_error());
    }

    #[test]
    fn test_settings_join_clamps_oversized_limit() {
        let s = settings(usize::MAX);
        assert_eq!(s.join("a", "b", false).unwrap(), b"a/b");
    }

    #[tokio::test]
    async fn test_ls_long() {
        let tmp = tempfile::tempdir().unwrap();
        tokio::fs::write(tmp.path().join("f.txt"), b"x").await.unwrap();
        tokio::fs::create_dir(tmp.path().join("sub")).await.unwrap();

        let dir = tmp.path().to_str().unwrap();
        ls(dir, true, false, true).await.unwrap();
        ls(dir, false, true, false).await.unwrap();
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_ls_long_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = tempfile::tempdir().unwrap();
        tokio::fs::write(tmp.path().join(OsStr::from_bytes(b"bad\xff")), b"x")
            .await
            .unwrap();

        ls(tmp.path().to_str().unwrap(), true, false, false).await.unwrap();
    }

    #[test]
    fn test_separator_override() {
        let config = Config {
            separator: crate::config::SeparatorSetting::Backslash,
            ..Config::default()
        };
        assert_eq!(Settings::new(config.clone(), None).separator, Separator::Backslash);
        assert_eq!(
            Settings::new(config, Some(crate::config::SeparatorSetting::Slash)).separator,
            Separator::Slash
        );
    }

    #[test]
    fn test_format_permissions() {
        assert_eq!(format_permissions(Some(0o755)), "rwxr-xr-x");
        assert_eq!(format_permissions(Some(0o100644)), "rw-r--r--");
        assert_eq!(format_permissions(None), "---------");
    }

    #[test]
    fn test_extension_and_parent_outcome() {
        assert!(extension("/a/b/c.txt").unwrap());
        assert!(!extension("/a/b/c").unwrap());
        assert!(parent("a/b").unwrap());
        assert!(!parent("b").unwrap());
    }
}
