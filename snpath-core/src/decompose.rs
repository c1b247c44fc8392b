//! Read-only path decomposition
//!
//! Every function here returns a view into its input. Both `/` and `\` count
//! as separators, and the input ends at its first NUL byte.

use crate::separator::is_separator;
use crate::writer::c_len;

/// Everything after the last separator, or the whole path if there is none.
///
/// Empty when the path ends in a separator.
pub fn file_name(path: &[u8]) -> &[u8] {
    let path = &path[..c_len(path)];
    match path.iter().rposition(|&b| is_separator(b)) {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Bytes after the last `.` of the file name, or `None` if it has no dot.
///
/// Dotfiles get no special treatment: the extension of `.gitignore` is
/// `gitignore`.
pub fn extension(path: &[u8]) -> Option<&[u8]> {
    let name = file_name(path);
    name.iter().rposition(|&b| b == b'.').map(|i| &name[i + 1..])
}

/// The file name without its extension and the dot before it.
pub fn file_stem(path: &[u8]) -> &[u8] {
    let name = file_name(path);
    match name.iter().rposition(|&b| b == b'.') {
        Some(i) => &name[..i],
        None => name,
    }
}

/// Everything before the last separator, or `None` if the path has none.
pub fn parent(path: &[u8]) -> Option<&[u8]> {
    let path = &path[..c_len(path)];
    path.iter().rposition(|&b| is_separator(b)).map(|i| &path[..i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(b"/a/b/c.txt"), b"c.txt");
        assert_eq!(file_name(b"c.txt"), b"c.txt");
        assert_eq!(file_name(b"a\\b\\c"), b"c");
        assert_eq!(file_name(b"a/b\\c"), b"c");
    }

    #[test]
    fn test_file_name_trailing_separator() {
        assert_eq!(file_name(b"/a/b/"), b"");
        assert_eq!(file_name(b"/"), b"");
        assert_eq!(file_name(b""), b"");
    }

    #[test]
    fn test_file_name_stops_at_nul() {
        assert_eq!(file_name(b"/a/b.txt\0/junk"), b"b.txt");
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension(b"/a/b/c.txt"), Some(&b"txt"[..]));
        assert_eq!(extension(b"archive.tar.gz"), Some(&b"gz"[..]));
        assert_eq!(extension(b"/a/b/c"), None);
    }

    #[test]
    fn test_extension_only_looks_at_file_name() {
        assert_eq!(extension(b"dir.d/file"), None);
        assert_eq!(extension(b"dir.d/"), None);
    }

    #[test]
    fn test_extension_dotfile() {
        assert_eq!(extension(b".gitignore"), Some(&b"gitignore"[..]));
        assert_eq!(extension(b"a/name."), Some(&b""[..]));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(b"/a/b/c.txt"), b"c");
        assert_eq!(file_stem(b"archive.tar.gz"), b"archive.tar");
        assert_eq!(file_stem(b"/a/b/c"), b"c");
        assert_eq!(file_stem(b".gitignore"), b"");
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent(b"/a/b/c.txt"), Some(&b"/a/b"[..]));
        assert_eq!(parent(b"a\\b"), Some(&b"a"[..]));
        assert_eq!(parent(b"/a"), Some(&b""[..]));
        assert_eq!(parent(b"a"), None);
    }
}
