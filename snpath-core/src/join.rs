//! Joining two path fragments into a bounded buffer

use crate::error::{PathError, PathResult};
use crate::separator::{is_separator, Separator};
use crate::writer::{c_len, BoundedWriter};

/// Join `a` and `b` into `dst` using the platform separator.
///
/// See [`join_with`].
pub fn join(dst: &mut [u8], a: &[u8], b: &[u8]) -> PathResult<usize> {
    join_with(dst, a, b, Separator::NATIVE)
}

/// Join `a` and `b` into `dst`, inserting `sep` between them when `a` does not
/// already end in a separator.
///
/// Both inputs end at their first NUL byte, if they have one. On success `dst`
/// holds the joined path followed by a NUL terminator and the path length is
/// returned. If the path and its terminator do not fit, nothing is written and
/// [`PathError::BufferTooSmall`] is returned.
///
/// An empty `a` yields `b` unchanged; an empty `b` yields `a` unchanged, with no
/// trailing separator added.
pub fn join_with(dst: &mut [u8], a: &[u8], b: &[u8], sep: Separator) -> PathResult<usize> {
    let a = &a[..c_len(a)];
    let b = &b[..c_len(b)];

    let needs_sep = !b.is_empty() && a.last().is_some_and(|&c| !is_separator(c));
    let needed = a.len() + usize::from(needs_sep) + b.len() + 1;
    if needed > dst.len() {
        return Err(PathError::BufferTooSmall {
            needed,
            capacity: dst.len(),
        });
    }

    let mut writer = BoundedWriter::new(dst);
    writer.extend(a)?;
    if needs_sep {
        writer.push(sep.as_byte())?;
    }
    writer.extend(b)?;
    Ok(writer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(a: &str, b: &str) -> String {
        let mut buf = [0u8; 64];
        let n = join_with(&mut buf, a.as_bytes(), b.as_bytes(), Separator::Slash).unwrap();
        assert_eq!(buf[n], 0);
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn test_join() {
        assert_eq!(joined("a/b", "c/d"), "a/b/c/d");
    }

    #[test]
    fn test_join_existing_separator() {
        assert_eq!(joined("a/", "b"), "a/b");
        assert_eq!(joined("a\\", "b"), "a\\b");
    }

    #[test]
    fn test_join_empty_first() {
        assert_eq!(joined("", "b/c"), "b/c");
        assert_eq!(joined("", ""), "");
    }

    #[test]
    fn test_join_empty_second_adds_no_separator() {
        assert_eq!(joined("a", ""), "a");
        assert_eq!(joined("a/", ""), "a/");
    }

    #[test]
    fn test_join_backslash() {
        let mut buf = [0u8; 16];
        let n = join_with(&mut buf, b"a", b"b", Separator::Backslash).unwrap();
        assert_eq!(&buf[..n], b"a\\b");
    }

    #[test]
    fn test_join_native() {
        let mut buf = [0u8; 16];
        let n = join(&mut buf, b"dir", b"file").unwrap();
        assert_eq!(&buf[..n], &[b'd', b'i', b'r', Separator::NATIVE.as_byte(), b'f', b'i', b'l', b'e']);
    }

    #[test]
    fn test_join_stops_at_nul() {
        let mut buf = [0u8; 16];
        let n = join_with(&mut buf, b"a\0junk", b"b\0", Separator::Slash).unwrap();
        assert_eq!(&buf[..n], b"a/b");
    }

    #[test]
    fn test_join_overflow() {
        let mut buf = [0xaau8; 3];
        let err = join_with(&mut buf, b"abcdef", b"g", Separator::Slash).unwrap_err();
        assert!(matches!(err, PathError::BufferTooSmall { needed: 9, capacity: 3 }));
        // a failed join leaves the destination untouched
        assert_eq!(buf, [0xaa; 3]);
    }

    #[test]
    fn test_join_exact_fit() {
        let mut buf = [0xffu8; 4];
        assert_eq!(join_with(&mut buf, b"a", b"b", Separator::Slash).unwrap(), 3);
        assert_eq!(&buf, b"a/b\0");

        let mut buf = [0xaau8; 3];
        assert!(join_with(&mut buf, b"a", b"b", Separator::Slash).is_err());
        assert_eq!(buf, [0xaa; 3]);
    }

    #[test]
    fn test_join_zero_capacity() {
        let mut buf: [u8; 0] = [];
        assert!(join_with(&mut buf, b"", b"", Separator::Slash).is_err());
    }
}
