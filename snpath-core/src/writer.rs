//! Bounds-checked writer over a caller-supplied buffer

use crate::error::{PathError, PathResult};

/// Length of a NUL-terminated path: bytes up to the first NUL, or the whole slice.
#[inline]
pub fn c_len(path: &[u8]) -> usize {
    path.iter().position(|&b| b == 0).unwrap_or(path.len())
}

/// Appends bytes into a fixed-capacity buffer.
///
/// One byte of the buffer is always reserved for the NUL terminator written by
/// [`BoundedWriter::finish`], so a buffer of length `n` holds at most `n - 1`
/// path bytes. An empty buffer cannot hold anything.
#[derive(Debug)]
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> BoundedWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Number of path bytes the buffer can hold.
    pub fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Last byte written, if any.
    pub fn last(&self) -> Option<u8> {
        self.len.checked_sub(1).map(|i| self.buf[i])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn push(&mut self, byte: u8) -> PathResult<()> {
        if self.remaining() == 0 {
            return Err(self.overflow(1));
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Copies as much of `bytes` as fits, failing if anything was left over.
    pub fn extend(&mut self, bytes: &[u8]) -> PathResult<()> {
        let n = bytes.len().min(self.remaining());
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        if n < bytes.len() {
            return Err(self.overflow(bytes.len() - n));
        }
        Ok(())
    }

    /// Writes the terminator and returns the path length.
    pub fn finish(mut self) -> usize {
        if self.len < self.buf.len() {
            self.buf[self.len] = 0;
        }
        self.len
    }

    fn overflow(&self, missing: usize) -> PathError {
        PathError::BufferTooSmall {
            // path bytes plus the terminator
            needed: self.len + missing + 1,
            capacity: self.buf.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_len() {
        assert_eq!(c_len(b"abc\0def"), 3);
        assert_eq!(c_len(b"abc"), 3);
        assert_eq!(c_len(b"\0"), 0);
        assert_eq!(c_len(b""), 0);
    }

    #[test]
    fn test_push_and_finish() {
        let mut buf = [0xffu8; 4];
        let mut w = BoundedWriter::new(&mut buf);
        w.push(b'a').unwrap();
        w.push(b'b').unwrap();
        assert_eq!(w.as_bytes(), b"ab");
        assert_eq!(w.last(), Some(b'b'));
        assert_eq!(w.finish(), 2);
        assert_eq!(&buf[..3], b"ab\0");
    }

    #[test]
    fn test_capacity_reserves_terminator() {
        let mut buf = [0u8; 3];
        let mut w = BoundedWriter::new(&mut buf);
        assert_eq!(w.capacity(), 2);
        w.extend(b"ab").unwrap();
        assert_eq!(w.remaining(), 0);
        let err = w.push(b'c').unwrap_err();
        assert!(matches!(err, PathError::BufferTooSmall { needed: 4, capacity: 3 }));
    }

    #[test]
    fn test_extend_partial_overflow() {
        let mut buf = [0u8; 4];
        let mut w = BoundedWriter::new(&mut buf);
        let err = w.extend(b"abcdef").unwrap_err();
        assert!(matches!(err, PathError::BufferTooSmall { needed: 7, capacity: 4 }));
        assert_eq!(w.as_bytes(), b"abc");
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf: [u8; 0] = [];
        let mut w = BoundedWriter::new(&mut buf);
        assert_eq!(w.capacity(), 0);
        assert!(w.is_empty());
        assert_eq!(w.last(), None);
        assert!(w.push(b'a').is_err());
        assert!(w.extend(b"").is_ok());
        assert_eq!(w.finish(), 0);
    }
}
