//! In-place path normalization
//!
//! A single left-to-right pass rewrites the buffer with two cursors: `read`
//! walks the input, `write` trails behind it and marks the end of the output.
//! `write <= read` holds throughout, so every byte ahead of `read` is still
//! untouched input and can be used for lookahead.
//!
//! Rules:
//! - `/` and `\` are both rewritten to the canonical separator.
//! - A `.` segment is dropped.
//! - A `..` segment drops itself and the segment written before it. With
//!   nothing before it, it is simply dropped. A leading root separator is
//!   never dropped.
//! - The end of the input closes a segment like a separator does, so trailing
//!   `.` and `..` segments collapse too (`a/b/..` becomes `a/`).
//! - Consecutive separators are kept (`a//b` stays as is).
//! - Dots inside a name (`a.b`, `..foo`, `...`) are ordinary bytes.

use crate::separator::{is_separator, Separator};
use crate::writer::c_len;

/// Normalize `path` in place using the platform separator.
///
/// See [`normalize_with`].
pub fn normalize(path: &mut [u8]) -> usize {
    normalize_with(path, Separator::NATIVE)
}

/// Normalize `path` in place, writing `sep` for every separator.
///
/// The input ends at the first NUL byte, or at the end of the slice. The
/// normalized path occupies the front of the buffer and its length is
/// returned; a NUL terminator follows it when there is room. The result is
/// never longer than the input.
pub fn normalize_with(path: &mut [u8], sep: Separator) -> usize {
    let end = c_len(path);
    let canonical = sep.as_byte();

    let mut read = 0;
    let mut write = 0;
    let mut last_sep: Option<usize> = None;
    let mut second_last_sep: Option<usize> = None;
    let mut segment_start = true;

    while read < end {
        let byte = path[read];

        if is_separator(byte) {
            path[write] = canonical;
            second_last_sep = last_sep;
            last_sep = Some(write);
            write += 1;
            read += 1;
            segment_start = true;
            continue;
        }

        if byte == b'.' && segment_start {
            let dots = if read + 1 < end && path[read + 1] == b'.' { 2 } else { 1 };
            let next = read + dots;

            if next == end || is_separator(path[next]) {
                if dots == 2 {
                    write = segment_floor(last_sep, second_last_sep);
                    last_sep = rfind_separator(&path[..write]);
                    second_last_sep = last_sep.and_then(|i| rfind_separator(&path[..i]));
                }
                // consume the dots and the separator closing them
                read = (next + 1).min(end);
                continue;
            }
        }

        path[write] = byte;
        write += 1;
        read += 1;
        segment_start = false;
    }

    if write < path.len() {
        path[write] = 0;
    }
    write
}

/// Normalize a vector in place, truncating it to the normalized length.
pub fn normalize_vec(path: &mut Vec<u8>) {
    let len = normalize(path);
    path.truncate(len);
}

/// Output position a `..` rewinds to: the start of the last written segment.
///
/// Called at a segment boundary, where the output is either empty or ends with
/// the separator at `last_sep`.
fn segment_floor(last_sep: Option<usize>, second_last_sep: Option<usize>) -> usize {
    match (last_sep, second_last_sep) {
        (None, _) => 0,
        (Some(_), Some(prev)) => prev + 1,
        // the only separator sits at the very start: it is a root, keep it
        (Some(0), None) => 1,
        (Some(_), None) => 0,
    }
}

fn rfind_separator(out: &[u8]) -> Option<usize> {
    out.iter().rposition(|&b| is_separator(b))
}
