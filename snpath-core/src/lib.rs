//! snpath core
//!
//! Joining, normalizing and decomposing filesystem paths held in
//! caller-supplied byte buffers. Nothing in this crate touches the
//! filesystem or allocates on its own.
//!
//! ```
//! use snpath_core::{decompose, join_with, normalize_with, Separator};
//!
//! let mut buf = [0u8; 64];
//! join_with(&mut buf, b"a/./b", b"../c.txt", Separator::Slash).unwrap();
//! let len = normalize_with(&mut buf, Separator::Slash);
//! assert_eq!(&buf[..len], b"a/c.txt");
//! assert_eq!(decompose::extension(&buf[..len]), Some(&b"txt"[..]));
//! ```

pub mod decompose;
pub mod error;
pub mod join;
pub mod normalize;
pub mod separator;
pub mod writer;

pub use decompose::{extension, file_name, file_stem, parent};
pub use error::{PathError, PathResult};
pub use join::{join, join_with};
pub use normalize::{normalize, normalize_vec, normalize_with};
pub use separator::{is_separator, Separator};
pub use writer::BoundedWriter;
