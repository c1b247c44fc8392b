//! Path separators
//!
//! Both `/` and `\` are accepted as separators on input. Output written by the
//! joiner and the normalizer uses a single canonical separator.

use serde::{Deserialize, Serialize};

/// Canonical separator used when writing paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// `/`
    Slash,
    /// `\`
    Backslash,
}

impl Separator {
    /// Separator of the platform this crate was built for.
    #[cfg(windows)]
    pub const NATIVE: Separator = Separator::Backslash;

    /// Separator of the platform this crate was built for.
    #[cfg(not(windows))]
    pub const NATIVE: Separator = Separator::Slash;

    pub const fn as_byte(self) -> u8 {
        match self {
            Separator::Slash => b'/',
            Separator::Backslash => b'\\',
        }
    }

    pub const fn as_char(self) -> char {
        self.as_byte() as char
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::NATIVE
    }
}

/// True for either separator byte, regardless of platform.
#[inline]
pub const fn is_separator(byte: u8) -> bool {
    byte == b'/' || byte == b'\\'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_byte() {
        assert_eq!(Separator::Slash.as_byte(), b'/');
        assert_eq!(Separator::Backslash.as_byte(), b'\\');
        assert_eq!(Separator::Backslash.as_char(), '\\');
    }

    #[test]
    fn test_native() {
        #[cfg(windows)]
        assert_eq!(Separator::NATIVE, Separator::Backslash);
        #[cfg(not(windows))]
        assert_eq!(Separator::NATIVE, Separator::Slash);

        assert_eq!(Separator::default(), Separator::NATIVE);
    }

    #[test]
    fn test_is_separator() {
        assert!(is_separator(b'/'));
        assert!(is_separator(b'\\'));
        assert!(!is_separator(b'.'));
        assert!(!is_separator(b':'));
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            sep: Separator,
        }
        let w: Wrapper = serde_json::from_str(r#"{"sep":"backslash"}"#).unwrap();
        assert_eq!(w.sep, Separator::Backslash);
    }
}
