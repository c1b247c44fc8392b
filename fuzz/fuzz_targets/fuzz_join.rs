// SPDX-License-Identifier: AGPL-3.0-or-later
//! Fuzz target for bounded joins

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snpath_core::{join_with, Separator};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    capacity: u8,
    a: &'a [u8],
    b: &'a [u8],
    backslash: bool,
}

fuzz_target!(|input: Input| {
    let sep = if input.backslash { Separator::Backslash } else { Separator::Slash };
    let mut dst = vec![0xaau8; input.capacity as usize];

    if let Ok(len) = join_with(&mut dst, input.a, input.b, sep) {
        assert!(len < dst.len());
        assert_eq!(dst[len], 0);
    }
});
