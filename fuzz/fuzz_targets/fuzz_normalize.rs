// SPDX-License-Identifier: AGPL-3.0-or-later
//! Fuzz target for in-place normalization and decomposition

#![no_main]

use libfuzzer_sys::fuzz_target;
use snpath_core::{decompose, normalize_with, Separator};

fuzz_target!(|data: &[u8]| {
    let mut once = data.to_vec();
    let len = normalize_with(&mut once, Separator::Slash);
    assert!(len <= data.len());
    once.truncate(len);
    assert!(!once.contains(&b'\\'));

    // a second pass changes nothing
    let mut twice = once.clone();
    let len2 = normalize_with(&mut twice, Separator::Slash);
    twice.truncate(len2);
    assert_eq!(once, twice);

    let name = decompose::file_name(&once);
    if let Some(ext) = decompose::extension(&once) {
        assert!(ext.len() < name.len());
    }
    let _ = decompose::file_stem(&once);
    let _ = decompose::parent(&once);
});
