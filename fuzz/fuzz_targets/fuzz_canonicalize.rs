// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use mirror::canonical::outer_wrapper;
use mirror::{canonicalize, canonicalize_with, RenderConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    // Default rendering must be a fixed point after one pass
    let once = canonicalize(raw);
    assert_eq!(canonicalize(&once), once, "not idempotent for {:?}", raw);

    let expanded = RenderConfig {
        expand_collections: true,
        ..RenderConfig::default()
    };
    let once = canonicalize_with(raw, &expanded);
    assert_eq!(canonicalize_with(&once, &expanded), once);

    let _ = outer_wrapper(raw);
});
