// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

/// Characters that are illegal in a path segment on at least one supported
/// filesystem.
const RESERVED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Maps a container display name to a filesystem-safe path segment by
/// replacing every reserved character with `_`. Pure substitution: the
/// result has the same character length as the input, everything outside
/// the reserved set (Unicode included) passes through unchanged, and
/// sanitizing an already-safe name is a no-op.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}
