// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::fs;
use std::path::Path;

use crate::errors::Error;

/// The filesystem capability the materializer writes through. Keeping this
/// behind a trait lets the traversal and derivation logic run against an
/// in-memory sink in tests.
pub trait OutputSink {
    /// Create `path` and any missing ancestors. Must succeed if the
    /// directory already exists.
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error>;

    /// Write `contents` to `path`, fully replacing any existing file.
    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), Error>;
}

/// Real-filesystem sink used by the binary.
#[derive(Debug, Default)]
pub struct FsSink;

impl OutputSink for FsSink {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error> {
        fs::create_dir_all(path).map_err(|source| Error::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), Error> {
        fs::write(path, contents).map_err(|source| Error::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
