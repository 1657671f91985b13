// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a mirror run. All variants are fatal: the run
/// aborts at the first failure in traversal order, with no retry and no
/// cleanup of already-written nodes.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse topology document {path}")]
    ParseTopology {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse monitor config {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Should be unreachable for a global config that parsed successfully,
    /// since the derived config is built purely from its fields.
    #[error("failed to serialize config for container {container:?}")]
    SerializeConfig {
        container: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("container nesting under {path} exceeds {limit} levels")]
    NestingTooDeep { path: PathBuf, limit: usize },
}
