// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

pub mod config;
pub mod errors;
pub mod mirror;
pub mod sanitize;
pub mod sink;
pub mod topology;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export the public API
pub use config::{Config, load_config};
pub use errors::Error;
pub use mirror::{CONFIG_FILE_NAME, materialize, scoped_config};
pub use sanitize::sanitize_name;
pub use sink::{FsSink, OutputSink};
pub use topology::{Response, load_topology};
