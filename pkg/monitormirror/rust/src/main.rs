// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::{error, info};

use dd_monitor_mirror::sink::{FsSink, OutputSink};
use dd_monitor_mirror::{load_config, load_topology, materialize};

// Fixed working-directory contract: two input files in, one mirror tree
// out. No flags, no environment variables.
const TOPOLOGY_FILE: &str = "topology.json";
const CONFIG_FILE: &str = "monitor-config.yaml";
const OUTPUT_DIR: &str = "monitoring_structure";

fn run() -> Result<()> {
    let topology = load_topology(Path::new(TOPOLOGY_FILE)).context("loading topology")?;
    let config = load_config(Path::new(CONFIG_FILE)).context("loading monitor config")?;
    info!(
        "loaded {} top-level container(s) and {} global threshold(s)",
        topology.data.containers.len(),
        config.source.entity.metric_thresholds.len()
    );

    let mut sink = FsSink;
    sink.create_dir_all(Path::new(OUTPUT_DIR))
        .context("creating base directory")?;
    materialize(
        &mut sink,
        Path::new(OUTPUT_DIR),
        &topology.data.containers,
        &config,
    )
    .context("mirroring topology")?;

    info!("monitoring structure written to {OUTPUT_DIR}/");
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = simple_logger::init_with_level(log::Level::Info) {
        eprintln!("failed to initialize logger: {e}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
