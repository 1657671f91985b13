// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::Path;

use serde::Deserialize;

use crate::errors::Error;

/// Top-level topology document as returned by the monitoring API export.
#[derive(Debug, Deserialize)]
pub struct Response {
    pub status: i64,
    pub message: String,
    pub data: TopologyData,
}

#[derive(Debug, Deserialize)]
pub struct TopologyData {
    #[serde(default)]
    pub containers: Vec<Container>,
}

/// A named grouping node in the topology. Maps 1:1 to an output directory.
#[derive(Debug, Deserialize)]
pub struct Container {
    pub parent_entity_id: String,
    pub container_name: String,
    #[serde(default)]
    pub graphs: Vec<Graph>,
}

#[derive(Debug, Deserialize)]
pub struct Graph {
    pub graph_name: String,
    #[serde(default)]
    pub graph_metadata: Vec<GraphMeta>,
}

/// One monitored metric reference within a graph. Its metadata layout may
/// hold further containers, which is how the topology nests arbitrarily
/// deep.
#[derive(Debug, Deserialize)]
pub struct GraphMeta {
    pub legend_name: String,
    pub entity_id: String,
    pub metric_id: String,
    #[serde(default)]
    pub metadata_layout: MetadataLayout,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetadataLayout {
    #[serde(default)]
    pub containers: Vec<Container>,
}

/// Read and parse the topology JSON document at `path`.
pub fn load_topology(path: &Path) -> Result<Response, Error> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| Error::ParseTopology {
        path: path.to_path_buf(),
        source,
    })
}
