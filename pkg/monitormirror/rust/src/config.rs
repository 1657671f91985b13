// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Global monitor configuration. The same shape is written back out per
/// container, with `metricThresholds` narrowed to that container's scope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub source: Source,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub default_config: DefaultConfig,
    pub entity: Entity,
}

/// Severity/notification settings. Opaque to the mirror transform: copied
/// verbatim into every derived config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfig {
    pub email_config_name: String,
    pub slack_config_name: String,
    pub incident_sev_two_config_name: String,
    pub incident_sev_three_config_name: String,
    pub incident_sev_four_config_name: String,
    pub incident: Incident,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub severity: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    pub id: String,
    pub ignore: EntityIds,
    pub whitelist: EntityIds,
    #[serde(default)]
    pub metric_thresholds: Vec<MetricThreshold>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityIds {
    #[serde(default)]
    pub entity_ids: Vec<String>,
}

/// A global alerting rule keyed by `(entityId, metricId)`. The bounds and
/// incident label are optional and must round-trip as absent, never as a
/// default value; the remaining fields are descriptive passenger data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricThreshold {
    pub entity_id: String,
    pub metric_id: String,
    pub parent_entity_id: String,
    pub container_name: String,
    pub graph_name: String,
    pub legend_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident: Option<String>,
}

/// Read and parse the global monitor configuration YAML at `path`.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| Error::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}
