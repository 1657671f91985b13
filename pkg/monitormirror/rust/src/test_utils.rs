// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Config, DefaultConfig, Entity, EntityIds, Incident, MetricThreshold, Source};
use crate::errors::Error;
use crate::sink::OutputSink;
use crate::topology::{Container, Graph, GraphMeta, MetadataLayout};

/// One recorded sink operation, in call order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Dir(PathBuf),
    File(PathBuf, String),
}

/// In-memory sink that records every operation and can be told to fail at
/// a specific path, for fail-fast tests.
#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    pub ops: Vec<Op>,
    pub fail_on_dir: Option<PathBuf>,
}

impl MemorySink {
    pub fn dirs(&self) -> Vec<&Path> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Dir(path) => Some(path.as_path()),
                Op::File(..) => None,
            })
            .collect()
    }

    pub fn files(&self) -> Vec<(&Path, &str)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::File(path, contents) => Some((path.as_path(), contents.as_str())),
                Op::Dir(_) => None,
            })
            .collect()
    }
}

impl OutputSink for MemorySink {
    fn create_dir_all(&mut self, path: &Path) -> Result<(), Error> {
        if self.fail_on_dir.as_deref() == Some(path) {
            return Err(Error::CreateDir {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "injected failure"),
            });
        }
        self.ops.push(Op::Dir(path.to_path_buf()));
        Ok(())
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> Result<(), Error> {
        self.ops.push(Op::File(path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

pub(crate) fn meta(entity_id: &str, metric_id: &str) -> GraphMeta {
    GraphMeta {
        legend_name: format!("{entity_id}/{metric_id}"),
        entity_id: entity_id.to_string(),
        metric_id: metric_id.to_string(),
        metadata_layout: MetadataLayout::default(),
    }
}

pub(crate) fn meta_with_children(
    entity_id: &str,
    metric_id: &str,
    children: Vec<Container>,
) -> GraphMeta {
    GraphMeta {
        metadata_layout: MetadataLayout { containers: children },
        ..meta(entity_id, metric_id)
    }
}

pub(crate) fn graph(name: &str, graph_metadata: Vec<GraphMeta>) -> Graph {
    Graph {
        graph_name: name.to_string(),
        graph_metadata,
    }
}

pub(crate) fn container(name: &str, graphs: Vec<Graph>) -> Container {
    Container {
        parent_entity_id: "parent".to_string(),
        container_name: name.to_string(),
        graphs,
    }
}

pub(crate) fn threshold(entity_id: &str, metric_id: &str, min: Option<f64>) -> MetricThreshold {
    MetricThreshold {
        entity_id: entity_id.to_string(),
        metric_id: metric_id.to_string(),
        parent_entity_id: "parent".to_string(),
        container_name: "container".to_string(),
        graph_name: "graph".to_string(),
        legend_name: format!("{entity_id}/{metric_id}"),
        min,
        max: None,
        incident: None,
    }
}

pub(crate) fn global_config(metric_thresholds: Vec<MetricThreshold>) -> Config {
    Config {
        source: Source {
            default_config: DefaultConfig {
                email_config_name: "email-default".to_string(),
                slack_config_name: "slack-default".to_string(),
                incident_sev_two_config_name: "sev2".to_string(),
                incident_sev_three_config_name: "sev3".to_string(),
                incident_sev_four_config_name: "sev4".to_string(),
                incident: Incident {
                    severity: "SEV-3".to_string(),
                    enabled: true,
                },
            },
            entity: Entity {
                name: "test-cluster".to_string(),
                id: "entity-1".to_string(),
                ignore: EntityIds {
                    entity_ids: vec!["ignored".to_string()],
                },
                whitelist: EntityIds {
                    entity_ids: vec!["allowed".to_string()],
                },
                metric_thresholds,
            },
        },
    }
}
