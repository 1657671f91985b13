// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::collections::HashSet;
use std::path::Path;

use log::debug;

use crate::config::{Config, Entity, Source};
use crate::errors::Error;
use crate::sanitize::sanitize_name;
use crate::sink::OutputSink;
use crate::topology::Container;

/// Name of the derived configuration file written into every container
/// directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Containers nested deeper than this abort the run. The input is an owned
/// tree so a true cycle cannot occur in memory, but a pathological export
/// should surface as an error rather than unbounded recursion.
const MAX_DEPTH: usize = 64;

/// Mirrors `containers` under `base`: per container, one directory (named
/// after the sanitized display name) holding a scoped config file, then the
/// containers nested inside its graph metadata, depth-first pre-order.
/// Siblings are processed in input order; the first sink failure aborts the
/// whole run with no cleanup of nodes already written.
pub fn materialize(
    sink: &mut dyn OutputSink,
    base: &Path,
    containers: &[Container],
    global: &Config,
) -> Result<(), Error> {
    materialize_at(sink, base, containers, global, 0)
}

fn materialize_at(
    sink: &mut dyn OutputSink,
    base: &Path,
    containers: &[Container],
    global: &Config,
    depth: usize,
) -> Result<(), Error> {
    if depth >= MAX_DEPTH {
        return Err(Error::NestingTooDeep {
            path: base.to_path_buf(),
            limit: MAX_DEPTH,
        });
    }

    for container in containers {
        let segment = sanitize_name(&container.container_name);
        let path = base.join(segment);
        sink.create_dir_all(&path)?;

        let scoped = scoped_config(global, container);
        let yaml = serde_yaml::to_string(&scoped).map_err(|source| Error::SerializeConfig {
            container: container.container_name.clone(),
            source,
        })?;
        sink.write_file(&path.join(CONFIG_FILE_NAME), &yaml)?;
        debug!(
            "mirrored container {:?} with {} threshold(s) at {}",
            container.container_name,
            scoped.source.entity.metric_thresholds.len(),
            path.display()
        );

        // Nested containers re-filter from the full global config; the
        // threshold list is never narrowed before recursion.
        for graph in &container.graphs {
            for meta in &graph.graph_metadata {
                if !meta.metadata_layout.containers.is_empty() {
                    materialize_at(sink, &path, &meta.metadata_layout.containers, global, depth + 1)?;
                }
            }
        }
    }
    Ok(())
}

/// Derives the per-container config: defaults and entity identity are
/// cloned verbatim from the global config, and the threshold list is
/// narrowed to the `(entityId, metricId)` pairs referenced by the
/// container's own graph metadata. One level only; descendant containers'
/// metadata is not consulted.
///
/// At most one threshold is kept per `(entityId, metricId)` pair, first
/// match wins, and the output order is the order in which each pair's
/// first match is encountered.
pub fn scoped_config(global: &Config, container: &Container) -> Config {
    let entity = &global.source.entity;
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut thresholds = Vec::new();

    for graph in &container.graphs {
        for meta in &graph.graph_metadata {
            for threshold in &entity.metric_thresholds {
                if threshold.entity_id == meta.entity_id
                    && threshold.metric_id == meta.metric_id
                    && seen.insert((threshold.entity_id.as_str(), threshold.metric_id.as_str()))
                {
                    thresholds.push(threshold.clone());
                }
            }
        }
    }

    Config {
        source: Source {
            default_config: global.source.default_config.clone(),
            entity: Entity {
                name: entity.name.clone(),
                id: entity.id.clone(),
                ignore: entity.ignore.clone(),
                whitelist: entity.whitelist.clone(),
                metric_thresholds: thresholds,
            },
        },
    }
}
