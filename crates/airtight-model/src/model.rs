//! The process-wide analysis model

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use airtight_core::{AirtightError, AirtightResult};
use airtight_log::{EventLog, EventView};
use airtight_route::{GraphView, RouteGraph};
use airtight_schedule::SlotSchedule;
use serde::Serialize;
use tracing::info;

use crate::ModelConfig;

/// Immutable analysis model built once at startup
///
/// Handlers share it by reference; there is no post-construction mutation
/// path, so concurrent reads need no locking.
#[derive(Debug)]
pub struct Model {
    config: ModelConfig,
    routes: RouteGraph,
    log: EventLog,
    schedule: SlotSchedule,
}

/// Serializable protocol constants
#[derive(Clone, Debug, Serialize)]
pub struct InfoView {
    pub slot_length: u32,
}

impl Model {
    /// Build the model from a data directory.
    ///
    /// The directory must hold the routes file, the slot table file and
    /// at least one log file with the accepted extension; any absence
    /// fails before parsing starts.
    pub fn build(data_dir: &Path, config: ModelConfig) -> AirtightResult<Model> {
        if !data_dir.is_dir() {
            return Err(AirtightError::MissingInputDirectory(data_dir.to_path_buf()));
        }
        let routes_path = data_dir.join(&config.routes_file);
        if !routes_path.is_file() {
            return Err(AirtightError::MissingInputFile(routes_path));
        }
        let slot_table_path = data_dir.join(&config.slot_table_file);
        if !slot_table_path.is_file() {
            return Err(AirtightError::MissingInputFile(slot_table_path));
        }
        if !has_log_file(data_dir, &config.log_extension)? {
            return Err(AirtightError::MissingInputFile(
                data_dir.join(format!("*.{}", config.log_extension)),
            ));
        }

        let routes = RouteGraph::from_route_file(&routes_path)?;
        let log = EventLog::from_folder(data_dir, &config.log_extension)?;
        let schedule = SlotSchedule::from_file(&slot_table_path)?;

        info!(
            data_dir = %data_dir.display(),
            nodes = routes.node_count(),
            hops = routes.hop_count(),
            events = log.len(),
            scheduled_nodes = schedule.len(),
            "analysis model built"
        );

        Ok(Model {
            config,
            routes,
            log,
            schedule,
        })
    }

    /// Route graph queries.
    pub fn routes(&self) -> &RouteGraph {
        &self.routes
    }

    /// Event log queries.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Slot schedule queries.
    pub fn schedule(&self) -> &SlotSchedule {
        &self.schedule
    }

    /// Exhaustive connectivity export.
    pub fn graph_view(&self) -> GraphView {
        self.routes.export()
    }

    /// `{node: [action name...]}` view.
    pub fn slot_table_view(&self) -> BTreeMap<u32, Vec<&'static str>> {
        self.schedule.to_view()
    }

    /// Flattened timeline view.
    pub fn timeline_view(&self) -> Vec<EventView> {
        self.log.timeline_view()
    }

    /// Time-indexed timeline view.
    pub fn time_index_view(&self) -> BTreeMap<String, Vec<EventView>> {
        self.log.time_index_view()
    }

    /// Protocol constants view.
    pub fn info_view(&self) -> InfoView {
        InfoView {
            slot_length: self.config.slot_length,
        }
    }
}

fn has_log_file(dir: &Path, extension: &str) -> AirtightResult<bool> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            return Ok(true);
        }
    }
    Ok(false)
}
