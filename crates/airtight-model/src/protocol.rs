//! Protocol registry
//!
//! The serving layer mounts protocols from a fixed, enumerated registry;
//! every module implements the same capability interface. Adding a
//! protocol means adding its module here, not dropping a file into a
//! scanned directory.

use std::path::Path;
use std::sync::OnceLock;

use airtight_core::AirtightResult;

use crate::{Model, ModelConfig};

/// Capability interface implemented by every protocol module
pub trait Protocol: Send + Sync {
    /// Human-readable protocol name.
    fn name(&self) -> &'static str;

    /// URL path segment the serving layer mounts the protocol under.
    fn slug(&self) -> &'static str;

    /// Build the protocol's analysis model from a data directory.
    fn build_model(&self, data_dir: &Path) -> AirtightResult<Model>;
}

/// The AirTight protocol module
#[derive(Debug, Default)]
pub struct Airtight {
    config: ModelConfig,
}

impl Airtight {
    pub fn new(config: ModelConfig) -> Self {
        Airtight { config }
    }
}

impl Protocol for Airtight {
    fn name(&self) -> &'static str {
        "AirTight"
    }

    fn slug(&self) -> &'static str {
        "airtight"
    }

    fn build_model(&self, data_dir: &Path) -> AirtightResult<Model> {
        Model::build(data_dir, self.config.clone())
    }
}

/// Registered protocol modules, in mount order.
pub fn registry() -> &'static [Box<dyn Protocol>] {
    static REGISTRY: OnceLock<Vec<Box<dyn Protocol>>> = OnceLock::new();
    REGISTRY.get_or_init(|| vec![Box::new(Airtight::default())])
}
