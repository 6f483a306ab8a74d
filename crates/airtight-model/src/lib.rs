//! AirTight Analysis model assembly
//!
//! Builds the immutable in-memory model (route graph, event log, slot
//! schedule) from a data directory and exposes the read-only query and
//! view surface consumed by a serving layer. Protocol modules are found
//! through a static, enumerated registry rather than a directory scan.

pub mod config;
pub mod model;
pub mod protocol;

pub use config::*;
pub use model::*;
pub use protocol::*;
