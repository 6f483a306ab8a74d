//! AirTight slot schedules
//!
//! Parses the protocol's `SLOT_TABLE` configuration DSL into per-node
//! ordered slot action sequences.

pub mod table;

pub use table::*;
