//! AirTight wire format - fixed-header packet decoding
//!
//! An AirTight packet on the wire is:
//! - Fixed header (9 octets, one field per octet)
//! - Opaque payload (all remaining octets)
//!
//! Log artifacts carry packets as hex text, two digits per octet.

pub mod packet;

pub use packet::*;
