//! Rising-tides terrain analysis
//!
//! Floods an immutable elevation grid from its fixed water sources at a
//! caller-supplied water height, then answers questions about what stays
//! dry: the submersion mask, island counts, and land-area metrics. Every
//! query is a pure function of the terrain plus the height, recomputed
//! from scratch per call.

pub mod flood;
pub mod grid;
pub mod islands;
pub mod metrics;
pub mod terrain;
