//! chart-embed: a one-page web service with a server-rendered chart.
//!
//! The crate exposes its route table and chart-building logic as a library
//! so integration tests can drive the HTTP surface in-process; the binary
//! in `src/main.rs` only wires configuration, logging and the listener.

pub mod chart;
pub mod config;
pub mod embed;
pub mod error;
pub mod telemetry;
pub mod web;

pub use chart::{ChartSpec, DataPoint, LegendLocation};
pub use embed::{EmbedPair, components};
pub use error::{ChartError, ChartResult};
