//! Running statistics for scalar telemetry streams
//!
//! - [`RunningStatistic`] - O(1)-memory Welford accumulator
//! - [`NamedRunningStatistic`] - accumulator with name, units and CSV output
//! - [`StatisticsManager`] - caller-owned registry keyed by any ordered id

mod manager;
mod named;
mod running;

pub use manager::StatisticsManager;
pub use named::NamedRunningStatistic;
pub use running::{RunningStatistic, VarianceKind};
