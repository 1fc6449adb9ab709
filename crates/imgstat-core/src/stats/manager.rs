//! Keyed registry of named running statistics
//!
//! [`StatisticsManager`] is an ordinary caller-owned container. Whoever
//! collects telemetry creates one and passes it around by reference; there
//! is no process-wide instance.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::Debug;

use super::named::NamedRunningStatistic;
use crate::error::{Error, Result};

/// Registry mapping statistic ids to [`NamedRunningStatistic`]s.
///
/// Iteration and CSV export follow key order.
///
/// # Example
///
/// ```
/// use imgstat_core::StatisticsManager;
///
/// let mut stats = StatisticsManager::new();
/// stats.add("frame", "frame_time", "ms").unwrap();
/// stats.push_sample(&"frame", 16.6).unwrap();
/// assert_eq!(stats.get(&"frame").unwrap().statistic().num_samples(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StatisticsManager<K> {
    entries: BTreeMap<K, NamedRunningStatistic>,
}

impl<K> Default for StatisticsManager<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone + Debug> StatisticsManager<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    /// Register a new statistic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatisticExists`] if `id` is already registered.
    /// The existing entry is left untouched.
    pub fn add(
        &mut self,
        id: K,
        name: impl Into<String>,
        units: impl Into<String>,
    ) -> Result<&mut NamedRunningStatistic> {
        match self.entries.entry(id) {
            Entry::Occupied(entry) => {
                tracing::warn!("statistic {:?} already registered", entry.key());
                Err(Error::StatisticExists(format!("{:?}", entry.key())))
            }
            Entry::Vacant(entry) => {
                tracing::debug!("registering statistic {:?}", entry.key());
                Ok(entry.insert(NamedRunningStatistic::new(name, units)))
            }
        }
    }

    /// Return the statistic for `id`, registering it first if needed.
    ///
    /// An existing entry keeps its original name, units and samples.
    pub fn get_or_add(
        &mut self,
        id: K,
        name: impl Into<String>,
        units: impl Into<String>,
    ) -> &mut NamedRunningStatistic {
        self.entries
            .entry(id)
            .or_insert_with(|| NamedRunningStatistic::new(name, units))
    }

    /// Unregister a statistic, returning it if it existed.
    pub fn remove(&mut self, id: &K) -> Option<NamedRunningStatistic> {
        let removed = self.entries.remove(id);
        if removed.is_some() {
            tracing::debug!("removed statistic {:?}", id);
        }
        removed
    }

    pub fn get(&self, id: &K) -> Option<&NamedRunningStatistic> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &K) -> Option<&mut NamedRunningStatistic> {
        self.entries.get_mut(id)
    }

    /// Push a sample into the statistic registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatisticNotFound`] if `id` is not registered.
    pub fn push_sample(&mut self, id: &K, value: f64) -> Result<()> {
        self.entry_mut(id)?.push_sample(value);
        Ok(())
    }

    /// Reset one statistic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StatisticNotFound`] if `id` is not registered.
    pub fn reset(&mut self, id: &K) -> Result<()> {
        self.entry_mut(id)?.reset();
        Ok(())
    }

    /// Reset every registered statistic, keeping the registrations.
    pub fn reset_all(&mut self) {
        for stat in self.entries.values_mut() {
            stat.reset();
        }
    }

    /// Iterate over `(id, statistic)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &NamedRunningStatistic)> {
        self.entries.iter()
    }

    /// Render every statistic as CSV: the header, then one row per entry.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(NamedRunningStatistic::csv_header());
        out.push('\n');
        for stat in self.entries.values() {
            out.push_str(&stat.to_csv_row());
            out.push('\n');
        }
        out
    }

    fn entry_mut(&mut self, id: &K) -> Result<&mut NamedRunningStatistic> {
        self.entries
            .get_mut(id)
            .ok_or_else(|| Error::StatisticNotFound(format!("{id:?}")))
    }
}
