//! Danger zone classification.
//!
//! The salary rules only depend on the [`ZoneClassifier`] trait; callers
//! inject whichever implementation suits them. [`DangerZoneRegistry`] is the
//! configuration-backed implementation shipped with the crate.

use std::collections::HashSet;

/// Decides whether a duty station is a danger zone.
pub trait ZoneClassifier {
    /// Returns true if `station` warrants danger pay.
    fn is_danger_zone(&self, station: &str) -> bool;
}

impl<F> ZoneClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_danger_zone(&self, station: &str) -> bool {
        self(station)
    }
}

/// A fixed set of danger zone station names.
///
/// Lookups ignore case and surrounding whitespace.
///
/// # Example
///
/// ```
/// use business_rules::zones::{DangerZoneRegistry, ZoneClassifier};
///
/// let registry = DangerZoneRegistry::new(["Juba", "Mogadishu"]);
/// assert!(registry.is_danger_zone(" juba "));
/// assert!(!registry.is_danger_zone("Amman"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DangerZoneRegistry {
    stations: HashSet<String>,
}

impl DangerZoneRegistry {
    /// Builds a registry from station names.
    pub fn new<I, S>(stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stations: stations
                .into_iter()
                .map(|s| normalize(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Returns the number of registered stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no stations are registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl ZoneClassifier for DangerZoneRegistry {
    fn is_danger_zone(&self, station: &str) -> bool {
        self.stations.contains(&normalize(station))
    }
}

fn normalize(station: &str) -> String {
    station.trim().to_lowercase()
}
