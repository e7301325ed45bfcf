//! Severity definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Severity of a log event, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
    Fatal = 5,
}

impl Severity {
    /// Number of severities
    pub const COUNT: usize = 6;

    /// All severities in ascending order
    pub const ALL: [Severity; Severity::COUNT] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Ordinal position, used to index severity tables
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

/// Total map from severity to an optional value.
///
/// Used for every "severity to text" table in the printer chain (prefixes,
/// logfmt level names, color codes). A severity without an entry is simply
/// not configured.
///
/// # Example
///
/// ```
/// use rust_logforge::{Severity, SeverityMap};
///
/// let prefixes = SeverityMap::<String>::new()
///     .with(Severity::Info, "I ")
///     .with(Severity::Error, "E ");
///
/// assert_eq!(prefixes.get(Severity::Info).map(String::as_str), Some("I "));
/// assert!(prefixes.get(Severity::Debug).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<Severity, T>")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SeverityMap<T> {
    slots: [Option<T>; Severity::COUNT],
}

impl<T> SeverityMap<T> {
    /// Create a map with no entries
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Add or replace an entry
    #[must_use]
    pub fn with(mut self, severity: Severity, value: impl Into<T>) -> Self {
        self.set(severity, value);
        self
    }

    pub fn set(&mut self, severity: Severity, value: impl Into<T>) {
        self.slots[severity.index()] = Some(value.into());
    }

    pub fn remove(&mut self, severity: Severity) -> Option<T> {
        self.slots[severity.index()].take()
    }

    #[inline]
    pub fn get(&self, severity: Severity) -> Option<&T> {
        self.slots[severity.index()].as_ref()
    }

    /// Configured entries in severity order
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &T)> + '_ {
        Severity::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(severity, slot)| slot.as_ref().map(|value| (*severity, value)))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl<T> Default for SeverityMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Severity, T)> for SeverityMap<T> {
    fn from_iter<I: IntoIterator<Item = (Severity, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (severity, value) in iter {
            map.slots[severity.index()] = Some(value);
        }
        map
    }
}

impl<T> From<BTreeMap<Severity, T>> for SeverityMap<T> {
    fn from(entries: BTreeMap<Severity, T>) -> Self {
        entries.into_iter().collect()
    }
}
