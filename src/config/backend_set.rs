// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{BackendDescriptor, MountConfig};

/// A type-safe, insertion-ordered mapping of backend names to descriptors.
///
/// The `BackendSet` is the input of one mount run: each entry pairs a logical
/// name with the descriptor used to reach that backend. Iteration order is
/// insertion order and is the order mounts are scheduled; completion order is
/// a property of the run, not of the set.
///
/// Names are expected to be unique. Sets built from a config file go through
/// [`validate_mount_config`](crate::config::validate_mount_config), which
/// rejects duplicates; programmatic callers own that invariant themselves.
///
/// # Examples
///
/// ```
/// use switchboard::config::{BackendDescriptor, BackendSet};
///
/// let mut set = BackendSet::new();
/// set.insert(
///     "geo",
///     BackendDescriptor::Http { endpoint: "http://localhost:9001/".to_string() },
/// );
///
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.names(), vec!["geo"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BackendSet(pub Vec<(String, BackendDescriptor)>);

impl BackendSet {
    /// Create a new empty backend set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a set from a parsed mount config, preserving file order
    pub fn from_config(cfg: &MountConfig) -> Self {
        Self(
            cfg.backends
                .iter()
                .map(|backend| (backend.id.clone(), backend.transport.clone()))
                .collect(),
        )
    }

    /// Append a backend to the set
    pub fn insert(&mut self, name: impl Into<String>, descriptor: BackendDescriptor) {
        self.0.push((name.into(), descriptor));
    }

    /// Iterate entries in scheduling order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BackendDescriptor)> {
        self.0
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    /// All backend names in scheduling order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(String, BackendDescriptor)>> for BackendSet {
    fn from(entries: Vec<(String, BackendDescriptor)>) -> Self {
        Self(entries)
    }
}

impl Into<Vec<(String, BackendDescriptor)>> for BackendSet {
    fn into(self) -> Vec<(String, BackendDescriptor)> {
        self.0
    }
}
