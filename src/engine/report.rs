// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::MountFailure;

/// Outcome of one attachment task, tagged with its backend name.
///
/// Tasks never let an error escape; whatever happens inside one becomes a
/// `Failure` carrying the cause, so the reducer can always pair an error
/// with the backend that produced it.
#[derive(Debug)]
pub enum MountOutcome {
    Success { name: String },
    Failure { name: String, error: MountFailure },
}

impl MountOutcome {
    pub fn name(&self) -> &str {
        match self {
            MountOutcome::Success { name } => name,
            MountOutcome::Failure { name, .. } => name,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MountOutcome::Success { .. })
    }
}

/// What a graceful run produced, partitioned in completion order.
#[derive(Debug, Default)]
pub struct MountReport {
    mounted: Vec<String>,
    failed: Vec<(String, MountFailure)>,
}

impl MountReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: MountOutcome) {
        match outcome {
            MountOutcome::Success { name } => self.mounted.push(name),
            MountOutcome::Failure { name, error } => self.failed.push((name, error)),
        }
    }

    /// Backend names that mounted, in the order their tasks finished.
    pub fn mounted(&self) -> &[String] {
        &self.mounted
    }

    /// Failed backends with their causes, in the order their tasks finished.
    pub fn failed(&self) -> &[(String, MountFailure)] {
        &self.failed
    }

    pub fn total(&self) -> usize {
        self.mounted.len() + self.failed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty() && self.failed.is_empty()
    }

    /// True when the run tried at least one backend and none made it.
    pub fn all_failed(&self) -> bool {
        self.mounted.is_empty() && !self.failed.is_empty()
    }
}
