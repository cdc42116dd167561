// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for mount runs.
//!
//! `MountFailure` is the cause carried inside a single failed outcome.
//! `MountError` is what a whole run returns. Both keep the underlying
//! factory or attach error intact through transparent variants, so a
//! fail-fast caller sees the original error type and message rather than a
//! wrapper.

use thiserror::Error;

use crate::errors::{AttachError, FactoryError};

/// Why one backend failed to mount.
#[derive(Error, Debug)]
pub enum MountFailure {
    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Attach(#[from] AttachError),

    /// The admission gate could not hand out a permit. The gate is never
    /// closed while a run is in flight, so this indicates an orchestrator
    /// bug rather than a backend problem.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// What a whole mount run can fail with.
#[derive(Error, Debug)]
pub enum MountError {
    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Attach(#[from] AttachError),

    /// Graceful run in which every backend failed. This is the only error
    /// the mount layer synthesizes itself.
    #[error("All {count} backends failed to mount")]
    AllFailed { count: usize },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<MountFailure> for MountError {
    fn from(failure: MountFailure) -> Self {
        match failure {
            MountFailure::Factory(e) => MountError::Factory(e),
            MountFailure::Attach(e) => MountError::Attach(e),
            MountFailure::Internal { message } => MountError::Internal { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_failure_displays_unwrapped() {
        let failure = MountFailure::from(FactoryError::Handshake("no ready line".to_string()));
        assert_eq!(failure.to_string(), "Backend handshake failed: no ready line");
    }

    #[test]
    fn run_error_preserves_original_through_conversion() {
        let failure = MountFailure::from(FactoryError::InvalidDescriptor {
            details: "command must not be empty".to_string(),
        });
        let error = MountError::from(failure);

        assert!(matches!(
            error,
            MountError::Factory(FactoryError::InvalidDescriptor { .. })
        ));
        assert_eq!(
            error.to_string(),
            "Invalid backend descriptor: command must not be empty"
        );
    }

    #[test]
    fn attach_failure_converts_to_attach_run_error() {
        let failure = MountFailure::from(AttachError::DuplicateNamespace {
            namespace: "weather".to_string(),
        });
        let error = MountError::from(failure);

        assert!(matches!(error, MountError::Attach(_)));
        assert_eq!(error.to_string(), "Namespace 'weather' is already mounted");
    }

    #[test]
    fn all_failed_states_the_count() {
        let error = MountError::AllFailed { count: 3 };
        assert_eq!(error.to_string(), "All 3 backends failed to mount");
    }
}
