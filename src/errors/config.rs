// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors that can occur during backend set validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two backends share the same logical name
    DuplicateBackendId {
        /// The duplicated backend ID
        backend_id: String,
    },
    /// A backend entry has a blank ID
    BlankBackendId {
        /// Zero-based position of the entry in the config file
        position: usize,
    },
    /// A stdio backend has a blank command
    BlankCommand {
        /// The backend with the blank command
        backend_id: String,
    },
    /// An http backend has a blank endpoint
    BlankEndpoint {
        /// The backend with the blank endpoint
        backend_id: String,
    },
    /// The concurrency cap is zero, which would admit no mounts at all
    ZeroConcurrency,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateBackendId { backend_id } => {
                write!(f, "Duplicate backend ID: '{}'", backend_id)
            }
            ValidationError::BlankBackendId { position } => {
                write!(f, "Backend at position {} has a blank ID", position)
            }
            ValidationError::BlankCommand { backend_id } => {
                write!(f, "Backend '{}' has a blank command", backend_id)
            }
            ValidationError::BlankEndpoint { backend_id } => {
                write!(f, "Backend '{}' has a blank endpoint", backend_id)
            }
            ValidationError::ZeroConcurrency => {
                write!(f, "max_concurrent must be at least 1")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors that can occur while loading a mount configuration file
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Read {
        path: String,
        source: std::io::Error,
    },
    /// The file contents could not be parsed
    Parse { path: String, message: String },
    /// The parsed configuration failed validation
    Invalid { errors: Vec<ValidationError> },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "Failed to parse '{}': {}", path, message)
            }
            ConfigError::Invalid { errors } => {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                write!(
                    f,
                    "Configuration validation failed:\n{}",
                    messages.join("\n")
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
