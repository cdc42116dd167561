//! Configuration validation for backend sets and mount options.
//!
//! Validation runs after parsing and before any mount work starts, so a bad
//! config file fails with every problem listed at once instead of one
//! factory error at a time. Three checks run in order:
//!
//! 1. **Uniqueness**: backend IDs must be unique within one config
//! 2. **Descriptors**: stdio commands and http endpoints must be non-blank
//! 3. **Options**: the concurrency cap must admit at least one mount
//!
//! Errors accumulate into a `Vec<ValidationError>`; nothing short-circuits.
//!
//! # Examples
//!
//! ```rust
//! use switchboard::config::{validate_mount_config, MountConfig};
//!
//! let yaml = r#"
//! backends:
//!   - id: geo
//!     type: http
//!     endpoint: http://localhost:9001/
//! "#;
//! let config: MountConfig = serde_yaml::from_str(yaml).unwrap();
//!
//! match validate_mount_config(&config) {
//!     Ok(()) => println!("Configuration is valid"),
//!     Err(errors) => {
//!         for error in errors {
//!             eprintln!("Validation error: {}", error);
//!         }
//!     }
//! }
//! ```

use std::collections::HashSet;

use crate::config::{BackendDescriptor, MountConfig};
use crate::errors::ValidationError;

/// Validates a mount configuration before a run is built from it.
///
/// Returns `Ok(())` when the config is usable, or every problem found. A
/// config that passes here can still fail at mount time (unreachable
/// backends are a runtime matter); this pass only rejects configs that could
/// never work.
pub fn validate_mount_config(cfg: &MountConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_unique_backend_ids(cfg, &mut errors);
    validate_descriptors(cfg, &mut errors);
    validate_options(cfg, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Every backend ID must appear exactly once.
fn validate_unique_backend_ids(cfg: &MountConfig, errors: &mut Vec<ValidationError>) {
    let mut seen_ids = HashSet::new();

    for (position, backend) in cfg.backends.iter().enumerate() {
        if backend.id.trim().is_empty() {
            errors.push(ValidationError::BlankBackendId { position });
            continue;
        }
        if !seen_ids.insert(&backend.id) {
            errors.push(ValidationError::DuplicateBackendId {
                backend_id: backend.id.clone(),
            });
        }
    }
}

/// Descriptor fields that would make the factory fail before doing any work.
fn validate_descriptors(cfg: &MountConfig, errors: &mut Vec<ValidationError>) {
    for backend in &cfg.backends {
        match &backend.transport {
            BackendDescriptor::Stdio { command, .. } => {
                if command.trim().is_empty() {
                    errors.push(ValidationError::BlankCommand {
                        backend_id: backend.id.clone(),
                    });
                }
            }
            BackendDescriptor::Http { endpoint } => {
                if endpoint.trim().is_empty() {
                    errors.push(ValidationError::BlankEndpoint {
                        backend_id: backend.id.clone(),
                    });
                }
            }
        }
    }
}

/// A zero concurrency cap would admit no mounts at all.
fn validate_options(cfg: &MountConfig, errors: &mut Vec<ValidationError>) {
    if cfg.options.max_concurrent == 0 {
        errors.push(ValidationError::ZeroConcurrency);
    }
}
