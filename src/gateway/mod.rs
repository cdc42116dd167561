// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The composed front that mounted proxies attach to.
//!
//! A `Gateway` is what the composing entry points hand back to the caller:
//! the parent service with every successfully mounted backend registered
//! under its namespace. It is also the default
//! [`AttachmentSink`](crate::traits::AttachmentSink) implementation, so the
//! orchestrator can mount into it directly.
//!
//! Mount table policy:
//! * `Some(namespace)` mounts are unique; a second proxy under the same
//!   namespace is rejected with `AttachError::DuplicateNamespace`.
//! * `None` mounts merge at the root and may repeat.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AttachError;
use crate::traits::{AttachmentSink, BackendProxy};

/// Parent service assembled from mounted backend proxies.
///
/// Interior mutability keeps `attach` usable through a shared reference,
/// which is how concurrent mount tasks reach the sink.
#[derive(Debug)]
pub struct Gateway {
    name: String,
    mounts: Mutex<MountTable>,
}

#[derive(Debug, Default)]
struct MountTable {
    named: Vec<(String, Box<dyn BackendProxy>)>,
    root: Vec<Box<dyn BackendProxy>>,
}

impl Gateway {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mounts: Mutex::new(MountTable::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespaces in the order they were mounted.
    pub fn namespaces(&self) -> Vec<String> {
        match self.mounts.lock() {
            Ok(mounts) => mounts.named.iter().map(|(ns, _)| ns.clone()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Total number of mounted proxies, named and root.
    pub fn mount_count(&self) -> usize {
        match self.mounts.lock() {
            Ok(mounts) => mounts.named.len() + mounts.root.len(),
            Err(_) => 0,
        }
    }

    /// Number of proxies mounted at the root (no namespace).
    pub fn root_mount_count(&self) -> usize {
        match self.mounts.lock() {
            Ok(mounts) => mounts.root.len(),
            Err(_) => 0,
        }
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        match self.mounts.lock() {
            Ok(mounts) => mounts.named.iter().any(|(ns, _)| ns == namespace),
            Err(_) => false,
        }
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new("gateway")
    }
}

#[async_trait]
impl AttachmentSink for Gateway {
    async fn attach(
        &self,
        namespace: Option<&str>,
        proxy: Box<dyn BackendProxy>,
    ) -> Result<(), AttachError> {
        let mut mounts = self.mounts.lock().map_err(|_| AttachError::Rejected {
            reason: "mount table lock poisoned".to_string(),
        })?;

        match namespace {
            Some(ns) => {
                if mounts.named.iter().any(|(existing, _)| existing == ns) {
                    return Err(AttachError::DuplicateNamespace {
                        namespace: ns.to_string(),
                    });
                }
                mounts.named.push((ns.to_string(), proxy));
            }
            None => mounts.root.push(proxy),
        }

        Ok(())
    }
}
