// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test doubles for exercising the mount engine without real transports.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::BackendDescriptor;
use crate::errors::{AttachError, FactoryError};
use crate::traits::{AttachmentSink, BackendProxy, Diagnostics, ProxyFactory};

/// Descriptor for a stub backend; the stub factories only look at `target()`.
pub fn descriptor(target: &str) -> BackendDescriptor {
    BackendDescriptor::Stdio {
        command: target.to_string(),
        args: vec![],
        env: HashMap::new(),
    }
}

/// A proxy that connects to nothing.
#[derive(Debug)]
pub struct StubProxy {
    pub target: String,
}

impl StubProxy {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl BackendProxy for StubProxy {
    fn transport(&self) -> &'static str {
        "stub"
    }

    fn target(&self) -> String {
        self.target.clone()
    }
}

/// Factory that always succeeds, optionally after a per-target delay.
#[derive(Default)]
pub struct StubProxyFactory {
    delays: HashMap<String, Duration>,
}

impl StubProxyFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay one target's creation, for completion-order tests.
    pub fn with_delay(mut self, target: &str, delay: Duration) -> Self {
        self.delays.insert(target.to_string(), delay);
        self
    }
}

#[async_trait]
impl ProxyFactory for StubProxyFactory {
    async fn create(
        &self,
        descriptor: &BackendDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> Result<Box<dyn BackendProxy>, FactoryError> {
        let target = descriptor.target();
        if let Some(delay) = self.delays.get(&target) {
            tokio::time::sleep(*delay).await;
        }
        diagnostics.note(format!("connected to {}", target));
        Ok(Box::new(StubProxy { target }))
    }
}

/// Factory that fails the targets it is told to fail.
#[derive(Default)]
pub struct FlakyProxyFactory {
    fail_targets: HashSet<String>,
    delays: HashMap<String, Duration>,
}

impl FlakyProxyFactory {
    pub fn failing(targets: &[&str]) -> Self {
        Self {
            fail_targets: targets.iter().map(|target| target.to_string()).collect(),
            delays: HashMap::new(),
        }
    }

    pub fn with_delay(mut self, target: &str, delay: Duration) -> Self {
        self.delays.insert(target.to_string(), delay);
        self
    }
}

#[async_trait]
impl ProxyFactory for FlakyProxyFactory {
    async fn create(
        &self,
        descriptor: &BackendDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> Result<Box<dyn BackendProxy>, FactoryError> {
        let target = descriptor.target();
        if let Some(delay) = self.delays.get(&target) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_targets.contains(&target) {
            return Err(FactoryError::Handshake(format!(
                "{} refused the handshake",
                target
            )));
        }
        diagnostics.note(format!("connected to {}", target));
        Ok(Box::new(StubProxy { target }))
    }
}

/// Factory that tracks how many creations run at once.
pub struct CountingProxyFactory {
    active: AtomicUsize,
    peak: AtomicUsize,
    hold: Duration,
}

impl CountingProxyFactory {
    pub fn holding_for(hold: Duration) -> Self {
        Self {
            active: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            hold,
        }
    }

    /// Highest number of concurrently running creations observed.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProxyFactory for CountingProxyFactory {
    async fn create(
        &self,
        descriptor: &BackendDescriptor,
        _diagnostics: &mut Diagnostics,
    ) -> Result<Box<dyn BackendProxy>, FactoryError> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.hold).await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(Box::new(StubProxy {
            target: descriptor.target(),
        }))
    }
}

/// Sink that records what was attached where.
#[derive(Default)]
pub struct RecordingSink {
    mounts: Mutex<Vec<(Option<String>, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounts(&self) -> Vec<(Option<String>, String)> {
        self.mounts
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn mounted_targets(&self) -> Vec<String> {
        self.mounts()
            .into_iter()
            .map(|(_, target)| target)
            .collect()
    }
}

#[async_trait]
impl AttachmentSink for RecordingSink {
    async fn attach(
        &self,
        namespace: Option<&str>,
        proxy: Box<dyn BackendProxy>,
    ) -> Result<(), AttachError> {
        if let Ok(mut guard) = self.mounts.lock() {
            guard.push((namespace.map(|ns| ns.to_string()), proxy.target()));
        }
        Ok(())
    }
}

/// Sink that refuses everything.
pub struct RejectingSink {
    pub reason: String,
}

#[async_trait]
impl AttachmentSink for RejectingSink {
    async fn attach(
        &self,
        _namespace: Option<&str>,
        _proxy: Box<dyn BackendProxy>,
    ) -> Result<(), AttachError> {
        Err(AttachError::Rejected {
            reason: self.reason.clone(),
        })
    }
}
