use async_trait::async_trait;

use crate::config::BackendDescriptor;
use crate::errors::FactoryError;
use crate::traits::proxy::BackendProxy;

/// Per-task diagnostics buffer.
///
/// Everything a factory wants to surface about one mount attempt lands here
/// instead of on the process output stream, so concurrent tasks never
/// interleave. The task publishes the buffer as part of its single outcome
/// block once the attempt is over.
#[derive(Debug, Default)]
pub struct Diagnostics {
    output: Vec<String>,
    warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an informational line (handshake banners, probe results).
    pub fn note(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    /// Record a warning line (backend stderr, degraded behavior).
    pub fn warn(&mut self, line: impl Into<String>) {
        self.warnings.push(line.into());
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.warnings.is_empty()
    }
}

/// Turns a backend descriptor into a live proxy.
///
/// Implementations may spawn processes or perform network I/O and are
/// expected to fail with a [`FactoryError`] rather than hang on obviously
/// dead backends. No retry happens above this seam.
#[async_trait]
pub trait ProxyFactory: Send + Sync {
    async fn create(
        &self,
        descriptor: &BackendDescriptor,
        diagnostics: &mut Diagnostics,
    ) -> Result<Box<dyn BackendProxy>, FactoryError>;
}
