//! Bounded-concurrency mount orchestrator.
//!
//! This module implements the run loop that mounts a whole [`BackendSet`]
//! against one attachment sink. Every backend gets its own attachment task;
//! a counting admission gate bounds how many tasks hold live transport work
//! at once, while the rest wait their turn.
//!
//! # Architecture Overview
//!
//! The orchestrator drives all tasks on one `FuturesUnordered`:
//! - Each task acquires a gate permit before touching its factory
//! - The permit spans proxy creation and attachment and is released on every
//!   exit path
//! - Outcomes are collected in completion order, not submission order
//! - No task is cancelled by a sibling's failure; the run always drains
//!
//! # Failure Modes
//!
//! Two reductions share the same collected outcomes:
//! - **Graceful** (default): partition everything into a [`MountReport`],
//!   publish the success and failure tallies, and aggregate into
//!   `MountError::AllFailed` only when a non-empty run mounted nothing.
//! - **Fail-fast**: after the run drains, surface the first failure in
//!   completion order as-is. The original error type and message pass
//!   through untouched; nothing is wrapped and no tallies are published.
//!
//! A factory with no internal timeout can stall its task indefinitely; the
//! orchestrator adds no deadline of its own.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;

use crate::config::{BackendSet, MountOptions};
use crate::engine::report::{MountOutcome, MountReport};
use crate::engine::task;
use crate::errors::{MountError, MountFailure};
use crate::observability::messages::mount::{
    FailureTally, MountRunCompleted, MountRunFailed, MountRunStarted, SuccessTally,
};
use crate::observability::messages::StructuredLog;
use crate::observability::Reporter;
use crate::traits::{AttachmentSink, ProxyFactory};

/// Concurrent mount engine for one factory, options and reporter.
pub struct MountOrchestrator {
    factory: Arc<dyn ProxyFactory>,
    options: MountOptions,
    reporter: Reporter,
}

impl MountOrchestrator {
    pub fn new(factory: Arc<dyn ProxyFactory>, options: MountOptions, reporter: Reporter) -> Self {
        Self {
            factory,
            options,
            reporter,
        }
    }

    /// Mount every backend in the set into `sink`.
    ///
    /// An empty set succeeds immediately with an empty report and publishes
    /// nothing. Otherwise the run waits for every task before reducing, so a
    /// fail-fast error never leaves siblings mid-flight.
    pub async fn run(
        &self,
        backends: &BackendSet,
        sink: &dyn AttachmentSink,
    ) -> Result<MountReport, MountError> {
        if backends.is_empty() {
            tracing::debug!("no backends configured, nothing to mount");
            return Ok(MountReport::new());
        }

        let started = Instant::now();
        MountRunStarted {
            backend_count: backends.len(),
            max_concurrent: self.options.max_concurrent,
            fail_fast: self.options.fail_fast,
        }
        .log();

        // A zero capacity would deadlock the run. The config layer rejects
        // it, but options built by hand can still carry one.
        let capacity = self.options.max_concurrent.max(1);
        let gate = Arc::new(Semaphore::new(capacity));

        let mut tasks = FuturesUnordered::new();
        for (name, descriptor) in backends.iter() {
            let gate = Arc::clone(&gate);
            tasks.push(async move {
                // The permit spans proxy creation and attachment; dropping it
                // on any exit path hands the slot to a waiting sibling.
                let _permit = match gate.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        return MountOutcome::Failure {
                            name: name.to_string(),
                            error: MountFailure::Internal {
                                message: "admission gate closed mid-run".to_string(),
                            },
                        }
                    }
                };

                task::mount_single(
                    name,
                    descriptor,
                    self.factory.as_ref(),
                    sink,
                    self.options.prefix_names,
                    &self.reporter,
                )
                .await
            });
        }

        let mut outcomes = Vec::with_capacity(backends.len());
        while let Some(outcome) = tasks.next().await {
            outcomes.push(outcome);
        }

        let result = if self.options.fail_fast {
            Self::reduce_fail_fast(outcomes)
        } else {
            self.reduce_graceful(outcomes)
        };

        match &result {
            Ok(report) => MountRunCompleted {
                successes: report.mounted().len(),
                failures: report.failed().len(),
                duration: started.elapsed(),
            }
            .log(),
            Err(error) => MountRunFailed {
                error,
                duration: started.elapsed(),
            }
            .log(),
        }

        result
    }

    /// First failure in completion order aborts the run unchanged; a clean
    /// sweep returns a fully successful report.
    fn reduce_fail_fast(outcomes: Vec<MountOutcome>) -> Result<MountReport, MountError> {
        let mut report = MountReport::new();
        for outcome in outcomes {
            match outcome {
                MountOutcome::Failure { error, .. } => return Err(error.into()),
                success => report.record(success),
            }
        }
        Ok(report)
    }

    /// Partition every outcome, publish the tallies, and aggregate only when
    /// nothing at all mounted.
    fn reduce_graceful(&self, outcomes: Vec<MountOutcome>) -> Result<MountReport, MountError> {
        let mut report = MountReport::new();
        for outcome in outcomes {
            report.record(outcome);
        }

        if !report.mounted().is_empty() {
            self.reporter.publish(
                &SuccessTally {
                    names: report.mounted(),
                }
                .to_string(),
            );
        }
        if !report.failed().is_empty() {
            self.reporter.publish(
                &FailureTally {
                    failures: report.failed(),
                }
                .to_string(),
            );
        }

        if report.all_failed() {
            return Err(MountError::AllFailed {
                count: report.failed().len(),
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{self, RecordingSink, StubProxyFactory};
    use crate::observability::CaptureBuffer;

    #[tokio::test]
    async fn empty_set_returns_empty_report_without_output() {
        let buffer = CaptureBuffer::new();
        let orchestrator = MountOrchestrator::new(
            Arc::new(StubProxyFactory::new()),
            MountOptions::default(),
            Reporter::to_writer(Box::new(buffer.clone())),
        );
        let sink = RecordingSink::new();

        let report = orchestrator.run(&BackendSet::new(), &sink).await.unwrap();

        assert!(report.is_empty());
        assert!(buffer.contents().is_empty());
        assert!(sink.mounts().is_empty());
    }

    #[tokio::test]
    async fn zero_concurrency_is_clamped_to_one() {
        let orchestrator = MountOrchestrator::new(
            Arc::new(StubProxyFactory::new()),
            MountOptions {
                max_concurrent: 0,
                ..MountOptions::default()
            },
            Reporter::to_writer(Box::new(CaptureBuffer::new())),
        );
        let sink = RecordingSink::new();
        let mut backends = BackendSet::new();
        backends.insert("solo", stub::descriptor("solo"));

        let report = orchestrator.run(&backends, &sink).await.unwrap();

        assert_eq!(report.mounted(), ["solo"]);
    }
}
