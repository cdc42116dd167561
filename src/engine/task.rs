// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The single attachment task: create one proxy, attach it, report once.

use tracing::debug;

use crate::config::BackendDescriptor;
use crate::engine::report::MountOutcome;
use crate::errors::MountFailure;
use crate::observability::messages::mount::{BackendMountFailed, FailureBlock, SuccessBlock};
use crate::observability::messages::StructuredLog;
use crate::observability::Reporter;
use crate::traits::{AttachmentSink, Diagnostics, ProxyFactory};

/// Mount one backend end to end and publish its output block.
///
/// Every failure is recovered into a tagged [`MountOutcome`]; nothing
/// escapes the task. Exactly one block goes through the reporter per
/// attempt, success or not, carrying the diagnostics the attempt captured.
pub(crate) async fn mount_single(
    name: &str,
    descriptor: &BackendDescriptor,
    factory: &dyn ProxyFactory,
    sink: &dyn AttachmentSink,
    prefix_names: bool,
    reporter: &Reporter,
) -> MountOutcome {
    let mut diagnostics = Diagnostics::new();

    let attempt = attach_backend(
        name,
        descriptor,
        factory,
        sink,
        prefix_names,
        &mut diagnostics,
    )
    .await;

    match attempt {
        Ok(()) => {
            debug!(backend = name, "backend mounted");
            reporter.publish(
                &SuccessBlock {
                    name,
                    diagnostics: &diagnostics,
                }
                .to_string(),
            );
            MountOutcome::Success {
                name: name.to_string(),
            }
        }
        Err(error) => {
            BackendMountFailed { name, error: &error }.log();
            reporter.publish(
                &FailureBlock {
                    name,
                    cause: &error,
                    diagnostics: &diagnostics,
                }
                .to_string(),
            );
            MountOutcome::Failure {
                name: name.to_string(),
                error,
            }
        }
    }
}

/// Create the proxy and attach it under the task's namespace.
async fn attach_backend(
    name: &str,
    descriptor: &BackendDescriptor,
    factory: &dyn ProxyFactory,
    sink: &dyn AttachmentSink,
    prefix_names: bool,
    diagnostics: &mut Diagnostics,
) -> Result<(), MountFailure> {
    let proxy = factory.create(descriptor, diagnostics).await?;
    let namespace = prefix_names.then_some(name);
    sink.attach(namespace, proxy).await?;
    Ok(())
}
