// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by an attachment sink when a proxy is mounted into it.
#[derive(Error, Debug)]
pub enum AttachError {
    /// A proxy is already mounted under this namespace.
    #[error("Namespace '{namespace}' is already mounted")]
    DuplicateNamespace { namespace: String },

    /// The sink refused the proxy for its own reasons.
    #[error("Sink rejected the proxy: {reason}")]
    Rejected { reason: String },
}
