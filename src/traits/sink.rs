use async_trait::async_trait;

use crate::errors::AttachError;
use crate::traits::proxy::BackendProxy;

/// The parent service that mounted proxies attach to.
///
/// One operation: register a proxy under an optional namespace. `Some(ns)`
/// namespaces must be unique within the sink; whether repeated `None`
/// attachments are allowed is the sink's own policy.
#[async_trait]
pub trait AttachmentSink: Send + Sync {
    async fn attach(
        &self,
        namespace: Option<&str>,
        proxy: Box<dyn BackendProxy>,
    ) -> Result<(), AttachError>;
}
