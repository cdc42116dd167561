use std::fmt;

/// A locally addressable stand-in for a remote backend.
///
/// Produced by a [`ProxyFactory`](crate::traits::ProxyFactory) and consumed
/// by an [`AttachmentSink`](crate::traits::AttachmentSink). Call forwarding
/// happens elsewhere; composition only needs a handle that can describe
/// itself.
pub trait BackendProxy: Send + Sync + fmt::Debug {
    /// Transport label, e.g. "stdio" or "http".
    fn transport(&self) -> &'static str;

    /// Human-readable connection target (command line or endpoint).
    fn target(&self) -> String;
}
