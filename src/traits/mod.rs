pub mod factory;
pub mod proxy;
pub mod sink;

pub use factory::{Diagnostics, ProxyFactory};
pub use proxy::BackendProxy;
pub use sink::AttachmentSink;
