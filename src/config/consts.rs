/// Default cap on concurrently running mount tasks
pub const DEFAULT_MAX_CONCURRENT: usize = 10;
/// Whether backend names become namespaces by default
pub const DEFAULT_PREFIX_NAMES: bool = true;
/// Whether the first failure aborts a run by default
pub const DEFAULT_FAIL_FAST: bool = false;
