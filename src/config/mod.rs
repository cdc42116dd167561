// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod backend_set;
mod loader;
mod validation;

pub mod consts;

pub use backend_set::BackendSet;
pub use loader::{
    load_and_validate_config, load_config, BackendConfig, BackendDescriptor, MountConfig,
    MountOptions,
};
pub use validation::validate_mount_config;
