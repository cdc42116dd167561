// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod attach;
mod config;
mod factory;
mod mount;

pub use attach::AttachError;
pub use config::{ConfigError, ValidationError};
pub use factory::FactoryError;
pub use mount::{MountError, MountFailure};
