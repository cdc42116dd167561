// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // transport implementations
pub mod compose;    // high-level entry points
pub mod config;     // config + backend sets
pub mod engine;     // concurrent mount engine
pub mod errors;     // error handling
pub mod gateway;    // the composed front
pub mod observability;
pub mod traits;     // unified abstractions
