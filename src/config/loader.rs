// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_FAIL_FAST, DEFAULT_MAX_CONCURRENT, DEFAULT_PREFIX_NAMES};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main configuration structure for composing a gateway.
///
/// Declares the backends to mount and the options governing one mount run.
/// Typically loaded from a YAML or JSON configuration file; backend order in
/// the file is the order mounts are scheduled.
///
/// # Example
/// ```yaml
/// options:
///   max_concurrent: 4
///   fail_fast: false
/// backends:
///   - id: weather
///     type: stdio
///     command: python
///     args: ["-m", "weather_service"]
///   - id: geo
///     type: http
///     endpoint: http://localhost:9001/
/// ```
#[derive(Debug, Deserialize)]
pub struct MountConfig {
    #[serde(default)]
    pub options: MountOptions,
    pub backends: Vec<BackendConfig>,
}

/// Options governing one mount run.
///
/// Immutable for the duration of a run.
///
/// # Fields
/// * `prefix_names` - Mount each backend under its own name as the namespace
/// * `max_concurrent` - Cap on simultaneously in-flight mounts (must be positive)
/// * `fail_fast` - Surface the first failure instead of degrading gracefully
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MountOptions {
    pub prefix_names: bool,
    pub max_concurrent: usize,
    pub fail_fast: bool,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            prefix_names: DEFAULT_PREFIX_NAMES,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            fail_fast: DEFAULT_FAIL_FAST,
        }
    }
}

/// Configuration for a single backend.
///
/// Each entry pairs a unique logical name with the transport descriptor used
/// to reach the backend. The descriptor fields sit flat in the config row,
/// discriminated by `type`.
///
/// # Example
/// ```yaml
/// id: "weather"
/// type: stdio
/// command: "python"
/// args: ["-m", "weather_service"]
/// ```
#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    pub id: String,
    #[serde(flatten)]
    pub transport: BackendDescriptor,
}

/// How to reach one backend.
///
/// # Variants
/// * `Stdio` - Spawn a child process and speak over its standard streams
/// * `Http` - Reach an already-running backend over HTTP
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackendDescriptor {
    Stdio {
        command: String,
        #[serde(default)]
        args: Vec<String>,
        #[serde(default)]
        env: HashMap<String, String>,
    },
    Http {
        endpoint: String,
    },
}

impl BackendDescriptor {
    /// Transport label for logging and dispatch.
    pub fn kind(&self) -> &'static str {
        match self {
            BackendDescriptor::Stdio { .. } => "stdio",
            BackendDescriptor::Http { .. } => "http",
        }
    }

    /// Human-readable connection target.
    pub fn target(&self) -> String {
        match self {
            BackendDescriptor::Stdio { command, args, .. } => {
                if args.is_empty() {
                    command.clone()
                } else {
                    format!("{} {}", command, args.join(" "))
                }
            }
            BackendDescriptor::Http { endpoint } => endpoint.clone(),
        }
    }
}

/// Load a mount config from a YAML or JSON file.
///
/// The parser is picked by file extension: `.json` goes through serde_json,
/// anything else through serde_yaml.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MountConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let cfg: MountConfig = if is_json {
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
    };

    Ok(cfg)
}

/// Load and validate a mount config.
///
/// Chains [`load_config`] with the validation pass so callers get every
/// problem in the file at once rather than the first one.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<MountConfig, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(errors) = crate::config::validate_mount_config(&cfg) {
        return Err(ConfigError::Invalid { errors });
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
backends:
  - id: weather
    type: stdio
    command: python
    args: ["-m", "weather_service"]
  - id: geo
    type: http
    endpoint: http://localhost:9001/
"#;

        let cfg: MountConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.backends.len(), 2);
        assert_eq!(cfg.backends[0].id, "weather");
        assert!(matches!(
            cfg.backends[0].transport,
            BackendDescriptor::Stdio { .. }
        ));
        assert!(matches!(
            cfg.backends[1].transport,
            BackendDescriptor::Http { .. }
        ));
    }

    #[test]
    fn parse_applies_option_defaults() {
        let yaml = r#"
backends:
  - id: solo
    type: http
    endpoint: http://localhost:9001/
"#;

        let cfg: MountConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.options.prefix_names);
        assert_eq!(cfg.options.max_concurrent, 10);
        assert!(!cfg.options.fail_fast);
    }

    #[test]
    fn parse_partial_options_override() {
        let yaml = r#"
options:
  max_concurrent: 2
backends:
  - id: solo
    type: http
    endpoint: http://localhost:9001/
"#;

        let cfg: MountConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.options.max_concurrent, 2);
        assert!(cfg.options.prefix_names);
    }

    #[test]
    fn parse_stdio_env_map() {
        let yaml = r#"
backends:
  - id: weather
    type: stdio
    command: python
    env:
      API_KEY: secret
      REGION: eu
"#;

        let cfg: MountConfig = serde_yaml::from_str(yaml).unwrap();
        match &cfg.backends[0].transport {
            BackendDescriptor::Stdio { env, args, .. } => {
                assert_eq!(env.get("API_KEY").map(String::as_str), Some("secret"));
                assert_eq!(env.len(), 2);
                assert!(args.is_empty());
            }
            other => panic!("expected stdio descriptor, got {:?}", other),
        }
    }

    #[test]
    fn descriptor_target_includes_args() {
        let descriptor = BackendDescriptor::Stdio {
            command: "python".to_string(),
            args: vec!["-m".to_string(), "svc".to_string()],
            env: HashMap::new(),
        };
        assert_eq!(descriptor.target(), "python -m svc");
        assert_eq!(descriptor.kind(), "stdio");
    }

    #[test]
    fn test_load_json_config() {
        let json = r#"
{
  "options": { "max_concurrent": 4, "fail_fast": true },
  "backends": [
    { "id": "alpha", "type": "stdio", "command": "sh", "args": ["-c", "echo ready"] },
    { "id": "beta", "type": "http", "endpoint": "http://localhost:9001/" }
  ]
}
"#;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backends.json");
        std::fs::write(&path, json).unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.backends.len(), 2);
        assert_eq!(cfg.options.max_concurrent, 4);
        assert!(cfg.options.fail_fast);
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let yaml = r#"
backends:
  - id: alpha
    type: stdio
    command: sh
    args: ["-c", "echo ready"]
"#;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backends.yaml");
        std::fs::write(&path, yaml).unwrap();

        let result = load_and_validate_config(&path);
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_and_validate_duplicate_ids() {
        let yaml = r#"
backends:
  - id: alpha
    type: http
    endpoint: http://localhost:9001/
  - id: alpha
    type: http
    endpoint: http://localhost:9002/
"#;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dupes.yaml");
        std::fs::write(&path, yaml).unwrap();

        let result = load_and_validate_config(&path);
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Duplicate backend ID: 'alpha'"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("definitely/not/a/real/path.yaml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.yaml");
        std::fs::write(&path, "backends: [not, a, mapping").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
