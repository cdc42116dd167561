// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use switchboard::compose::compose_gateway;
use switchboard::config::load_and_validate_config;

/// Initialize tracing with the SWITCHBOARD_LOG environment variable.
///
/// Defaults to "info" if SWITCHBOARD_LOG is not set. Events go to stderr so
/// the mount run's output blocks own stdout.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("SWITCHBOARD_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config1.yaml> [config2.yaml ...]", args[0]);
        eprintln!("Example: {} demos/echo-backends.yaml", args[0]);
        eprintln!(
            "Example: {} demos/echo-backends.yaml demos/mixed-fail.yaml",
            args[0]
        );
        std::process::exit(1);
    }

    let config_files = &args[1..];

    println!("🚀 Switchboard Mount Demo");
    println!("═══════════════════════════");
    println!("Config files: {:?}", config_files);

    for (i, config_file) in config_files.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(80));
        }

        match run_single_config(config_file).await {
            Ok(_) => {}
            Err(e) => {
                eprintln!("❌ Failed to mount {}: {}", config_file, e);
            }
        }
    }

    println!("\n🎉 Demo complete!");
}

async fn run_single_config(config_file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();

    // Load configuration
    let config = load_and_validate_config(config_file)?;

    println!("📋 Configuration: {}", config_file);
    println!("⚙️  Max Concurrent: {}", config.options.max_concurrent);
    println!("🛡️  Fail Fast: {}", config.options.fail_fast);
    println!("🔖 Prefix Names: {}", config.options.prefix_names);

    // Mount everything; the engine prints per-backend blocks and tallies
    let mount_start = Instant::now();
    let gateway = compose_gateway(&config).await?;
    let mount_time = mount_start.elapsed();

    println!("\n📊 Mount Results:");
    println!("⏱️  Mount Time: {:?}", mount_time);
    println!("🔢 Backends Mounted: {}", gateway.mount_count());

    let namespaces = gateway.namespaces();
    if namespaces.is_empty() {
        if gateway.root_mount_count() > 0 {
            println!(
                "\n📦 Mounted at root (no prefixes): {} backends",
                gateway.root_mount_count()
            );
        }
    } else {
        println!("\n📦 Mounted Namespaces:");
        for (i, namespace) in namespaces.iter().enumerate() {
            println!("  {}. {}", i + 1, namespace);
        }
    }

    let total_time = start_time.elapsed();
    println!("\n⏱️  Total Time (including config load): {:?}", total_time);

    Ok(())
}
