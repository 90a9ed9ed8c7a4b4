//! File logging example
//!
//! Demonstrates configuring a logger for console and file output through the
//! process-wide `logging` functions.
//!
//! Run with: cargo run --example file_logging

use rust_sink_logger::config::{LogSinkType, LoggerConfig};
use rust_sink_logger::prelude::*;
use rust_sink_logger::{log_to, logging, paths};

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - File Logging Example ===\n");

    // One timestamped folder per run
    let log_file = paths::create_logging_folder(paths::platform_log_directory(), "application.log");

    let config = LoggerConfig::new("app")
        .with_sink(LogSinkType::Both)
        .with_file_path(&log_file)
        .with_log_level(LogLevel::Debug);
    let logger = logging::configure_logger(&config);

    println!("1. Logging to both console and file:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Logging by name from anywhere:");
    for i in 1..=5 {
        log_to!("app", LogLevel::Info, "Processing item {}/5", i);
        if i == 3 {
            log_to!("app", category: "worker", LogLevel::Warn, "Item 3 took longer than expected");
        }
    }

    // Flushes and unregisters every logger
    logging::shutdown();

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' for the full log output", log_file.display());

    Ok(())
}
