//! Basic logger usage example
//!
//! Demonstrates synchronous logging with a console sink and different log levels.
//!
//! Run with: cargo run --example basic_usage

use rust_sink_logger::prelude::*;
use rust_sink_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - Basic Usage Example ===\n");

    // Create a synchronous logger with a console sink
    let logger = SyncLogger::new("basic");
    logger.add_sink(Box::new(ConsoleSink::new()));

    // Set minimum log level
    logger.set_level(LogLevel::Trace);

    // Log messages at different levels
    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Logging with a different minimum level:");
    logger.set_level(LogLevel::Info);
    println!("   Minimum level set to INFO - trace and debug won't show:");
    logger.trace("Trace message (hidden)");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (visible)");
    logger.warn("Warning message (visible)");

    println!("\n3. Macros with call-site information:");
    let sinks = logger.sinks();
    sinks.set_pattern_for(SinkKind::Console, "%x [%l] [%n] %$:%# %v");
    info!(logger, "Processing {} items", 100);
    warn!(logger, category: "disk", "Usage at {}%", 91);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
