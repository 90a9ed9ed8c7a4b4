//! Async logging example
//!
//! Demonstrates background delivery with several producer threads, and
//! seeding a second logger from a configured template.
//!
//! Run with: cargo run --example async_logging

use rust_sink_logger::info;
use rust_sink_logger::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Sink Logger - Async Logging Example ===\n");

    let logger: Arc<dyn Logger> = LoggerBuilder::new("async")
        .sink(ConsoleSink::new())
        .sink(FileSink::try_new("async_test.log", false)?)
        .async_mode(true)
        .build();

    println!("1. High-performance async logging:");
    for i in 0..100 {
        info!(logger, "Message #{}", i);
    }
    println!("   Logged 100 messages asynchronously");

    println!("\n2. Multi-threaded logging:");
    let handles: Vec<_> = (0..5)
        .map(|thread_id| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..20 {
                    info!(logger, "Thread {} - Message {}", thread_id, i);
                    thread::sleep(Duration::from_millis(10));
                }
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }
    println!("   5 threads logged 20 messages each");

    println!("\n3. Cloning a configured logger:");
    let audit = logger.clone_as("audit");
    audit.set_level(LogLevel::Warn);
    audit.warn("Audit logger shares the template's sinks and patterns");

    // Everything queued so far is written before this returns
    logger.flush();
    audit.flush();

    let metrics = logger.metrics();
    println!(
        "\n   logged={} flushes={} failures={}",
        metrics.total_logged(),
        metrics.flush_count(),
        metrics.write_failures()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'async_test.log' for file output");

    Ok(())
}
