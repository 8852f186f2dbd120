//! Basic facade usage example
//!
//! Demonstrates the formatting macros over the default logger, swapping the
//! default logger, and scoped loggers with source rewriting.
//!
//! Run with: cargo run --example basic_usage

use rust_source_logger::prelude::*;
use rust_source_logger::{debug_contextf, errorf, info_contextf, infof, tracef, warnf};

fn main() -> Result<()> {
    println!("=== Rust Source Logger - Basic Usage Example ===\n");

    println!("1. Default logger (JSON, Debug and above):");
    tracef!("This trace message is below the default threshold");
    infof!("user {} login id {}", "alice", 7);
    warnf!("cache hit rate {:.2}%", 85.5);
    errorf!("request failed with status {}", 500);

    println!("\n2. Context-aware logging:");
    let ctx = Context::background().with_tracing(TracingContext::new("4bf92f35", "00f067aa"));
    info_contextf!(&ctx, "processing order {}", 1042);

    println!("\n3. Swapping in a text logger at Info:");
    set_default_logger(
        Logger::builder()
            .level(LogLevel::Info)
            .output_format(OutputFormat::Text)
            .build(),
    );
    debug_contextf!(&ctx, "hidden, and never formatted");
    infof!("now rendered as text");

    println!("\n4. Scoped logger:");
    let request_logger = default_logger()
        .with(vec![Attr::new("service", "api")])
        .with_group("request");
    request_logger.log_attrs(
        &ctx,
        LogLevel::Info,
        "handled",
        vec![Attr::new("status", 200), Attr::new("elapsed_ms", 12)],
    )?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
