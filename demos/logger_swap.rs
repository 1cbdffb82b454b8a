//! Swapping a logger service in the global locator.
//!
//! Demonstrates:
//! - Registering a trait object with `register_arc`
//! - Replacing it by registering again under the same type
//! - `reset()` leaving previously resolved services usable
//!
//! Run with: `RUST_LOG=service_locator=trace cargo run --example logger_swap`

use service_locator::global;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("   [console] {message}");
    }
}

struct FileLogger {
    path: &'static str,
}

impl Logger for FileLogger {
    fn log(&self, message: &str) {
        println!("   [file:{}] {message}", self.path);
    }
}

fn log(message: &str) {
    match global::resolve::<dyn Logger>() {
        Some(logger) => logger.log(message),
        None => println!("   (no logger registered) {message}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    global::set_trace_callback(|event| println!("   event: {event}"));

    println!("=== service-locator: Logger Swap ===\n");

    // -------------------------------------------------------------------------
    // 1. Register a console logger
    // -------------------------------------------------------------------------
    println!("1. Registering ConsoleLogger...");
    global::register_arc::<dyn Logger>(Arc::new(ConsoleLogger));
    log("service ready");

    // -------------------------------------------------------------------------
    // 2. Replace it with a file logger
    // -------------------------------------------------------------------------
    println!("\n2. Replacing with FileLogger...");
    let held = global::resolve::<dyn Logger>();
    global::register_arc::<dyn Logger>(Arc::new(FileLogger { path: "app.log" }));
    log("logger swapped");

    // -------------------------------------------------------------------------
    // 3. Reset
    // -------------------------------------------------------------------------
    println!("\n3. Resetting the locator...");
    global::reset();
    log("after reset");

    if let Some(logger) = held {
        logger.log("still usable after being replaced and reset");
    }

    global::clear_trace_callback();
    println!("\n=== Done ===");
}
