// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for kvconf.
//!
//! This example demonstrates:
//! - Parsing a configuration with comments and multi-line values
//! - Typed reads, including the permissive boolean rule
//! - Falling back to defaults for missing keys
//! - Modifying the store and writing it back out
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//! ```

use kvconf::prelude::*;

const SAMPLE: &str = r"
# Service settings
name = demo service
port = 8080          # listening port
verbose = no
motd = Welcome to the demo.
    Please be nice.
channel = \#general
";

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== kvconf: Basic Usage ===\n");

    let mut store = ConfigStore::parse_str(SAMPLE)?;
    println!("Parsed {} entries.\n", store.len());

    println!("--- Typed reads ---");
    let port: u16 = store.read("port")?;
    let verbose: bool = store.read("verbose")?;
    let motd: String = store.read("motd")?;
    let channel: String = store.read("channel")?;
    println!("port    = {}", port);
    println!("verbose = {}", verbose);
    println!("motd    = {:?}", motd);
    println!("channel = {}", channel);

    println!("\n--- Defaults ---");
    let workers: usize = store.read_or("workers", 4)?;
    println!("workers = {} (default)", workers);

    match store.read::<u32>("timeout") {
        Ok(timeout) => println!("timeout = {}", timeout),
        Err(e) => println!("timeout: {}", e),
    }

    println!("\n--- Modifying ---");
    store.add("workers", 16);
    store.remove("verbose")?;
    if let Err(e) = store.remove("verbose") {
        println!("second remove: {}", e);
    }

    println!("\n--- Serialized ---");
    print!("{}", store);

    Ok(())
}
