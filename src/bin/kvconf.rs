// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line front end for kvconf.
//!
//! Usage:
//!   kvconf `<path>`                       - Print the parsed entries
//!   kvconf `<path>` --get `<key>`         - Print a single value
//!   kvconf `<path>` --raw                 - Print the non-empty lines as written
//!   kvconf `<path>` -d `:` -c `;`         - Use a different delimiter and comment marker

use clap::{Arg, ArgAction, Command};
use kvconf::adapters::read_lines;
use kvconf::domain::{Result, Syntax};
use kvconf::service::ConfigStore;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("kvconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect key = value configuration files")
        .arg(
            Arg::new("path")
                .help("Path to the configuration file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .short('d')
                .help("Separator between key and value")
                .default_value("="),
        )
        .arg(
            Arg::new("comment")
                .long("comment")
                .short('c')
                .help("Characters that start a comment")
                .default_value("#"),
        )
        .arg(
            Arg::new("get")
                .long("get")
                .short('g')
                .value_name("KEY")
                .help("Print only the value of KEY")
                .conflicts_with("raw"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .help("Print the file's non-empty lines without parsing"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let syntax = Syntax::new(
        matches
            .get_one::<String>("delimiter")
            .expect("delimiter has a default")
            .as_str(),
        matches
            .get_one::<String>("comment")
            .expect("comment has a default")
            .as_str(),
    );

    let outcome = if matches.get_flag("raw") {
        print_raw(path)
    } else {
        print_parsed(path, syntax, matches.get_one::<String>("get"))
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_raw(path: &str) -> Result<()> {
    for line in read_lines(path)? {
        println!("{}", line);
    }
    Ok(())
}

fn print_parsed(path: &str, syntax: Syntax, key: Option<&String>) -> Result<()> {
    let store = ConfigStore::open_with(path, syntax)?;
    match key {
        Some(key) => println!("{}", store.read::<String>(key)?),
        None => print!("{}", store),
    }
    Ok(())
}
