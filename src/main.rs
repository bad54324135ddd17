// SPDX-License-Identifier: GPL-3.0-only

//! Expected Layout fixture dump
//!
//! Reads a JSON fixture (an array of keys, key arrays and strings), joins it
//! and prints one canonical key per line. Icon names are taken from the
//! built-in icon set unless an icon set file is given.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin expected-layout-dump -- row.json [icons.json]
//! ```

use expected_layout::expected::parse_fixture_file;
use expected_layout::{app_settings, FixtureError, IconSet};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = app_settings::DEFAULT_LOG_DIRECTIVE.parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(fixture_path) = args.first() else {
        eprintln!("usage: expected-layout-dump <fixture.json> [icons.json]");
        return ExitCode::from(2);
    };

    match dump(fixture_path, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to dump fixture: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn dump(fixture_path: &str, icons_path: Option<&str>) -> Result<(), FixtureError> {
    let icons = match icons_path {
        Some(path) => IconSet::from_file(path)?,
        None => IconSet::builtin(),
    };
    tracing::info!(fixture = fixture_path, icons = icons.len(), "dumping fixture");

    for key in parse_fixture_file(fixture_path)? {
        println!("{}", key.describe(&icons));
    }
    Ok(())
}
