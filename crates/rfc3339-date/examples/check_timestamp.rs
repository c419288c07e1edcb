//! Checks JSON timestamp literals given on the command line.
//!
//! ```text
//! RUST_LOG=debug cargo run --example check_timestamp -- '"2023-06-15T14:30:00+02:00"' 42
//! ```

use std::process::ExitCode;

use rfc3339_date::{decode_json, encode_json};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut failed = 0;
    for arg in std::env::args().skip(1) {
        match decode_json(arg.as_bytes()) {
            Ok(ts) => {
                println!("{}", arg);
                println!("  instant: {}s + {}ns", ts.unix_seconds(), ts.subsec_nanos());
                println!("  offset:  {} min", ts.offset_minutes());
                println!("  json:    {}", String::from_utf8_lossy(&encode_json(&ts)));
            }
            Err(err) => {
                eprintln!("{}: {}", arg, err);
                failed += 1;
            }
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
