//! Logger set-up for the binaries.

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initializes `env_logger` with `level`. Settings from `RUST_LOG` take precedence.
pub fn build_logger_for_level(level: LevelFilter) {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| writeln!(buf, "c {} - {}", record.level(), record.args()))
        .filter(None, level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}
