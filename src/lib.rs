//! # Boxy
//!
//! Printable cut/fold dielines for three box families:
//! - Single-piece shoe box with a folding lid
//! - The same box with tab/slot locks holding double walls
//! - Triangular prism ("Toblerone") box with interlocking end caps
//!
//! ## Architecture
//!
//! Boxy is organized as a workspace with multiple crates:
//!
//! 1. **boxy-core** - Pattern types, geometry helpers, units
//! 2. **boxy-dielines** - The three pattern generators and their shared contract
//! 3. **boxy-export** - SVG, DXF and PNG writers
//! 4. **boxy-settings** - Configuration, parameter files, command-line overrides
//! 5. **boxy-cli** - Argument parsing and the commands behind the binary
//! 6. **boxy** - Main binary that integrates all crates

pub use boxy_core::{BoundingSize, MeasurementSystem, PatternLayout, Point, Role, Segment};
pub use boxy_dielines::{
    BoxParameters, BoxStyle, DielineGenerator, LockingShoeBoxParameters, PatternError,
    PrismParameters, ShoeBoxParameters,
};
pub use boxy_export::{ExportError, ExportFormat, ExportOptions};
pub use boxy_settings::{Config, SettingsError};

pub use boxy_cli::{BUILD_DATE, VERSION};

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for command results
/// - RUST_LOG environment variable support, `info` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(tracing::Level::INFO.to_string()))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
