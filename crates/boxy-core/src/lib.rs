//! # Boxy Core
//!
//! Shared building blocks for the Boxy dieline generators and their consumers:
//!
//! - **types**: the pattern model (`Point`, `Segment`, `Role`, `PatternLayout`, `BoundingSize`)
//! - **geometry**: segment lengths, flattening of rounded corners, overlap tests
//! - **units**: metric/imperial formatting and parsing for reporting sizes
//! - **error**: error types shared by the front end

pub mod error;
pub mod geometry;
pub mod types;
pub mod units;

pub use error::UnitError;
pub use geometry::{DEFAULT_FLATTEN_TOLERANCE, EPSILON};
pub use types::{BoundingSize, PatternLayout, PatternSegment, Point, Role, Segment};
pub use units::MeasurementSystem;
