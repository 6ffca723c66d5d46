//! # Boxy Dielines
//!
//! Flat cut/fold pattern generators for three fixed box families:
//!
//! - **folding_lid**: single-piece shoe box with an integrated folding lid
//! - **locking_lid**: the same box with double walls keyed into the base by tab/slot locks
//! - **triangular_prism**: Toblerone-style prism with interlocking end caps
//!
//! Every generator is a pure function from a `Copy` parameter record to a
//! [`PatternLayout`](boxy_core::PatternLayout). Out-of-range values are clamped (the clamps are
//! visible through each module's `derive`), malformed input is rejected before any geometry is
//! computed.

pub mod builder;
pub mod error;
pub mod folding_lid;
pub mod layout;
pub mod locking_lid;
pub mod style;
pub mod triangular_prism;

pub use builder::PatternBuilder;
pub use error::{PatternError, PatternResult};
pub use folding_lid::{FoldingLidMeasurements, LockingShoeBoxParameters, ShoeBoxParameters};
pub use layout::{Span, PADDING};
pub use style::{BoxParameters, BoxStyle, DielineGenerator};
pub use triangular_prism::{PrismMeasurements, PrismParameters};
