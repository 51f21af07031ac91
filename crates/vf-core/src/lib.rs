//! vf-core: shared foundation for vflight.
//!
//! Contains:
//! - units (uom SI time and angle types + conversions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{VfError, VfResult};
pub use numeric::*;
pub use units::*;
