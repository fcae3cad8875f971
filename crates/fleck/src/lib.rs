#![forbid(unsafe_code)]
//! fleck: deterministic seeded blob-texture generation.
//!
//! Given a seed and a handful of style parameters, fleck covers a rectangular
//! region with irregular closed-bezier "blob" shapes. The same seed and
//! parameters always yield the same sequence of draw calls, and the grid-based
//! scheduling keeps output stable when the region grows: appending columns or
//! rows never perturbs the cells that were already there.
//!
//! Modules:
//! - rng: forkable seeded streams, the prime table, and Halton jitter
//! - shape: the unit-circle control-point template and blob drawing
//! - surface: the `PaintSurface` drawing seam and an op-recording impl
//! - paint: configuration and the grid scheduler driving a full paint
pub mod error;
pub mod paint;
pub mod rng;
pub mod shape;
pub mod surface;

/// Convenient re-exports for common types. Import with `use fleck::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::paint::{paint_region, ColorId, FleckPainter, PaintConfig, GRID_SIZE};
    pub use crate::rng::{HaltonJitter, SeededRandom};
    pub use crate::shape::{draw_blob, BlobParams, CurvePoint, CURVE_POINTS, UNIT_CIRCLE};
    pub use crate::surface::{PaintOp, PaintSurface, RecordingSurface};
}
