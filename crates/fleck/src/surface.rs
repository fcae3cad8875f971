//! The drawing seam between the generator and a host rendering surface.
//!
//! This module defines [`PaintSurface`], the minimal canvas-like interface the
//! generator draws through, and [`RecordingSurface`], an implementation that
//! appends every call as a [`PaintOp`] value. Recorded op logs compare with
//! `==`, which is how determinism is asserted end to end.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimal 2D drawing interface.
///
/// The transform stack carries translation and uniform scale only. Callers
/// must keep `save`/`restore` balanced; the generator pairs them around every
/// blob so no transform state leaks between shapes.
pub trait PaintSurface {
    /// Push the current transform onto the surface's stack.
    fn save(&mut self);
    /// Pop the transform stack.
    fn restore(&mut self);
    /// Translate the coordinate frame.
    fn translate(&mut self, x: f64, y: f64);
    /// Scale the coordinate frame uniformly.
    fn scale(&mut self, factor: f64);
    /// Begin a new path, discarding any unfilled path state.
    fn begin_path(&mut self);
    /// Start a subpath at the given point.
    fn move_to(&mut self, x: f64, y: f64);
    /// Append a cubic bezier segment ending at `(x, y)`.
    fn cubic_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    /// Close the current subpath.
    fn close_path(&mut self);
    /// Fill the current path with the given color.
    fn fill(&mut self, color: &str);
}

/// One recorded drawing call.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaintOp {
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Scale { factor: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    CubicTo {
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    },
    ClosePath,
    Fill { color: String },
}

/// A [`PaintSurface`] that records every call for inspection or replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded calls, in emission order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Consume the surface, returning the recorded calls.
    pub fn into_ops(self) -> Vec<PaintOp> {
        self.ops
    }
}

impl PaintSurface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(PaintOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(PaintOp::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(PaintOp::Translate { x, y });
    }

    fn scale(&mut self, factor: f64) {
        self.ops.push(PaintOp::Scale { factor });
    }

    fn begin_path(&mut self) {
        self.ops.push(PaintOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(PaintOp::MoveTo { x, y });
    }

    fn cubic_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.ops.push(PaintOp::CubicTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        });
    }

    fn close_path(&mut self) {
        self.ops.push(PaintOp::ClosePath);
    }

    fn fill(&mut self, color: &str) {
        self.ops.push(PaintOp::Fill {
            color: color.to_owned(),
        });
    }
}
