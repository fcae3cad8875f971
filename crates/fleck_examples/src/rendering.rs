//! Software rasterization of fleck paints into PNG images.
//!
//! [`RasterSurface`] implements [`PaintSurface`] over an [`image::RgbaImage`]:
//! it tracks the translate/uniform-scale transform stack, flattens cubic
//! segments into polygons in device space, and fills them with an even-odd
//! scanline pass.
use std::path::Path;

use fleck::surface::PaintSurface;
use glam::DVec2;
use image::{Rgba, RgbaImage};
use tracing::warn;

/// Initialize a tracing subscriber for the example binaries.
///
/// Respects `RUST_LOG`; defaults to `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Parse a `#rgb` or `#rrggbb` color string into an opaque RGBA pixel.
pub fn parse_hex_color(color: &str) -> Option<Rgba<u8>> {
    let hex = color.strip_prefix('#')?;
    let (r, g, b) = match hex.len() {
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            (channel(0)?, channel(1)?, channel(2)?)
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            (channel(0)?, channel(2)?, channel(4)?)
        }
        _ => return None,
    };
    Some(Rgba([r, g, b, 255]))
}

/// Line segments per flattened cubic.
const FLATTEN_STEPS: usize = 16;

/// Translation plus uniform scale, composed in application order.
#[derive(Debug, Clone, Copy)]
struct Frame {
    scale: f64,
    offset: DVec2,
}

impl Frame {
    const IDENTITY: Frame = Frame {
        scale: 1.0,
        offset: DVec2::ZERO,
    };

    #[inline]
    fn apply(&self, p: DVec2) -> DVec2 {
        self.offset + p * self.scale
    }
}

/// A [`PaintSurface`] that rasterizes fills into an RGBA image.
#[derive(Debug)]
pub struct RasterSurface {
    image: RgbaImage,
    current: Frame,
    stack: Vec<Frame>,
    /// Flattened device-space polygon of the current path.
    path: Vec<DVec2>,
    subpath_start: Option<DVec2>,
}

impl RasterSurface {
    /// Create a surface of the given pixel size, cleared to `background`.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
            current: Frame::IDENTITY,
            stack: Vec::new(),
            path: Vec::new(),
            subpath_start: None,
        }
    }

    /// Consume the surface, returning the rasterized image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Write the image as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.image.save(path.as_ref())?;
        Ok(())
    }

    fn last_point(&self) -> DVec2 {
        self.path.last().copied().unwrap_or(DVec2::ZERO)
    }

    /// Even-odd scanline fill of the current polygon.
    fn fill_polygon(&mut self, pixel: Rgba<u8>) {
        if self.path.len() < 3 {
            return;
        }

        let min_y = self.path.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = self
            .path
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        let y_start = min_y.floor().max(0.0) as u32;
        let y_end = (max_y.ceil().min(self.image.height() as f64 - 1.0)).max(0.0) as u32;

        let mut crossings: Vec<f64> = Vec::new();
        for y in y_start..=y_end {
            let scan = y as f64 + 0.5;
            crossings.clear();
            for i in 0..self.path.len() {
                let a = self.path[i];
                let b = self.path[(i + 1) % self.path.len()];
                if (a.y <= scan && b.y > scan) || (b.y <= scan && a.y > scan) {
                    let t = (scan - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).expect("finite crossings"));

            for pair in crossings.chunks(2) {
                let [left, right] = pair else { continue };
                let x_start = left.ceil().max(0.0) as u32;
                let x_end = right.floor().min(self.image.width() as f64 - 1.0);
                if x_end < 0.0 {
                    continue;
                }
                for x in x_start..=(x_end as u32) {
                    self.image.put_pixel(x, y, pixel);
                }
            }
        }
    }
}

impl PaintSurface for RasterSurface {
    fn save(&mut self) {
        self.stack.push(self.current);
    }

    fn restore(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.current = frame;
        } else {
            warn!("restore without matching save");
        }
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.current.offset += DVec2::new(x, y) * self.current.scale;
    }

    fn scale(&mut self, factor: f64) {
        self.current.scale *= factor;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.subpath_start = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.current.apply(DVec2::new(x, y));
        self.path.push(p);
        self.subpath_start = Some(p);
    }

    fn cubic_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        let p0 = self.last_point();
        let p1 = self.current.apply(DVec2::new(cp1x, cp1y));
        let p2 = self.current.apply(DVec2::new(cp2x, cp2y));
        let p3 = self.current.apply(DVec2::new(x, y));

        for step in 1..=FLATTEN_STEPS {
            let t = step as f64 / FLATTEN_STEPS as f64;
            let u = 1.0 - t;
            let point = p0 * (u * u * u)
                + p1 * (3.0 * u * u * t)
                + p2 * (3.0 * u * t * t)
                + p3 * (t * t * t);
            self.path.push(point);
        }
    }

    fn close_path(&mut self) {
        if let Some(start) = self.subpath_start {
            self.path.push(start);
        }
    }

    fn fill(&mut self, color: &str) {
        let Some(pixel) = parse_hex_color(color) else {
            warn!(color, "unparseable fill color; skipping fill");
            return;
        };
        self.fill_polygon(pixel);
    }
}
