use fleck::prelude::*;
use fleck_examples::{init_tracing, RasterSurface};
use glam::DVec2;
use image::Rgba;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (width, height) = (900u32, 600u32);
    let config = PaintConfig::new(
        42,
        24,
        12.0,
        vec![
            "#e07a5f".to_owned(),
            "#3d405b".to_owned(),
            "#81b29a".to_owned(),
            "#f2cc8f".to_owned(),
        ],
    );

    let painter = FleckPainter::try_new(config)?;
    let mut surface = RasterSurface::new(width, height, Rgba([244, 241, 222, 255]));
    painter.paint(&mut surface, DVec2::new(width as f64, height as f64).into())?;

    let out = "fleck-basic.png";
    surface.save_png(out)?;
    info!(out, "wrote pattern");

    Ok(())
}
