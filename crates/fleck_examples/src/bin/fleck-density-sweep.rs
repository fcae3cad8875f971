use fleck::prelude::*;
use fleck_examples::{init_tracing, RasterSurface};
use glam::DVec2;
use image::Rgba;
use tracing::info;

/// Renders the same seed at increasing densities; the shared prefix of each
/// cell's stream tree keeps the sparse patterns recognizable inside the dense
/// ones' cells.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let (width, height) = (600u32, 600u32);
    let palette = vec![
        "#264653".to_owned(),
        "#2a9d8f".to_owned(),
        "#e9c46a".to_owned(),
        "#e76f51".to_owned(),
    ];

    for density in [4u32, 16, 64] {
        let config = PaintConfig::new(7, density, 10.0, palette.clone());
        let painter = FleckPainter::try_new(config)?;

        let mut surface = RasterSurface::new(width, height, Rgba([250, 249, 246, 255]));
        painter.paint(&mut surface, DVec2::new(width as f64, height as f64).into())?;

        let out = format!("fleck-density-{density}.png");
        surface.save_png(&out)?;
        info!(out = %out, density, "wrote pattern");
    }

    Ok(())
}
