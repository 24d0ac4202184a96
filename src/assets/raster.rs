use std::{
    path::{Path, PathBuf},
    sync::{Arc, OnceLock},
};

use anyhow::Context as _;

use crate::foundation::error::{DeckError, DeckResult};

/// Largest bitmap edge the rasterizer will allocate.
pub const MAX_DIM: u32 = 16_384;

/// A generated bitmap on disk.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RasterAsset {
    /// Location of the PNG file.
    pub path: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RasterAsset {
    /// Describe an existing PNG by reading only its header.
    pub fn probe(path: &Path) -> DeckResult<Self> {
        let (width, height) = image::image_dimensions(path)
            .with_context(|| format!("read image header '{}'", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
        })
    }
}

/// Parse an SVG document with the shared font database.
pub fn parse_svg(bytes: &[u8]) -> DeckResult<usvg::Tree> {
    let opts = usvg::Options {
        fontdb: shared_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

// System font discovery is slow; every document in a build shares one database.
fn shared_fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Arc::new(db)
    })
    .clone()
}

/// Render `tree` stretched to exactly `width x height` pixels.
///
/// Returns straight (non-premultiplied) RGBA8, ready for PNG encoding.
pub fn rasterize_tree(tree: &usvg::Tree, width: u32, height: u32) -> DeckResult<image::RgbaImage> {
    if width == 0 || height == 0 {
        return Err(DeckError::config(format!(
            "raster size must be positive, got {width}x{height}"
        )));
    }
    if width > MAX_DIM || height > MAX_DIM {
        return Err(DeckError::config(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| DeckError::asset("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut rgba = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba);
    image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| DeckError::asset("pixmap buffer does not match its dimensions"))
}

/// Encode `img` as PNG at `path`, creating parent directories as needed.
pub fn write_png(img: &image::RgbaImage, path: &Path) -> DeckResult<RasterAsset> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create asset dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(RasterAsset {
        path: path.to_path_buf(),
        width: img.width(),
        height: img.height(),
    })
}

/// Parse, rasterize, and persist an SVG document in one step.
pub fn rasterize_svg_to_file(
    svg: &str,
    width: u32,
    height: u32,
    path: &Path,
) -> DeckResult<RasterAsset> {
    let tree = parse_svg(svg.as_bytes())?;
    let img = rasterize_tree(&tree, width, height)?;
    write_png(&img, path)
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
