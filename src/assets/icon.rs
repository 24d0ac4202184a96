use std::path::Path;

use svg::{
    Document,
    node::element::{Circle, Path as SvgPath},
};

use crate::{
    assets::{
        cache::validate_asset_name,
        raster::{MAX_DIM, RasterAsset, rasterize_svg_to_file},
    },
    foundation::{
        core::Rgb,
        error::{DeckError, DeckResult},
    },
};

/// Vector source for one symbolic icon id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Single-path Material glyph on a 24x24 grid.
    Material(&'static str),
    /// Hand-authored chat bubble on a 64x64 grid: tinted disc, dark bubble.
    Kakao,
}

pub(crate) const KAKAO_BUBBLE: &str = "M32 20c-8.8 0-16 5.4-16 12 0 4.3 2.8 8.1 7 10.4l-1.4 5.2c-.1.4.3.7.6.5l6.2-4.1c1.2.2 2.4.3 3.6.3 8.8 0 16-5.4 16-12s-7.2-12-16-12z";
pub(crate) const KAKAO_INK: Rgb = Rgb::new(0x3C, 0x1E, 0x1E);

const GLYPHS: &[(&str, Glyph)] = &[
    (
        "qrCode",
        Glyph::Material(
            "M3 11h8V3H3v8zm2-6h4v4H5V5zM3 21h8v-8H3v8zm2-6h4v4H5v-4zM13 3v8h8V3h-8zm6 6h-4V5h4v4zM19 19h2v2h-2zM13 13h2v2h-2zM15 15h2v2h-2zM13 17h2v2h-2zM15 19h2v2h-2zM17 17h2v2h-2zM17 13h2v2h-2zM19 15h2v2h-2z",
        ),
    ),
    (
        "qrCodeScanner",
        Glyph::Material(
            "M9.5 6.5v3h-3v-3h3M11 5H5v6h6V5zm-1.5 9.5v3h-3v-3h3M11 13H5v6h6v-6zm6.5-6.5v3h-3v-3h3M19 5h-6v6h6V5zm-6 8h1.5v1.5H13V13zm1.5 1.5H16V16h-1.5v-1.5zM16 13h1.5v1.5H16V13zm-3 3h1.5v1.5H13V16zm1.5 1.5H16V19h-1.5v-1.5zM16 16h1.5v1.5H16V16zm1.5-1.5H19V16h-1.5v-1.5zm0 3H19V19h-1.5v-1.5zM22 7h-2V4h-3V2h5v5zm0 15v-5h-2v3h-3v2h5zM2 22h5v-2H4v-3H2v5zM2 2v5h2V4h3V2H2z",
        ),
    ),
    (
        "sync",
        Glyph::Material(
            "M12 4V1L8 5l4 4V6c3.31 0 6 2.69 6 6 0 1.01-.25 1.97-.7 2.8l1.46 1.46C19.54 15.03 20 13.57 20 12c0-4.42-3.58-8-8-8zm0 14c-3.31 0-6-2.69-6-6 0-1.01.25-1.97.7-2.8L5.24 7.74C4.46 8.97 4 10.43 4 12c0 4.42 3.58 8 8 8v3l4-4-4-4v3z",
        ),
    ),
    (
        "analytics",
        Glyph::Material(
            "M19 3H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zM9 17H7v-5h2v5zm4 0h-2v-3h2v3zm0-5h-2v-2h2v2zm4 5h-2V7h2v10z",
        ),
    ),
    (
        "notifications",
        Glyph::Material(
            "M12 22c1.1 0 2-.9 2-2h-4c0 1.1.89 2 2 2zm6-6v-5c0-3.07-1.64-5.64-4.5-6.32V4c0-.83-.67-1.5-1.5-1.5s-1.5.67-1.5 1.5v.68C7.63 5.36 6 7.92 6 11v5l-2 2v1h16v-1l-2-2z",
        ),
    ),
    (
        "person",
        Glyph::Material(
            "M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4z",
        ),
    ),
    (
        "verifiedUser",
        Glyph::Material(
            "M12 1L3 5v6c0 5.55 3.84 10.74 9 12 5.16-1.26 9-6.45 9-12V5l-9-4zm-2 16l-4-4 1.41-1.41L10 14.17l6.59-6.59L18 9l-8 8z",
        ),
    ),
    (
        "build",
        Glyph::Material(
            "M22.7 19l-9.1-9.1c.9-2.3.4-5-1.5-6.9-2-2-5-2.4-7.4-1.3L9 6 6 9 1.6 4.7C.4 7.1.9 10.1 2.9 12.1c1.9 1.9 4.6 2.4 6.9 1.5l9.1 9.1c.4.4 1 .4 1.4 0l2.3-2.3c.5-.4.5-1.1.1-1.4z",
        ),
    ),
    (
        "dashboard",
        Glyph::Material("M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z"),
    ),
    (
        "smartphone",
        Glyph::Material(
            "M17 1.01L7 1c-1.1 0-2 .9-2 2v18c0 1.1.9 2 2 2h10c1.1 0 2-.9 2-2V3c0-1.1-.9-1.99-2-1.99zM17 19H7V5h10v14z",
        ),
    ),
    (
        "computer",
        Glyph::Material(
            "M20 18c1.1 0 1.99-.9 1.99-2L22 6c0-1.1-.9-2-2-2H4c-1.1 0-2 .9-2 2v10c0 1.1.9 2 2 2H0v2h24v-2h-4zM4 6h16v10H4V6z",
        ),
    ),
    (
        "dns",
        Glyph::Material(
            "M20 13H4c-.55 0-1 .45-1 1v6c0 .55.45 1 1 1h16c.55 0 1-.45 1-1v-6c0-.55-.45-1-1-1zM7 19c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2zM20 3H4c-.55 0-1 .45-1 1v6c0 .55.45 1 1 1h16c.55 0 1-.45 1-1V4c0-.55-.45-1-1-1zM7 9c-1.1 0-2-.9-2-2s.9-2 2-2 2 .9 2 2-.9 2-2 2z",
        ),
    ),
    (
        "storage",
        Glyph::Material(
            "M2 20h20v-4H2v4zm2-3h2v2H4v-2zM2 4v4h20V4H2zm4 3H4V5h2v2zm-4 7h20v-4H2v4zm2-3h2v2H4v-2z",
        ),
    ),
    (
        "chat",
        Glyph::Material(
            "M20 2H4c-1.1 0-1.99.9-1.99 2L2 22l4-4h14c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zM6 9h12v2H6V9zm8 5H6v-2h8v2zm4-6H6V6h12v2z",
        ),
    ),
    (
        "edit",
        Glyph::Material(
            "M3 17.25V21h3.75L17.81 9.94l-3.75-3.75L3 17.25zM20.71 7.04c.39-.39.39-1.02 0-1.41l-2.34-2.34c-.39-.39-1.02-.39-1.41 0l-1.83 1.83 3.75 3.75 1.83-1.83z",
        ),
    ),
    (
        "checkCircle",
        Glyph::Material(
            "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
        ),
    ),
    (
        "history",
        Glyph::Material(
            "M13 3c-4.97 0-9 4.03-9 9H1l3.89 3.89.07.14L9 12H6c0-3.87 3.13-7 7-7s7 3.13 7 7-3.13 7-7 7c-1.93 0-3.68-.79-4.94-2.06l-1.42 1.42C8.27 19.99 10.51 21 13 21c4.97 0 9-4.03 9-9s-4.03-9-9-9zm-1 5v5l4.28 2.54.72-1.21-3.5-2.08V8H12z",
        ),
    ),
    (
        "settings",
        Glyph::Material(
            "M19.14 12.94c.04-.3.06-.61.06-.94 0-.32-.02-.64-.07-.94l2.03-1.58c.18-.14.23-.41.12-.61l-1.92-3.32c-.12-.22-.37-.29-.59-.22l-2.39.96c-.5-.38-1.03-.7-1.62-.94l-.36-2.54c-.04-.24-.24-.41-.48-.41h-3.84c-.24 0-.43.17-.47.41l-.36 2.54c-.59.24-1.13.57-1.62.94l-2.39-.96c-.22-.08-.47 0-.59.22L2.74 8.87c-.12.21-.08.47.12.61l2.03 1.58c-.05.3-.09.63-.09.94s.02.64.07.94l-2.03 1.58c-.18.14-.23.41-.12.61l1.92 3.32c.12.22.37.29.59.22l2.39-.96c.5.38 1.03.7 1.62.94l.36 2.54c.05.24.24.41.48.41h3.84c.24 0 .44-.17.47-.41l.36-2.54c.59-.24 1.13-.56 1.62-.94l2.39.96c.22.08.47 0 .59-.22l1.92-3.32c.12-.22.07-.47-.12-.61l-2.01-1.58zM12 15.6c-1.98 0-3.6-1.62-3.6-3.6s1.62-3.6 3.6-3.6 3.6 1.62 3.6 3.6-1.62 3.6-3.6 3.6z",
        ),
    ),
    (
        "listAlt",
        Glyph::Material(
            "M19 5v14H5V5h14m1.1-2H3.9c-.5 0-.9.4-.9.9v16.2c0 .4.4.9.9.9h16.2c.4 0 .9-.5.9-.9V3.9c0-.5-.5-.9-.9-.9zM11 7h6v2h-6V7zm0 4h6v2h-6v-2zm0 4h6v2h-6zM7 7h2v2H7zm0 4h2v2H7zm0 4h2v2H7z",
        ),
    ),
    (
        "cancel",
        Glyph::Material(
            "M12 2C6.47 2 2 6.47 2 12s4.47 10 10 10 10-4.47 10-10S17.53 2 12 2zm5 13.59L15.59 17 12 13.41 8.41 17 7 15.59 10.59 12 7 8.41 8.41 7 12 10.59 15.59 7 17 8.41 13.41 12 17 15.59z",
        ),
    ),
    (
        "visibility",
        Glyph::Material(
            "M12 4.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 11-7.5c-1.73-4.39-6-7.5-11-7.5zM12 17c-2.76 0-5-2.24-5-5s2.24-5 5-5 5 2.24 5 5-2.24 5-5 5zm0-8c-1.66 0-3 1.34-3 3s1.34 3 3 3 3-1.34 3-3-1.34-3-3-3z",
        ),
    ),
    (
        "eventAvailable",
        Glyph::Material(
            "M16.53 11.06L15.47 10l-4.88 4.88-2.12-2.12-1.06 1.06L10.59 17l5.94-5.94zM19 3h-1V1h-2v2H8V1H6v2H5c-1.11 0-1.99.9-1.99 2L3 19c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm0 16H5V8h14v11z",
        ),
    ),
    ("kakao", Glyph::Kakao),
];

/// Every symbolic id the rasterizer understands, in table order.
pub fn known_icon_ids() -> impl Iterator<Item = &'static str> {
    GLYPHS.iter().map(|(id, _)| *id)
}

/// Resolve a symbolic id. Unknown ids are configuration errors.
pub fn lookup_glyph(id: &str) -> DeckResult<Glyph> {
    GLYPHS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, glyph)| *glyph)
        .ok_or_else(|| DeckError::config(format!("unknown icon id '{id}'")))
}

/// Cache identity of an icon. Equal keys rasterize to identical bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconKey {
    /// Symbolic glyph id.
    pub symbolic_id: String,
    /// Fill color.
    pub tint: Rgb,
    /// Edge length in pixels.
    pub pixel_size: u32,
}

/// One icon to produce: what to draw and where to put it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconDescriptor {
    /// Symbolic glyph id, e.g. `qrCode`.
    pub symbolic_id: String,
    /// Fill color.
    pub tint: Rgb,
    /// Edge length of the square bitmap.
    pub pixel_size: u32,
    /// File name inside the icon directory.
    pub output_name: String,
    glyph: Glyph,
}

impl IconDescriptor {
    /// Validate every parameter up front so rasterization cannot fail on bad input.
    ///
    /// `pixel_size` is signed so callers passing through user input get a configuration
    /// error for zero and negative values instead of a wrapped integer.
    pub fn new(
        symbolic_id: impl Into<String>,
        tint_hex: &str,
        pixel_size: i64,
        output_name: impl Into<String>,
    ) -> DeckResult<Self> {
        let tint = Rgb::parse_hex(tint_hex)?;
        Self::with_tint(symbolic_id, tint, pixel_size, output_name)
    }

    /// Like [`IconDescriptor::new`] with an already-parsed color.
    pub fn with_tint(
        symbolic_id: impl Into<String>,
        tint: Rgb,
        pixel_size: i64,
        output_name: impl Into<String>,
    ) -> DeckResult<Self> {
        let symbolic_id = symbolic_id.into();
        let output_name = output_name.into();
        let glyph = lookup_glyph(&symbolic_id)?;
        if pixel_size <= 0 || pixel_size > i64::from(MAX_DIM) {
            return Err(DeckError::config(format!(
                "icon '{symbolic_id}': pixel size must be in 1..={MAX_DIM}, got {pixel_size}"
            )));
        }
        validate_asset_name(&output_name)?;
        Ok(Self {
            symbolic_id,
            tint,
            pixel_size: pixel_size as u32,
            output_name,
            glyph,
        })
    }

    /// Descriptor whose file name is derived as `role_color.png`.
    pub fn for_role(
        symbolic_id: impl Into<String>,
        tint: Rgb,
        pixel_size: i64,
        role: &str,
    ) -> DeckResult<Self> {
        let name = format!("{role}_{}.png", tint.to_hex().to_ascii_lowercase());
        Self::with_tint(symbolic_id, tint, pixel_size, name)
    }

    /// Cache identity.
    pub fn key(&self) -> IconKey {
        IconKey {
            symbolic_id: self.symbolic_id.clone(),
            tint: self.tint,
            pixel_size: self.pixel_size,
        }
    }

    /// Standalone vector document for this icon at its pixel size.
    pub fn svg_document(&self) -> Document {
        let size = self.pixel_size;
        match self.glyph {
            Glyph::Material(d) => Document::new()
                .set("width", size)
                .set("height", size)
                .set("viewBox", (0, 0, 24, 24))
                .add(SvgPath::new().set("d", d).set("fill", self.tint.css())),
            Glyph::Kakao => Document::new()
                .set("width", size)
                .set("height", size)
                .set("viewBox", (0, 0, 64, 64))
                .add(
                    Circle::new()
                        .set("cx", 32)
                        .set("cy", 32)
                        .set("r", 28)
                        .set("fill", self.tint.css()),
                )
                .add(
                    SvgPath::new()
                        .set("d", KAKAO_BUBBLE)
                        .set("fill", KAKAO_INK.css()),
                ),
        }
    }
}

/// Rasterize `desc` into `dir/<output_name>`, creating `dir` if needed.
///
/// Overwrites an existing file of the same name.
#[tracing::instrument(skip_all, fields(id = %desc.symbolic_id, size = desc.pixel_size))]
pub fn rasterize_icon(desc: &IconDescriptor, dir: &Path) -> DeckResult<RasterAsset> {
    let svg = desc.svg_document().to_string();
    let path = dir.join(&desc.output_name);
    let asset = rasterize_svg_to_file(&svg, desc.pixel_size, desc.pixel_size, &path)?;
    tracing::debug!(path = %asset.path.display(), "icon written");
    Ok(asset)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/icon.rs"]
mod tests;
