//! Build configuration and visual theme.
//!
//! Everything that varies between runs without changing behavior lives here: output paths,
//! asset directories, parallelism, and the brand palette. The [`Theme`] is passed explicitly
//! into every slide and diagram function; nothing reads colors from global state.
//!
//! Both types load from JSON. Missing fields fall back to [`Default`], so a config file only
//! has to name what it overrides:
//!
//! ```
//! let cfg = deckgen::BuildConfig::from_json_str(r#"{ "threads": 2 }"#).unwrap();
//! assert_eq!(cfg.threads, Some(2));
//! assert_eq!(cfg.theme, deckgen::Theme::default());
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    deck::LayoutKind,
    foundation::{
        core::Rgb,
        error::{DeckError, DeckResult},
    },
};

/// Brand palette and typography shared by every slide and diagram.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Primary brand color: header bars, table headers, titles.
    pub navy: Rgb,
    /// Accent: dividers, severity "high", second phase.
    pub red: Rgb,
    /// Body copy.
    pub gray: Rgb,
    /// Action-bar background.
    pub light_gray: Rgb,
    /// Approval / success accents.
    pub green: Rgb,
    /// External-party accents, severity "medium".
    pub orange: Rgb,
    /// Secondary accent for personas and benefits.
    pub blue: Rgb,
    /// Tertiary accent.
    pub purple: Rgb,
    /// Muted blue-gray accent for analytics content.
    pub slate: Rgb,
    /// Gold accent used for subtitles and notification icons.
    pub gold: Rgb,
    /// Darkest text color.
    pub ink: Rgb,
    /// Default body text on white.
    pub text: Rgb,
    /// Hairlines and card borders.
    pub line: Rgb,
    /// Muted captions.
    pub muted: Rgb,
    /// Notification badge fill used in diagrams.
    pub notify: Rgb,
    /// Font face written on every text run.
    pub font_face: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            navy: Rgb::new(0x00, 0x24, 0x52),
            red: Rgb::new(0xC5, 0x1F, 0x2A),
            gray: Rgb::new(0x66, 0x66, 0x66),
            light_gray: Rgb::new(0xF8, 0xF9, 0xFA),
            green: Rgb::new(0x38, 0x8E, 0x3C),
            orange: Rgb::new(0xF5, 0x7C, 0x00),
            blue: Rgb::new(0x19, 0x76, 0xD2),
            purple: Rgb::new(0x7B, 0x1F, 0xA2),
            slate: Rgb::new(0x4B, 0x65, 0x80),
            gold: Rgb::new(0xE9, 0xB8, 0x6E),
            ink: Rgb::new(0x1A, 0x1A, 0x1A),
            text: Rgb::new(0x33, 0x33, 0x33),
            line: Rgb::new(0xE0, 0xE0, 0xE0),
            muted: Rgb::new(0x99, 0x99, 0x99),
            notify: Rgb::new(0xFE, 0xE5, 0x00),
            font_face: "Malgun Gothic".to_string(),
        }
    }
}

/// Settings for one build.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Destination of the container file. Overwritten if present.
    pub output: PathBuf,
    /// Directory that receives rasterized icons.
    pub icon_dir: PathBuf,
    /// Directory that receives composed diagrams.
    pub diagram_dir: PathBuf,
    /// Directory of pre-rendered screenshots, addressed by exact file name.
    pub screenshot_dir: PathBuf,
    /// Worker threads for asset generation and slide construction (`None` = rayon default).
    pub threads: Option<usize>,
    /// Pixel scale applied when rasterizing diagrams.
    pub diagram_scale: f64,
    /// Also persist each diagram's vector document next to its bitmap.
    pub write_svg_sidecars: bool,
    /// Deck title written to the document properties.
    pub title: String,
    /// Deck author written to the document properties.
    pub author: String,
    /// Deck subject written to the document properties.
    pub subject: String,
    /// Slide canvas size.
    pub layout: LayoutKind,
    /// Palette and font.
    pub theme: Theme,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("out/presentation.pptx"),
            icon_dir: PathBuf::from("out/icons"),
            diagram_dir: PathBuf::from("out/diagrams"),
            screenshot_dir: PathBuf::from("detail_design"),
            threads: None,
            diagram_scale: 1.0,
            write_svg_sidecars: false,
            title: "공조설비 정보관리 시스템 구축 사전 설명회".to_string(),
            author: "동국시스템즈".to_string(),
            subject: "HVAC System Presentation".to_string(),
            layout: LayoutKind::Wide16x9,
            theme: Theme::default(),
        }
    }
}

impl BuildConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(s: &str) -> DeckResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| DeckError::config(format!("invalid build config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> DeckResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read build config '{}'", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Reject settings that cannot produce a deck.
    pub fn validate(&self) -> DeckResult<()> {
        if self.output.as_os_str().is_empty() {
            return Err(DeckError::config("output path must be non-empty"));
        }
        if !self.diagram_scale.is_finite() || self.diagram_scale <= 0.0 {
            return Err(DeckError::config("diagram_scale must be finite and > 0"));
        }
        if self.threads == Some(0) {
            return Err(DeckError::config("threads must be >= 1 when set"));
        }
        if self.icon_dir == self.diagram_dir {
            return Err(DeckError::config(
                "icon_dir and diagram_dir must be distinct directories",
            ));
        }
        Ok(())
    }
}
