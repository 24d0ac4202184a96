//! deckgen builds a slide deck from an in-code description and writes it as a PPTX file.
//!
//! A build runs in three phases:
//!
//! - rasterize icons and compose diagrams into asset directories ([`pipeline::asset_jobs`])
//! - build every slide from typed elements, substituting placeholders for missing pictures
//! - serialize the ordered slides into one container ([`deck::write_pptx`])
//!
//! [`pipeline::build`] runs all three with a [`BuildConfig`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod assets;
pub mod config;
pub mod convert;
pub mod deck;
pub mod diagram;
pub mod layout;
pub mod pipeline;
pub mod slide;

pub use crate::foundation::core::{BBox, EMU_PER_INCH, Point, Rgb, inches_to_emu};
pub use crate::foundation::error::{DeckError, DeckResult};

pub use crate::assets::cache::{AssetDir, AssetJob, DiagramJob, GeneratedAssets};
pub use crate::assets::icon::{IconDescriptor, IconKey, known_icon_ids, rasterize_icon};
pub use crate::assets::raster::{MAX_DIM, RasterAsset};
pub use crate::config::{BuildConfig, Theme};
pub use crate::deck::{Deck, DeckHandle, LayoutKind};
pub use crate::pipeline::{BuildReport, build, build_from_sources};
