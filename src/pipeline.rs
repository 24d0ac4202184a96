//! The three-phase build: assets, slides, container.
//!
//! Phase 1 writes every icon and diagram on a bounded pool and returns only when all of them
//! exist. Phase 2 builds slides on the same pool and collects them in declared order. Phase 3
//! writes the container once.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::{
    assets::cache::{AssetDir, AssetJob, AssetTargets, DiagramJob, GeneratedAssets, generate_assets},
    config::{BuildConfig, Theme},
    convert::{ConvertOptions, SkippedSource, SlideConverter, build_from_markup},
    deck::{
        Deck, DeckHandle, LayoutKind,
        content::{
            ARCHITECTURE_DIAGRAM, PROCESS_FLOW_DIAGRAM, SLIDES, SlideAssets, SlideSpec, icon_jobs,
        },
    },
    diagram::presets,
    foundation::error::{DeckError, DeckResult},
    slide::Slide,
};

/// Row and column count of one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TableShape {
    /// 1-based slide number.
    pub slide: usize,
    /// Rows including the header.
    pub rows: usize,
    /// Columns.
    pub cols: usize,
}

/// What a build produced. Printed as JSON by the binary.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BuildReport {
    /// Container path.
    pub output: PathBuf,
    /// Phase-1 output.
    pub assets: GeneratedAssets,
    /// Slides written.
    pub slides: usize,
    /// Elements per slide, in order.
    pub element_counts: Vec<usize>,
    /// Every table in the deck.
    pub tables: Vec<TableShape>,
    /// Missing pictures replaced by placeholders.
    pub placeholders: usize,
    /// Markup sources that failed to convert.
    pub skipped_conversions: Vec<SkippedSource>,
}

impl BuildReport {
    fn new(
        output: PathBuf,
        assets: GeneratedAssets,
        deck: &Deck,
        skipped_conversions: Vec<SkippedSource>,
    ) -> Self {
        let tables = deck
            .slides
            .iter()
            .enumerate()
            .flat_map(|(i, slide)| {
                slide.tables().map(move |t| TableShape {
                    slide: i + 1,
                    rows: t.row_count(),
                    cols: t.col_count(),
                })
            })
            .collect();
        Self {
            output,
            assets,
            slides: deck.slide_count(),
            element_counts: deck.element_counts(),
            tables,
            placeholders: deck.placeholders(),
            skipped_conversions,
        }
    }
}

// `threads` has already passed `BuildConfig::validate`.
fn build_thread_pool(threads: Option<usize>) -> DeckResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| DeckError::asset(format!("failed to build rayon thread pool: {e}")))
}

/// Every phase-1 job for the built-in deck.
pub fn asset_jobs(config: &BuildConfig) -> DeckResult<Vec<AssetJob>> {
    let mut jobs: Vec<AssetJob> = icon_jobs(&config.theme)?
        .into_iter()
        .map(AssetJob::Icon)
        .collect();
    jobs.push(AssetJob::Diagram(DiagramJob {
        name: ARCHITECTURE_DIAGRAM.to_string(),
        spec: presets::architecture().with_scale(config.diagram_scale),
        write_svg: config.write_svg_sidecars,
    }));
    jobs.push(AssetJob::Diagram(DiagramJob {
        name: PROCESS_FLOW_DIAGRAM.to_string(),
        spec: presets::process_flow(&config.theme).with_scale(config.diagram_scale),
        write_svg: config.write_svg_sidecars,
    }));
    Ok(jobs)
}

fn slide_assets(config: &BuildConfig) -> SlideAssets {
    SlideAssets {
        icons: AssetDir::new(&config.icon_dir),
        diagrams: AssetDir::new(&config.diagram_dir),
        screenshots: AssetDir::new(&config.screenshot_dir),
    }
}

fn empty_deck(config: &BuildConfig) -> Deck {
    Deck::new(
        config.title.as_str(),
        config.author.as_str(),
        config.subject.as_str(),
        config.layout,
    )
    .with_theme(config.theme.clone())
}

#[tracing::instrument(skip_all)]
fn run_asset_phase(config: &BuildConfig, pool: &rayon::ThreadPool) -> DeckResult<GeneratedAssets> {
    let jobs = asset_jobs(config)?;
    let assets = slide_assets(config);
    let generated = generate_assets(
        &jobs,
        AssetTargets {
            icons: &assets.icons,
            diagrams: &assets.diagrams,
            theme: &config.theme,
        },
        pool,
    )?;
    tracing::info!(
        icons = generated.icons,
        diagrams = generated.diagrams,
        "assets ready"
    );
    Ok(generated)
}

/// Build `specs` in parallel on a `layout` canvas; the result is in `specs` order.
pub fn build_slides(
    specs: &[SlideSpec],
    theme: &Theme,
    assets: &SlideAssets,
    layout: LayoutKind,
    pool: &rayon::ThreadPool,
) -> Vec<Slide> {
    pool.install(|| {
        specs
            .par_iter()
            .map(|spec| {
                let slide = (spec.build)(theme, assets, layout);
                tracing::debug!(
                    slide = spec.name,
                    elements = slide.len(),
                    placeholders = slide.placeholders,
                    "built slide"
                );
                slide
            })
            .collect()
    })
}

/// Generate assets, build the built-in deck, and write it to `config.output`.
#[tracing::instrument(skip_all, fields(output = %config.output.display()))]
pub fn build(config: &BuildConfig) -> DeckResult<BuildReport> {
    config.validate()?;
    let pool = build_thread_pool(config.threads)?;

    let generated = run_asset_phase(config, &pool)?;

    let mut deck = empty_deck(config);
    deck.slides = build_slides(
        &SLIDES,
        &config.theme,
        &slide_assets(config),
        config.layout,
        &pool,
    );
    if deck.placeholders() > 0 {
        tracing::warn!(
            placeholders = deck.placeholders(),
            "some pictures were missing and were replaced"
        );
    }

    deck.write(&config.output)?;
    tracing::info!(slides = deck.slide_count(), "build finished");
    Ok(BuildReport::new(
        config.output.clone(),
        generated,
        &deck,
        Vec::new(),
    ))
}

/// Generate assets, then convert one markup source per slide through `converter`.
///
/// Sources that fail are logged and listed in the report; the rest of the deck is still
/// written.
#[tracing::instrument(skip_all, fields(output = %config.output.display(), sources = sources.len()))]
pub fn build_from_sources(
    config: &BuildConfig,
    converter: &dyn SlideConverter,
    sources: &[PathBuf],
    options: &ConvertOptions,
) -> DeckResult<BuildReport> {
    config.validate()?;
    let pool = build_thread_pool(config.threads)?;

    let generated = run_asset_phase(config, &pool)?;

    let mut handle = DeckHandle::new(empty_deck(config));
    let markup = build_from_markup(converter, sources, options, &mut handle);
    let deck = handle.into_deck();

    deck.write(&config.output)?;
    tracing::info!(
        slides = deck.slide_count(),
        skipped = markup.skipped.len(),
        "build finished"
    );
    Ok(BuildReport::new(
        config.output.clone(),
        generated,
        &deck,
        markup.skipped,
    ))
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
