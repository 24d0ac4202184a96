use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    assets::{
        icon::{IconDescriptor, rasterize_icon},
        raster::RasterAsset,
    },
    config::Theme,
    diagram::{DiagramSpec, render_diagram, write_svg_sidecar},
    foundation::error::{DeckError, DeckResult},
};

/// Check that `name` is a bare file name that stays inside its asset directory.
pub fn validate_asset_name(name: &str) -> DeckResult<()> {
    if name.is_empty() {
        return Err(DeckError::config("asset name must be non-empty"));
    }
    if name.contains(['/', '\\']) {
        return Err(DeckError::config(format!(
            "asset name '{name}' must not contain path separators"
        )));
    }
    if name == "." || name == ".." {
        return Err(DeckError::config(format!("asset name '{name}' is reserved")));
    }
    Ok(())
}

/// A directory of generated bitmaps addressed by file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    /// Wrap `root`. Nothing is touched on disk until [`AssetDir::ensure`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory and its parents. Safe to repeat.
    pub fn ensure(&self) -> DeckResult<()> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("create asset dir '{}'", self.root.display()))?;
        Ok(())
    }

    /// Where `name` lives (or would live) inside this directory.
    pub fn path_for(&self, name: &str) -> DeckResult<PathBuf> {
        validate_asset_name(name)?;
        Ok(self.root.join(name))
    }

    /// Path of `name` if the file currently exists.
    pub fn lookup(&self, name: &str) -> Option<PathBuf> {
        let path = self.path_for(name).ok()?;
        path.is_file().then_some(path)
    }

    /// `true` when `name` exists as a file.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

/// A diagram to compose and rasterize under `<name>.png`.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramJob {
    /// File stem inside the diagram directory.
    pub name: String,
    /// What to draw.
    pub spec: DiagramSpec,
    /// Also keep `<name>.svg`.
    pub write_svg: bool,
}

/// One phase-1 unit of work.
#[derive(Clone, Debug, PartialEq)]
pub enum AssetJob {
    /// Rasterize an icon into the icon directory.
    Icon(IconDescriptor),
    /// Compose a diagram into the diagram directory.
    Diagram(DiagramJob),
}

impl AssetJob {
    /// Output file name inside the job's directory.
    pub fn output_name(&self) -> String {
        match self {
            Self::Icon(desc) => desc.output_name.clone(),
            Self::Diagram(job) => format!("{}.png", job.name),
        }
    }
}

/// Where phase-1 output goes.
#[derive(Clone, Copy, Debug)]
pub struct AssetTargets<'a> {
    /// Icon directory.
    pub icons: &'a AssetDir,
    /// Diagram directory.
    pub diagrams: &'a AssetDir,
    /// Palette used by diagrams.
    pub theme: &'a Theme,
}

/// Result of a phase-1 batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct GeneratedAssets {
    /// Written bitmaps, in job order.
    pub assets: Vec<RasterAsset>,
    /// Icons rasterized.
    pub icons: usize,
    /// Diagrams rasterized.
    pub diagrams: usize,
    /// Jobs skipped because an identical job already claimed the same file.
    pub deduplicated: usize,
}

/// Drop repeated jobs, rejecting two different jobs that would write the same file.
pub fn dedupe_jobs(jobs: &[AssetJob]) -> DeckResult<(Vec<&AssetJob>, usize)> {
    let mut seen: HashMap<(bool, String), &AssetJob> = HashMap::new();
    let mut unique = Vec::with_capacity(jobs.len());
    let mut skipped = 0usize;

    for job in jobs {
        let slot = (matches!(job, AssetJob::Icon(_)), job.output_name());
        match seen.get(&slot) {
            Some(prev) if same_output(prev, job) => skipped += 1,
            Some(_) => {
                return Err(DeckError::config(format!(
                    "duplicate asset name '{}' with different parameters",
                    slot.1
                )));
            }
            None => {
                seen.insert(slot, job);
                unique.push(job);
            }
        }
    }

    Ok((unique, skipped))
}

fn same_output(a: &AssetJob, b: &AssetJob) -> bool {
    match (a, b) {
        (AssetJob::Icon(a), AssetJob::Icon(b)) => a.key() == b.key(),
        (AssetJob::Diagram(a), AssetJob::Diagram(b)) => a == b,
        _ => false,
    }
}

/// Run every job on `pool`. Returns once all files are written or the first error.
#[tracing::instrument(skip_all, fields(jobs = jobs.len()))]
pub fn generate_assets(
    jobs: &[AssetJob],
    targets: AssetTargets<'_>,
    pool: &rayon::ThreadPool,
) -> DeckResult<GeneratedAssets> {
    let (unique, deduplicated) = dedupe_jobs(jobs)?;
    if deduplicated > 0 {
        tracing::debug!(deduplicated, "skipping repeated asset jobs");
    }

    targets.icons.ensure()?;
    targets.diagrams.ensure()?;

    let assets = pool.install(|| {
        unique
            .par_iter()
            .map(|job| run_job(job, targets))
            .collect::<DeckResult<Vec<_>>>()
    })?;

    let icons = unique
        .iter()
        .filter(|j| matches!(j, AssetJob::Icon(_)))
        .count();
    Ok(GeneratedAssets {
        diagrams: assets.len() - icons,
        icons,
        assets,
        deduplicated,
    })
}

fn run_job(job: &AssetJob, targets: AssetTargets<'_>) -> DeckResult<RasterAsset> {
    match job {
        AssetJob::Icon(desc) => rasterize_icon(desc, targets.icons.root()),
        AssetJob::Diagram(job) => {
            let asset = render_diagram(&job.spec, targets.theme, targets.diagrams.root(), &job.name)?;
            if job.write_svg {
                write_svg_sidecar(&job.spec, targets.theme, targets.diagrams.root(), &job.name)?;
            }
            Ok(asset)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cache.rs"]
mod tests;
