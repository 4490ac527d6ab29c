use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::assets::decode::{SourceImage, load_background};
use crate::assets::fonts::{FontSet, FontSources};
use crate::config::badge::BadgeConfig;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::{BadgeError, BadgeResult};
use crate::layout::engine::{apply_plan, plan_layout};
use crate::render::canvas::Canvas;
use crate::render::frame::frame_source;
use crate::render::layers::composite_backdrop;
use crate::stats::record::StatRecord;

/// One badge to render from disk to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeJob {
    /// Background artwork (JPEG or PNG).
    pub background: PathBuf,
    /// Name and counters to show.
    pub stats: StatRecord,
    /// Destination PNG.
    pub out: PathBuf,
}

/// Render a badge in memory from an already decoded background and loaded faces.
#[tracing::instrument(skip_all, fields(name = %stats.display_name))]
pub fn render_badge(
    background: &SourceImage,
    stats: &StatRecord,
    fonts: &mut FontSet,
    config: &BadgeConfig,
) -> BadgeResult<Canvas> {
    config.validate()?;

    let size = CanvasSize::BADGE;
    let mut canvas = Canvas::new(size);
    frame_source(&mut canvas, background);
    composite_backdrop(&mut canvas, &config.theme, &config.layout);

    let plan = plan_layout(size, stats, fonts, &config.layout);
    apply_plan(&mut canvas, &plan, fonts, &config.theme);
    tracing::debug!(score = %plan.score.text, "layout applied");
    Ok(canvas)
}

/// Render one job and write the PNG atomically.
///
/// The image is encoded in memory and written to `<out>.tmp`, then renamed over `out`. On any
/// failure no file is left at `out`.
#[tracing::instrument(skip_all, fields(out = %job.out.display()))]
pub fn render_to_file(
    job: &BadgeJob,
    sources: &FontSources,
    config: &BadgeConfig,
) -> BadgeResult<()> {
    let background = load_background(&job.background)?;
    let mut fonts = FontSet::load(sources, &config.layout.fonts)?;
    tracing::debug!("fonts loaded");

    let canvas = render_badge(&background, &job.stats, &mut fonts, config)?;
    let png = canvas.encode_png()?;
    tracing::debug!(bytes = png.len(), "encoded");

    write_atomic(&job.out, &png)
}

fn tmp_path(out: &Path) -> PathBuf {
    let mut name = out.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_atomic(out: &Path, bytes: &[u8]) -> BadgeResult<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))
            .map_err(|e| BadgeError::encode(format!("{e:#}")))?;
    }

    let tmp = tmp_path(out);
    let res = std::fs::write(&tmp, bytes)
        .with_context(|| format!("write '{}'", tmp.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, out)
                .with_context(|| format!("rename '{}' to '{}'", tmp.display(), out.display()))
        });
    if let Err(e) = res {
        let _ = std::fs::remove_file(&tmp);
        return Err(BadgeError::encode(format!("{e:#}")));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> BadgeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BadgeError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| {
            BadgeError::validation(format!("failed to build rayon thread pool: {e}"))
        })
}

/// Render `jobs` concurrently on a dedicated pool.
///
/// Each job gets its own canvas and font set; only the typeface bytes are shared. The outer
/// error is a setup failure; per-job results come back in job order.
#[tracing::instrument(skip_all, fields(jobs = jobs.len(), threads = ?threads))]
pub fn render_batch(
    jobs: &[BadgeJob],
    sources: &FontSources,
    config: &BadgeConfig,
    threads: Option<usize>,
) -> BadgeResult<Vec<BadgeResult<()>>> {
    config.validate()?;
    let pool = build_thread_pool(threads)?;
    let results: Vec<BadgeResult<()>> = pool.install(|| {
        jobs.par_iter()
            .map(|job| render_to_file(job, sources, config))
            .collect()
    });
    let failed = results.iter().filter(|r| r.is_err()).count();
    tracing::debug!(failed, "batch finished");
    Ok(results)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
