use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use nabu_engine::logging::{init_logging, LoggingConfig};
use nabu_engine::render::{Pixmap, Rasterizer};
use nabu_ui::prelude::*;

/// Frame dump settings.
///
/// Positional arguments: `[output_dir] [frame_count]`.
#[derive(Debug, Clone)]
struct StudioConfig {
    output_dir: PathBuf,
    frames: u32,
    width: u32,
    height: u32,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("frames"), frames: 24, width: 320, height: 24 }
    }
}

impl StudioConfig {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(dir) = args.next() {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(n) = args.next() {
            config.frames = n
                .parse()
                .with_context(|| format!("frame count must be a positive integer, got '{n}'"))?;
        }
        anyhow::ensure!(config.frames >= 2, "need at least 2 frames, got {}", config.frames);
        Ok(config)
    }
}

/// One animation step: the bar grows in, fills, then slides out.
fn frame_state(i: u32, frames: u32) -> (f32, f32) {
    let t = i as f32 / (frames - 1) as f32;
    let size_fraction = (t * 4.0).min(1.0).min((1.0 - t) * 4.0).max(0.0);
    (size_fraction, t)
}

/// Track and indicator colors, packed as `0xAARRGGBB`.
const TRACK_ARGB: u32 = 0xFF_CF_D8_DC;
const INDICATOR_ARGB: u32 = 0xFF_1E_88_E5;
const BACKGROUND_ARGB: u32 = 0xFF_FF_FF_FF;

/// Records `bar` into `list` (cleared first, so one list serves every frame)
/// and rasterizes it over the background.
fn render_frame(config: &StudioConfig, bar: &ProgressBar, list: &mut DrawList) -> Pixmap {
    list.clear();
    let mut painter = Painter::new(list);
    bar.paint(&mut painter, Rect::new(0.0, 0.0, config.width as f32, config.height as f32));
    debug!("recorded {} draw items", list.len());

    let mut pixmap = Pixmap::new(config.width, config.height);
    pixmap.fill(Color::from_argb_u32(BACKGROUND_ARGB));
    Rasterizer::default().render(list, &mut pixmap);
    pixmap
}

fn write_frame(dir: &Path, index: u32, pixmap: &Pixmap) -> Result<()> {
    let path = dir.join(format!("frame_{index:03}.png"));
    pixmap
        .save_png(&path)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_args(std::env::args().skip(1))?;
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    let track = TrackSpec::new()
        .thickness(12.0)
        .corner_radius(6.0)
        .track_color(Color::from_argb_u32(TRACK_ARGB))
        .grow_mode(GrowMode::FromTrailingEdge);

    let mut list = DrawList::new();
    for i in 0..config.frames {
        let (size_fraction, value) = frame_state(i, config.frames);
        let bar = ProgressBar::new()
            .track(track)
            .indicator_color(Color::from_argb_u32(INDICATOR_ARGB))
            .value(value)
            .size_fraction(size_fraction)
            .track_alpha(0.6);
        write_frame(&config.output_dir, i, &render_frame(&config, &bar, &mut list))?;
    }

    info!("wrote {} frames to {}", config.frames, config.output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> impl Iterator<Item = String> {
        v.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn config_defaults_without_args() {
        let c = StudioConfig::from_args(args(&[])).unwrap();
        assert_eq!(c.output_dir, PathBuf::from("frames"));
        assert_eq!(c.frames, 24);
    }

    #[test]
    fn config_rejects_bad_frame_count() {
        assert!(StudioConfig::from_args(args(&["out", "many"])).is_err());
        assert!(StudioConfig::from_args(args(&["out", "1"])).is_err());
        assert_eq!(StudioConfig::from_args(args(&["out", "8"])).unwrap().frames, 8);
    }

    #[test]
    fn animation_appears_and_disappears() {
        assert_eq!(frame_state(0, 9), (0.0, 0.0));
        assert_eq!(frame_state(4, 9).0, 1.0);
        assert_eq!(frame_state(8, 9), (0.0, 1.0));
    }

    #[test]
    fn mid_animation_frame_has_ink() {
        let config = StudioConfig::default();
        let bar = ProgressBar::new()
            .track(TrackSpec::new().thickness(12.0).corner_radius(6.0))
            .value(0.5);
        let pix = render_frame(&config, &bar, &mut DrawList::new());
        let background = Color::from_argb_u32(BACKGROUND_ARGB);
        assert_ne!(pix.pixel(80, 18), Some(background));
    }

    #[test]
    fn reused_list_only_holds_the_latest_frame() {
        let config = StudioConfig::default();
        let mut list = DrawList::new();
        let bar = ProgressBar::new().value(0.5);
        render_frame(&config, &bar, &mut list);
        let first = list.len();
        render_frame(&config, &bar, &mut list);
        assert_eq!(list.len(), first);
    }

    // ── output ────────────────────────────────────────────────────────────

    #[test]
    fn write_frame_produces_numbered_png() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = StudioConfig::default();
        let bar = ProgressBar::new().value(1.0);
        let pix = render_frame(&config, &bar, &mut DrawList::new());

        write_frame(dir.path(), 7, &pix).unwrap();

        let img = image::open(dir.path().join("frame_007.png")).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (config.width, config.height));
        assert_eq!(img.into_raw(), pix.to_rgba_image().into_raw());
    }

    #[test]
    fn write_frame_reports_missing_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("absent");
        let err = write_frame(&missing, 0, &Pixmap::new(2, 2)).unwrap_err();
        assert!(err.to_string().contains("frame_000.png"));
    }
}
