//! `rasterlab demo`: the animated landscape as numbered PNG frames.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::load_manifest;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::scene::MiniScene;
use crate::surface::{Canvas, PngSequence};

/// Render the animated landscape as a PNG sequence
#[derive(Args, Debug, Default)]
pub struct DemoArgs {
    /// Number of frames (default: raster.yaml `frames`, or 60)
    #[arg(long)]
    pub frames: Option<u32>,

    /// Zoom the house and flowers in every N frames (0 = never)
    #[arg(long, default_value = "0")]
    pub zoom_every: u32,

    /// Frame directory (default: <output>/demo)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer upscale for written PNGs
    #[arg(long)]
    pub scale: Option<u32>,
}

pub fn run(args: DemoArgs, printer: &Printer) -> Result<()> {
    demo_in(Path::new("."), &args, printer).map(|_| ())
}

/// Render the frames relative to a project root, returning the frame directory.
pub fn demo_in(root: &Path, args: &DemoArgs, printer: &Printer) -> Result<PathBuf> {
    let (manifest, _) = load_manifest(root)?;

    let frames = args.frames.unwrap_or(manifest.effective_frames());
    let scale = args.scale.unwrap_or(manifest.effective_scale());
    let dir = root.join(
        args.output
            .clone()
            .unwrap_or_else(|| manifest.output.join("demo")),
    );

    let mut scene = MiniScene::new(manifest.demo);
    let cfg = scene.config();
    let canvas = Canvas::new(cfg.width, cfg.height, cfg.palette.sky);
    let mut frames_out = PngSequence::create(canvas, &dir, scale)?;

    printer.status(
        "Animating",
        &format!(
            "{} {}",
            plural(frames as usize, "frame", "frames"),
            printer.dim(&format!("({}x{})", cfg.width, cfg.height))
        ),
    );

    for i in 1..=frames {
        scene.draw_frame(&mut frames_out)?;
        scene.advance();
        if args.zoom_every > 0 && i % args.zoom_every == 0 {
            scene.zoom_in();
        }
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(frames_out.frames_written(), "frame", "frames"),
            printer.cyan(&display_path(&dir))
        ),
    );

    Ok(dir)
}
