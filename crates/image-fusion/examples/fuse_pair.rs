//! Example: fuse one image pair with every method and time each run.
//!
//! Loads the two inputs as 8-bit grayscale, fuses them with all six
//! methods and writes `<stem>_<method>.png` next to the primary image.
//! Per-method timing is printed to stdout and collected into a JSON report.
//!
//! Run from the workspace root:
//!   cargo run -p image-fusion --example fuse_pair -- --help
//!   cargo run -p image-fusion --example fuse_pair -- --primary ct.png --secondary mri.png

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use image::{GrayImage, ImageReader};
use image_fusion::{FusionConfig, FusionMethod, Image, ImageFuser, WaveletFamily};
use serde::Serialize;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Fuse two grayscale images with every fusion method")]
struct Args {
    /// Primary image; its shape is the output shape
    #[arg(long)]
    primary: String,

    /// Secondary image, resampled to the primary's shape when needed
    #[arg(long)]
    secondary: String,

    /// Wavelet family for the wavelet method
    #[arg(long, default_value = "haar")]
    wavelet: WaveletFamily,

    /// Weight of the primary image in the weighted average
    #[arg(long, default_value_t = FusionConfig::DEFAULT_ALPHA)]
    alpha: f32,

    /// Output JSON path (default: <primary stem>_fusion.json next to primary)
    #[arg(long)]
    report: Option<String>,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct MethodRun {
    method: String,
    output: String,
    /// Wall-clock time for this method, in milliseconds.
    elapsed_ms: f64,
    mean: f64,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_gray(path: &str) -> Result<Image<u8>> {
    let gray = ImageReader::open(path)
        .with_context(|| format!("opening {path}"))?
        .decode()
        .with_context(|| format!("decoding {path}"))?
        .into_luma8();
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    Image::from_vec(w, h, gray.into_raw()).with_context(|| format!("wrapping {path}"))
}

fn mean(img: &Image<u8>) -> f64 {
    let sum: u64 = img.data().iter().map(|&v| v as u64).sum();
    sum as f64 / img.data().len().max(1) as f64
}

fn slug(method: &FusionMethod) -> String {
    method.name().to_ascii_lowercase().replace(' ', "_")
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let primary = load_gray(&args.primary)?;
    let secondary = load_gray(&args.secondary)?;
    println!(
        "loaded {} ({}x{}) and {} ({}x{})",
        args.primary,
        primary.width(),
        primary.height(),
        args.secondary,
        secondary.width(),
        secondary.height()
    );

    let fuser = ImageFuser::new(FusionConfig {
        alpha: args.alpha,
        ..FusionConfig::default()
    })
    .context("building fuser")?;

    let base = Path::new(&args.primary);
    let stem = base.file_stem().unwrap_or_default().to_string_lossy().into_owned();
    let dir = base.parent().unwrap_or(Path::new("."));

    let mut runs = Vec::new();
    for method in FusionMethod::all(args.wavelet) {
        let t0 = Instant::now();
        let fused = fuser
            .fuse(&primary.as_view(), &secondary.as_view(), method)
            .with_context(|| format!("fusing with {method}"))?;
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

        let out_path = dir.join(format!("{stem}_{}.png", slug(&method)));
        let (w, h) = fused.shape();
        let png = GrayImage::from_raw(w as u32, h as u32, fused.data().to_vec())
            .context("building output image")?;
        png.save(&out_path)
            .with_context(|| format!("writing {}", out_path.display()))?;

        println!("  {method}: {elapsed_ms:.2} ms -> {}", out_path.display());
        runs.push(MethodRun {
            method: method.to_string(),
            output: out_path.to_string_lossy().into_owned(),
            elapsed_ms,
            mean: mean(&fused),
        });
    }

    let report = args.report.unwrap_or_else(|| {
        dir.join(format!("{stem}_fusion.json"))
            .to_string_lossy()
            .into_owned()
    });
    let file = std::fs::File::create(&report).with_context(|| format!("creating {report}"))?;
    serde_json::to_writer_pretty(file, &runs)
        .with_context(|| format!("writing JSON to {report}"))?;

    println!("report written to {report}");
    Ok(())
}
