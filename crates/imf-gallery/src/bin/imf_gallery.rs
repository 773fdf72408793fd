use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use image::GrayImage;
use imf_core::{Image, Interpolation};
use imf_fuse::{FusionConfig, FusionMethod, ImageFuser};
use imf_wavelet::WaveletFamily;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "imf_gallery")]
#[command(about = "Fuse grayscale image pairs and write the results with metadata")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fuse a pair with one method.
    #[command(name = "fuse")]
    Fuse(FuseArgs),
    /// Fuse a pair with every method.
    #[command(name = "all")]
    All(AllArgs),
    /// List the supported wavelet families.
    #[command(name = "wavelets")]
    Wavelets,
}

#[derive(Args, Debug, Clone)]
struct CommonArgs {
    #[arg(long, required = true)]
    primary: PathBuf,
    #[arg(long, required = true)]
    secondary: PathBuf,
    /// JSON file with `FusionConfig` fields; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    alpha: Option<f32>,
    #[arg(long)]
    depth: Option<usize>,
    /// Kernel for resampling the secondary: `bilinear` or `nearest`.
    #[arg(long)]
    resample: Option<Interpolation>,
    #[arg(long, default_value = "docs/fig/raw")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct FuseArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, required = true)]
    method: String,
    #[arg(long)]
    wavelet: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct AllArgs {
    #[command(flatten)]
    common: CommonArgs,
    #[arg(long, default_value = "haar")]
    wavelet: WaveletFamily,
}

#[derive(Debug, Clone, Serialize)]
struct PairDto {
    primary: String,
    secondary: String,
    primary_shape: [usize; 2],
    secondary_shape: [usize; 2],
    secondary_resampled: bool,
}

#[derive(Debug, Clone, Serialize)]
struct MetaFuse {
    method: &'static str,
    wavelet: Option<&'static str>,
    config: FusionConfig,
    pair: PairDto,
    output_shape: [usize; 2],
    output: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct OutputDto {
    method: &'static str,
    wavelet: Option<&'static str>,
    file: String,
    mean: f64,
}

#[derive(Debug, Clone, Serialize)]
struct MetaAll {
    config: FusionConfig,
    pair: PairDto,
    outputs: Vec<OutputDto>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Fuse(args) => run_fuse(args),
        Command::All(args) => run_all(args),
        Command::Wavelets => run_wavelets(),
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn run_fuse(args: FuseArgs) -> Result<()> {
    let method = FusionMethod::parse(&args.method, args.wavelet.as_deref())
        .with_context(|| format!("resolving method '{}'", args.method))?;
    let (case_dir, fuser, primary, secondary) = prepare_case(&args.common, "fuse")?;

    let fused = fuser
        .fuse(&primary.as_view(), &secondary.as_view(), method)
        .with_context(|| format!("fusing with {method}"))?;
    save_u8_image(case_dir.join("fused.png"), &fused)?;

    write_json(
        case_dir.join("meta.json"),
        &MetaFuse {
            method: method.name(),
            wavelet: method.wavelet().map(|w| w.name()),
            config: *fuser.config(),
            pair: pair_dto(&args.common, &primary, &secondary),
            output_shape: [fused.width(), fused.height()],
            output: "fused.png",
        },
    )?;

    info!(method = %method, out = %case_dir.display(), "wrote fused image");
    Ok(())
}

fn run_all(args: AllArgs) -> Result<()> {
    let (case_dir, fuser, primary, secondary) = prepare_case(&args.common, "all")?;

    let mut outputs = Vec::new();
    for method in FusionMethod::all(args.wavelet) {
        let fused = fuser
            .fuse(&primary.as_view(), &secondary.as_view(), method)
            .with_context(|| format!("fusing with {method}"))?;
        let file = format!("{}.png", file_stem(&method));
        save_u8_image(case_dir.join(&file), &fused)?;
        debug!(method = %method, file = %file, "saved method output");

        outputs.push(OutputDto {
            method: method.name(),
            wavelet: method.wavelet().map(|w| w.name()),
            file,
            mean: mean_u8(&fused),
        });
    }

    write_json(
        case_dir.join("meta.json"),
        &MetaAll {
            config: *fuser.config(),
            pair: pair_dto(&args.common, &primary, &secondary),
            outputs,
        },
    )?;

    info!(out = %case_dir.display(), "wrote all fusion outputs");
    Ok(())
}

fn run_wavelets() -> Result<()> {
    for family in WaveletFamily::all() {
        println!(
            "{:<8} {:<21} filter length {}",
            family.name(),
            family.kind(),
            family.filter_len()
        );
    }
    Ok(())
}

fn prepare_case(
    common: &CommonArgs,
    case_name: &str,
) -> Result<(PathBuf, ImageFuser, Image<u8>, Image<u8>)> {
    ensure_file_exists(&common.primary, "primary")?;
    ensure_file_exists(&common.secondary, "secondary")?;

    let config = resolve_config(common)?;
    let fuser = ImageFuser::new(config).context("validating fusion config")?;

    let primary = load_input_u8(&common.primary)?;
    let secondary = load_input_u8(&common.secondary)?;

    let case_dir = common.out.join(case_name);
    fs::create_dir_all(&case_dir)
        .with_context(|| format!("creating output directory {}", case_dir.display()))?;

    save_u8_image(case_dir.join("primary.png"), &primary)?;
    save_u8_image(case_dir.join("secondary.png"), &secondary)?;

    Ok((case_dir, fuser, primary, secondary))
}

fn resolve_config(common: &CommonArgs) -> Result<FusionConfig> {
    let mut config = match &common.config {
        Some(path) => {
            ensure_file_exists(path, "config")?;
            read_json(path)
                .with_context(|| format!("reading fusion config at {}", path.display()))?
        }
        None => FusionConfig::default(),
    };
    if let Some(alpha) = common.alpha {
        config.alpha = alpha;
    }
    if let Some(depth) = common.depth {
        config.pyramid_depth = depth;
    }
    if let Some(resample) = common.resample {
        config.resample = resample;
    }
    Ok(config)
}

fn pair_dto(common: &CommonArgs, primary: &Image<u8>, secondary: &Image<u8>) -> PairDto {
    PairDto {
        primary: common.primary.display().to_string(),
        secondary: common.secondary.display().to_string(),
        primary_shape: [primary.width(), primary.height()],
        secondary_shape: [secondary.width(), secondary.height()],
        secondary_resampled: primary.shape() != secondary.shape(),
    }
}

fn file_stem(method: &FusionMethod) -> String {
    let stem = method.name().to_ascii_lowercase().replace(' ', "_");
    match method.wavelet() {
        Some(family) => format!("{stem}_{}", family.name()),
        None => stem,
    }
}

fn mean_u8(img: &Image<u8>) -> f64 {
    let sum: u64 = img.data().iter().map(|&v| v as u64).sum();
    sum as f64 / img.data().len().max(1) as f64
}

fn load_input_u8(path: &Path) -> Result<Image<u8>> {
    let dyn_img =
        image::open(path).with_context(|| format!("opening input image {}", path.display()))?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();
    let data = luma.into_raw();

    Image::from_vec(w as usize, h as usize, data)
        .with_context(|| format!("constructing image buffer from {}", path.display()))
}

fn save_u8_image(path: PathBuf, img: &Image<u8>) -> Result<()> {
    let gray = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
