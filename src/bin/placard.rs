use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use placard::{
    AspectLock, BatchList, Color, ExportFormat, ExportGateway, FontSource,
    PatternKind, Preset, PRESETS, RasterOpts, StyleDescriptor,
};

#[derive(Parser, Debug)]
#[command(name = "placard", version, about = "Render placeholder images")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one image to a file.
    Render(RenderArgs),
    /// Render the same style at several sizes into a directory.
    Batch(BatchArgs),
    /// Print a `data:` URL for the image.
    DataUrl(DataUrlArgs),
    /// List the size presets.
    Presets,
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Style JSON file; flags below override its fields.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Size preset name (e.g. "full-hd", "Instagram Story").
    #[arg(long)]
    preset: Option<String>,

    /// Width in pixels (clamped to 1..=4096).
    #[arg(long)]
    width: Option<u32>,

    /// Height in pixels (clamped to 1..=4096).
    #[arg(long)]
    height: Option<u32>,

    /// Keep the current aspect ratio when only one of width/height is given.
    #[arg(long, default_value_t = false)]
    keep_aspect: bool,

    /// Background pattern.
    #[arg(long, value_enum)]
    pattern: Option<PatternArg>,

    /// Primary color (`#rrggbb`).
    #[arg(long)]
    color_a: Option<Color>,

    /// Secondary color (`#rrggbb`).
    #[arg(long)]
    color_b: Option<Color>,

    /// Caption color.
    #[arg(long)]
    text_color: Option<Color>,

    /// Caption text; empty means "{w} × {h}".
    #[arg(long)]
    caption: Option<String>,

    /// Corner radius in pixels.
    #[arg(long)]
    border_radius: Option<u32>,

    /// Border stroke width in pixels (0 = none).
    #[arg(long)]
    border_width: Option<u32>,

    /// Border color.
    #[arg(long)]
    border_color: Option<Color>,

    /// Caption font file (defaults to a system sans-serif).
    #[arg(long, conflicts_with = "no_font")]
    font: Option<PathBuf>,

    /// Skip the caption on raster output.
    #[arg(long, default_value_t = false)]
    no_font: bool,

    /// Fixed seed for the noise pattern.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PatternArg {
    Solid,
    #[value(aliases = ["gradient", "gradientLinear"])]
    GradientLinear,
    #[value(aliases = ["radial", "gradientRadial"])]
    GradientRadial,
    Stripes,
    Dots,
    Grid,
    Noise,
}

impl From<PatternArg> for PatternKind {
    fn from(p: PatternArg) -> Self {
        match p {
            PatternArg::Solid => PatternKind::Solid,
            PatternArg::GradientLinear => PatternKind::GradientLinear,
            PatternArg::GradientRadial => PatternKind::GradientRadial,
            PatternArg::Stripes => PatternKind::Stripes,
            PatternArg::Dots => PatternKind::Dots,
            PatternArg::Grid => PatternKind::Grid,
            PatternArg::Noise => PatternKind::Noise,
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Output format; inferred from `--out` when omitted.
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Output path; defaults to `placeholder-{w}x{h}.{ext}` in the current directory.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Output format.
    #[arg(long, default_value = "png")]
    format: ExportFormat,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Extra size `WxH`; repeatable.
    #[arg(long = "size", value_parser = parse_size)]
    sizes: Vec<(u32, u32)>,

    /// Enable the built-in size list entries (1920x1080, 1280x720, 800x600, 400x300).
    #[arg(long, default_value_t = false)]
    defaults: bool,

    /// Also export at the style's own size.
    #[arg(long, default_value_t = false)]
    current: bool,
}

#[derive(Args, Debug)]
struct DataUrlArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Payload format.
    #[arg(long, default_value = "png")]
    format: ExportFormat,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::DataUrl(args) => cmd_data_url(args),
        Command::Presets => cmd_presets(),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("placard=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let style = build_style(&args.style)?;
    let format = match (args.format, &args.out) {
        (Some(f), _) => f,
        (None, Some(out)) => format_from_path(out)?,
        (None, None) => ExportFormat::Png,
    };
    let gateway = gateway(&args.style)?;
    let img = gateway.export(&style, format)?;
    let out = args.out.unwrap_or_else(|| PathBuf::from(&img.file_name));
    write_file(&out, &img.bytes)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let style = build_style(&args.style)?;
    let mut list = if args.defaults {
        let mut list = BatchList::default();
        for i in 0..list.sizes().len() {
            list.toggle(i);
        }
        list
    } else {
        BatchList::empty()
    };
    for &(width, height) in &args.sizes {
        list.add_current(&style.with_size(width, height));
    }
    if args.current {
        list.add_current(&style);
    }

    let gateway = gateway(&args.style)?;
    let images = placard::export_batch(&gateway, &style, &list, args.format)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for img in &images {
        let out = args.out_dir.join(&img.file_name);
        write_file(&out, &img.bytes)?;
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_data_url(args: DataUrlArgs) -> anyhow::Result<()> {
    let style = build_style(&args.style)?;
    let url = gateway(&args.style)?.data_url(&style, args.format)?;
    println!("{url}");
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    for p in PRESETS {
        println!("{:<18} {}x{}", p.name, p.width, p.height);
    }
    Ok(())
}

fn build_style(args: &StyleArgs) -> anyhow::Result<StyleDescriptor> {
    let mut style = match &args.style {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read style '{}'", path.display()))?;
            StyleDescriptor::from_json_str(&text)
                .with_context(|| format!("parse style '{}'", path.display()))?
        }
        None => StyleDescriptor::default(),
    };

    let mut aspect = AspectLock::default();
    aspect.capture(style.width, style.height);
    if let Some(name) = &args.preset {
        let preset =
            Preset::find(name).with_context(|| format!("unknown preset \"{name}\""))?;
        style = preset.apply(&style, &mut aspect);
    }
    if args.keep_aspect {
        aspect.toggle(&style);
    }
    match (args.width, args.height) {
        (Some(w), Some(h)) => style = style.with_width(w).with_height(h),
        (Some(w), None) => style = aspect.set_width(&style, w),
        (None, Some(h)) => style = aspect.set_height(&style, h),
        (None, None) => {}
    }

    if let Some(p) = args.pattern {
        style = style.with_pattern(p.into());
    }
    if args.color_a.is_some() || args.color_b.is_some() {
        style = style.with_colors(
            args.color_a.unwrap_or(style.color_a),
            args.color_b.unwrap_or(style.color_b),
        );
    }
    if let Some(c) = args.text_color {
        style = style.with_text_color(c);
    }
    if let Some(caption) = &args.caption {
        style = style.with_caption(caption.as_str());
    }
    if args.border_radius.is_some() || args.border_width.is_some() || args.border_color.is_some() {
        style = style.with_border(
            args.border_radius.unwrap_or(style.border_radius),
            args.border_width.unwrap_or(style.border_width),
            args.border_color.unwrap_or(style.border_color),
        );
    }
    Ok(style)
}

fn gateway(args: &StyleArgs) -> anyhow::Result<ExportGateway> {
    let font = match (&args.font, args.no_font) {
        (_, true) => FontSource::Disabled,
        (Some(path), false) => FontSource::File(path.clone()),
        (None, false) => FontSource::System,
    };
    let opts = RasterOpts::default()
        .with_font(font)
        .with_noise_seed(args.seed);
    Ok(ExportGateway::new(opts)?)
}

fn format_from_path(path: &Path) -> anyhow::Result<ExportFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .with_context(|| format!("cannot infer format from '{}'; pass --format", path.display()))?;
    Ok(ext.parse::<ExportFormat>()?)
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got \"{s}\""))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width in \"{s}\": {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height in \"{s}\": {e}"))?;
    Ok((w, h))
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}
