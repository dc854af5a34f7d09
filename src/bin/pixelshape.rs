use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pixelshape", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print or write the path-data string.
    Path(VectorArgs),
    /// Export a standalone SVG document.
    Svg(VectorArgs),
    /// Rasterize to a PNG.
    Png(PngArgs),
}

#[derive(Parser, Debug)]
struct VectorArgs {
    /// Input shape document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PngArgs {
    /// Input shape document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Resolution multiplier (1, 2 or 4).
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn cmd_path(args: VectorArgs) -> anyhow::Result<()> {
    let doc = pixelshape::ShapeDocument::from_path(&args.in_path)?;
    let shape = doc.render();
    write_text(args.out.as_deref(), &shape.path_data())
}

fn cmd_svg(args: VectorArgs) -> anyhow::Result<()> {
    let doc = pixelshape::ShapeDocument::from_path(&args.in_path)?;
    let shape = doc.render();
    write_text(args.out.as_deref(), &pixelshape::svg_markup(&shape))
}

fn cmd_png(args: PngArgs) -> anyhow::Result<()> {
    let scale = pixelshape::PixelScale::try_from(args.scale)?;
    let doc = pixelshape::ShapeDocument::from_path(&args.in_path)?;
    let shape = doc.render();

    let img = pixelshape::rasterize(&shape, scale)?
        .with_context(|| format!("'{}' has no filled cells", args.in_path.display()))?;
    let bytes = pixelshape::encode_png(&img)?;

    create_parent(&args.out)?;
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_text(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{text}");
        return Ok(());
    };
    create_parent(out)?;
    std::fs::write(out, text).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn create_parent(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
