use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fauxtoshop::io::{load_grid, save_grid};
use fauxtoshop::params::{
    BlurParams, EdgeParams, GreenScreenParams, Point, RotateParams, ScatterParams,
};
use fauxtoshop::{apply_batch, Filter};

#[derive(Parser)]
#[command(name = "fauxtoshop")]
#[command(about = "Apply pixel filters to images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Io {
    /// Images to process
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file for a single input, or output directory for several
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Move every pixel by a random offset
    Scatter {
        /// Maximum offset in pixels (1-100)
        #[arg(short, long)]
        degree: i64,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        io: Io,
    },
    /// Black/white edge map
    Edges {
        /// Channel difference that counts as an edge (>= 1)
        #[arg(short, long)]
        threshold: i64,

        #[command(flatten)]
        io: Io,
    },
    /// Overlay another image, treating near-green pixels as transparent
    GreenScreen {
        /// Image to superimpose
        #[arg(short, long)]
        sticker: PathBuf,

        /// Tolerance for pure green (1-100)
        #[arg(short, long)]
        tolerance: i64,

        /// Upper left corner of the sticker as "(row,col)"
        #[arg(long, default_value = "(0,0)")]
        at: Point,

        #[command(flatten)]
        io: Io,
    },
    /// Count pixels that differ from another image
    Compare {
        /// Image to compare with
        #[arg(long)]
        other: PathBuf,

        /// Images to compare
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Rotate by an angle in degrees
    Rotate {
        /// Angle in degrees (0-360)
        #[arg(short, long)]
        angle: f64,

        #[command(flatten)]
        io: Io,
    },
    /// Gaussian blur
    Blur {
        /// Blur radius in pixels (>= 0)
        #[arg(short, long)]
        radius: i64,

        #[command(flatten)]
        io: Io,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fauxtoshop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scatter { degree, seed, io } => {
            let mut params = ScatterParams::new(degree)?;
            if let Some(seed) = seed {
                params = params.with_seed(seed);
            }
            run_filter(Filter::Scatter(params), &io)
        }
        Commands::Edges { threshold, io } => {
            run_filter(Filter::EdgeDetect(EdgeParams::new(threshold)?), &io)
        }
        Commands::GreenScreen {
            sticker,
            tolerance,
            at,
            io,
        } => {
            let params = GreenScreenParams::new(at, tolerance)?;
            let sticker = load_grid(&sticker)
                .with_context(|| format!("Cannot open sticker {}", sticker.display()))?;
            run_filter(Filter::GreenScreen { sticker, params }, &io)
        }
        Commands::Compare { other, inputs } => run_compare(&other, &inputs),
        Commands::Rotate { angle, io } => {
            run_filter(Filter::Rotate(RotateParams::new(angle)?), &io)
        }
        Commands::Blur { radius, io } => {
            run_filter(Filter::GaussianBlur(BlurParams::new(radius)?), &io)
        }
    }
}

fn load_all(paths: &[PathBuf]) -> anyhow::Result<Vec<fauxtoshop::PixelGrid>> {
    paths
        .iter()
        .map(|p| load_grid(p).with_context(|| format!("Cannot open image {}", p.display())))
        .collect()
}

/// Where the result for `input` goes, if anywhere.
fn output_path(io: &Io, input: &Path) -> Option<PathBuf> {
    let output = io.output.as_ref()?;
    if io.inputs.len() == 1 && !output.is_dir() {
        return Some(output.clone());
    }
    input.file_name().map(|name| output.join(name))
}

fn run_filter(filter: Filter, io: &Io) -> anyhow::Result<()> {
    if io.inputs.len() > 1 {
        if let Some(dir) = &io.output {
            if !dir.is_dir() {
                bail!("{} must be a directory when processing several images", dir.display());
            }
        }
    }

    let images = load_all(&io.inputs)?;
    tracing::info!(filter = %filter.kind(), images = images.len(), "applying filter");

    for (input, output) in io.inputs.iter().zip(apply_batch(&filter, &images)) {
        let Some(grid) = output.into_image() else {
            continue;
        };
        match output_path(io, input) {
            Some(path) => save_grid(&grid, &path)
                .with_context(|| format!("Cannot save image {}", path.display()))?,
            None => tracing::info!(input = %input.display(), "no output given, result discarded"),
        }
    }

    Ok(())
}

fn run_compare(other: &Path, inputs: &[PathBuf]) -> anyhow::Result<()> {
    let other_grid =
        load_grid(other).with_context(|| format!("Cannot open image {}", other.display()))?;
    let images = load_all(inputs)?;

    for (input, image) in inputs.iter().zip(&images) {
        if image.dim() != other_grid.dim() {
            tracing::warn!(
                input = %input.display(),
                size = ?image.dim(),
                other_size = ?other_grid.dim(),
                "image sizes differ, cells outside the overlap count as different"
            );
        }
    }

    let filter = Filter::Compare { other: other_grid };
    for (input, output) in inputs.iter().zip(apply_batch(&filter, &images)) {
        if let Some(summary) = output.summary() {
            println!("{}: {}", input.display(), summary);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_green_screen_point() {
        let cli = Cli::try_parse_from([
            "fauxtoshop",
            "green-screen",
            "--sticker",
            "s.png",
            "--tolerance",
            "10",
            "--at",
            "(3,4)",
            "in.png",
        ])
        .unwrap();
        match cli.command {
            Commands::GreenScreen { at, tolerance, .. } => {
                assert_eq!(at, Point::new(3, 4));
                assert_eq!(tolerance, 10);
            }
            _ => panic!("Expected GreenScreen"),
        }
    }

    #[test]
    fn test_output_path_single_file() {
        let io = Io {
            inputs: vec![PathBuf::from("a.png")],
            output: Some(PathBuf::from("out-not-a-dir.png")),
        };
        assert_eq!(
            output_path(&io, Path::new("a.png")),
            Some(PathBuf::from("out-not-a-dir.png"))
        );
    }

    #[test]
    fn test_output_path_directory() {
        let dir = tempfile::tempdir().unwrap();
        let io = Io {
            inputs: vec![PathBuf::from("x/a.png"), PathBuf::from("x/b.png")],
            output: Some(dir.path().to_path_buf()),
        };
        assert_eq!(
            output_path(&io, Path::new("x/b.png")),
            Some(dir.path().join("b.png"))
        );
    }

    #[test]
    fn test_no_output() {
        let io = Io {
            inputs: vec![PathBuf::from("a.png")],
            output: None,
        };
        assert_eq!(output_path(&io, Path::new("a.png")), None);
    }
}
