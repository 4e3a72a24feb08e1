use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hullscan::api::{self, Format, Snapshot};
use hullscan::geom::Point;
use hullscan::input::{ViewCfg, Viewport};
use hullscan::points::{Grid, PointSet};
use hullscan::render::{AsciiCfg, AsciiRenderer};
use hullscan::sample::{random_points, ReplayToken};
use hullscan::session::Session;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod click;
mod load;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls of integer grid points")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Where the points come from.
#[derive(Args, Debug)]
struct Source {
    /// Point file: .csv or .parquet (columns x, y) or .json
    #[arg(long, conflicts_with = "points")]
    input: Option<PathBuf>,
    /// Inline points, e.g. "0,0 10,0 10,10"
    #[arg(long)]
    points: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Ascii,
    Svg,
}

impl From<FormatArg> for Format {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Ascii => Format::Ascii,
            FormatArg::Svg => Format::Svg,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull and print the coverage line
    Hull {
        #[command(flatten)]
        source: Source,
        /// Write points, hull and coverage as JSON (plus provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw a seeded random point set and compute its hull
    Random {
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 100)]
        grid: i32,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render points and hull as ASCII or SVG
    Render {
        #[command(flatten)]
        source: Source,
        #[arg(long, value_enum, default_value_t = FormatArg::Ascii)]
        format: FormatArg,
        #[arg(long, default_value_t = 100)]
        grid: i32,
        /// Cell size in pixels (SVG)
        #[arg(long, default_value_t = 6.0)]
        cell: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Interactive session: one click per stdin line
    Click {
        #[arg(long, default_value_t = 20)]
        grid: i32,
        #[arg(long, default_value_t = 10.0)]
        cell: f64,
        /// Read `x,y` grid coordinates instead of pixel positions
        #[arg(long)]
        grid_coords: bool,
        #[command(flatten)]
        source: Source,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { source, out } => hull(source, out),
        Action::Random {
            count,
            seed,
            index,
            grid,
            out,
        } => random(count, ReplayToken::new(seed, index), grid, out),
        Action::Render {
            source,
            format,
            grid,
            cell,
            out,
        } => render(source, format, grid, cell, out),
        Action::Click {
            grid,
            cell,
            grid_coords,
            source,
        } => click_session(grid, cell, grid_coords, source),
        Action::Report => report(),
    }
}

impl Source {
    /// Distinct points in input order.
    fn load(&self) -> Result<Vec<Point>> {
        let raw = match (&self.input, &self.points) {
            (Some(path), _) => load::load_points(path)?,
            (None, Some(inline)) => load::parse_inline(inline)?,
            (None, None) => bail!("no points given: pass --input or --points"),
        };
        Ok(dedup(raw))
    }

    fn is_given(&self) -> bool {
        self.input.is_some() || self.points.is_some()
    }

    fn describe(&self) -> serde_json::Value {
        json!({
            "input": self.input.as_ref().map(|p| p.to_string_lossy().into_owned()),
            "points": self.points,
        })
    }
}

fn dedup(raw: Vec<Point>) -> Vec<Point> {
    let total = raw.len();
    let set: PointSet = raw.into_iter().collect();
    if set.len() < total {
        tracing::warn!(dropped = total - set.len(), "duplicate_points");
    }
    set.as_slice().to_vec()
}

fn hull(source: Source, out: Option<PathBuf>) -> Result<()> {
    let points = source.load()?;
    let snap = Snapshot::compute(&points);
    tracing::info!(
        points = snap.coverage.points,
        hull = snap.coverage.hull,
        out = ?out,
        "hull"
    );
    println!("{}", snap.coverage);
    if let Some(out) = out {
        write_snapshot(&out, &snap, provenance::Payload::new("hull", source.describe()))?;
    }
    Ok(())
}

fn random(count: usize, tok: ReplayToken, grid: i32, out: Option<PathBuf>) -> Result<()> {
    let grid = Grid::new(grid)?;
    let set = random_points(count, grid, tok);
    let snap = Snapshot::compute(set.as_slice());
    tracing::info!(
        count,
        seed = tok.seed,
        index = tok.index,
        grid = grid.size,
        hull = snap.coverage.hull,
        "random"
    );
    println!("{}", snap.coverage);
    if let Some(out) = out {
        let params = json!({
            "count": count,
            "seed": tok.seed,
            "index": tok.index,
            "grid": grid.size,
        });
        write_snapshot(&out, &snap, provenance::Payload::new("random", params))?;
    }
    Ok(())
}

fn render(
    source: Source,
    format: FormatArg,
    grid: i32,
    cell: f64,
    out: Option<PathBuf>,
) -> Result<()> {
    let grid = Grid::new(grid)?;
    let points = source.load()?;
    let snap = Snapshot::compute(&points);
    tracing::info!(format = ?format, grid = grid.size, cell, out = ?out, "render");
    let text = api::render(&snap, format.into(), grid, ViewCfg { cell })?;
    match out {
        Some(out) => {
            write_artifact(&out, text.as_bytes())?;
            let params = json!({
                "source": source.describe(),
                "format": format!("{format:?}").to_lowercase(),
                "grid": grid.size,
                "cell": cell,
            });
            provenance::write_sidecar(&out, provenance::Payload::new("render", params))?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn click_session(grid: i32, cell: f64, grid_coords: bool, source: Source) -> Result<()> {
    let grid = Grid::new(grid)?;
    let viewport = Viewport::new(grid, ViewCfg { cell })?;
    let mut session = if source.is_given() {
        let set: PointSet = source.load()?.into_iter().collect();
        Session::with_points(viewport, set)?
    } else {
        Session::new(viewport)
    };
    let mut renderer = AsciiRenderer::new(AsciiCfg {
        grid,
        ..AsciiCfg::default()
    });
    tracing::info!(grid = grid.size, cell, grid_coords, "click");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    click::run(
        stdin.lock(),
        stdout.lock(),
        &mut session,
        &mut renderer,
        grid_coords,
    )
}

fn report() -> Result<()> {
    let doc = provenance::document(&provenance::Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn write_snapshot(out: &Path, snap: &Snapshot, payload: provenance::Payload) -> Result<()> {
    write_artifact(out, &serde_json::to_vec_pretty(snap)?)?;
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn write_artifact(out: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))
}
