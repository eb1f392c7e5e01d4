mod output;
mod parse;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridshape::catalog::triangle_catalog;
use gridshape::palette::ColorPolicy;
use gridshape::sheet::{ClickOutcome, Sheet, SheetCfg};
use gridshape::{polygons_equal, Polygon};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use output::{points, CatalogReport, CompareReport, SessionReport, ShapeReport};
use parse::parse_shape;
use provenance::{provenance_doc, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "gridshape-cli")]
#[command(about = "Inspect and compare polygons drawn on an integer grid")]
struct Cmd {
    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Random,
    Blue,
    Red,
}

impl From<ColorArg> for ColorPolicy {
    fn from(c: ColorArg) -> Self {
        match c {
            ColorArg::Random => ColorPolicy::Cycle,
            ColorArg::Blue => ColorPolicy::blue(),
            ColorArg::Red => ColorPolicy::red(),
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Print the area and canonical-form set of one closed shape
    Forms {
        /// Vertices as "r,c r,c ..."
        #[arg(long)]
        shape: String,
    },
    /// Decide whether two closed shapes are the same up to symmetry
    Compare {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
    },
    /// Draw shapes on one board in order and report matches and colors
    Session {
        /// One closed outline per flag, in drawing order
        #[arg(long = "shape", required = true)]
        shapes: Vec<String>,
        /// Remove this many figures from the end afterwards
        #[arg(long, default_value_t = 0)]
        undo: usize,
        #[arg(long, default_value_t = 20)]
        grid_size: i64,
        /// Shuffle the palette with this seed
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = ColorArg::Random)]
        color: ColorArg,
    },
    /// List distinct axis-anchored triangles on a board
    Catalog {
        #[arg(long, default_value_t = 5)]
        size: i64,
        /// Also write the list to this JSON file (with a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Forms { shape } => forms(&shape),
        Action::Compare { a, b } => compare(&a, &b),
        Action::Session {
            shapes,
            undo,
            grid_size,
            seed,
            color,
        } => {
            let cfg = SheetCfg {
                grid_size,
                palette_seed: seed,
                color: color.into(),
                ..SheetCfg::default()
            };
            session(&shapes, undo, cfg)
        }
        Action::Catalog { size, out } => catalog(size, out),
        Action::Report => report(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn closed_polygon(text: &str) -> Result<Polygon> {
    let vertices = parse_shape(text)?;
    Polygon::from_vertices(vertices).with_context(|| format!("shape `{text}`"))
}

fn forms(shape: &str) -> Result<()> {
    let polygon = closed_polygon(shape)?;
    let report = ShapeReport::of(&polygon);
    tracing::info!(
        vertices = polygon.vertex_count(),
        forms = report.form_count,
        "forms"
    );
    print_json(&report)
}

fn compare(a: &str, b: &str) -> Result<()> {
    let pa = closed_polygon(a)?;
    let pb = closed_polygon(b)?;
    let report = CompareReport {
        equal: polygons_equal(&pa, &pb),
        area_a: pa.area(),
        area_b: pb.area(),
    };
    tracing::info!(equal = report.equal, "compare");
    print_json(&report)
}

fn session(shapes: &[String], undo: usize, cfg: SheetCfg) -> Result<()> {
    let mut sheet = Sheet::new(cfg);
    for text in shapes {
        let vertices = parse_shape(text)?;
        if vertices.len() < 3 {
            bail!("shape `{text}` needs at least three vertices");
        }
        for &v in vertices.iter().chain(vertices.first()) {
            let outcome = sheet
                .click(v)
                .with_context(|| format!("drawing `{text}` at {v}"))?;
            if let ClickOutcome::Closed {
                index,
                area,
                matches,
            } = outcome
            {
                tracing::info!(index, area, matches = ?matches, "closed");
            }
        }
    }
    for _ in 0..undo {
        if sheet.undo().is_none() {
            break;
        }
    }
    print_json(&SessionReport::of(&sheet))
}

fn catalog(size: i64, out: Option<String>) -> Result<()> {
    tracing::info!(size, out = ?out, "catalog");
    let triangles = triangle_catalog(size);
    let report = CatalogReport {
        size,
        count: triangles.len(),
        triangles: triangles.iter().map(|t| points(t.vertices())).collect(),
    };
    if let Some(out) = out {
        let out_path = Path::new(&out);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {out}"))?;
        let sidecar = write_sidecar(out_path, Payload::new("catalog", json!({ "size": size })))?;
        tracing::info!(sidecar = %sidecar.display(), "provenance written");
    }
    print_json(&json!({ "size": report.size, "count": report.count }))
}

fn report() -> Result<()> {
    let doc = provenance_doc(&Payload::new("report", json!({})), &[]);
    print_json(&doc)
}
