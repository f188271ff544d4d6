use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use minbeam::prelude::*;

mod figure;
mod provenance;

#[derive(Parser)]
#[command(name = "minbeam")]
#[command(about = "Smallest-area enclosing ellipse for beam tables")]
struct Cmd {
    /// Seed for the stochastic search and demo draws
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a beams CSV and write a JSON result
    Run {
        /// CSV with major,minor,pa columns (full axes, radians)
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Basin-hopping iterations
        #[arg(long, default_value_t = 100)]
        hops: usize,
        /// Boundary samples per beam
        #[arg(long, default_value_t = 1000)]
        samples: usize,
    },
    /// Draw random beams, solve, and render a figure
    Demo {
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Output figure (PNG)
        #[arg(long)]
        out: String,
        /// Also dump the drawn beams as CSV
        #[arg(long)]
        csv: Option<String>,
    },
    /// Solve a beams CSV and render a figure
    Figure {
        #[arg(long)]
        input: String,
        /// Output figure (PNG)
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            input,
            out,
            hops,
            samples,
        } => run(&input, &out, hops, samples, cmd.seed),
        Action::Demo { count, out, csv } => demo(count, &out, csv.as_deref(), cmd.seed),
        Action::Figure { input, out } => figure_cmd(&input, &out, cmd.seed),
    }
}

#[derive(serde::Serialize)]
struct ResultDoc {
    major: f64,
    minor: f64,
    pa: f64,
    area: f64,
    sep: f64,
    hops_accepted: usize,
    hops_rejected: usize,
    improved: bool,
}

impl From<&Enclosure> for ResultDoc {
    fn from(enc: &Enclosure) -> Self {
        Self {
            major: enc.beam.major,
            minor: enc.beam.minor,
            pa: enc.beam.pa,
            area: enc.beam.area(),
            sep: enc.sep,
            hops_accepted: enc.report.hops_accepted,
            hops_rejected: enc.report.hops_rejected,
            improved: enc.report.improved,
        }
    }
}

fn run(input: &str, out: &str, hops: usize, samples: usize, seed: u64) -> Result<()> {
    let beams = read_beams_csv(input)?;
    tracing::info!(input, n_beams = beams.len(), hops, samples, seed, "run");

    let cfg = EncloseCfg {
        sample: SampleCfg {
            samples_per_beam: samples,
        },
        search: SearchCfg {
            hops,
            ..Default::default()
        },
    };
    let enc = minbeam_with(&beams, &cfg, ReplayToken::new(seed, 0))?;
    log_enclosure(&enc);

    let doc = ResultDoc::from(&enc);
    write_artifact(out, &serde_json::to_vec_pretty(&doc)?)?;
    provenance::write_sidecar(
        out,
        provenance::Payload::new(serde_json::json!({
            "input": input,
            "n_beams": beams.len(),
            "hops": hops,
            "samples": samples,
            "seed": seed,
        })),
    )?;
    Ok(())
}

fn demo(count: usize, out: &str, csv: Option<&str>, seed: u64) -> Result<()> {
    let cfg = BeamDrawCfg {
        count,
        ..Default::default()
    };
    let beams = draw_beams(cfg, ReplayToken::new(seed, 0));
    tracing::info!(count, seed, "demo");

    let enc = minbeam_with(&beams, &EncloseCfg::default(), ReplayToken::new(seed, 1))?;
    log_enclosure(&enc);

    if let Some(csv_path) = csv {
        write_beams_csv(&beams, csv_path)?;
    }
    figure::render(&beams, &enc, out)?;
    provenance::write_sidecar(
        out,
        provenance::Payload::new(serde_json::json!({
            "count": count,
            "seed": seed,
        })),
    )?;
    Ok(())
}

fn figure_cmd(input: &str, out: &str, seed: u64) -> Result<()> {
    let beams = read_beams_csv(input)?;
    tracing::info!(input, n_beams = beams.len(), seed, "figure");

    let enc = minbeam_with(&beams, &EncloseCfg::default(), ReplayToken::new(seed, 0))?;
    log_enclosure(&enc);

    figure::render(&beams, &enc, out)?;
    provenance::write_sidecar(
        out,
        provenance::Payload::new(serde_json::json!({
            "input": input,
            "n_beams": beams.len(),
            "seed": seed,
        })),
    )?;
    Ok(())
}

fn log_enclosure(enc: &Enclosure) {
    tracing::info!(
        major = enc.beam.major,
        minor = enc.beam.minor,
        pa = enc.beam.pa,
        area = enc.beam.area(),
        improved = enc.report.improved,
        evals = enc.report.evals,
        "enclosing beam"
    );
    if !enc.report.improved {
        tracing::warn!("no hop improved on the refined initial guess");
    }
}

fn read_beams_csv(path: &str) -> Result<Vec<Beam>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("reading {path}"))?;
    let df = lf
        .select([
            col("major").cast(DataType::Float64),
            col("minor").cast(DataType::Float64),
            col("pa").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("collecting beam columns from {path}"))?;

    let major = df.column("major")?.f64()?;
    let minor = df.column("minor")?.f64()?;
    let pa = df.column("pa")?.f64()?;
    let mut beams = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        match (major.get(i), minor.get(i), pa.get(i)) {
            (Some(ma), Some(mi), Some(p)) => beams.push(Beam::new(ma, mi, p)?),
            _ => bail!("row {i} of {path} has missing values"),
        }
    }
    Ok(beams)
}

fn write_beams_csv(beams: &[Beam], path: &str) -> Result<()> {
    let mut doc = String::from("major,minor,pa\n");
    for b in beams {
        doc.push_str(&format!("{},{},{}\n", b.major, b.minor, b.pa));
    }
    write_artifact(path, doc.as_bytes())
}

fn write_artifact(path: &str, bytes: &[u8]) -> Result<()> {
    let out_path = Path::new(path);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, bytes).with_context(|| format!("writing {path}"))?;
    Ok(())
}
