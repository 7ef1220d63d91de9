use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

use persist_core::annotation::compute_edge_annotations;
use persist_core::config::{AlgorithmSelector, ReductionConfig};
use persist_core::filtration::{CubicalFiltration, Filtration, FullRipsFiltration};
use persist_core::io::{
    read_binary_cubical, read_binary_distance_matrix, read_text_cubical, write_persistence_pairs,
    write_reduction_columns,
};
use persist_core::reduction::run_reduction;
use persist_core::search::a_star_optimal_cycle;

mod provenance;

#[derive(Parser)]
#[command(name = "persist-cli")]
#[command(about = "Persistent homology reduction with geometrically short representative cycles")]
struct Cmd {
    /// Optional VK ticket UUID; logged with tracing spans for easy correlation
    #[arg(long)]
    vk: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    /// Cubical grid (§6 `file_type` 0): `dim, extent[dim], data`.
    Cubical,
    /// Dense symmetric distance matrix (§6 `file_type` 1), fed to the full
    /// (flag) Vietoris-Rips construction.
    Distance,
}

#[derive(Subcommand)]
enum Action {
    /// Run the full reduction pipeline on a file, writing `.red`/`.pers`
    /// outputs and a JSON provenance sidecar.
    Reduce {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum)]
        format: InputFormat,
        /// Read the cubical input as its whitespace-separated text variant
        /// instead of the binary one. Ignored for `distance`.
        #[arg(long)]
        text: bool,
        #[arg(long, default_value_t = 0.0)]
        threshold: f64,
        #[arg(long, default_value_t = 1)]
        max_dim: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print persistence pairs for a file without writing any output.
    Inspect {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum)]
        format: InputFormat,
        #[arg(long)]
        text: bool,
        #[arg(long, default_value_t = 0.0)]
        threshold: f64,
        #[arg(long, default_value_t = 1)]
        max_dim: usize,
    },
    /// Run the A* engine against a synthetic random grid and report
    /// expansion counts.
    Bench {
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[arg(long, default_value_t = 43)]
        seed: u64,
        #[arg(long, default_value_t = 0.0)]
        threshold: f64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Reduce {
            input,
            format,
            text,
            threshold,
            max_dim,
            out,
        } => reduce(input, format, text, threshold, max_dim, out, cmd.vk),
        Action::Inspect {
            input,
            format,
            text,
            threshold,
            max_dim,
        } => inspect(input, format, text, threshold, max_dim),
        Action::Bench { size, seed, threshold } => bench(size, seed, threshold),
    }
}

fn load_filtration(input: &Path, format: InputFormat, text: bool, max_dim: usize) -> Result<Box<dyn Filtration>> {
    match format {
        InputFormat::Cubical => {
            let grid = if text {
                let contents =
                    std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
                read_text_cubical(&contents)?
            } else {
                let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
                read_binary_cubical(file)?
            };
            let f = CubicalFiltration::from_grid(&grid.extents, &grid.data)?;
            Ok(Box::new(f))
        }
        InputFormat::Distance => {
            let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
            let matrix = read_binary_distance_matrix(file)?;
            let f = FullRipsFiltration::from_distance_matrix(matrix.rows, max_dim)?;
            Ok(Box::new(f))
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn reduce(
    input: PathBuf,
    format: InputFormat,
    text: bool,
    threshold: f64,
    max_dim: usize,
    out: PathBuf,
    vk: Option<String>,
) -> Result<()> {
    let span = tracing::info_span!("reduce", input = %input.display(), threshold, max_dim, vk = ?vk);
    let _enter = span.enter();
    tracing::info!("loading filtration");
    let filtration = load_filtration(&input, format, text, max_dim)?;

    let config = ReductionConfig {
        persistence_threshold: threshold,
        max_dim,
        algorithm: AlgorithmSelector::AStar,
        num_threads: 1,
    };
    tracing::info!(cells = filtration.cells().len(), "running reduction");
    let result = run_reduction(filtration.as_ref(), &config)?;

    let red_path = out.with_extension("red");
    let pers_path = out.with_extension("pers");

    write_reduction_columns(BufWriter::new(File::create(&red_path)?), &result.columns, false)
        .with_context(|| format!("writing {}", red_path.display()))?;
    write_persistence_pairs(BufWriter::new(File::create(&pers_path)?), &result.pairs, false)
        .with_context(|| format!("writing {}", pers_path.display()))?;

    tracing::info!(pairs = result.pairs.len(), "reduction complete");

    provenance::write_sidecar(
        &red_path,
        provenance::Payload::new(json!({
            "input": input,
            "threshold": threshold,
            "max_dim": max_dim,
            "pairs_file": pers_path,
            "num_pairs": result.pairs.len(),
        })),
    )?;

    Ok(())
}

fn inspect(input: PathBuf, format: InputFormat, text: bool, threshold: f64, max_dim: usize) -> Result<()> {
    let filtration = load_filtration(&input, format, text, max_dim)?;
    let config = ReductionConfig {
        persistence_threshold: threshold,
        max_dim,
        algorithm: AlgorithmSelector::AStar,
        num_threads: 1,
    };
    let result = run_reduction(filtration.as_ref(), &config)?;

    println!("{:>8} {:>8} {:>12}", "birth", "death", "persistence");
    for pair in &result.pairs {
        match pair.death {
            Some(death) => {
                let persistence = result.persistence(pair, filtration.as_ref()).unwrap_or(0.0);
                println!("{:>8} {:>8} {:>12.6}", pair.birth, death, persistence);
            }
            None => println!("{:>8} {:>8} {:>12}", pair.birth, "-", "inf"),
        }
    }
    Ok(())
}

fn bench(size: usize, seed: u64, threshold: f64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let values: Vec<f64> = (0..size * size).map(|_| rng.gen::<f64>()).collect();
    let filtration = CubicalFiltration::from_grid(&[size, size], &values)?;

    let cells = filtration.cells();
    let boundary_columns: Vec<Vec<_>> = cells.iter().map(|c| c.boundary.clone()).collect();
    let (reduced, pairs) = persist_core::complex::reduce_boundary_matrix(boundary_columns);

    let edge_map = filtration.edge_index();
    let cell2v = |c: usize| cells.get(c).and_then(|cell| cell.vertices);
    let edges: Vec<(usize, usize, usize)> = cells
        .iter()
        .enumerate()
        .filter_map(|(id, cell)| cell.vertices.map(|(a, b)| (id, a, b)))
        .collect();
    let annotations = compute_edge_annotations(&edges);

    let start = Instant::now();
    let mut refined = 0usize;
    let mut total_expanded = 0usize;
    for pair in &pairs {
        if cells[pair.birth].dimension != 1 {
            continue;
        }
        let Some(death) = pair.death else { continue };
        let persistence = cells[death].filtration_value - cells[pair.birth].filtration_value;
        if persistence <= threshold {
            continue;
        }
        let input_cycle = &reduced.columns[death];
        if input_cycle.is_empty() {
            continue;
        }
        let (_cycle, expanded) =
            a_star_optimal_cycle(input_cycle, cell2v, &annotations, &edge_map, filtration.vertex_count())?;
        refined += 1;
        total_expanded += expanded;
    }
    let elapsed = start.elapsed();

    let report = json!({
        "grid_size": size,
        "seed": seed,
        "threshold": threshold,
        "classes_refined": refined,
        "total_expanded_nodes": total_expanded,
        "elapsed_ms": elapsed.as_secs_f64() * 1000.0,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
