//! Command-line meshing harness: build or load a block structure, run the
//! requested mesher, and report buffer sizes and timings.

use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use keel_blocks::{Block, MaterialCatalog, MaterialTier};
use keel_mesh_cpu::{MeshError, MesherMode, StructureMeshCPU, build_structure_mesh_cpu};

mod ship;
mod shipgen;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum ModeArg {
    Simple,
    Greedy,
    Compare,
}

#[derive(Parser, Debug)]
#[command(name = "keel", about = "CPU mesher for voxel block structures")]
struct Cli {
    /// Mesher to run; `compare` runs both and reports the reduction.
    #[arg(long, value_enum, default_value_t = ModeArg::Compare)]
    mode: ModeArg,

    /// Scale of the generated demo ship.
    #[arg(long, default_value_t = 8)]
    size: u32,

    /// Ship layout TOML; replaces the generated demo ship.
    #[arg(long)]
    ship: Option<PathBuf>,

    /// Material catalog overrides TOML.
    #[arg(long)]
    materials: Option<PathBuf>,

    /// Material tier of the generated ship.
    #[arg(long, default_value = "titanium")]
    tier: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut logs = env_logger::Builder::new();
    logs.filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();
    let cli = Cli::parse();

    let catalog = match &cli.materials {
        Some(path) => MaterialCatalog::from_path(path)?,
        None => MaterialCatalog::default(),
    };
    let tier = MaterialTier::from_key(&cli.tier)
        .ok_or_else(|| format!("unknown material tier '{}'", cli.tier))?;

    let mut structure = match &cli.ship {
        Some(path) => ship::load_structure(path, &catalog)?,
        None => shipgen::demo_ship(cli.size, tier, &catalog),
    };
    log::info!(
        "structure {}: {} blocks, {:.1} mass",
        structure.id,
        structure.len(),
        structure.total_mass()
    );

    let blocks = structure.live_blocks();
    match cli.mode {
        ModeArg::Simple => {
            run_mesher(&blocks, MesherMode::Simple)?;
        }
        ModeArg::Greedy => {
            run_mesher(&blocks, MesherMode::Greedy)?;
        }
        ModeArg::Compare => {
            let simple = run_mesher(&blocks, MesherMode::Simple)?;
            let greedy = run_mesher(&blocks, MesherMode::Greedy)?;
            let (st, gt) = (simple.stats().triangles, greedy.stats().triangles);
            if st > 0 {
                log::info!(
                    "greedy kept {} of {} triangles ({:.1}%)",
                    gt,
                    st,
                    100.0 * gt as f64 / st as f64
                );
            }
        }
    }
    structure.mark_built(structure.dirty_rev);
    log::debug!(
        "structure {} built at rev {}",
        structure.id,
        structure.built_rev
    );
    Ok(())
}

fn run_mesher(blocks: &[Block], mode: MesherMode) -> Result<StructureMeshCPU, MeshError> {
    let t0 = Instant::now();
    let mesh = build_structure_mesh_cpu(blocks, mode)?;
    let ms = t0.elapsed().as_secs_f64() * 1000.0;
    let stats = mesh.stats();
    let ext = mesh.bbox.extent();
    log::info!(
        target: "perf",
        "mode={:?} ms={:.2} verts={} idx={} tris={} bbox={:.0}x{:.0}x{:.0}",
        mode,
        ms,
        stats.vertices,
        stats.indices,
        stats.triangles,
        ext.x,
        ext.y,
        ext.z
    );
    Ok(mesh)
}
