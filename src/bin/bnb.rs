//! Binary that reads a graph given as adjacency lists, searches a minimum vertex cover by branch
//! and bound within a time limit and writes the `.sol` and `.trace` files.

use std::error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, info, LevelFilter};
use structopt::StructOpt;

use branch_and_cover::{graph::DyUGraph, harness, logger, cust_error::ProcessingError};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bnb",
    about = "Computes a minimum vertex cover by branch and bound."
)]
struct Opt {
    /// Input graph: a `<n> <m> <weighted>` header followed by one adjacency line per vertex.
    #[structopt(long, parse(from_os_str))]
    inst: PathBuf,

    /// Name of the algorithm, only used to name the output files.
    #[structopt(long, default_value = "BnB")]
    alg: String,

    /// Cutoff in seconds.
    #[structopt(long)]
    time: f64,

    /// Random seed. The search is deterministic and ignores it.
    #[structopt(long)]
    seed: Option<u64>,

    /// Directory for the `.sol` and `.trace` files.
    #[structopt(long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,

    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let opt = Opt::from_args();
    logger::build_logger_for_level(opt.log_level);
    if let Some(seed) = opt.seed {
        debug!("Ignoring seed {}", seed);
    }
    if !opt.time.is_finite() || opt.time < 0.0 {
        return Err(ProcessingError::InvalidParameter(
                format!("cutoff has to be a non-negative number of seconds, got {}", opt.time)).into());
    }

    let cutoff = Duration::try_from_secs_f64(opt.time).unwrap_or(Duration::MAX);

    let graph = DyUGraph::read_adj(BufReader::new(File::open(&opt.inst)?))?;
    info!("Read {} vertices and {} edges", graph.num_nodes(), graph.num_edges());

    let solution = harness::solve(&graph, cutoff)?;
    info!("Finished ({:?}) with a cover of size {}", solution.termination, solution.cover.len());

    let (sol_path, trace_path) = harness::output_paths(&opt.output_dir, &opt.inst, &opt.alg, opt.time);
    let mut sol = BufWriter::new(File::create(sol_path)?);
    solution.write_solution(&mut sol)?;
    sol.flush()?;
    let mut trace = BufWriter::new(File::create(trace_path)?);
    solution.write_trace(&mut trace)?;
    trace.flush()?;
    Ok(())
}
