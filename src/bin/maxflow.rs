use std::{
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, bail};
use capflow::{algo::*, gens::*, io::*, prelude::*};
use clap::Parser;
use itertools::Itertools;
use log::info;
use rand::{SeedableRng, rngs::StdRng};

/// maxflow - maximum (s, t)-flow via Dinic's algorithm
///
/// Reads a flow problem and prints the value of a maximum flow on the first line of stdout.
#[derive(Debug, Parser)]
#[command(name = "maxflow", version, about, long_about = None)]
struct Cli {
    /// Input file; reads from stdin if omitted.
    #[arg(value_name = "FILE", conflicts_with = "generate")]
    input: Option<PathBuf>,

    /// Input format: plain (`n m`, `m` triples `u v c`, `s t`; 0-based) or dimacs.
    #[arg(short, long, default_value = "plain")]
    format: FileFormat,

    /// Generate a random G(n,p) network with capacities in 0..=MAX_CAP instead of reading
    /// one. The source is 0, the sink is N - 1.
    #[arg(
        long,
        num_args = 4,
        value_names = ["N", "P", "MAX_CAP", "SEED"]
    )]
    generate: Option<Vec<String>>,

    /// Write the problem in the given format to stdout instead of solving it.
    #[arg(long, value_name = "FORMAT")]
    emit: Option<FileFormat>,

    /// Also print the source side and the edges of a minimum cut.
    #[arg(long)]
    cut: bool,

    /// Also print the flow on every edge in input order.
    #[arg(long)]
    flows: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("capflow", level)
        .filter_module("maxflow", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let mut problem = match &cli.generate {
        Some(args) => generate(args)?,
        None => read(&cli)?,
    };

    info!(
        "Network with {} nodes and {} edges, source {} and sink {}",
        problem.network.number_of_nodes(),
        problem.network.number_of_edges(),
        problem.source,
        problem.sink
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(format) = cli.emit {
        problem
            .try_write_to_writer(&mut out, format)
            .context("failed to write problem")?;
        return Ok(());
    }

    if cli.cut {
        let (flow, cut) = problem.solve_with_cut().context("failed to solve")?;
        writeln!(out, "{flow}")?;
        writeln!(out, "cut capacity {}", cut.capacity())?;
        writeln!(out, "source side {}", cut.source_side_nodes().join(" "))?;
        for &k in cut.edges() {
            let (u, v, c) = problem.network.edge(k);
            writeln!(out, "cut edge {u} {v} {c}")?;
        }
    } else {
        let flow = problem.solve().context("failed to solve")?;
        writeln!(out, "{flow}")?;
    }

    if cli.flows {
        for (u, v, f) in problem.network.edge_flows() {
            writeln!(out, "flow {u} {v} {f}")?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Reads the problem from the input file or stdin.
fn read(cli: &Cli) -> anyhow::Result<FlowProblem> {
    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(
            std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    FlowProblem::try_from_reader(reader, cli.format).with_context(|| match &cli.input {
        Some(path) => format!("failed to read {:?} problem from {}", cli.format, path.display()),
        None => format!("failed to read {:?} problem from stdin", cli.format),
    })
}

/// Builds a random problem from `N P MAX_CAP SEED`.
fn generate(args: &[String]) -> anyhow::Result<FlowProblem> {
    let [n, p, max_capacity, seed] = args else {
        bail!("--generate expects exactly four values");
    };

    let n: NumNodes = n.parse().context("N must be a non-negative integer")?;
    let p: f64 = p.parse().context("P must be a number")?;
    let max_capacity: i64 = max_capacity
        .parse()
        .context("MAX_CAP must be an integer")?;
    let seed: u64 = seed.parse().context("SEED must be a non-negative integer")?;

    if n < 2 {
        bail!("N must be at least 2");
    }
    if !(0.0..=1.0).contains(&p) {
        bail!("P must be in [0, 1]");
    }
    if max_capacity < 0 {
        bail!("MAX_CAP must be non-negative");
    }

    let rng = &mut StdRng::seed_from_u64(seed);
    let network = CapacitatedGnp::new()
        .nodes(n)
        .prob(p)
        .max_capacity(max_capacity)
        .build(rng)
        .context("generated network is invalid")?;

    Ok(FlowProblem::new(network, 0, n - 1))
}
