//! CLI: network propagation by random walk with restart.
//!
//! Loads a graph from JSON, picks seeds (the `--seed` ids/names, or every viral
//! protein), runs one walk per seed (or one shared walk with `--multi-seed`),
//! and writes each annotated subnetwork to the output directory.
//!
//! Usage: `propagate [OPTIONS] <graph.json>`
//!
//! Set RUST_LOG=rwr_propagation=trace for per-step walk events.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rwr_propagation::graph_io::{
  load_graph, load_type_scores, output_file_name, save_graph, seed_tagged_file_name,
};
use rwr_propagation::seeds::{identify_seed_nodes, select_seed_nodes};
use rwr_propagation::{
  PropagationConfig, PropagationRun, SeedSet, propagate_each_seed, propagate_from_seeds,
};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const OUT_DIR: &str = ".propagation";
const TOP_NODES: usize = 5;

/// Propagate from seed nodes over an attributed graph.
#[derive(Parser, Debug)]
#[command(name = "propagate")]
#[command(
  after_help = r#"Environment variables (override --out-dir and --rng-seed when set):
  PROPAGATION_OUT_DIR    Directory for *_propagation.json output (default: .propagation).
  PROPAGATION_RNG_SEED   Seed for reproducible walks; seed i uses this value + i.

Examples:
  propagate network.json
  propagate --seed NS1 --seed NS3 --multi-seed --max-steps 150 network.json
  propagate --config propagation.json --rng-seed 42 network.json"#
)]
struct Args {
  /// JSON file with any PropagationConfig fields; flags override it.
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Seed node id or name; repeatable. Default: every viral protein.
  #[arg(long = "seed", value_name = "ID|NAME")]
  seeds: Vec<String>,

  /// One shared walk restarting at any seed instead of one walk per seed.
  #[arg(long)]
  multi_seed: bool,

  #[arg(long, value_name = "P")]
  restart_prob: Option<f64>,

  /// Cumulative score budget.
  #[arg(long, value_name = "SCORE")]
  max_score: Option<f64>,

  #[arg(long, value_name = "N")]
  max_steps: Option<usize>,

  /// Score for node types missing from the type score table.
  #[arg(long, value_name = "SCORE")]
  default_score: Option<f64>,

  /// JSON `{ "type": score }` table, merged over the config's table.
  #[arg(long, value_name = "FILE")]
  type_scores: Option<PathBuf>,

  /// Never step onto an already visited node.
  #[arg(long)]
  no_revisits: bool,

  /// Keep every node and edge in the output, not just the visited part.
  #[arg(long)]
  include_all_nodes: bool,

  /// Overridden by PROPAGATION_RNG_SEED if set.
  #[arg(long, value_name = "N")]
  rng_seed: Option<u64>,

  /// Overridden by PROPAGATION_OUT_DIR if set. Default: .propagation
  #[arg(long, value_name = "DIR", default_value = OUT_DIR)]
  out_dir: PathBuf,

  /// Path to the graph JSON file
  #[arg(value_name = "graph.json")]
  graph_path: PathBuf,
}

fn fail(msg: impl std::fmt::Display) -> ! {
  eprintln!("Error: {}", msg);
  process::exit(1);
}

fn build_config(args: &Args) -> Result<PropagationConfig, String> {
  let mut config = match &args.config {
    Some(path) => PropagationConfig::load(path)
      .map_err(|e| format!("reading config {}: {}", path.display(), e))?,
    None => PropagationConfig::default(),
  };
  if let Some(p) = args.restart_prob {
    config.restart_prob = p;
  }
  if let Some(s) = args.max_score {
    config.max_cumulative_score = s;
  }
  if let Some(n) = args.max_steps {
    config.max_steps = n;
  }
  if let Some(s) = args.default_score {
    config.default_score = s;
  }
  if let Some(path) = &args.type_scores {
    let table = load_type_scores(path)
      .map_err(|e| format!("reading type scores {}: {}", path.display(), e))?;
    config.type_score_dict.extend(table);
  }
  if args.no_revisits {
    config.allow_revisits = false;
  }
  if args.include_all_nodes {
    config.include_all_nodes = true;
  }
  Ok(config)
}

/// Picks the output path for `run`. A name already written by an earlier run
/// of this invocation gets the seed ids appended instead of being overwritten.
fn output_path(
  run: &PropagationRun,
  out_dir: &Path,
  written: &HashSet<PathBuf>,
) -> Result<PathBuf, std::io::Error> {
  let path = out_dir.join(output_file_name(&run.subnetwork.name));
  if !written.contains(&path) {
    return Ok(path);
  }
  let tagged = out_dir.join(seed_tagged_file_name(&run.subnetwork.name, run.seeds.as_slice()));
  if written.contains(&tagged) {
    return Err(std::io::Error::new(
      std::io::ErrorKind::AlreadyExists,
      format!("output {} already written by this run", tagged.display()),
    ));
  }
  Ok(tagged)
}

fn report(
  run: &PropagationRun,
  out_dir: &Path,
  written: &mut HashSet<PathBuf>,
) -> Result<PathBuf, std::io::Error> {
  let path = output_path(run, out_dir, written)?;
  save_graph(&path, &run.subnetwork)?;
  written.insert(path.clone());
  let stats = &run.result.walk_stats;
  println!("{}", run.subnetwork.name);
  println!("  Steps: {}", stats.steps);
  println!("  Restarts: {} ({} forced)", stats.restarts, stats.forced_restarts);
  println!("  Termination: {}", stats.termination_reason);
  println!("  Visited nodes: {}", run.result.visited_count());
  println!("  Elapsed: {:.3}s", run.elapsed.as_secs_f64());
  println!("  Top nodes:");
  for (id, weight) in run.result.top_nodes(TOP_NODES) {
    let name = run
      .subnetwork
      .node(id)
      .map(|n| n.display_name())
      .unwrap_or(id);
    println!("    {} ({}): {:.3}", name, id, weight);
  }
  println!("  Output: {}", path.display());
  Ok(path)
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  info!("propagate starting");
  let args = Args::parse();

  // Env vars override flags.
  let out_dir = env::var("PROPAGATION_OUT_DIR")
    .ok()
    .map(PathBuf::from)
    .unwrap_or_else(|| args.out_dir.clone());
  let rng_seed = match env::var("PROPAGATION_RNG_SEED") {
    Ok(v) => Some(
      v.parse::<u64>()
        .unwrap_or_else(|e| fail(format!("PROPAGATION_RNG_SEED {:?}: {}", v, e))),
    ),
    Err(_) => args.rng_seed,
  };
  info!(out_dir = %out_dir.display(), rng_seed = ?rng_seed, "options (env or flags)");

  let config = build_config(&args).unwrap_or_else(|e| fail(e));
  let options = config
    .into_options()
    .unwrap_or_else(|e| fail(format!("invalid parameters: {}", e)));

  let graph = load_graph(&args.graph_path)
    .unwrap_or_else(|e| fail(format!("reading {}: {}", args.graph_path.display(), e)));
  info!(
    nodes = graph.node_count(),
    edges = graph.edge_count(),
    directed = graph.directed,
    "graph loaded"
  );

  let seeds = if args.seeds.is_empty() {
    identify_seed_nodes(&graph)
  } else {
    select_seed_nodes(&graph, &args.seeds).unwrap_or_else(|e| fail(e))
  };
  if seeds.is_empty() {
    fail("no seed nodes found (pass --seed or mark nodes as viral)");
  }
  let seed_ids: Vec<String> = seeds.into_iter().map(|s| s.id).collect();

  let mut failed = false;
  let mut written = HashSet::new();
  if args.multi_seed {
    let seed_set = SeedSet::new(seed_ids).unwrap_or_else(|e| fail(e));
    let mut rng = match rng_seed {
      Some(s) => StdRng::seed_from_u64(s),
      None => StdRng::from_entropy(),
    };
    let run = propagate_from_seeds(&graph, &seed_set, &options, &mut rng)
      .unwrap_or_else(|e| fail(format!("propagation error: {}", e)));
    if let Err(e) = report(&run, &out_dir, &mut written) {
      fail(format!("writing output: {}", e));
    }
  } else {
    let runs = propagate_each_seed(Arc::new(graph), seed_ids, Arc::new(options), rng_seed).await;
    for (seed, outcome) in runs {
      match outcome {
        Ok(run) => {
          if let Err(e) = report(&run, &out_dir, &mut written) {
            eprintln!("Error writing output for {}: {}", seed, e);
            failed = true;
          }
        }
        Err(e) => {
          eprintln!("Propagation error for {}: {}", seed, e);
          failed = true;
        }
      }
    }
  }

  info!(failed, "propagate finished");
  if failed {
    process::exit(1);
  }
}
