//! Ring election demo.
//!
//! Builds a ring, replays an action script, and prints the causal
//! trace as JSON together with the final leader set.

use clap::Parser;
use rehearse_core::ProtocolNode;
use rehearse_election::{ring, ElectionNode};
use rehearse_engine::{EngineError, Run};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ring-demo")]
#[command(about = "Deterministic replay of the ring election fixture")]
#[command(version)]
struct Cli {
    /// Node ids, in ring order (adjacency wraps)
    #[arg(long, value_delimiter = ',', default_value = "0,1,2")]
    nodes: Vec<u64>,

    /// Action script lines, in delivery order
    #[arg(
        long = "action",
        default_values_t = [
            "1: HandlePetition".to_string(),
            "0: HandleVote".to_string(),
            "2: HandlePetition".to_string(),
            "1: HandleVote".to_string(),
        ]
    )]
    actions: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = replay(&cli) {
        eprintln!("replay failed: {err}");
        std::process::exit(1);
    }
}

fn replay(cli: &Cli) -> Result<(), EngineError> {
    let mut run: Run<ElectionNode> = Run::new(ring(&cli.nodes))?;
    run.initialize_all()?;
    run.execute(&cli.actions)?;

    let snapshot = run.snapshot();
    match snapshot.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot export failed: {err}"),
    }

    for node in run.nodes() {
        println!("node {} is leader: {}", node.id(), node.is_leader());
    }
    Ok(())
}
