// Demonstration: run several generations of the hive-mind search and print
// the final map and aggregated metrics.
//
// Build/run from this repo root:
//   cargo run --example hive_mind -- --generations 20 --agents 5 --seed 42

use std::env;

use hivemind::simulation::GenerationMetrics;
use hivemind::{DirectionScorer, SimConfig, Simulation};

fn main() {
    let args: Vec<String> = env::args().collect();
    let defaults = SimConfig::default();
    let generations: usize = arg_value(&args, "--generations")
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    let config = SimConfig {
        n_agents: arg_value(&args, "--agents")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.n_agents),
        max_steps: arg_value(&args, "--max-steps")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_steps),
        seed: arg_value(&args, "--seed")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed),
        ..defaults
    };

    let mut sim = match Simulation::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    println!("**********************************************");
    println!("COLLECTIVE ARTIFICIAL INTELLIGENCE : HIVE MIND");
    println!("**********************************************\n");

    println!(
        "Scorer: {} {:?}\n",
        sim.network().name(),
        sim.network().topology()
    );

    let mut reports = Vec::with_capacity(generations);
    for _ in 0..generations {
        match sim.run_generation() {
            Ok(report) => {
                let status = if report.outcome.is_converged() {
                    "gathered"
                } else {
                    "timed out"
                };
                println!(
                    "Generation {:>3}: {} after {} steps ({} training examples)",
                    report.generation,
                    status,
                    report.outcome.steps(),
                    report.examples
                );
                reports.push(report);
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    println!("\nFinal map:\n{}", sim.grid());
    println!("{}", GenerationMetrics::from_reports(reports));
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
