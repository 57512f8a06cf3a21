use kshortest::algorithm::{Ranked, Yens};
use kshortest::utils::config::{Arguments, Config};
use kshortest::utils::{json, load_network, yaml};
use kshortest::Error;
use log::{debug, info};
use std::time::Instant;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args: Arguments = argh::from_env();
    let mut config = match &args.config {
        Some(path) => yaml::load_config(path)?,
        None       => Config::default(),
    };
    config.override_from_args(&args);
    debug!("{:?}", config);

    let mut network = load_network(&args.network)?;
    info!("loaded {} nodes and {} edges", network.node_count(), network.edge_count());
    debug!("network:\n{}", network);

    let yens = Yens::new(config.acceptance);
    let start = Instant::now();
    let ranked = yens.compute(&mut network, &args.source, &args.target,
                              config.k, &config.weight, config.all)?;
    let elapsed = start.elapsed().as_micros();

    if args.json {
        println!("{}", json::dump_ranked(&ranked)?);
    } else {
        show_results(&ranked);
    }
    info!("--- computing time: {} μs ---", elapsed);
    Ok(())
}

fn show_results(ranked: &Ranked<String>) {
    match ranked {
        Ranked::Kth { weight, path } => {
            println!("the last route weighs {}: {}", weight, path.join(" -> "));
        }
        Ranked::All { .. } => {
            for (kth, (weight, path)) in ranked.pairs().into_iter().enumerate() {
                println!("- route #{} weighing {}: {}", kth, weight, path.join(" -> "));
            }
        }
    }
}
