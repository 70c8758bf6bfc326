mod network;
mod render;
mod routing;
mod siginjai;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use crate::network::definition::NetworkDefinition;
use crate::render::{MapLayout, RouteMapSvg};
use crate::routing::{RoutingError, shortest_route};

#[derive(Parser)]
#[command(
    name = "transit-route-map",
    about = "Shortest-route planner and map renderer for small transit networks"
)]
struct Cli {
    /// Departure stop name
    #[arg(long, default_value = siginjai::DEFAULT_SOURCE)]
    from: String,

    /// Destination stop name
    #[arg(long, default_value = siginjai::DEFAULT_TARGET)]
    to: String,

    /// Network definition JSON file (defaults to the built-in Trans Siginjai network)
    #[arg(long)]
    network: Option<PathBuf>,

    /// Where to write the rendered map
    #[arg(long, default_value = "route_map.png")]
    output: PathBuf,

    /// List the stops of the network and exit
    #[arg(long)]
    list_stops: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let definition = match &cli.network {
        Some(path) => NetworkDefinition::load(path)?,
        None => siginjai::SIGINJAI.clone(),
    };
    let graph = definition.build()?;

    if cli.list_stops {
        for name in graph.stop_names() {
            println!("{name}");
        }
        return Ok(());
    }

    info!(
        "finding shortest route from '{}' to '{}' on {} ({} stops, {} segments)",
        cli.from,
        cli.to,
        definition.name,
        graph.stop_count(),
        graph.segment_count()
    );

    let route = match shortest_route(&graph, &cli.from, &cli.to) {
        Ok(route) => route,
        Err(RoutingError::NoRoute { origin, target }) => {
            // Not a crash: an unreachable destination is a user-level answer.
            println!("No route connects {origin} and {target}.");
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let line = "=".repeat(40);
    println!("{line}");
    println!("Recommended route ({})", definition.name);
    println!("{line}");
    println!("Route    : {route}");
    println!(
        "Distance : {} m ({} km)",
        route.total_distance_m,
        route.total_distance_km()
    );
    println!("{line}");

    let layout = MapLayout::from_definition(&definition);
    let title = format!("{} Route Map (meters)", definition.name);
    let svg = RouteMapSvg::new(&graph, &layout)
        .with_title(title)
        .with_route(&route)
        .to_svg()?;
    render::write_png(&svg, &cli.output)?;
    println!("Saved map to {}", cli.output.display());

    Ok(())
}
