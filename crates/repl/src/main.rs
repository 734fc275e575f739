//! Interactive shell to query routes on a graph loaded from csv files
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::ProgressBar;
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use ucs_core::{
    constants::VertexId,
    graph::Graph,
    search::{path::Path as Route, uniform_cost::UniformCostSearch},
    service::RouteService,
    statistics::{average_in_degree, average_out_degree, max_out_degree},
};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let g = context.service.graph();
    Ok(Some(format!(
        "{}\nAverage out degree: {:.2}, average in degree: {:.2}, max out degree: {}",
        g,
        average_out_degree(g),
        average_in_degree(g),
        max_out_degree(g)
    )))
}

fn format_route(route: &Route, g: &Graph) -> String {
    if !route.is_reachable() {
        return format!(
            "No path found\nGenerated: {}, Expanded: {}, Took: {:?}",
            route.nodes_generated, route.nodes_expanded, route.duration
        );
    }

    let mut out = String::new();
    for label in route.labels(g) {
        out.push_str(&format!("{}\n", label));
    }
    out.push_str(&format!("Costs: {}\n", route.weight));
    out.push_str(&format!(
        "Generated: {}, Expanded: {}, Took: {:?}",
        route.nodes_generated, route.nodes_expanded, route.duration
    ));
    out
}

fn run_ucs(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (Some(src), Some(dst)) = (
        args.get_one::<VertexId>("src"),
        args.get_one::<VertexId>("dst"),
    ) else {
        return Ok(Some("Source and destination are required".to_string()));
    };

    match context.service.route(*src, *dst) {
        Ok(route) => Ok(Some(format_route(&route, context.service.graph()))),
        Err(e) => Ok(Some(format!("Error: {}", e))),
    }
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let (Some(from), Some(to)) = (
        args.get_one::<String>("from"),
        args.get_one::<String>("to"),
    ) else {
        return Ok(Some("Origin and destination are required".to_string()));
    };

    match context.service.route_by_label(from, to) {
        Ok(route) => Ok(Some(format_route(&route, context.service.graph()))),
        Err(e) => Ok(Some(format!("Error: {}", e))),
    }
}

fn measure_ucs(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let g = context.service.graph();
    if g.is_empty() {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random start and end vertices
    let mut rng = rand::thread_rng();
    let pairs: Vec<_> = (0..n)
        .map(|_| {
            (
                ucs_core::graph::node_index(rng.gen_range(0..g.num_vertices())),
                ucs_core::graph::node_index(rng.gen_range(0..g.num_vertices())),
            )
        })
        .collect();

    let mut ucs = UniformCostSearch::new(g);
    let mut total = Duration::ZERO;
    let mut found = 0;
    let mut expanded = 0;

    let pb = ProgressBar::new(n as u64);
    for (src, dst) in pairs {
        pb.inc(1);
        let Ok(route) = ucs.search(src, dst) else {
            continue;
        };
        total += route.duration;
        expanded += route.nodes_expanded;
        if route.is_reachable() {
            found += 1;
        }
    }
    pb.finish_and_clear();

    Ok(Some(format!(
        "{} searches, {} paths found\nAverage: {:?}, {} nodes expanded",
        n,
        found,
        total.checked_div(n as u32).unwrap_or_default(),
        expanded.checked_div(n).unwrap_or_default()
    )))
}

struct Context {
    service: RouteService,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self {
            service: RouteService::new(graph),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [vertices, arcs] = args.as_slice() else {
        eprintln!("Usage: repl <vertices.csv> <arcs.csv>");
        std::process::exit(1);
    };
    let graph = match Graph::from_csv(Path::new(vertices), Path::new(arcs)) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to read graph: {:#}", e);
            std::process::exit(1);
        }
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query cheapest routes")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("ucs")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(VertexId))
                        .required(true)
                        .help("ID of source vertex"),
                )
                .arg(
                    Arg::new("dst")
                        .value_parser(value_parser!(VertexId))
                        .required(true)
                        .help("ID of destination vertex"),
                )
                .about("Calculate the cheapest path using the uniform cost search"),
            run_ucs,
        )
        .with_command(
            Command::new("route")
                .arg(Arg::new("from").required(true).help("Label of origin"))
                .arg(Arg::new("to").required(true).help("Label of destination"))
                .about("Calculate the cheapest path between two labeled vertices"),
            run_route,
        )
        .with_command(
            Command::new("ucsm")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random searches to run"),
                )
                .about("Measure `n` random uniform cost searches"),
            measure_ucs,
        );

    repl.run()
}
