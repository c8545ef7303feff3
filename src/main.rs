// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::time::Instant;

use clap::{Parser, ValueEnum};
use knapsack_bnb::*;

/// Solves a binary knapsack instance to optimality with branch and bound
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the instance file (.json or plain text)
    fname: String,
    /// The maximum number of nodes to process
    #[clap(short, long, default_value_t = DEFAULT_ITERATION_LIMIT)]
    iterations: usize,
    /// The order in which the nodes are explored
    #[clap(short, long, value_enum, default_value_t = Ranking::Best)]
    ranking: Ranking,
    /// How fractional nodes are split
    #[clap(short, long, value_enum, default_value_t = Branching::First)]
    branching: Branching,
    /// The primal heuristic used on fractional nodes
    #[clap(long, value_enum, default_value_t = Heuristic::Greedy)]
    heuristic: Heuristic,
    /// Increase the verbosity (-v: progress table, -vv: every node)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Ranking {
    Best,
    Depth,
    Breadth,
}
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Branching {
    First,
    Most,
}
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Heuristic {
    None,
    Greedy,
}

fn frontier<'a>(ranking: Ranking) -> Box<dyn Frontier<'a> + 'a> {
    match ranking {
        Ranking::Best => Box::new(SimpleFrontier::new(BestBound)),
        Ranking::Depth => Box::new(SimpleFrontier::new(DepthFirst)),
        Ranking::Breadth => Box::new(SimpleFrontier::new(BreadthFirst)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let instance = io_utils::read_instance(&args.fname)?;
    let relaxation = GreedyRelaxation;
    let branching: &dyn BranchingStrategy = match args.branching {
        Branching::First => &FirstFractional,
        Branching::Most => &MostFractional,
    };
    let heuristics: &dyn Heuristics = match args.heuristic {
        Heuristic::None => &NoHeuristic,
        Heuristic::Greedy => &GreedyCompletion,
    };
    let mut frontier = frontier(args.ranking);
    let config = SearchConfigBuilder::default()
        .iteration_limit(args.iterations)
        .build()?;

    let mut solver = BnBSearch::new(&instance, &relaxation, frontier.as_mut(), branching, heuristics)
        .with_config(config)
        .with_observer(ProgressTracker::new());

    let start = Instant::now();
    let Completion { is_exact, best_value } = solver.maximize()?;
    let duration = start.elapsed();

    let best_solution = solver.best_solution()
        .map(|s| s.packed_items().collect::<Vec<_>>())
        .unwrap_or_default();

    println!("Duration:   {:.3} seconds \nObjective:  {}\nUpper Bnd:  {}\nLower Bnd:  {}\nGap:        {:.3}\nAborted:    {}\nSolution:   {:?}\nStatistics: {}",
            duration.as_secs_f32(),
            best_value.map_or("-".to_string(), |v| v.to_string()),
            solver.best_upper_bound(),
            solver.best_lower_bound(),
            solver.gap(),
            !is_exact,
            best_solution,
            solver.statistics());
    Ok(())
}
