use clap::Parser;
use colored::Colorize;
use lem_in::colony::parse_anthill;
use lem_in::prelude::*;
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "ERROR:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut hill = parse_anthill(&args.map)?;
    if let Some(ants) = args.ants {
        hill.ants = ants;
    }

    let started = Instant::now();
    let plan = plan_anthill(&hill)?;
    let planning_time = started.elapsed();

    if args.show_routes {
        print_routes(&hill, &plan);
    }
    for line in plan.lines(&hill.colony) {
        println!("{}", line);
    }
    if !args.no_summary {
        print_summary(&plan, planning_time);
    }

    Ok(())
}

/// Print each selected route with the ants bound to it
fn print_routes(hill: &Anthill, plan: &Plan) {
    for (route, ants) in plan.routes.iter().zip(plan.ants_per_route()) {
        println!(
            "{} {}",
            format!("[{} ants]", ants).yellow(),
            route.describe(&hill.colony)
        );
    }
    println!();
}

/// Print planning summary
fn print_summary(plan: &Plan, planning_time: Duration) {
    let shortest = plan.shortest.as_ref().map_or(0, Route::hops);
    println!(
        "\n{}\n{} {:.3} ms {} {} {} {} {}",
        "===".bright_blue().bold(),
        "⏱️  Planning Latency:".green().bold(),
        planning_time.as_secs_f64() * 1000.0,
        "|".dimmed(),
        format!("ants={}", plan.ant_count()).cyan(),
        format!("routes={}", plan.routes.len()).cyan(),
        format!("turns={}", plan.turn_count()).cyan(),
        format!("shortest={}", shortest).cyan(),
    );
}
