use std::error::Error;
use std::fs;
use std::path::Path;

use colored::*;
use csv::Writer;
use serde::Serialize;
use tracing::{info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::GaConfig;
use crate::domain::individual::Individual;
use crate::domain::types::{CostBreakdown, Point};
use crate::fixtures::data_generator::load_points;

use super::session::GaSession;

/// Initialize tracing
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
                .pretty(),
        )
        .init();
}

/// Best route as written to disk.
#[derive(Debug, Serialize)]
struct BestRouteReport<'a> {
    generation: usize,
    route: &'a [usize],
    fitness: f64,
    cost: &'a CostBreakdown,
    stops: Vec<&'a Point>,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let config = GaConfig::from_env()?;

    let mut session = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        match &config.points_file {
            Some(path) => GaSession::with_points(config.settings.clone(), load_points(path)?)?,
            None => GaSession::new(config.settings.clone())?,
        }
    };

    info!("INITIAL BEST:");
    print_individual(session.best_individual());

    {
        let loop_span = span!(
            Level::INFO,
            "main_evolution_loop",
            total_generations = session.settings().num_generations
        );
        let _loop_guard = loop_span.enter();
        session.run_to_completion()?;
    }

    report_final_stats(&session);

    save_to_csv(
        session.best_fitness_history(),
        session.average_fitness_history(),
        &config.history_csv,
    )?;
    save_best_route(&session, &config.best_route_json)?;

    Ok(())
}

fn report_final_stats(session: &GaSession) {
    let best = session.best_individual();
    let population = session.population();

    info!(
        "Evolution complete after {} generations",
        session.generation()
    );
    info!("Average fitness: {:.6}", population.get_average_fitness());
    if let Some(second) = population.get_second_best() {
        info!(
            "Runner-up: fitness = {:.6}, cost = {:.2}",
            second.fitness(),
            second.cost().total()
        );
    }

    println!("{}", "FINAL ANSWER".bold());
    print_individual(best);
}

fn print_individual(individual: &Individual) {
    let cost = individual.cost();

    if cost.penalty() > 0.0 {
        warn!(
            "Distance: {:.2}, Fitness: {:.6}, Penalty: {:.2}",
            cost.distance,
            individual.fitness(),
            cost.penalty()
        );
        println!(
            "Distance: {:.2}, {}",
            cost.distance,
            format!(
                "Fitness: {:.6}, Penalty: {:.2}",
                individual.fitness(),
                cost.penalty()
            )
            .red()
        );
    } else {
        info!(
            "Distance: {:.2}, Fitness: {:.6}, Penalty: {:.2}",
            cost.distance,
            individual.fitness(),
            cost.penalty()
        );
        println!(
            "{} , {}",
            format!("Distance: {:.2}", cost.distance).green(),
            format!(
                "Fitness: {:.6}, Penalty: {:.2}",
                individual.fitness(),
                cost.penalty()
            )
        );
    }
    println!("Route: {:?}", individual.route());
}

fn save_to_csv(
    best_fitness_history: &[f64],
    avg_fitness_history: &[f64],
    filename: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["generation", "best_fitness", "average_fitness"])?;

    for (generation, (best, average)) in best_fitness_history
        .iter()
        .zip(avg_fitness_history)
        .enumerate()
    {
        wtr.write_record([
            (generation + 1).to_string(),
            best.to_string(),
            average.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!("Fitness history written to {}", filename.display());
    Ok(())
}

fn save_best_route(session: &GaSession, filename: &Path) -> Result<(), Box<dyn Error>> {
    let best = session.best_individual();
    let points = session.points();
    let report = BestRouteReport {
        generation: session.generation(),
        route: best.route(),
        fitness: best.fitness(),
        cost: best.cost(),
        stops: best.route().iter().map(|&i| &points[i]).collect(),
    };

    fs::write(filename, serde_json::to_string_pretty(&report)?)?;
    info!("Best route written to {}", filename.display());
    Ok(())
}
