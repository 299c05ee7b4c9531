use std::{process::ExitCode, time::Instant};

use log::info;

use tourist_core::{
    Error, OutputStore, Result, TouristOptions, load_dataset, logging, solve_longest_tour,
    write_solution,
};

const EXIT_SETUP: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_setup() => {
            eprintln!("{err}");
            ExitCode::from(EXIT_SETUP)
        }
        Err(Error::InvalidInput(message)) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let now = Instant::now();
    let options = TouristOptions::from_args()?;
    logging::init_logger(&options)?;
    let dataset = load_dataset(&options)?;

    info!("input: {dataset}");
    info!("options: {options}");

    let store = OutputStore::new();
    let solution = solve_longest_tour(&dataset, &options, &store)?;
    if !solution.has_tour() {
        eprintln!("No tour found from {}.", solution.start);
    }

    write_solution(&solution, &options)?;

    info!(
        "output: locations={} output_paths={} time={:.2}s",
        solution.tour.len(),
        solution.output_paths.len(),
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
