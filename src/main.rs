#[cfg(not(feature = "loom"))]
use {
    log::error,
    preflow::{
        config::{SolverConfig, DEFAULT_WORKERS},
        parse::{self, ParseError},
        solver::SolverError,
    },
    rustop::opts,
    std::{io, num::NonZeroUsize, process::ExitCode, time::Instant},
    thiserror::Error,
};

#[cfg(not(feature = "loom"))]
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error("worker count must be positive")]
    ZeroWorkers,
}

#[cfg(not(feature = "loom"))]
fn run(workers: usize) -> Result<(), CliError> {
    let workers = NonZeroUsize::new(workers).ok_or(CliError::ZeroWorkers)?;
    let started = Instant::now();
    let network = parse::read_instance(io::stdin().lock())?;
    let flow = network.max_flow(&SolverConfig::with_workers(workers))?;
    println!("t = {} s", started.elapsed().as_secs_f64());
    println!("f = {flow}");
    Ok(())
}

#[cfg(not(feature = "loom"))]
fn main() -> ExitCode {
    env_logger::init();
    let (args, _) = opts! {
        synopsis "Compute the maximum flow of a network read from stdin with parallel push-relabel.";
        opt workers: usize = DEFAULT_WORKERS, desc: "Number of worker threads in the pool.";
    }
    .parse_or_exit();

    match run(args.workers) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

// The CLI cannot run under the loom model; give the target an empty entry
// point so `--features loom` still builds the whole package.
#[cfg(feature = "loom")]
fn main() {}
