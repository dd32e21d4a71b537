use std::io;

use mc_pi::{available_workers, run, write_report, Result, RunConfig};

fn estimate_pi() -> Result<()> {
    let config = RunConfig::default();
    let num_workers = available_workers();

    let result = run(&config, num_workers)?;
    write_report(&mut io::stdout().lock(), &result)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = estimate_pi() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
