//! Price command implementation
//!
//! Runs the parallel Monte Carlo simulation and prints the result.

use std::time::Instant;

use pricer_mc::analytical::{black_scholes_call, black_scholes_put};
use pricer_mc::MonteCarloPricer;
use tracing::info;

use crate::config::PricerSettings;
use crate::output;
use crate::Result;

/// Run the price command
pub fn run(settings: &PricerSettings) -> Result<()> {
    let start = Instant::now();

    let config = settings.to_simulation_config()?;
    info!(
        spot = settings.spot,
        strike = settings.strike,
        rate = settings.rate,
        volatility = settings.volatility,
        maturity = settings.maturity,
        paths = config.path_count(),
        workers = config.worker_count(),
        "Starting pricing"
    );

    let result = MonteCarloPricer::new(config)?.run()?;
    let elapsed = start.elapsed().as_secs_f64();

    let params = settings.params();
    info!(
        seed = result.seed,
        paths_executed = result.paths_executed,
        call_se = result.call_std_error,
        put_se = result.put_std_error,
        bs_call = black_scholes_call(&params),
        bs_put = black_scholes_put(&params),
        "Pricing complete"
    );

    print!("{}", output::render(settings.format, &result, elapsed)?);
    Ok(())
}
