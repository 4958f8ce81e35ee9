//! Check command implementation
//!
//! Prints the resolved configuration and closed-form reference prices
//! without running a simulation.

use pricer_mc::analytical::{black_scholes_call, black_scholes_put};
use pricer_mc::mc::available_workers;
use pricer_mc::MonteCarloPricer;
use tracing::info;

use crate::config::PricerSettings;
use crate::Result;

/// Run the check command
pub fn run(settings: &PricerSettings) -> Result<()> {
    info!("Checking configuration...");

    let config = settings.to_simulation_config()?;
    let pricer = MonteCarloPricer::new(config)?;
    let plan = pricer.partition();
    let params = settings.params();

    let seed = settings
        .seed
        .map_or_else(|| "clock".to_string(), |s| s.to_string());

    println!("Logical CPUs:    {}", available_workers());
    println!("Workers:         {}", plan.workers());
    println!(
        "Paths:           {} requested, {} executed ({})",
        plan.requested(),
        plan.executed(),
        pricer.config().remainder()
    );
    println!("Seed:            {}", seed);
    println!("BS Call Price:   {:.6}", black_scholes_call(&params));
    println!("BS Put Price:    {:.6}", black_scholes_put(&params));

    info!("Configuration OK");
    Ok(())
}
