//! Runs Simon, Bernstein–Vazirani and Deutsch–Jozsa on small inputs
//!
//! ```text
//! RUST_LOG=debug cargo run -p qreg-sim --example oracle_algorithms [config.json]
//! ```

use std::env;
use std::error::Error;
use std::fs;

use log::info;
use qreg_gates::{cx, h};
use qreg_sim::algorithms::deutsch_jozsa::{self, Oracle};
use qreg_sim::algorithms::{bernstein_vazirani, simon};
use qreg_sim::{Program, Simulator, SimulatorConfig};

fn load_config() -> Result<SimulatorConfig, Box<dyn Error>> {
    match env::args().nth(1) {
        Some(path) => Ok(SimulatorConfig::from_json(&fs::read_to_string(path)?)?),
        None => Ok(SimulatorConfig::deterministic(2024)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::builder().format_timestamp_millis().try_init();

    let config = load_config()?;
    info!("config: {}", config.to_json_pretty()?);

    let secrets: [Vec<u8>; 3] = [vec![1, 1], vec![1, 0, 1], vec![0, 1, 1, 0]];
    for secret in secrets {
        let found = simon::find_secret(&secret, &config)?;
        println!("simon              s={:?} recovered={:?}", secret, found);
    }

    let hidden: Vec<u8> = vec![1, 0, 1, 1, 0, 1];
    let found = bernstein_vazirani::find_secret(&hidden, &config)?;
    println!("bernstein-vazirani a={:?} recovered={:?}", hidden, found);

    for oracle in [Oracle::Constant(1), Oracle::Balanced(vec![0, 1, 1, 0])] {
        let class = deutsch_jozsa::classify(&oracle, 4, &config)?;
        println!("deutsch-jozsa      {:?} -> {:?}", oracle, class);
    }

    let mut program = Program::new();
    program
        .gate("h 0", |reg| h(reg, 0))
        .gate("cx 0 1", |reg| cx(reg, 0, 1))
        .gate("cx 1 2", |reg| cx(reg, 1, 2));
    let result = Simulator::new(config)?.run(3, program)?;
    println!("ghz register       {}", result.register);
    for (bits, count) in result.counts.to_bitstring_counts(3) {
        println!("  {} {}", bits, count);
    }

    Ok(())
}
