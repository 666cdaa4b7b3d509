use std::io::{self, BufRead, Write};

use hanger_solve::{Probe, StressOracle};
use uom::si::f64::Pressure;
use uom::si::length::millimeter;
use uom::si::pressure::megapascal;

/// Prompts the operator to run the external simulation for each candidate
/// geometry and reports back the stress they type in.
///
/// Non-numeric input re-prompts until a valid number arrives, so the solver
/// only ever sees valid measurements. End of input is an error and aborts
/// the run.
#[derive(Debug, Default)]
pub struct ConsoleOracle;

impl ConsoleOracle {
    pub fn new() -> Self {
        Self
    }
}

impl StressOracle for ConsoleOracle {
    type Error = io::Error;

    fn evaluate(&mut self, probe: &Probe) -> Result<Pressure, Self::Error> {
        println!("{}", "-".repeat(40));
        println!("Run the simulation with:");
        println!("  r = {:.4} mm", probe.radius.get::<millimeter>());
        println!("  D = {:.4} mm", probe.diameter.get::<millimeter>());

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("-> peak von Mises stress (MPa): ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a stress value was entered",
                ));
            }

            match line.trim().parse::<f64>() {
                Ok(value) => return Ok(Pressure::new::<megapascal>(value)),
                Err(_) => println!("Not a number, try again."),
            }
        }
    }
}
