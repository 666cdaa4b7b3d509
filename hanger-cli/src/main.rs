//! Interactive golden-section stress optimizer for hanger brackets.
//!
//! The operator supplies the fixed geometry on the command line, then runs
//! one external finite-element simulation per prompt and types the measured
//! peak stress back in. When the search converges the evaluated points are
//! printed as a table, written to CSV, and optionally charted.

mod oracle;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hanger_model::HangerGeometry;
use hanger_solve::golden_section::{self, Config, Event};
use uom::si::{
    f64::{Length, Mass, MassDensity},
    length::millimeter,
    mass::kilogram,
    mass_density::gram_per_cubic_centimeter,
};

use oracle::ConsoleOracle;

/// Density of structural steel, in g/cm³.
const STEEL_DENSITY: f64 = 7.85;

#[derive(Parser, Debug)]
#[command(
    name = "hanger-cli",
    version,
    about = "Search for the hanger bend radius that minimizes peak stress"
)]
struct Cli {
    /// Horizontal arm length b, in mm.
    #[arg(long)]
    arm: f64,

    /// Vertical arm length h, in mm.
    #[arg(long)]
    height: f64,

    /// Total bracket mass, in kg.
    #[arg(long)]
    mass: f64,

    /// Interval width at which the search stops, in mm.
    #[arg(long, default_value_t = 50.0)]
    tolerance: f64,

    /// Path for the CSV trace; derived from the inputs when omitted.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Open an interactive chart of the results after convergence.
    #[arg(long, default_value_t = false)]
    plot: bool,
}

impl Cli {
    fn default_output(&self) -> PathBuf {
        PathBuf::from(format!(
            "gss_results_m{}kg_b{}mm_h{}mm.csv",
            self.mass, self.arm, self.height
        ))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let geometry = HangerGeometry::from_mass(
        Length::new::<millimeter>(cli.arm),
        Length::new::<millimeter>(cli.height),
        Mass::new::<kilogram>(cli.mass),
        MassDensity::new::<gram_per_cubic_centimeter>(STEEL_DENSITY),
    )
    .context("invalid bracket geometry")?;

    println!("Fixed geometry: {geometry}");
    println!("Stopping once the radius interval is narrower than {} mm.", cli.tolerance);
    println!("The first two prompts seed the search; each later iteration needs one more.");

    let config = Config {
        tolerance: Length::new::<millimeter>(cli.tolerance),
        ..Config::default()
    };

    let mut oracle = ConsoleOracle::new();
    let observer = |event: &Event<'_>| report::print_progress(event);

    let solution = golden_section::minimize(&geometry, &mut oracle, &config, observer)
        .context("search failed")?;

    report::print_table(&solution);

    let output = cli.output.clone().unwrap_or_else(|| cli.default_output());
    report::write_csv(&output, &solution)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Results written to {}", output.display());

    if cli.plot {
        report::show_plot(&solution)?;
    }

    Ok(())
}
