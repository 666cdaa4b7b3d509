use std::path::Path;

use hanger_plot::SweepPlot;
use hanger_solve::golden_section::{EvaluatedPoint, Event, Solution};
use serde::Serialize;
use uom::si::length::millimeter;
use uom::si::pressure::megapascal;

/// One CSV row, in the units named by the headers.
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "r (mm)")]
    radius: String,
    #[serde(rename = "D (mm)")]
    diameter: String,
    #[serde(rename = "Stress (MPa)")]
    stress: String,
}

impl From<&EvaluatedPoint> for CsvRow {
    fn from(point: &EvaluatedPoint) -> Self {
        Self {
            radius: format!("{:.4}", point.radius.get::<millimeter>()),
            diameter: format!("{:.4}", point.diameter.get::<millimeter>()),
            stress: format!("{:.4}", point.stress.get::<megapascal>()),
        }
    }
}

/// Prints a progress line for each oracle evaluation.
pub fn print_progress(event: &Event<'_>) {
    match event {
        Event::Seed { point } => {
            println!(
                "Seeded r = {:.4} mm -> {:.4} MPa",
                point.radius.get::<millimeter>(),
                point.stress.get::<megapascal>()
            );
        }
        Event::Step {
            iteration,
            interval,
            point,
        } => {
            println!(
                "Iteration {iteration}: r in [{:.4}, {:.4}] mm (width {:.4} mm), probed r = {:.4} mm -> {:.4} MPa",
                interval.lower().get::<millimeter>(),
                interval.upper().get::<millimeter>(),
                interval.width().get::<millimeter>(),
                point.radius.get::<millimeter>(),
                point.stress.get::<megapascal>()
            );
        }
    }
}

/// Prints the evaluated points ascending by radius, then the optimum.
pub fn print_table(solution: &Solution) {
    println!();
    println!("--- Evaluated points (ascending r) ---");
    println!(
        "{:<4} | {:>12} | {:>12} | {:>15}",
        "#", "r (mm)", "D (mm)", "Stress (MPa)"
    );
    println!("{}", "-".repeat(51));
    for (index, point) in solution.points.iter().enumerate() {
        println!(
            "{:<4} | {:>12.4} | {:>12.4} | {:>15.4}",
            index + 1,
            point.radius.get::<millimeter>(),
            point.diameter.get::<millimeter>(),
            point.stress.get::<megapascal>()
        );
    }

    println!();
    println!("--- Optimum ---");
    println!("r = {:.4} mm", solution.best.radius.get::<millimeter>());
    println!("D = {:.4} mm", solution.best.diameter.get::<millimeter>());
    println!(
        "peak stress = {:.4} MPa ({} oracle evaluations)",
        solution.best.stress.get::<megapascal>(),
        solution.oracle_calls
    );
}

/// Writes the evaluated points to a CSV file.
pub fn write_csv(path: &Path, solution: &Solution) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in &solution.points {
        writer.serialize(CsvRow::from(point))?;
    }
    writer.flush()?;

    Ok(())
}

/// Opens an interactive two-series chart with the optimum highlighted.
pub fn show_plot(solution: &Solution) -> anyhow::Result<()> {
    let stress: Vec<[f64; 2]> = solution
        .points
        .iter()
        .map(|p| [p.radius.get::<millimeter>(), p.stress.get::<megapascal>()])
        .collect();
    let diameter: Vec<[f64; 2]> = solution
        .points
        .iter()
        .map(|p| [p.radius.get::<millimeter>(), p.diameter.get::<millimeter>()])
        .collect();
    let best = [
        solution.best.radius.get::<millimeter>(),
        solution.best.stress.get::<megapascal>(),
    ];

    SweepPlot::new()
        .add_series("Max stress (MPa)", &stress)
        .add_series("Diameter (mm)", &diameter)
        .highlight("Optimum", best)
        .run("Hanger radius sweep")
        .map_err(|err| anyhow::anyhow!("failed to open chart: {err}"))
}
