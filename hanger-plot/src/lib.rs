use eframe::egui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoint, Points};

/// A runnable egui application for charting a parameter sweep.
///
/// Line series share the x axis (the swept parameter); a single point can be
/// highlighted on top of them, which the sweep uses to mark the optimum.
#[derive(Default)]
pub struct SweepPlot {
    series: Vec<Series>,
    highlight: Option<Highlight>,
}

struct Series {
    name: String,
    points: Vec<PlotPoint>,
}

struct Highlight {
    name: String,
    point: PlotPoint,
}

impl SweepPlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.iter().copied().map(Into::into).collect(),
        });

        self
    }

    /// Marks a single point, drawn as a filled diamond above the series.
    #[must_use]
    pub fn highlight(mut self, name: &str, point: [f64; 2]) -> Self {
        self.highlight = Some(Highlight {
            name: name.to_string(),
            point: point.into(),
        });

        self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for SweepPlot {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("sweep-plot")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for series in &self.series {
                        let points = series.points.as_slice();
                        let name = &series.name;

                        plot_ui.line(Line::new(points).name(name));
                    }

                    if let Some(highlight) = &self.highlight {
                        plot_ui.points(
                            Points::new(std::slice::from_ref(&highlight.point))
                                .name(&highlight.name)
                                .shape(MarkerShape::Diamond)
                                .filled(true)
                                .radius(6.0),
                        );
                    }
                });
        });
    }
}
