// File: crates/wave-demo/src/main.rs
// Summary: Windowed demo; generates sine/cosine samples and adds two line series to an egui_plot surface.

use std::sync::Arc;

use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use oscillo_assets::{app_icons, IconVariant};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const DEFAULT_SAMPLES: usize = 512;
const CYCLES: f64 = 2.0;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Arg: sample count
    let samples = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_SAMPLES);

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1024.0, 640.0]);
    match app_icons().get(IconVariant::Standard) {
        Ok(icon) => {
            viewport = viewport.with_icon(Arc::new(egui::IconData {
                rgba: icon.as_raw().clone(),
                width: icon.width(),
                height: icon.height(),
            }));
        }
        // A missing icon is cosmetic; the window opens without custom chrome.
        Err(err) => warn!(%err, "window icon unavailable"),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Oscillo — Wave Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(WaveDemo::new(samples)))),
    )
}

struct WaveDemo {
    sine: Vec<[f64; 2]>,
    cosine: Vec<[f64; 2]>,
}

impl WaveDemo {
    fn new(samples: usize) -> Self {
        Self {
            sine: sample_wave(samples, f64::sin),
            cosine: sample_wave(samples, f64::cos),
        }
    }
}

/// `samples` points of `f` over `CYCLES` full periods.
fn sample_wave(samples: usize, f: fn(f64) -> f64) -> Vec<[f64; 2]> {
    let n = samples.max(2);
    let step = CYCLES * std::f64::consts::TAU / (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = i as f64 * step;
            [x, f(x)]
        })
        .collect()
}

impl eframe::App for WaveDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("waves")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::from(self.sine.clone()))
                            .name("sin")
                            .color(Color32::from_rgb(64, 160, 255))
                            .width(2.0),
                    );
                    plot_ui.line(
                        Line::new(PlotPoints::from(self.cosine.clone()))
                            .name("cos")
                            .color(Color32::from_rgb(40, 200, 120))
                            .width(2.0),
                    );
                });
        });
    }
}
