// File: crates/stream-demo/src/main.rs
// Summary: Windowed demo; a worker thread computes sine samples and marshals them to the UI thread over a channel.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use oscillo_assets::{app_icons, IconVariant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_SAMPLES: usize = 2048;
const BATCH: usize = 32;
const CYCLES: f64 = 4.0;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Arg: total sample count
    let samples = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_SAMPLES);

    let (tx, rx) = mpsc::channel::<Vec<[f64; 2]>>();
    thread::spawn(move || {
        let n = samples.max(2);
        let step = CYCLES * std::f64::consts::TAU / (n - 1) as f64;
        let mut batch = Vec::with_capacity(BATCH);
        for i in 0..n {
            let x = i as f64 * step;
            batch.push([x, x.sin()]);
            if batch.len() == BATCH {
                if tx.send(std::mem::take(&mut batch)).is_err() {
                    // Window closed; nobody is listening anymore.
                    return;
                }
                thread::sleep(Duration::from_millis(30));
            }
        }
        let _ = tx.send(batch);
        info!(samples = n, "worker finished");
    });

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1024.0, 640.0]);
    match app_icons().get(IconVariant::White) {
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
        "Oscillo — Stream Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(StreamDemo::new(rx)))),
    )
}

struct StreamDemo {
    rx: Receiver<Vec<[f64; 2]>>,
    points: Vec<[f64; 2]>,
}

impl StreamDemo {
    fn new(rx: Receiver<Vec<[f64; 2]>>) -> Self {
        Self {
            rx,
            points: Vec::new(),
        }
    }
}

impl eframe::App for StreamDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain whatever the worker produced since the last frame.
        for batch in self.rx.try_iter() {
            self.points.extend(batch);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!("{} samples", self.points.len()));
            Plot::new("stream")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(PlotPoints::from(self.points.clone()))
                            .name("sin")
                            .color(Color32::from_rgb(64, 160, 255))
                            .width(2.0),
                    );
                });
        });

        // Keep polling the channel while the worker is still producing.
        ctx.request_repaint_after(Duration::from_millis(30));
    }
}
