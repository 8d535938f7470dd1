//! Viewer binary: fixed-rate tick driver plus square-per-cell renderer.
//!
//! The engine stays a pure function; this binary owns the one mutable
//! current-generation value and replaces it on every tick.

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use std::time::{Duration, Instant};

use sparse_life::sparselife::{LifeWorld, PATTERNS, WORLD_HEIGHT, WORLD_WIDTH, random_generation};

/// Side of one rendered cell square, in pixels.
const CELL_SIZE: f32 = 6.0;
/// Generations per second while running.
const TICK_RATE: u64 = 20;
const RANDOM_DENSITY: f64 = 0.33;

fn main() -> Result<(), eframe::Error> {
    let grid_px = [
        WORLD_WIDTH as f32 * CELL_SIZE,
        WORLD_HEIGHT as f32 * CELL_SIZE,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([grid_px[0] + 16.0, grid_px[1] + 120.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sparse Life",
        options,
        Box::new(|_cc| Box::new(LifeViewer::default())),
    )
}

struct LifeViewer {
    world: LifeWorld,
    running: bool,
    last_update: Instant,
    update_interval: Duration,
    selected_pattern: usize,
    live_color: Color32,
    background: Color32,
    random_seed: u64,
}

impl Default for LifeViewer {
    fn default() -> Self {
        Self {
            world: LifeWorld::from_cells(PATTERNS[0].generation()),
            running: true,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(1000 / TICK_RATE),
            selected_pattern: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            background: Color32::from_rgb(20, 20, 20),
            random_seed: 0x5EED,
        }
    }
}

impl eframe::App for LifeViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.running && self.last_update.elapsed() >= self.update_interval {
            self.world.step();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.running { "Pause" } else { "Run" };
                if ui.button(label).clicked() {
                    self.running = !self.running;
                    if self.running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.button("Step").clicked() && !self.running {
                    self.world.step();
                }

                if ui.button("Clear").clicked() {
                    self.running = false;
                    self.world.clear();
                }

                if ui.button("Random").clicked() {
                    self.random_seed = self.random_seed.wrapping_add(1);
                    self.world =
                        LifeWorld::from_cells(random_generation(self.random_seed, RANDOM_DENSITY));
                }

                ui.separator();

                egui::ComboBox::from_id_source("pattern")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply").clicked() {
                    self.world =
                        LifeWorld::from_cells(PATTERNS[self.selected_pattern].generation());
                }
            });

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.world.generation()));
                ui.label(format!("Population: {}", self.world.population()));
            });

            ui.separator();

            let grid_size = Vec2::new(
                WORLD_WIDTH as f32 * CELL_SIZE,
                WORLD_HEIGHT as f32 * CELL_SIZE,
            );
            let (response, painter) = ui.allocate_painter(grid_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.background);

            self.world.for_each_live(|x, y| {
                let min = egui::pos2(
                    origin.x + x as f32 * CELL_SIZE,
                    origin.y + y as f32 * CELL_SIZE,
                );
                painter.rect_filled(
                    Rect::from_min_size(min, Vec2::splat(CELL_SIZE)),
                    0.0,
                    self.live_color,
                );
            });

            // Cell editing only while paused; a running world is replaced
            // out from under the cursor every tick.
            if !self.running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let x = ((pos.x - origin.x) / CELL_SIZE).floor() as i32;
                    let y = ((pos.y - origin.y) / CELL_SIZE).floor() as i32;
                    self.world.toggle_cell(x, y);
                }
            }
        });

        if self.running {
            ctx.request_repaint();
        }
    }
}
