// main.rs - eframe host: presents the canvas and paces the simulation

use std::time::Instant;

use eframe::egui;
use life_core::canvas::{self, Canvas};
use life_core::engine::Engine;
use life_core::patterns;
use life_core::Field;

const SURFACE_WIDTH: usize = 640;
const SURFACE_HEIGHT: usize = 480;
const STEPS_PER_SECOND: f64 = 6.0;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SURFACE_WIDTH as f32, SURFACE_HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Toroidal Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::new())),
    )
}

/// The start-up scene: named glyphs at fixed origins. Domain configuration,
/// not computed.
fn seed(field: &mut Field) {
    patterns::create_pattern(field, patterns::BLOCK, 8, 8);
    patterns::create_pattern(field, patterns::BLINKER, 12, 12);
    patterns::create_pattern(field, patterns::TOAD, 7, 16);
    patterns::create_pattern(field, patterns::INFINITE_GROWTH_3, 5, 30);
    patterns::create_pattern(field, patterns::INFINITE_GROWTH_1, 15, 15);
    patterns::create_pattern(field, patterns::BOAT, 18, 20);
    patterns::create_pattern(field, patterns::PENTADECATHLON, 50, 40);
    patterns::create_pattern(field, patterns::R_PENTOMINO, 70, 30);
}

struct LifeApp {
    engine: Engine,
    canvas: Canvas,
    texture: Option<egui::TextureHandle>,
}

impl LifeApp {
    fn new() -> Self {
        let field_width = canvas::grid_size_for(SURFACE_WIDTH) as i32;
        let field_height = canvas::grid_size_for(SURFACE_HEIGHT) as i32;
        log::info!(
            "surface {SURFACE_WIDTH}x{SURFACE_HEIGHT}, field {field_width}x{field_height}"
        );

        let mut engine = Engine::new(field_width, field_height, STEPS_PER_SECOND);
        seed(engine.field_mut());

        let mut canvas = Canvas::new(SURFACE_WIDTH, SURFACE_HEIGHT);
        canvas.draw_grid();
        for y in 0..field_height {
            for x in 0..field_width {
                if engine.field().is_alive(x, y) {
                    canvas.draw_cell(x, y, true);
                }
            }
        }

        LifeApp {
            engine,
            canvas,
            texture: None,
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.engine.toggle_pause();
            log::debug!("paused: {}", self.engine.is_paused());
        }

        // At most one step per frame; paused or early frames skip straight
        // to presentation so the image stays up.
        if self.engine.tick(Instant::now()) {
            self.canvas.apply(self.engine.changes());
        }

        let image = egui::ColorImage::from_rgba_unmultiplied(
            [self.canvas.width(), self.canvas.height()],
            self.canvas.data(),
        );
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST));
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    ui.image((
                        texture.id(),
                        egui::vec2(SURFACE_WIDTH as f32, SURFACE_HEIGHT as f32),
                    ));
                }
            });

        ctx.request_repaint();
    }
}
