//! Desktop preview app for strip-actors
//!
//! Runs the controller against a simulated strip. Typed characters and the
//! buttons below are fed to the command channel exactly like serial bytes.

use std::time::{Instant as StdInstant, SystemTime, UNIX_EPOCH};

use eframe::egui::{self};
use rand::rngs::SmallRng;
use strip_actors::{
    CommandChannel, CommandSender, Controller, ControllerConfig, DEFAULT_LED_COUNT, Instant,
    OutputDriver, PixelSink, Rgb, RngSource, Strip, frame_scheduler::wrapping_millis,
};

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Command channel size
const COMMAND_CHANNEL_SIZE: usize = 16;

/// Console lines kept on screen
const CONSOLE_LINES: usize = 200;

/// Static command channel between the UI and the controller
static COMMANDS: CommandChannel<COMMAND_CHANNEL_SIZE> =
    CommandChannel::<COMMAND_CHANNEL_SIZE>::new();

/// Buttons for every command byte
const COMMAND_BUTTONS: [(&str, u8); 12] = [
    ("red", b'r'),
    ("green", b'g'),
    ("blue", b'b'),
    ("white", b'w'),
    ("pink", b'i'),
    ("RED", b'R'),
    ("GREEN", b'G'),
    ("BLUE", b'B'),
    ("WHITE", b'W'),
    ("PINK", b'I'),
    ("dump", b'p'),
    ("next", b'n'),
];

/// Driver that keeps the last frame for drawing
#[derive(Default)]
struct WindowDriver {
    frame: Vec<Rgb>,
}

impl OutputDriver for WindowDriver {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

type PreviewController = Controller<
    'static,
    Strip<WindowDriver, DEFAULT_LED_COUNT>,
    RngSource<SmallRng>,
    DEFAULT_LED_COUNT,
    COMMAND_CHANNEL_SIZE,
>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Strip Actors Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "strip-actors-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    controller: PreviewController,
    commands: CommandSender<'static, COMMAND_CHANNEL_SIZE>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// LED pixel size for display
    led_size: f32,
    /// Controller responses
    console: String,
}

impl PreviewApp {
    fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();

        let controller = Controller::new(
            COMMANDS.receiver(),
            Strip::new(WindowDriver::default(), 255),
            RngSource::seeded(seed),
            ControllerConfig::default(),
        );

        Self {
            controller,
            commands: COMMANDS.sender(),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            led_size: LED_SIZE,
            console: String::new(),
        }
    }

    fn send(&self, byte: u8) {
        let _ = self.commands.try_send(byte);
    }

    /// Forward typed characters as command bytes
    fn forward_keys(&self, ctx: &egui::Context) {
        ctx.input(|input| {
            for event in &input.events {
                if let egui::Event::Text(text) = event {
                    self.commands.feed(text.as_bytes());
                }
            }
        });
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    fn trim_console(&mut self) {
        let lines = self.console.lines().count();
        if lines > CONSOLE_LINES {
            let skip = lines - CONSOLE_LINES;
            self.console = self
                .console
                .lines()
                .skip(skip)
                .fold(String::new(), |mut kept, line| {
                    kept.push_str(line);
                    kept.push('\n');
                    kept
                });
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.forward_keys(ctx);

        let now = wrapping_millis(Instant::from_millis(self.t_ms));
        // Writing into a String cannot fail
        let _ = self.controller.tick(now, &mut self.console);
        self.trim_console();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }
                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));

                ui.add_space(16.0);
                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));

                ui.add_space(16.0);
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let strategy = self
                    .controller
                    .scheduler()
                    .strategy()
                    .map_or("-", |strategy| strategy.as_str());
                let actor = self
                    .controller
                    .scheduler()
                    .actor()
                    .map_or("-", |actor| actor.name());
                ui.label(format!("Strategy: {strategy}"));
                ui.add_space(8.0);
                ui.label(format!("Actor: {actor}"));
                ui.add_space(8.0);
                ui.label(format!(
                    "Brightness: {}",
                    self.controller.strip().brightness()
                ));
            });

            ui.add_space(8.0);

            ui.horizontal_wrapped(|ui| {
                for (label, byte) in COMMAND_BUTTONS {
                    if ui.button(label).clicked() {
                        self.send(byte);
                    }
                }
                ui.add_space(8.0);
                ui.label("Brightness:");
                for digit in b'0'..=b'9' {
                    if ui.button(char::from(digit).to_string()).clicked() {
                        self.send(digit);
                    }
                }
            });

            ui.add_space(16.0);

            // === LED Display ===
            let frame = &self.controller.strip().driver().frame;
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = self.controller.strip().len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }

            ui.add_space(16.0);

            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.monospace(&self.console);
                });
        });
    }
}
