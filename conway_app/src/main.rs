// main.rs - Interactive Conway's Game of Life
// Settings, session and window setup; drawing and input live in ui.rs

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use eframe::egui;
use egui::{Color32, FontFamily};

use conway::{ConfigError, FontChoice, MenuOverlay, Rgb, Rgba, Session, Settings, resolve_font};

mod ui;

/// Height of the status bar under the board
const STATUS_BAR_HEIGHT: f32 = 32.0;

#[derive(Parser, Debug)]
#[command(name = "conway_app", about = "Interactive Conway's Game of Life")]
struct Args {
    /// JSON settings file; missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Delay between generations in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Cell size in pixels; must divide the window width and height
    #[arg(long)]
    cell_size: Option<u32>,
}

fn load_settings(args: &Args) -> Result<Settings, ConfigError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(delay) = args.delay_ms {
        settings.generation_delay_ms = delay;
    }
    if let Some(size) = args.cell_size {
        settings.cell_size = size;
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    let app = match LifeApp::new(settings) {
        Ok(app) => app,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    let (rows, cols) = app.session.grid().dimensions();
    log::info!("Starting {rows}x{cols} board");

    let settings = app.session.settings();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                settings.screen_width as f32,
                settings.screen_height as f32 + STATUS_BAR_HEIGHT,
            ])
            .with_resizable(false),
        ..Default::default()
    };

    match eframe::run_native("Game of Life", options, Box::new(|_cc| Box::new(app))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Window error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Presentation state around a `Session`
pub struct LifeApp {
    pub session: Session,
    pub menu: MenuOverlay,
    pub menu_font: FontFamily,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub border_color: Color32,
    pub menu_color: Color32,
    pub menu_text_color: Color32,
}

impl LifeApp {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let menu_font = menu_font_family(settings.menu_font.as_deref());
        let live_color = rgb(settings.alive_color);
        let dead_color = rgb(settings.dead_color);
        let border_color = rgb(settings.border_color);
        let menu_color = rgba(settings.menu_color);
        let menu_text_color = rgb(settings.menu_text_color);
        Ok(Self {
            session: Session::new(settings)?,
            menu: MenuOverlay::default(),
            menu_font,
            live_color,
            dead_color,
            border_color,
            menu_color,
            menu_text_color,
        })
    }

    /// Speed slider value in generations per second.
    pub fn speed(&self) -> f32 {
        1000.0 / self.session.generation_delay().as_millis().max(1) as f32
    }

    pub fn set_speed(&mut self, gens_per_sec: f32) {
        self.session
            .set_generation_delay(Duration::from_millis((1000.0 / gens_per_sec) as u64));
    }
}

fn rgb(color: Rgb) -> Color32 {
    let [r, g, b] = color.0;
    Color32::from_rgb(r, g, b)
}

fn rgba(color: Rgba) -> Color32 {
    let [r, g, b, a] = color.0;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Look up the configured menu font among egui's installed families.
fn menu_font_family(requested: Option<&str>) -> FontFamily {
    let installed: Vec<FontFamily> = egui::FontDefinitions::default().families.into_keys().collect();
    let names: Vec<String> = installed.iter().map(|family| family.to_string()).collect();
    match resolve_font(requested, &names) {
        FontChoice::Named(name) => installed
            .into_iter()
            .find(|family| family.to_string() == name)
            .unwrap_or(FontFamily::Proportional),
        FontChoice::Default => FontFamily::Proportional,
    }
}
