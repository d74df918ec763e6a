// ui.rs - Frame loop: input decoding, generation pacing and painting

use std::time::Instant;

use eframe::egui;
use egui::{Align2, FontId, Key, Pos2, Rect, Stroke, Vec2};

use conway::{Anchor, Command, Mode};

use crate::LifeApp;

/// Input decoded from one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Session(Command),
    Quit,
}

/// Keys map to commands depending on the current mode.
fn decode_keys(pressed: impl Fn(Key) -> bool, mode: Mode) -> Vec<Action> {
    let mut actions = Vec::new();
    if pressed(Key::Q) {
        actions.push(Action::Quit);
    }
    if pressed(Key::Enter) {
        actions.push(Action::Session(Command::Start));
    }
    if pressed(Key::Escape) {
        match mode {
            Mode::Running => actions.push(Action::Session(Command::Stop)),
            Mode::MenuOpen => actions.push(Action::Session(Command::CloseMenu)),
            Mode::Editing => {}
        }
    }
    if pressed(Key::M) {
        actions.push(Action::Session(Command::OpenMenu));
    }
    if pressed(Key::C) {
        actions.push(Action::Session(Command::Clear));
    }
    actions
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mode = self.session.current_state();
        let mut actions = ctx.input(|input| decode_keys(|key| input.key_pressed(key), mode));

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Mode: {}", self.session.current_state().as_str()));
                ui.separator();
                ui.label(format!("Generation: {}", self.session.generation()));
                ui.separator();
                ui.label(format!("Live cells: {}", self.session.population()));
                ui.separator();

                ui.label("Speed:");
                let mut speed = self.speed();
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.set_speed(speed);
                }

                ui.separator();
                let button_text = if self.session.is_running() { "⏹ Stop" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    let command = if self.session.is_running() { Command::Stop } else { Command::Start };
                    actions.push(Action::Session(command));
                }
                if ui.button("Clear").clicked() {
                    actions.push(Action::Session(Command::Clear));
                }
                if ui.button("Menu").clicked() {
                    actions.push(Action::Session(Command::OpenMenu));
                }
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let settings = self.session.settings();
                let board_size = Vec2::new(settings.screen_width as f32, settings.screen_height as f32);
                let (response, painter) = ui.allocate_painter(board_size, egui::Sense::click());
                let origin = response.rect.min;

                // Clicks are only routed to the grid while editing
                if response.clicked() && self.session.current_state() == Mode::Editing {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local = pos - origin;
                        if let Some((row, col)) = settings.cell_at(local.x, local.y) {
                            actions.push(Action::Session(Command::ToggleCell { row, col }));
                        }
                    }
                }

                self.paint_board(&painter, origin);
                if self.session.current_state() == Mode::MenuOpen {
                    self.paint_menu(&painter, origin, board_size);
                }
            });

        for action in actions {
            match action {
                Action::Quit => {
                    log::info!("Quit requested");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Action::Session(command) => {
                    if let Err(err) = self.session.apply(command) {
                        log::warn!("{command:?} rejected: {err}");
                    }
                }
            }
        }

        let now = Instant::now();
        if self.session.tick(now) {
            ctx.request_repaint();
        }
        if let Some(wait) = self.session.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

impl LifeApp {
    fn paint_board(&self, painter: &egui::Painter, origin: Pos2) {
        let grid = self.session.grid();
        let settings = self.session.settings();
        let (rows, cols) = grid.dimensions();
        let size = settings.cell_size as f32;
        let board = Rect::from_min_size(origin, Vec2::new(cols as f32 * size, rows as f32 * size));

        painter.rect_filled(board, 0.0, self.dead_color);
        for (row, col) in grid.alive_cells() {
            let min = origin + Vec2::new(col as f32 * size, row as f32 * size);
            painter.rect_filled(Rect::from_min_size(min, Vec2::splat(size)), 0.0, self.live_color);
        }

        // Borders at every cell boundary
        let stroke = Stroke::new(settings.border_thickness, self.border_color);
        for col in 0..=cols {
            let x = origin.x + col as f32 * size;
            painter.line_segment([Pos2::new(x, board.top()), Pos2::new(x, board.bottom())], stroke);
        }
        for row in 0..=rows {
            let y = origin.y + row as f32 * size;
            painter.line_segment([Pos2::new(board.left(), y), Pos2::new(board.right(), y)], stroke);
        }
    }

    fn paint_menu(&self, painter: &egui::Painter, origin: Pos2, board_size: Vec2) {
        let panel = self.menu.panel(board_size.x, board_size.y);
        let rect = Rect::from_min_size(
            origin + Vec2::new(panel.x, panel.y),
            Vec2::new(panel.width, panel.height),
        );
        painter.rect_filled(rect, 8.0, self.menu_color);

        for element in &self.menu.elements {
            let (x, y) = element.position(&panel);
            let pos = origin + Vec2::new(x, y);
            let align = match element.anchor {
                Anchor::MidTop => Align2::CENTER_TOP,
                Anchor::MidLeft => Align2::LEFT_CENTER,
                Anchor::TopLeft => Align2::LEFT_TOP,
            };
            let font = FontId::new(element.font_size, self.menu_font.clone());
            painter.text(pos, align, element.text, font.clone(), self.menu_text_color);
            if element.bold {
                // egui ships no bold face; overstrike by a pixel
                painter.text(pos + Vec2::new(1.0, 0.0), align, element.text, font, self.menu_text_color);
            }
        }
    }
}
