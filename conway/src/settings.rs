//! Board and display settings
//!
//! Loaded from an optional JSON file; every missing field falls back to
//! its default. The grid dimensions are derived from the window size and
//! the cell size, which must divide both window dimensions.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
}

/// RGBA color, used for the translucent menu panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub screen_width: u32,
    pub screen_height: u32,

    // === Cells ===
    /// Side of one square cell in pixels
    pub cell_size: u32,
    pub dead_color: Rgb,
    pub alive_color: Rgb,
    pub border_color: Rgb,
    pub border_thickness: f32,

    // === Menu ===
    pub menu_color: Rgba,
    pub menu_text_color: Rgb,
    /// Font family for the menu; unknown names fall back to the default
    pub menu_font: Option<String>,

    // === Pacing ===
    /// Delay between generations while running
    pub generation_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,

            cell_size: 40,
            dead_color: Rgb::WHITE,
            alive_color: Rgb::BLACK,
            border_color: Rgb::BLACK,
            border_thickness: 1.0,

            menu_color: Rgba([30, 30, 30, 220]),
            menu_text_color: Rgb::WHITE,
            menu_font: None,

            generation_delay_ms: 200,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file.
    ///
    /// Not validated here: callers apply overrides first, then `validate`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "Loaded settings from {} ({}x{} window, {} px cells)",
            path.display(),
            settings.screen_width,
            settings.screen_height,
            settings.cell_size
        );
        Ok(settings)
    }

    /// Check that the window can be tiled exactly by cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !self.border_thickness.is_finite() || self.border_thickness < 0.0 {
            return Err(ConfigError::InvalidBorderThickness(self.border_thickness));
        }
        for (axis, extent) in [("width", self.screen_width), ("height", self.screen_height)] {
            if extent % self.cell_size != 0 {
                return Err(ConfigError::CellSizeMismatch {
                    axis,
                    extent,
                    cell_size: self.cell_size,
                });
            }
        }
        Ok(())
    }

    /// `(rows, cols)` of the board these settings describe.
    pub fn grid_dimensions(&self) -> Result<(usize, usize), ConfigError> {
        self.validate()?;
        let rows = (self.screen_height / self.cell_size) as usize;
        let cols = (self.screen_width / self.cell_size) as usize;
        Ok((rows, cols))
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    /// Map a pointer position in window pixels to a cell.
    ///
    /// Returns `None` outside the window; points on the far edge are
    /// clamped into the last row/column.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (rows, cols) = self.grid_dimensions().ok()?;
        if !(x >= 0.0 && y >= 0.0) || x > self.screen_width as f32 || y > self.screen_height as f32 {
            return None;
        }
        let size = self.cell_size as f32;
        let row = ((y / size) as usize).min(rows - 1);
        let col = ((x / size) as usize).min(cols - 1);
        Some((row, col))
    }
}
