//! Conway's Game of Life on a bounded grid
//!
//! Core modules:
//! - `grid`: fixed-size board of dead/alive cells
//! - `neighbors`: live-neighbor counting without wraparound
//! - `evolve`: Conway's rules, producing each generation as a new grid
//! - `session`: editing / running / menu state machine
//! - `menu`: layout of the help overlay
//! - `settings`: window, cell size, colors and pacing

pub mod error;
pub mod evolve;
pub mod grid;
pub mod menu;
pub mod neighbors;
pub mod session;
pub mod settings;

pub use error::{ConfigError, GridError};
pub use evolve::{advance, next_state};
pub use grid::{Cell, Grid};
pub use menu::{Anchor, FontChoice, MenuElement, MenuOverlay, PanelRect, resolve_font};
pub use neighbors::count_live_neighbors;
pub use session::{Command, Mode, Outcome, Session};
pub use settings::{Rgb, Rgba, Settings};
