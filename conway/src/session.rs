// session.rs - Interaction state machine: editing, running and the menu

use std::time::{Duration, Instant};

use crate::error::{ConfigError, GridError};
use crate::evolve::advance;
use crate::grid::Grid;
use crate::settings::Settings;

/// Exactly one of these holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Cells can be toggled and the board cleared
    #[default]
    Editing,
    /// Generations advance on every tick; only `Stop` is accepted
    Running,
    /// Modal help panel; the board is frozen
    MenuOpen,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Editing => "Editing",
            Mode::Running => "Running",
            Mode::MenuOpen => "Menu",
        }
    }
}

/// Discrete user commands, decoded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleCell { row: usize, col: usize },
    Clear,
    Start,
    Stop,
    OpenMenu,
    CloseMenu,
}

/// Whether a command changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Command is not valid in the current mode; nothing changed
    Ignored,
}

/// Owns the board, the current mode and the settings.
///
/// Each generation replaces the grid wholesale. The pre-run board is kept
/// in `snapshot` so stopping a run restores it exactly.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    grid: Grid,
    mode: Mode,
    snapshot: Option<Grid>,
    generation: u64,
    last_update: Instant,
    update_interval: Duration,
}

impl Session {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let (rows, cols) = settings.grid_dimensions()?;
        let update_interval = settings.generation_delay();
        log::debug!("New {rows}x{cols} session, {update_interval:?} per generation");
        Ok(Self {
            settings,
            grid: Grid::new(rows, cols),
            mode: Mode::Editing,
            snapshot: None,
            generation: 0,
            last_update: Instant::now(),
            update_interval,
        })
    }

    pub fn current_state(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Generations computed since the current run started.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn generation_delay(&self) -> Duration {
        self.update_interval
    }

    pub fn set_generation_delay(&mut self, delay: Duration) {
        self.update_interval = delay;
    }

    /// Route a command to its transition.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, GridError> {
        let outcome = match command {
            Command::ToggleCell { row, col } => self.toggle_cell(row, col)?,
            Command::Clear => self.clear(),
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::OpenMenu => self.open_menu(),
            Command::CloseMenu => self.close_menu(),
        };
        match outcome {
            Outcome::Applied => log::debug!("{command:?} applied, now {}", self.mode.as_str()),
            Outcome::Ignored => log::debug!("{command:?} ignored while {}", self.mode.as_str()),
        }
        Ok(outcome)
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Outcome, GridError> {
        if self.mode != Mode::Editing {
            return Ok(Outcome::Ignored);
        }
        self.grid.toggle(row, col)?;
        Ok(Outcome::Applied)
    }

    pub fn clear(&mut self) -> Outcome {
        if self.mode != Mode::Editing {
            return Outcome::Ignored;
        }
        self.grid.clear();
        Outcome::Applied
    }

    /// Editing -> Running. Captures the board for `stop`.
    pub fn start(&mut self) -> Outcome {
        self.start_at(Instant::now())
    }

    /// `start` with an explicit clock reading for the first tick.
    pub fn start_at(&mut self, now: Instant) -> Outcome {
        if self.mode != Mode::Editing {
            return Outcome::Ignored;
        }
        self.snapshot = Some(self.grid.clone());
        self.generation = 0;
        self.last_update = now;
        self.mode = Mode::Running;
        log::info!("Run started with {} live cells", self.grid.population());
        Outcome::Applied
    }

    /// Running -> Editing. Discards the run and restores the pre-run board.
    pub fn stop(&mut self) -> Outcome {
        if self.mode != Mode::Running {
            return Outcome::Ignored;
        }
        if let Some(snapshot) = self.snapshot.take() {
            self.grid = snapshot;
        }
        log::info!("Run stopped after {} generations, board restored", self.generation);
        self.generation = 0;
        self.mode = Mode::Editing;
        Outcome::Applied
    }

    pub fn open_menu(&mut self) -> Outcome {
        if self.mode != Mode::Editing {
            return Outcome::Ignored;
        }
        self.mode = Mode::MenuOpen;
        Outcome::Applied
    }

    pub fn close_menu(&mut self) -> Outcome {
        if self.mode != Mode::MenuOpen {
            return Outcome::Ignored;
        }
        self.mode = Mode::Editing;
        Outcome::Applied
    }

    /// Advance one generation if running. Returns whether it advanced.
    pub fn step(&mut self) -> bool {
        if self.mode != Mode::Running {
            return false;
        }
        self.grid = advance(&self.grid);
        self.generation += 1;
        log::trace!("Generation {}: {} live", self.generation, self.grid.population());
        true
    }

    /// Advance when the generation delay has elapsed since the last one.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.mode != Mode::Running || now.saturating_duration_since(self.last_update) < self.update_interval {
            return false;
        }
        self.last_update = now;
        self.step()
    }

    /// Time left before the next tick is due, if running.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.mode != Mode::Running {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.last_update);
        Some(self.update_interval.saturating_sub(elapsed))
    }
}
