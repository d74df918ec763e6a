// menu.rs - Layout of the modal help panel
//
// Pure geometry and text; the app paints it.

/// Fraction of the window each panel side takes.
pub const MENU_SCALE: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelRect {
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Which point of a text block is pinned to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    MidTop,
    MidLeft,
    TopLeft,
}

/// One line of menu text, positioned relative to the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuElement {
    pub text: &'static str,
    pub font_size: f32,
    pub bold: bool,
    pub anchor: Anchor,
    /// Offset from the anchor point, in pixels
    pub delta: (f32, f32),
}

impl MenuElement {
    /// Anchor point inside `panel`, after applying `delta`.
    pub fn position(&self, panel: &PanelRect) -> (f32, f32) {
        let (x, y) = match self.anchor {
            Anchor::MidTop => (panel.center_x(), panel.y),
            Anchor::MidLeft => (panel.x, panel.center_y()),
            Anchor::TopLeft => (panel.x, panel.y),
        };
        (x + self.delta.0, y + self.delta.1)
    }
}

/// Title plus the static key-binding help.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOverlay {
    pub elements: Vec<MenuElement>,
}

const TITLE_SIZE: f32 = 36.0;
const BODY_SIZE: f32 = 20.0;
const LINE_SPACING: f32 = 32.0;
const MARGIN: f32 = 40.0;

const INSTRUCTIONS: &[&str] = &[
    "Click a cell to bring it to life or kill it",
    "Enter  start the simulation",
    "Escape  stop and restore the board",
    "C  clear the board",
    "M  open this menu, Escape to close it",
    "Q  quit",
];

impl Default for MenuOverlay {
    fn default() -> Self {
        let mut elements = vec![MenuElement {
            text: "Game of Life",
            font_size: TITLE_SIZE,
            bold: true,
            anchor: Anchor::MidTop,
            delta: (0.0, MARGIN / 2.0),
        }];
        for (i, &line) in INSTRUCTIONS.iter().enumerate() {
            elements.push(MenuElement {
                text: line,
                font_size: BODY_SIZE,
                bold: false,
                anchor: Anchor::TopLeft,
                delta: (MARGIN, MARGIN * 2.0 + i as f32 * LINE_SPACING),
            });
        }
        Self { elements }
    }
}

impl MenuOverlay {
    /// Panel centered in the window, sized proportionally to it.
    pub fn panel(&self, window_width: f32, window_height: f32) -> PanelRect {
        let width = window_width * MENU_SCALE;
        let height = window_height * MENU_SCALE;
        PanelRect {
            x: (window_width - width) / 2.0,
            y: (window_height - height) / 2.0,
            width,
            height,
        }
    }

    pub fn title(&self) -> Option<&MenuElement> {
        self.elements.first()
    }
}

/// Menu font after checking what is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    Named(String),
    Default,
}

/// Use the requested font family if available, otherwise the default.
pub fn resolve_font(requested: Option<&str>, available: &[String]) -> FontChoice {
    let Some(name) = requested else {
        return FontChoice::Default;
    };
    match available.iter().find(|family| family.eq_ignore_ascii_case(name)) {
        Some(family) => FontChoice::Named(family.clone()),
        None => {
            log::warn!("Menu font '{name}' not available, using the default font");
            FontChoice::Default
        }
    }
}
