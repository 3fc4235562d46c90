//! Control panel layout and input translation
//!
//! Turns raw pointer/key events into simulation commands and produces the HUD
//! text. Drawing itself is left to whichever renderer consumes the layout.

use glam::Vec2;

use crate::consts::{DEFAULT_MAX_OBJECTS, MAX_MAX_OBJECTS, MIN_MAX_OBJECTS};
use crate::sim::{Command, Kind, Snapshot};

/// Axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Half-open containment: left/top edges inclusive, right/bottom exclusive
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.min + self.size;
        p.x >= self.min.x && p.x < max.x && p.y >= self.min.y && p.y < max.y
    }
}

/// A clickable panel button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub command: Command,
}

/// Horizontal slider controlling the population cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub rect: Rect,
    pub min_value: f32,
    pub max_value: f32,
    pub value: f32,
}

impl Slider {
    pub const KNOB_WIDTH: f32 = 10.0;
    pub const KNOB_HEIGHT: f32 = 20.0;

    pub fn new(x: f32, y: f32, min_value: f32, max_value: f32, value: f32) -> Self {
        Self {
            rect: Rect::new(x, y, 200.0, 10.0),
            min_value,
            max_value,
            value,
        }
    }

    /// Update the value from a click; None when the click misses the track
    pub fn click(&mut self, p: Vec2) -> Option<f32> {
        if !self.rect.contains(p) {
            return None;
        }
        let relative_x = p.x - self.rect.min.x;
        self.value = relative_x / self.rect.size.x * (self.max_value - self.min_value);
        Some(self.value)
    }

    /// Knob rectangle for the current value
    pub fn knob(&self) -> Rect {
        let offset = (self.value * (self.rect.size.x / self.max_value)).trunc();
        Rect::new(
            self.rect.min.x + offset,
            self.rect.min.y - 5.0,
            Self::KNOB_WIDTH,
            Self::KNOB_HEIGHT,
        )
    }
}

/// Raw events from the platform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    /// Space bar
    ToggleKey,
    /// Any other key
    OtherKey,
}

/// Buttons, slider and their screen layout
#[derive(Debug, Clone)]
pub struct ControlPanel {
    pub buttons: Vec<Button>,
    pub slider: Slider,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_OBJECTS)
    }
}

impl ControlPanel {
    pub const PAUSE_LABEL: &'static str = "||";
    pub const PLAY_LABEL: &'static str = "\u{25B6}";

    pub fn new(max_objects: usize) -> Self {
        let spawn = |y: f32, label: &'static str, kind: Kind| Button {
            rect: Rect::new(700.0, y, 80.0, 40.0),
            label,
            command: Command::spawn(kind),
        };
        let small = |x: f32, label: &'static str, command: Command| Button {
            rect: Rect::new(x, 20.0, 40.0, 40.0),
            label,
            command,
        };

        Self {
            // Hit-test order matters: first match wins
            buttons: vec![
                spawn(20.0, "Rock", Kind::Rock),
                spawn(80.0, "Paper", Kind::Paper),
                spawn(140.0, "Scissors", Kind::Scissors),
                Button {
                    rect: Rect::new(700.0, 200.0, 80.0, 40.0),
                    label: "Clear",
                    command: Command::ClearAll,
                },
                small(360.0, "-", Command::SpeedDown),
                small(410.0, Self::PAUSE_LABEL, Command::TogglePause),
                small(460.0, "+", Command::SpeedUp),
            ],
            slider: Slider::new(
                20.0,
                550.0,
                MIN_MAX_OBJECTS as f32,
                MAX_MAX_OBJECTS as f32,
                max_objects as f32,
            ),
        }
    }

    /// Translate one raw event into commands.
    ///
    /// Pointer events are ignored while the panel is hidden. A click can hit
    /// one button and the slider track in the same event.
    pub fn translate(&mut self, event: InputEvent, ui_visible: bool) -> Vec<Command> {
        match event {
            InputEvent::ToggleKey => vec![Command::ToggleUiVisibility],
            InputEvent::OtherKey => vec![Command::ShowUi],
            InputEvent::PointerDown { x, y } => {
                if !ui_visible {
                    return Vec::new();
                }
                let p = Vec2::new(x, y);
                let mut commands: Vec<Command> = self
                    .buttons
                    .iter()
                    .find(|b| b.rect.contains(p))
                    .map(|b| b.command)
                    .into_iter()
                    .collect();
                if let Some(value) = self.slider.click(p) {
                    commands.push(Command::SetCap(value));
                }
                commands
            }
        }
    }

    /// Label for the pause button in the given state
    pub fn pause_label(paused: bool) -> &'static str {
        if paused { Self::PLAY_LABEL } else { Self::PAUSE_LABEL }
    }
}

/// HUD text lines: counts, total and speed
pub fn hud_lines(snapshot: &Snapshot) -> [String; 3] {
    let counts = &snapshot.counts;
    [
        format!(
            "Rocks: {}  Papers: {}  Scissors: {}",
            counts.rock, counts.paper, counts.scissors
        ),
        format!("Total Objects: {}", snapshot.total_count),
        format!("Speed: {}", snapshot.speed),
    ]
}
