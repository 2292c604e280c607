//! Drawing surface abstraction.
//!
//! The game never talks to a graphics library directly. [`render_pass`]
//! describes a frame as calls on a [`Canvas`]; the windowed host implements
//! it on top of raylib and headless runs use a [`DrawList`] that simply
//! records the calls.
//!
//! [`render_pass`]: crate::systems::render::render_pass

use crate::geometry::Rect;

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const SKY: Color = Color::rgb(120, 180, 240);
    pub const BUTTON: Color = Color::rgb(40, 40, 40);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Immediate-mode 2D drawing target.
pub trait Canvas {
    /// Fill the whole surface.
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// One pixel wide outline.
    fn outline_rect(&mut self, rect: Rect, color: Color);
    /// Draw `text` with its bounding box centred on `center`.
    fn text_centered(&mut self, text: &str, center: (f32, f32), size: f32, color: Color);
    /// Draw the image of sprite frame `key` with its top-left at `top_left`,
    /// scaled to `size`.
    fn sprite(&mut self, key: &str, top_left: (f32, f32), size: (f32, f32));
}

/// One recorded [`Canvas`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    FillRect(Rect, Color),
    OutlineRect(Rect, Color),
    Text {
        text: String,
        center: (f32, f32),
        size: f32,
        color: Color,
    },
    Sprite {
        key: String,
        top_left: (f32, f32),
        size: (f32, f32),
    },
}

/// A [`Canvas`] that stores every call in order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_cmds(&mut self) {
        self.cmds.clear();
    }

    /// Keys of the sprites drawn, in draw order.
    pub fn sprite_keys(&self) -> Vec<&str> {
        self.cmds
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Sprite { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Texts drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.cmds
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Color) {
        self.cmds.push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::FillRect(rect, color));
    }

    fn outline_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::OutlineRect(rect, color));
    }

    fn text_centered(&mut self, text: &str, center: (f32, f32), size: f32, color: Color) {
        self.cmds.push(DrawCmd::Text {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }

    fn sprite(&mut self, key: &str, top_left: (f32, f32), size: (f32, f32)) {
        self.cmds.push(DrawCmd::Sprite {
            key: key.to_string(),
            top_left,
            size,
        });
    }
}
