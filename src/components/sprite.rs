use bevy_ecs::prelude::Component;

/// Sprite is identified by a frame key (e.g. `"hero/idle_0"`) and its size in
/// world units. The origin is the pivot, in pixels from the image's top-left,
/// that is placed at the entity's [`MapPosition`](super::mapposition::MapPosition).
///
/// The animation system rewrites `tex_key` with the current frame and resizes
/// the sprite when the new frame has a different size.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: (f32, f32),
}

impl Sprite {
    /// Sprite whose pivot is the center of the image.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            origin: (width * 0.5, height * 0.5),
        }
    }

    /// Change the image size. The pivot keeps its relative place in the image.
    pub fn resize(&mut self, width: f32, height: f32) {
        let fx = if self.width != 0.0 { self.origin.0 / self.width } else { 0.5 };
        let fy = if self.height != 0.0 { self.origin.1 / self.height } else { 0.5 };
        self.width = width;
        self.height = height;
        self.origin = (width * fx, height * fy);
    }

    /// Top-left corner of the image when the pivot sits at `(x, y)`.
    pub fn top_left(&self, x: f32, y: f32) -> (f32, f32) {
        (x - self.origin.0, y - self.origin.1)
    }
}
