//! raylib window host.
//!
//! Opens the window, loads one texture per sprite frame, and runs the
//! frame loop: sample held keys, forward left clicks, tick, draw.

use log::{info, warn};
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::canvas::{self, Canvas};
use crate::game::GameContext;
use crate::geometry::Rect;
use crate::host::audio::raylib_audio_thread;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::levelconfig::LevelConfig;
use crate::resources::spritestore::{SPRITE_KEYS, SpriteStore};

/// Loaded textures keyed by sprite frame id.
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Load `<assets>/images/<key>.png` for every sprite frame. Frames that
    /// fail to load are reported and drawn as placeholders.
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, config: &GameConfig) -> Self {
        let mut map = FxHashMap::default();
        for key in SPRITE_KEYS {
            let path = config.assets_path.join("images").join(format!("{}.png", key));
            match rl.load_texture(thread, &path.to_string_lossy()) {
                Ok(texture) => {
                    map.insert(key.to_string(), texture);
                }
                Err(e) => warn!("texture '{}' not loaded from {:?}: {}", key, path, e),
            }
        }
        info!("loaded {}/{} textures", map.len(), SPRITE_KEYS.len());
        Self { map }
    }

    /// Sprite sizes from the loaded textures; missing ones use placeholder sizes.
    pub fn sprite_store(&self) -> SpriteStore {
        let mut sprites = SpriteStore::placeholder();
        for (key, texture) in self.map.iter() {
            sprites.insert(key.clone(), texture.width as f32, texture.height as f32);
        }
        sprites
    }
}

fn to_color(c: canvas::Color) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

fn to_rectangle(r: Rect) -> Rectangle {
    Rectangle::new(r.x, r.y, r.w, r.h)
}

/// [`Canvas`] drawing into an open raylib frame.
pub struct RaylibCanvas<'a, 'b> {
    d: &'a mut RaylibDrawHandle<'b>,
    textures: &'a TextureStore,
}

impl Canvas for RaylibCanvas<'_, '_> {
    fn clear(&mut self, color: canvas::Color) {
        self.d.clear_background(to_color(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: canvas::Color) {
        self.d.draw_rectangle_rec(to_rectangle(rect), to_color(color));
    }

    fn outline_rect(&mut self, rect: Rect, color: canvas::Color) {
        self.d
            .draw_rectangle_lines_ex(to_rectangle(rect), 1.0, to_color(color));
    }

    fn text_centered(&mut self, text: &str, center: (f32, f32), size: f32, color: canvas::Color) {
        let font_size = size as i32;
        let width = raylib::core::text::measure_text(text, font_size);
        self.d.draw_text(
            text,
            center.0 as i32 - width / 2,
            center.1 as i32 - font_size / 2,
            font_size,
            to_color(color),
        );
    }

    fn sprite(&mut self, key: &str, top_left: (f32, f32), size: (f32, f32)) {
        let dest = Rectangle::new(top_left.0, top_left.1, size.0, size.1);
        match self.textures.map.get(key) {
            Some(tex) => {
                let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
                self.d
                    .draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
            }
            None => self.d.draw_rectangle_rec(dest, Color::MAGENTA),
        }
    }
}

/// Open the window and run the game until it is closed or Exit is chosen.
pub fn run(config: GameConfig, level: LevelConfig, seed: Option<u64>) -> Result<(), String> {
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let textures = TextureStore::load(&mut rl, &thread, &config);
    let mut game = GameContext::new(config, level, textures.sprite_store(), raylib_audio_thread)?;
    if let Some(seed) = seed {
        game = game.with_seed(seed);
    }

    while !rl.window_should_close() && !game.should_quit() {
        game.set_input(InputState::new(
            rl.is_key_down(KeyboardKey::KEY_LEFT),
            rl.is_key_down(KeyboardKey::KEY_RIGHT),
            rl.is_key_down(KeyboardKey::KEY_SPACE),
        ));
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let pos = rl.get_mouse_position();
            game.on_press(pos.x, pos.y);
        }

        game.update();

        let mut d = rl.begin_drawing(&thread);
        let mut canvas = RaylibCanvas {
            d: &mut d,
            textures: &textures,
        };
        game.draw(&mut canvas);
    }

    info!("window closed");
    game.shutdown();
    Ok(())
}
