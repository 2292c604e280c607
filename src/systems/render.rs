use bevy_ecs::prelude::*;

use crate::canvas::{Canvas, Color};
use crate::components::ground::Ground;
use crate::components::mapposition::MapPosition;
use crate::components::menu::Menu;
use crate::components::patrol::Enemy;
use crate::components::platformercontrols::Hero;
use crate::components::sprite::Sprite;
use crate::geometry::Rect;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::screensize::ScreenSize;

/// Draw one frame of the current state onto `canvas`.
///
/// Menu: sky, title, then every button (fill, outline, label).
/// Playing: sky, ground tiles, hero, enemies. Sprites fully outside the
/// screen are skipped.
pub fn render_pass(world: &mut World, canvas: &mut impl Canvas) {
    canvas.clear(Color::SKY);

    let state = *world.resource::<GameState>().get();
    match state {
        GameStates::Menu => draw_menu(world, canvas),
        GameStates::Playing => draw_level(world, canvas),
    }
}

fn draw_menu(world: &mut World, canvas: &mut impl Canvas) {
    let mut menus = world.query::<&Menu>();
    for menu in menus.iter(world) {
        canvas.text_centered(&menu.title, menu.title_position, menu.title_size, Color::WHITE);
        for button in menu.buttons.iter() {
            canvas.fill_rect(button.rect, Color::BUTTON);
            canvas.outline_rect(button.rect, Color::WHITE);
            canvas.text_centered(
                &button.label,
                button.rect.center(),
                menu.label_size,
                Color::WHITE,
            );
        }
    }
}

fn draw_level(world: &mut World, canvas: &mut impl Canvas) {
    let screen = *world.resource::<ScreenSize>();
    let view = Rect::new(0.0, 0.0, screen.w as f32, screen.h as f32);

    // ground first, then the hero, then enemies on top
    let mut to_draw: Vec<(u8, Sprite, MapPosition)> = {
        let mut q = world.query::<(
            &Sprite,
            &MapPosition,
            Has<Ground>,
            Has<Hero>,
            Has<Enemy>,
        )>();
        q.iter(world)
            .filter_map(|(sprite, pos, ground, hero, enemy)| {
                let layer = if ground {
                    0
                } else if hero {
                    1
                } else if enemy {
                    2
                } else {
                    return None;
                };
                let (x, y) = sprite.top_left(pos.x, pos.y);
                let bounds = Rect::new(x, y, sprite.width, sprite.height);
                let visible = bounds.right() >= view.left()
                    && bounds.left() <= view.right()
                    && bounds.bottom() >= view.top()
                    && bounds.top() <= view.bottom();
                visible.then(|| (layer, sprite.clone(), *pos))
            })
            .collect()
    };
    // tiles keep left-to-right order within their layer
    to_draw.sort_by(|a, b| a.0.cmp(&b.0).then(a.2.x.total_cmp(&b.2.x)));

    for (_, sprite, pos) in to_draw.iter() {
        canvas.sprite(
            &sprite.tex_key,
            sprite.top_left(pos.x, pos.y),
            (sprite.width, sprite.height),
        );
    }
}
