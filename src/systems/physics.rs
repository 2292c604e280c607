//! Gravity and ground landing.
//!
//! Every entity with a [`PhysicsBody`] falls under its own gravity each tick
//! ([`gravity_system`]) and is then resolved against the static ground tiles
//! ([`ground_landing_system`]). Horizontal motion is applied earlier in the
//! tick by the hero and patrol systems.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::ground::Ground;
use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::geometry::Rect;

/// Integrate one tick of gravity for all bodies.
pub fn gravity_system(mut query: Query<(&mut MapPosition, &mut PhysicsBody)>) {
    for (mut pos, mut body) in query.iter_mut() {
        body.integrate(&mut pos);
    }
}

/// Snap falling bodies onto the ground tiles they overlap.
///
/// Tiles are collected once per tick; bodies are resolved independently.
pub fn ground_landing_system(
    tiles: Query<(&MapPosition, &BoxCollider), (With<Ground>, Without<PhysicsBody>)>,
    mut bodies: Query<(&mut MapPosition, &mut PhysicsBody, &BoxCollider), Without<Ground>>,
) {
    let tile_rects: Vec<Rect> = tiles
        .iter()
        .map(|(pos, collider)| collider.aabb(pos.x, pos.y))
        .collect();
    if tile_rects.is_empty() {
        return;
    }
    for (mut pos, mut body, collider) in bodies.iter_mut() {
        land_on_tiles(&mut pos, &mut body, collider, &tile_rects);
    }
}

/// Resolve one body against `tiles`, in slice order.
///
/// For each tile overlapping the body's box while the body is not moving up,
/// the body's bottom is placed on the tile's top and it becomes grounded. The
/// box is recomputed after every snap, so later tiles see the corrected
/// position.
pub fn land_on_tiles(
    pos: &mut MapPosition,
    body: &mut PhysicsBody,
    collider: &BoxCollider,
    tiles: &[Rect],
) {
    for tile in tiles {
        if body.velocity_y < 0.0 {
            continue;
        }
        if collider.aabb(pos.x, pos.y).overlaps(tile) {
            pos.y = collider.y_with_bottom_at(tile.top());
            body.land();
        }
    }
}

/// The ground row: contiguous `tile_w` x `tile_h` rectangles centred
/// vertically on `ground_y + floor(tile_h / 2)`, starting at x = 0 and added
/// while the next left edge is still `< width`.
///
/// Returns an empty row if `tile_w` is not positive.
pub fn ground_tile_rects(width: f32, tile_w: f32, tile_h: f32, ground_y: f32) -> Vec<Rect> {
    let mut tiles = Vec::new();
    if tile_w <= 0.0 || !tile_w.is_finite() {
        return tiles;
    }
    let center_y = ground_y + (tile_h / 2.0).floor();
    let mut x = 0.0;
    while x < width {
        tiles.push(Rect::new(x, center_y - tile_h * 0.5, tile_w, tile_h));
        x += tile_w;
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn hero_collider() -> BoxCollider {
        BoxCollider::centered(32.0, 32.0)
    }

    #[test]
    fn test_ground_row_covers_width() {
        let tiles = ground_tile_rects(800.0, 40.0, 40.0, 320.0);
        assert_eq!(tiles.len(), 20);
        assert!(approx_eq(tiles[0].left(), 0.0));
        assert!(approx_eq(tiles[19].right(), 800.0));
        for pair in tiles.windows(2) {
            assert!(approx_eq(pair[0].right(), pair[1].left()));
        }
        assert!(tiles.iter().all(|t| approx_eq(t.top(), 320.0)));
    }

    #[test]
    fn test_ground_row_last_tile_overhangs() {
        let tiles = ground_tile_rects(810.0, 40.0, 40.0, 320.0);
        assert_eq!(tiles.len(), 21);
        assert!(tiles[20].right() > 810.0);
    }

    #[test]
    fn test_ground_row_odd_height_uses_floor() {
        let tiles = ground_tile_rects(80.0, 40.0, 41.0, 320.0);
        // centre y = 320 + 20
        assert!(approx_eq(tiles[0].center().1, 340.0));
        assert!(approx_eq(tiles[0].top(), 319.5));
    }

    #[test]
    fn test_ground_row_rejects_zero_width_tiles() {
        assert!(ground_tile_rects(800.0, 0.0, 40.0, 320.0).is_empty());
    }

    #[test]
    fn test_falling_body_lands_on_tile_top() {
        let tiles = ground_tile_rects(800.0, 40.0, 40.0, 320.0);
        let mut pos = MapPosition::new(120.0, 320.0);
        let mut body = PhysicsBody::new(0.5);
        body.integrate(&mut pos);
        land_on_tiles(&mut pos, &mut body, &hero_collider(), &tiles);
        assert!(approx_eq(pos.y, 304.0));
        assert!(body.grounded);
        assert!(approx_eq(body.velocity_y, 0.0));
    }

    #[test]
    fn test_rising_body_passes_through() {
        let tiles = ground_tile_rects(800.0, 40.0, 40.0, 320.0);
        let mut pos = MapPosition::new(120.0, 320.0);
        let mut body = PhysicsBody::new(0.5);
        body.velocity_y = -10.0;
        land_on_tiles(&mut pos, &mut body, &hero_collider(), &tiles);
        assert!(approx_eq(pos.y, 320.0));
        assert!(!body.grounded);
    }

    #[test]
    fn test_landing_is_order_independent() {
        let tiles = ground_tile_rects(800.0, 40.0, 40.0, 320.0);
        let mut reversed = tiles.clone();
        reversed.reverse();
        let mut shuffled = tiles.clone();
        fastrand::Rng::with_seed(9).shuffle(&mut shuffled);

        // straddles the boundary between two tiles
        for x in [20.0_f32, 40.0, 58.0, 399.0, 780.0] {
            let run = |order: &[Rect]| {
                let mut pos = MapPosition::new(x, 318.0);
                let mut body = PhysicsBody::new(0.5);
                body.velocity_y = 3.0;
                land_on_tiles(&mut pos, &mut body, &hero_collider(), order);
                (pos, body)
            };
            let a = run(&tiles);
            assert_eq!(a, run(&reversed), "x={x}");
            assert_eq!(a, run(&shuffled), "x={x}");
        }
    }

    #[test]
    fn test_body_in_air_stays_ungrounded() {
        let tiles = ground_tile_rects(800.0, 40.0, 40.0, 320.0);
        let mut pos = MapPosition::new(120.0, 200.0);
        let mut body = PhysicsBody::new(0.5);
        body.integrate(&mut pos);
        land_on_tiles(&mut pos, &mut body, &hero_collider(), &tiles);
        assert!(!body.grounded);
        assert!(approx_eq(pos.y, 200.5));
    }
}
