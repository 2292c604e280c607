//! Tick-level integration tests: individual systems run on a small world
//! through a real `Schedule`.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use std::sync::{Arc, Mutex};

use groundhop::components::boxcollider::BoxCollider;
use groundhop::components::ground::Ground;
use groundhop::components::mapposition::MapPosition;
use groundhop::components::patrol::{Enemy, Patrol};
use groundhop::components::physicsbody::PhysicsBody;
use groundhop::components::platformercontrols::{Hero, PlatformerControls};
use groundhop::components::signals::Signals;
use groundhop::events::audio::AudioCmd;
use groundhop::events::level::{LevelResetEvent, ResetCause};
use groundhop::resources::input::InputState;
use groundhop::systems::collision::hero_enemy_collision;
use groundhop::systems::hero::{MOVING, hero_jump_system, hero_walk_system};
use groundhop::systems::patrol::patrol_system;
use groundhop::systems::physics::{gravity_system, ground_landing_system, ground_tile_rects};

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(InputState::default());
    world.init_resource::<Messages<AudioCmd>>();
    world
}

fn spawn_ground(world: &mut World) {
    for tile in ground_tile_rects(800.0, 40.0, 40.0, 320.0) {
        let (cx, cy) = tile.center();
        world.spawn((
            Ground,
            MapPosition::new(cx, cy),
            BoxCollider::centered(40.0, 40.0),
        ));
    }
}

fn spawn_hero(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Hero,
            MapPosition::new(x, y),
            PhysicsBody::new(0.5),
            PlatformerControls::new(3.0, 10.0),
            BoxCollider::centered(32.0, 32.0),
            Signals::default(),
        ))
        .id()
}

fn spawn_enemy(world: &mut World, x: f32, y: f32, left: f32, right: f32, dir: f32) -> Entity {
    world
        .spawn((
            Enemy,
            MapPosition::new(x, y),
            PhysicsBody::new(0.5),
            Patrol::new(left, right, 2.0, dir),
            BoxCollider::centered(32.0, 24.0),
        ))
        .id()
}

/// Hero and enemy update in the same order as the game.
fn tick_physics(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            hero_walk_system,
            patrol_system,
            gravity_system,
            ground_landing_system,
            hero_jump_system,
        )
            .chain(),
    );
    schedule.run(world);
}

fn tick_collision(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(hero_enemy_collision);
    schedule.run(world);
}

fn read_audio_cmds(world: &mut World) -> Vec<AudioCmd> {
    let mut state = SystemState::<MessageReader<AudioCmd>>::new(world);
    let mut reader = state.get_mut(world);
    let cmds: Vec<AudioCmd> = reader.read().cloned().collect();
    cmds
}

fn set_input(world: &mut World, left: bool, right: bool, jump: bool) {
    *world.resource_mut::<InputState>() = InputState::new(left, right, jump);
}

// --- walking ---

#[test]
fn walk_left_moves_by_speed_and_sets_moving() {
    let mut world = make_world();
    let hero = spawn_hero(&mut world, 120.0, 304.0);
    set_input(&mut world, true, false, false);

    tick_physics(&mut world);

    let pos = world.get::<MapPosition>(hero).unwrap();
    assert!(approx_eq(pos.x, 117.0));
    assert!(world.get::<Signals>(hero).unwrap().has_flag(MOVING));
}

#[test]
fn walk_both_directions_cancel_but_count_as_moving() {
    let mut world = make_world();
    let hero = spawn_hero(&mut world, 120.0, 304.0);
    set_input(&mut world, true, true, false);

    tick_physics(&mut world);

    assert!(approx_eq(world.get::<MapPosition>(hero).unwrap().x, 120.0));
    assert!(world.get::<Signals>(hero).unwrap().has_flag(MOVING));
}

#[test]
fn releasing_keys_clears_moving() {
    let mut world = make_world();
    let hero = spawn_hero(&mut world, 120.0, 304.0);
    set_input(&mut world, false, true, false);
    tick_physics(&mut world);
    set_input(&mut world, false, false, false);
    tick_physics(&mut world);

    assert!(approx_eq(world.get::<MapPosition>(hero).unwrap().x, 123.0));
    assert!(!world.get::<Signals>(hero).unwrap().has_flag(MOVING));
}

// --- gravity and landing ---

#[test]
fn body_spawned_on_ground_line_settles_on_tiles() {
    let mut world = make_world();
    spawn_ground(&mut world);
    let hero = spawn_hero(&mut world, 120.0, 320.0);

    tick_physics(&mut world);

    let pos = world.get::<MapPosition>(hero).unwrap();
    let body = world.get::<PhysicsBody>(hero).unwrap();
    assert!(approx_eq(pos.y, 304.0));
    assert!(body.grounded);
    assert!(approx_eq(body.velocity_y, 0.0));

    // stays put on later ticks
    tick_physics(&mut world);
    assert!(approx_eq(world.get::<MapPosition>(hero).unwrap().y, 304.0));
}

#[test]
fn body_without_ground_keeps_falling() {
    let mut world = make_world();
    let hero = spawn_hero(&mut world, 120.0, 100.0);

    for _ in 0..3 {
        tick_physics(&mut world);
    }

    // 0.5 + 1.0 + 1.5
    let pos = world.get::<MapPosition>(hero).unwrap();
    let body = world.get::<PhysicsBody>(hero).unwrap();
    assert!(approx_eq(pos.y, 103.0));
    assert!(approx_eq(body.velocity_y, 1.5));
    assert!(!body.grounded);
}

// --- jumping ---

#[test]
fn grounded_jump_sets_upward_velocity_and_plays_sound() {
    let mut world = make_world();
    spawn_ground(&mut world);
    let hero = spawn_hero(&mut world, 120.0, 320.0);
    tick_physics(&mut world);

    set_input(&mut world, false, false, true);
    tick_physics(&mut world);

    let body = world.get::<PhysicsBody>(hero).unwrap();
    assert!(approx_eq(body.velocity_y, -10.0));
    assert!(!body.grounded);
    assert!(read_audio_cmds(&mut world).contains(&AudioCmd::PlayFx {
        id: "jump".to_string()
    }));
}

#[test]
fn airborne_jump_is_ignored() {
    let mut world = make_world();
    let hero = spawn_hero(&mut world, 120.0, 100.0);
    set_input(&mut world, false, false, true);

    tick_physics(&mut world);

    let body = world.get::<PhysicsBody>(hero).unwrap();
    assert!(approx_eq(body.velocity_y, 0.5));
    assert!(read_audio_cmds(&mut world).is_empty());
}

#[test]
fn held_jump_rejumps_on_every_landing() {
    let mut world = make_world();
    spawn_ground(&mut world);
    let hero = spawn_hero(&mut world, 120.0, 320.0);
    tick_physics(&mut world);

    set_input(&mut world, false, false, true);
    let mut jumps = 0;
    for _ in 0..100 {
        tick_physics(&mut world);
        if approx_eq(world.get::<PhysicsBody>(hero).unwrap().velocity_y, -10.0) {
            jumps += 1;
        }
        // never sinks below the ground line
        assert!(world.get::<MapPosition>(hero).unwrap().y <= 304.0 + EPSILON);
    }
    // a jump lasts about 40 ticks
    assert!(jumps >= 2, "jumps = {jumps}");
}

// --- patrol ---

#[test]
fn patrol_stays_within_bounds_for_default_layout() {
    let mut world = make_world();
    spawn_ground(&mut world);
    let a = spawn_enemy(&mut world, 420.0, 320.0, 380.0, 520.0, 1.0);
    let b = spawn_enemy(&mut world, 650.0, 320.0, 600.0, 750.0, -1.0);

    let mut reversals = 0;
    let mut last_dir = world.get::<Patrol>(a).unwrap().direction;
    for _ in 0..1000 {
        tick_physics(&mut world);
        let pa = world.get::<MapPosition>(a).unwrap();
        let pb = world.get::<MapPosition>(b).unwrap();
        assert!((380.0..=520.0).contains(&pa.x), "a.x = {}", pa.x);
        assert!((600.0..=750.0).contains(&pb.x), "b.x = {}", pb.x);
        let dir = world.get::<Patrol>(a).unwrap().direction;
        if dir != last_dir {
            reversals += 1;
            last_dir = dir;
        }
    }
    assert!(reversals > 10);
    // enemies rest on the ground: 320 - 24 / 2
    assert!(approx_eq(world.get::<MapPosition>(a).unwrap().y, 308.0));
}

#[test]
fn patrol_reverses_on_reaching_limit() {
    let mut world = make_world();
    let e = spawn_enemy(&mut world, 518.0, 0.0, 380.0, 520.0, 1.0);
    tick_physics(&mut world);
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().x, 520.0));
    assert_eq!(world.get::<Patrol>(e).unwrap().direction, -1.0);
    tick_physics(&mut world);
    assert!(approx_eq(world.get::<MapPosition>(e).unwrap().x, 518.0));
}

// --- hero/enemy collision ---

fn count_resets(world: &mut World) -> Arc<Mutex<Vec<ResetCause>>> {
    let causes = Arc::new(Mutex::new(Vec::new()));
    let causes_clone = causes.clone();
    world.add_observer(move |trigger: On<LevelResetEvent>| {
        causes_clone.lock().unwrap().push(trigger.event().cause);
    });
    world.flush();
    causes
}

#[test]
fn overlap_triggers_single_reset_and_hit_sound() {
    let mut world = make_world();
    let causes = count_resets(&mut world);
    spawn_hero(&mut world, 120.0, 304.0);
    spawn_enemy(&mut world, 130.0, 308.0, 0.0, 800.0, 1.0);
    spawn_enemy(&mut world, 110.0, 308.0, 0.0, 800.0, 1.0);

    tick_collision(&mut world);

    assert_eq!(*causes.lock().unwrap(), vec![ResetCause::HeroHit]);
    let hits = read_audio_cmds(&mut world)
        .into_iter()
        .filter(|c| *c == AudioCmd::PlayFx { id: "hit".to_string() })
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn touching_edges_is_not_a_hit() {
    let mut world = make_world();
    let causes = count_resets(&mut world);
    // hero box right edge at 136, enemy box left edge at 136
    spawn_hero(&mut world, 120.0, 304.0);
    spawn_enemy(&mut world, 152.0, 308.0, 0.0, 800.0, 1.0);

    tick_collision(&mut world);

    assert!(causes.lock().unwrap().is_empty());
    assert!(read_audio_cmds(&mut world).is_empty());
}

#[test]
fn no_hero_no_collision() {
    let mut world = make_world();
    let causes = count_resets(&mut world);
    spawn_enemy(&mut world, 120.0, 308.0, 0.0, 800.0, 1.0);
    tick_collision(&mut world);
    assert!(causes.lock().unwrap().is_empty());
}
