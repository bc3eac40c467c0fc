use benji_engine::{
    ColliderDesc, ColliderRole, CollisionManager, FileStore, Game, InputSnapshot, Key,
    KeyValueStore, MemoryStore, MouseButton, PhysicsMode, Vec2,
};
use tempfile::TempDir;

use super::character::{Character, HurtOutcome, START_POSITION};
use super::map::{cell_to_world, Direction, Grid};
use super::prop_manager::PropManager;
use super::props::{KeyColor, PatrolAxis, Prop, PropKind};
use super::save::{self, PropsSaveGame, ACTIVE_SCREEN_KEY, CHARACTER_KEY, PROPS_SAVE_KEY};
use super::scenes::{BenjiGame, SceneKind};
use super::world::{GameEvent, World};

const DT: f32 = 1.0 / 60.0;

fn memory_world() -> World {
    World::new(Box::new(MemoryStore::default()))
}

/// A started game on screen 0 with every prop removed.
fn empty_playing_world() -> World {
    let mut world = memory_world();
    world.init_game();
    world.props.clear(&mut world.collisions);
    world
}

fn step(world: &mut World, input: &InputSnapshot) -> GameEvent {
    world.collisions.compute_collisions(DT);
    world.update_game(DT, input)
}

fn idle(world: &mut World) -> GameEvent {
    step(world, &InputSnapshot::empty())
}

fn spawn(world: &mut World, kind: PropKind, position: Vec2) {
    world
        .props
        .spawn(kind, position, Some(&mut world.collisions));
}

fn press(game: &mut BenjiGame, input: InputSnapshot) {
    game.tick(DT, &input);
}

fn press_key(game: &mut BenjiGame, key: Key) {
    press(game, InputSnapshot::empty().with_key_pressed(key));
}

fn first_prop(world: &World) -> &Prop {
    world.props.iter().next().expect("one prop")
}

#[test]
fn disjoint_and_edge_touching_rectangles_never_collide() {
    let mut collisions = CollisionManager::default();
    let size = Vec2::splat(64.0);
    let a = collisions.register(ColliderDesc::new(Vec2::ZERO, size, PhysicsMode::Simulated));
    let b = collisions.register(ColliderDesc::new(
        Vec2::new(64.0, 0.0),
        size,
        PhysicsMode::Simulated,
    ));
    let c = collisions.register(ColliderDesc::new(
        Vec2::new(300.0, 300.0),
        size,
        PhysicsMode::Kinematic,
    ));

    let stats = collisions.compute_collisions(DT);
    assert_eq!(stats.overlapping_pairs, 0);
    for id in [a, b, c] {
        let collider = collisions.get(id).expect("collider");
        assert!(!collider.is_colliding());
        assert!(collider.contacts().is_empty());
    }
    assert_eq!(collisions.position(a), Some(Vec2::ZERO));
}

#[test]
fn overlapping_pair_is_listed_once_in_either_registration_order() {
    for reversed in [false, true] {
        let mut collisions = CollisionManager::default();
        let player = ColliderDesc::new(Vec2::ZERO, Vec2::splat(56.0), PhysicsMode::Simulated)
            .with_role(ColliderRole::Player);
        let coin = ColliderDesc::new(Vec2::new(20.0, 20.0), Vec2::splat(64.0), PhysicsMode::Trigger);
        let (player_id, coin_id) = if reversed {
            let coin_id = collisions.register(coin);
            (collisions.register(player), coin_id)
        } else {
            let player_id = collisions.register(player);
            (player_id, collisions.register(coin))
        };

        let stats = collisions.compute_collisions(DT);
        assert_eq!(stats.overlapping_pairs, 1, "reversed={reversed}");

        let coin_collider = collisions.get(coin_id).expect("coin");
        assert!(coin_collider.is_colliding());
        assert_eq!(coin_collider.contacts().len(), 1);
        assert_eq!(coin_collider.contacts()[0].other, player_id);
        assert!(coin_collider.touches_role(ColliderRole::Player));

        let player_collider = collisions.get(player_id).expect("player");
        assert_eq!(player_collider.contacts().len(), 1);
        assert_eq!(player_collider.contacts()[0].other, coin_id);
    }
}

#[test]
fn trigger_and_kinematic_pairs_are_not_pushed() {
    let mut world = empty_playing_world();
    spawn(&mut world, PropKind::Coin, START_POSITION);
    spawn(&mut world, PropKind::Wall, Vec2::new(500.0, 300.0));
    spawn(&mut world, PropKind::Rock { heavy: true }, Vec2::new(520.0, 310.0));

    let body = world.character.body().expect("body");
    let before = world.collisions.position(body);
    let stats = world.collisions.compute_collisions(DT);

    assert_eq!(stats.overlapping_pairs, 2);
    assert_eq!(stats.resolved_pairs, 0);
    assert_eq!(world.collisions.position(body), before);
    let positions: Vec<Vec2> = world
        .props
        .iter()
        .filter_map(|prop| prop.collider())
        .filter_map(|id| world.collisions.position(id))
        .collect();
    assert_eq!(
        positions,
        vec![START_POSITION, Vec2::new(500.0, 300.0), Vec2::new(520.0, 310.0)]
    );
}

#[test]
fn simulated_rock_is_pushed_off_a_wall() {
    let mut world = empty_playing_world();
    spawn(&mut world, PropKind::Wall, Vec2::new(500.0, 300.0));
    spawn(&mut world, PropKind::Rock { heavy: false }, Vec2::new(540.0, 300.0));

    world.collisions.compute_collisions(DT);
    let rock = world.props.iter().nth(1).expect("rock");
    let position = world
        .collisions
        .position(rock.collider().expect("collider"))
        .expect("position");
    assert!(position.x > 540.0);
    assert_eq!(position.y, 300.0);
}

#[test]
fn zero_vector_normalize_is_a_no_op() {
    let mut zero = Vec2::ZERO;
    zero.normalize();
    assert_eq!(zero, Vec2::ZERO);
    assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
}

#[test]
fn hurt_is_gated_by_immunity_and_loss_fires_once() {
    let mut collisions = CollisionManager::default();
    let mut character = Character::default();
    let wait_out_immunity = |character: &mut Character, collisions: &mut CollisionManager| {
        for _ in 0..49 {
            character.update(DT, &InputSnapshot::empty(), collisions);
        }
    };

    assert_eq!(character.hurt(1), HurtOutcome::Damaged);
    assert_eq!(character.health(), 2);
    assert!(character.is_immune());
    assert_eq!(character.hurt(1), HurtOutcome::Ignored);
    assert_eq!(character.health(), 2);

    wait_out_immunity(&mut character, &mut collisions);
    assert!(!character.is_immune());
    assert_eq!(character.hurt(1), HurtOutcome::Damaged);
    assert_eq!(character.health(), 1);

    wait_out_immunity(&mut character, &mut collisions);
    assert_eq!(character.hurt(1), HurtOutcome::Died);
    assert_eq!(character.health(), 0);

    wait_out_immunity(&mut character, &mut collisions);
    assert_eq!(character.hurt(1), HurtOutcome::Ignored);
    assert_eq!(character.health(), 0);
}

#[test]
fn coin_is_picked_up_exactly_once() {
    let mut world = empty_playing_world();
    spawn(&mut world, PropKind::Coin, START_POSITION);
    let colliders_with_coin = world.collisions.len();

    assert_eq!(idle(&mut world), GameEvent::Continue);
    assert_eq!(world.character.score(), 1);
    assert!(world.props.is_empty());
    assert_eq!(world.collisions.len(), colliders_with_coin - 1);

    idle(&mut world);
    assert_eq!(world.character.score(), 1);
}

#[test]
fn red_door_opens_only_after_the_red_key() {
    let mut world = empty_playing_world();
    let door_position = START_POSITION + Vec2::new(40.0, 0.0);
    spawn(&mut world, PropKind::Door(KeyColor::Red), door_position);

    idle(&mut world);
    assert_eq!(world.props.len(), 1, "locked door stays");
    assert!(!world.character.has_key(KeyColor::Red));

    spawn(&mut world, PropKind::Key(KeyColor::Red), START_POSITION);
    world
        .character
        .set_position(START_POSITION, &mut world.collisions);
    idle(&mut world);
    assert!(world.character.has_key(KeyColor::Red));
    assert!(!world.character.has_key(KeyColor::Green));
    assert!(world
        .props
        .iter()
        .all(|prop| !matches!(prop.kind(), PropKind::Key(_))));

    world
        .character
        .set_position(START_POSITION, &mut world.collisions);
    idle(&mut world);
    assert!(world.props.is_empty(), "door removed once the key is held");
}

#[test]
fn green_door_ignores_the_red_key() {
    let mut world = empty_playing_world();
    world.character.collect_key(KeyColor::Red);
    spawn(
        &mut world,
        PropKind::Door(KeyColor::Green),
        START_POSITION + Vec2::new(40.0, 0.0),
    );
    idle(&mut world);
    assert_eq!(world.props.len(), 1);
}

#[test]
fn enemy_patrols_between_its_waypoints() {
    let mut world = empty_playing_world();
    let spawn_at = Vec2::new(320.0, 320.0);
    spawn(
        &mut world,
        PropKind::from_code(6, spawn_at).expect("enemy"),
        spawn_at,
    );

    for _ in 0..60 {
        idle(&mut world);
    }
    let enemy = first_prop(&world);
    assert!(enemy.position().x < spawn_at.x, "heading for the west waypoint");
    assert_eq!(enemy.position().y, spawn_at.y);
    match enemy.kind() {
        PropKind::Enemy(patrol) => {
            assert_eq!(patrol.axis, PatrolAxis::Horizontal);
            assert_eq!(patrol.current_waypoint, 0);
        }
        other => panic!("unexpected kind: {other:?}"),
    }

    for _ in 0..140 {
        idle(&mut world);
    }
    let enemy = first_prop(&world);
    match enemy.kind() {
        PropKind::Enemy(patrol) => assert_eq!(patrol.current_waypoint, 1),
        other => panic!("unexpected kind: {other:?}"),
    }
    assert!(enemy.position().x > 128.0 + 40.0);

    let mut wrapped = false;
    for _ in 0..600 {
        idle(&mut world);
        if patrol_waypoint(first_prop(&world)) == 0 {
            wrapped = true;
            break;
        }
    }
    assert!(wrapped, "east waypoint reached");
    let turned_at = first_prop(&world).position().x;
    assert!(turned_at > 512.0 - 68.0 - 1.0);

    idle(&mut world);
    let enemy = first_prop(&world);
    assert_eq!(patrol_waypoint(enemy), 0);
    assert!(enemy.position().x < turned_at, "heading west again");
}

fn patrol_waypoint(prop: &Prop) -> usize {
    match prop.kind() {
        PropKind::Enemy(patrol) => patrol.current_waypoint,
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn enemy_contact_hurts_and_removes_the_enemy() {
    let mut world = empty_playing_world();
    spawn(
        &mut world,
        PropKind::from_code(7, START_POSITION).expect("enemy"),
        START_POSITION,
    );
    idle(&mut world);
    assert_eq!(world.character.health(), 2);
    assert!(world.props.is_empty());
    assert_eq!(world.character.score(), 0);
}

#[test]
fn sword_and_body_contact_in_one_tick_both_apply() {
    let mut world = empty_playing_world();
    let attack = InputSnapshot::empty().with_key_pressed(Key::Space);
    step(&mut world, &attack);
    assert!(world.character.is_attacking());

    let between = START_POSITION + Vec2::new(0.0, -40.0);
    spawn(
        &mut world,
        PropKind::from_code(6, between).expect("enemy"),
        between,
    );
    idle(&mut world);
    assert_eq!(world.character.score(), 1);
    assert_eq!(world.character.health(), 2);
    assert!(world.props.is_empty());
}

#[test]
fn sword_kills_enemy_without_hurting() {
    let mut world = empty_playing_world();
    step(&mut world, &InputSnapshot::empty().with_key_pressed(Key::Space));

    let ahead = START_POSITION + Vec2::new(0.0, -80.0);
    spawn(
        &mut world,
        PropKind::from_code(6, ahead).expect("enemy"),
        ahead,
    );
    idle(&mut world);
    assert_eq!(world.character.score(), 1);
    assert_eq!(world.character.health(), 3);
    assert!(world.props.is_empty());
}

#[test]
fn chest_contact_wins() {
    let mut world = empty_playing_world();
    spawn(&mut world, PropKind::Chest, START_POSITION);
    assert_eq!(idle(&mut world), GameEvent::Won);
    assert_eq!(world.props.len(), 1, "chest is not removed");
}

#[test]
fn crossing_north_switches_to_the_connected_screen() {
    let mut world = memory_world();
    world.init_game();
    let props_on_first_screen = world.props.len();

    world
        .character
        .set_position(Vec2::new(150.0, 550.0), &mut world.collisions);
    assert_eq!(world.check_edges(), Some(Direction::North));

    assert_eq!(world.map.active_id(), 1);
    assert_eq!(world.character.position(), Vec2::new(150.0, 0.0));
    assert_eq!(world.collisions.len(), 2 + world.props.len());

    let mut fresh = PropManager::default();
    fresh.build_from_layout(world.map.active().props(), None);
    assert_eq!(world.props.snapshot(), fresh.snapshot());

    let active: usize = save::read_json(world.store(), ACTIVE_SCREEN_KEY)
        .expect("read")
        .expect("active screen saved");
    assert_eq!(active, 1);
    let saves: PropsSaveGame = save::read_json(world.store(), PROPS_SAVE_KEY)
        .expect("read")
        .expect("props saved");
    assert_eq!(saves.get(&0).map(Vec::len), Some(props_on_first_screen));
}

#[test]
fn unconnected_edges_clamp_the_character() {
    let mut world = memory_world();
    world.init_game();

    world
        .character
        .set_position(Vec2::new(-40.0, 200.0), &mut world.collisions);
    assert_eq!(world.check_edges(), None);
    assert_eq!(world.character.position(), Vec2::new(-32.0, 200.0));

    world
        .character
        .set_position(Vec2::new(200.0, -50.0), &mut world.collisions);
    assert_eq!(world.check_edges(), None);
    assert_eq!(world.character.position(), Vec2::new(200.0, -32.0));
    assert_eq!(world.map.active_id(), 0);

    let body = world.character.body().expect("body");
    assert_eq!(
        world.collisions.position(body),
        Some(Vec2::new(204.0, -28.0))
    );
}

#[test]
fn returning_to_a_screen_restores_its_saved_props() {
    let mut world = memory_world();
    world.init_game();
    let coins_before = world
        .props
        .iter()
        .filter(|prop| matches!(prop.kind(), PropKind::Coin))
        .count();
    assert!(coins_before > 0);

    let coin_position = world
        .props
        .iter()
        .find(|prop| matches!(prop.kind(), PropKind::Coin))
        .map(Prop::position)
        .expect("coin");
    world
        .character
        .set_position(coin_position, &mut world.collisions);
    idle(&mut world);
    assert_eq!(world.character.score(), 1);

    world
        .character
        .set_position(Vec2::new(150.0, 550.0), &mut world.collisions);
    assert_eq!(world.check_edges(), Some(Direction::North));
    world
        .character
        .set_position(Vec2::new(150.0, -40.0), &mut world.collisions);
    assert_eq!(world.check_edges(), Some(Direction::South));

    assert_eq!(world.map.active_id(), 0);
    assert_eq!(world.character.position(), Vec2::new(150.0, 512.0));
    let coins_after = world
        .props
        .iter()
        .filter(|prop| matches!(prop.kind(), PropKind::Coin))
        .count();
    assert_eq!(coins_after, coins_before - 1);
}

#[test]
fn saved_progress_survives_a_restart() {
    let temp = TempDir::new().expect("temp dir");
    let coin_at = Vec2::new(640.0, 320.0);
    {
        let mut world = World::new(Box::new(FileStore::new(temp.path())));
        world.init_game();
        world.props.clear(&mut world.collisions);
        spawn(&mut world, PropKind::Coin, coin_at);
        world.character.add_score(5);
        world.character.collect_key(KeyColor::Green);
        world
            .character
            .set_position(Vec2::new(300.0, 200.0), &mut world.collisions);
        world.save_character();
        world.save_props();
    }

    let mut world = World::new(Box::new(FileStore::new(temp.path())));
    world.init_game();
    assert_eq!(world.map.active_id(), 0);
    assert_eq!(world.character.score(), 5);
    assert_eq!(world.character.keys_held(), [false, true, false]);
    assert_eq!(world.character.position(), Vec2::new(300.0, 200.0));
    assert_eq!(world.character.health(), 3);
    assert_eq!(world.props.len(), 1);
    assert_eq!(first_prop(&world).position(), coin_at);
    assert_eq!(world.collisions.len(), 3);
}

#[test]
fn malformed_save_falls_back_to_the_layout() {
    let mut store = MemoryStore::default();
    store.set(PROPS_SAVE_KEY, "{\"0\": [{\"kind\": \"dragon\"}]}").expect("set");
    store.set(CHARACTER_KEY, "not json").expect("set");
    store.set(ACTIVE_SCREEN_KEY, "\"north\"").expect("set");

    let mut world = World::new(Box::new(store));
    world.init_game();
    let expected = world
        .map
        .active()
        .props()
        .iter()
        .flatten()
        .filter(|code| **code != 0)
        .count();
    assert_eq!(world.map.active_id(), 0);
    assert_eq!(world.props.len(), expected);
    assert_eq!(world.character.score(), 0);
}

#[test]
fn delete_game_forgets_progress() {
    let mut world = memory_world();
    world.init_game();
    world.character.add_score(3);
    world.save_character();
    world.save_props();

    world.delete_game();
    assert_eq!(world.character.score(), 0);
    assert_eq!(world.character.position(), START_POSITION);
    for key in [PROPS_SAVE_KEY, ACTIVE_SCREEN_KEY, CHARACTER_KEY] {
        assert_eq!(world.store().get(key).expect("get"), None, "key={key}");
    }
}

#[test]
fn main_menu_space_starts_the_game() {
    let mut game = BenjiGame::new(memory_world());
    assert_eq!(game.scene(), SceneKind::MainMenu);

    press_key(&mut game, Key::Escape);
    assert_eq!(game.scene(), SceneKind::MainMenu);

    press_key(&mut game, Key::Space);
    assert_eq!(game.scene(), SceneKind::Game);
    assert!(!game.world().props.is_empty());
}

#[test]
fn invalid_transitions_are_ignored() {
    let mut game = BenjiGame::new(memory_world());
    assert!(!game.request(SceneKind::Win));
    assert!(!game.request(SceneKind::Editor));
    assert_eq!(game.scene(), SceneKind::MainMenu);

    press_key(&mut game, Key::L);
    assert_eq!(game.scene(), SceneKind::MainMenu);
}

#[test]
fn save_key_is_ignored_outside_the_game() {
    let mut game = BenjiGame::new(memory_world());
    press_key(&mut game, Key::Numpad1);
    assert_eq!(game.world().store().get(CHARACTER_KEY).expect("get"), None);

    press_key(&mut game, Key::Space);
    press_key(&mut game, Key::Numpad1);
    assert!(game
        .world()
        .store()
        .get(CHARACTER_KEY)
        .expect("get")
        .is_some());
}

#[test]
fn load_key_enters_the_game_from_any_menu() {
    let mut game = BenjiGame::new(memory_world());
    press_key(&mut game, Key::Numpad2);
    assert_eq!(game.scene(), SceneKind::Game);
}

#[test]
fn chest_leads_to_win_and_restart_deletes_the_save() {
    let mut game = BenjiGame::new(memory_world());
    press_key(&mut game, Key::Space);
    press_key(&mut game, Key::Numpad1);

    let world = game.world_mut();
    world.props.clear(&mut world.collisions);
    spawn(world, PropKind::Chest, START_POSITION);
    game.tick(DT, &InputSnapshot::empty());
    assert_eq!(game.scene(), SceneKind::Win);

    press_key(&mut game, Key::Space);
    assert_eq!(game.scene(), SceneKind::Game);
    assert_eq!(game.world().store().get(PROPS_SAVE_KEY).expect("get"), None);
    assert_eq!(game.world().character.score(), 0);
}

#[test]
fn lava_drains_health_into_the_loss_screen() {
    let mut game = BenjiGame::new(memory_world());
    press_key(&mut game, Key::Space);

    let world = game.world_mut();
    world.map.set_active(1);
    world.props.clear(&mut world.collisions);
    spawn(world, PropKind::Lava, START_POSITION);

    for _ in 0..300 {
        game.tick(DT, &InputSnapshot::empty());
        if game.scene() != SceneKind::Game {
            break;
        }
    }
    assert_eq!(game.scene(), SceneKind::Loss);
    assert_eq!(game.world().character.health(), 0);
    assert_eq!(game.world().map.active_id(), 0);

    press_key(&mut game, Key::Escape);
    assert_eq!(game.scene(), SceneKind::MainMenu);
    press_key(&mut game, Key::Space);
    assert_eq!(game.world().character.health(), 3);
}

#[test]
fn editor_paints_props_and_persists_overrides() {
    let mut game = BenjiGame::new(memory_world());
    press_key(&mut game, Key::Space);
    press_key(&mut game, Key::L);
    assert_eq!(game.scene(), SceneKind::Editor);
    assert!(game.world().collisions.is_empty(), "play collisions suspended");
    assert_eq!(game.world().map.active_id(), 0);

    press_key(&mut game, Key::M);
    press(
        &mut game,
        InputSnapshot::empty()
            .with_key_pressed(Key::Digit4)
            .with_cursor_position_px(Some(Vec2::new(130.0, 70.0)))
            .with_mouse_pressed(MouseButton::Left),
    );
    assert_eq!(game.editor().item(), 4);
    assert_eq!(game.editor().cell(), (2, 1));
    assert_eq!(game.world().map.active().props()[1][2], 4);
    assert!(game
        .world()
        .props
        .iter()
        .any(|prop| matches!(prop.kind(), PropKind::Coin)
            && prop.position() == cell_to_world(2, 1)));
    assert!(game.world().props.iter().all(|prop| prop.collider().is_none()));

    press(
        &mut game,
        InputSnapshot::empty()
            .with_cursor_position_px(Some(Vec2::new(130.0, 70.0)))
            .with_mouse_down(MouseButton::Right, true),
    );
    assert_eq!(game.world().map.active().props()[1][2], 0);

    press(
        &mut game,
        InputSnapshot::empty()
            .with_cursor_position_px(Some(Vec2::new(130.0, 70.0)))
            .with_mouse_down(MouseButton::Left, true),
    );
    press_key(&mut game, Key::L);
    assert_eq!(game.scene(), SceneKind::Game);

    let stored: Grid = save::read_json(game.world().store(), &save::props_key(0))
        .expect("read")
        .expect("override saved");
    assert_eq!(stored[1][2], 4);
    assert!(!game.world().collisions.is_empty());
}

#[test]
fn editor_clicks_on_the_hud_paint_nothing() {
    let mut game = BenjiGame::new(memory_world());
    press_key(&mut game, Key::Space);
    press_key(&mut game, Key::L);
    let plan_before = *game.world().map.active().plan();
    let props_before = *game.world().map.active().props();

    press(
        &mut game,
        InputSnapshot::empty()
            .with_key_pressed(Key::Digit3)
            .with_cursor_position_px(Some(Vec2::new(130.0, 620.0)))
            .with_mouse_pressed(MouseButton::Left),
    );
    press_key(&mut game, Key::M);
    press(
        &mut game,
        InputSnapshot::empty()
            .with_cursor_position_px(Some(Vec2::new(130.0, 600.0)))
            .with_mouse_down(MouseButton::Right, true),
    );

    assert_eq!(game.editor().cell(), (0, 0));
    assert_eq!(*game.world().map.active().plan(), plan_before);
    assert_eq!(*game.world().map.active().props(), props_before);
}

#[test]
fn editor_item_is_clamped_to_the_layer_range() {
    let mut game = BenjiGame::new(memory_world());
    press_key(&mut game, Key::Space);
    press_key(&mut game, Key::L);

    press_key(&mut game, Key::Digit9);
    assert_eq!(game.editor().item(), 5, "tiles stop at sand");

    press(&mut game, InputSnapshot::empty().with_scroll_steps(1));
    assert_eq!(game.editor().item(), 4);

    for _ in 0..10 {
        press(&mut game, InputSnapshot::empty().with_scroll_steps(1));
    }
    assert_eq!(game.editor().item(), 1);

    press_key(&mut game, Key::M);
    for _ in 0..20 {
        press(&mut game, InputSnapshot::empty().with_scroll_steps(-1));
    }
    assert_eq!(game.editor().item(), 14);
}

#[test]
fn editor_moves_only_along_connections() {
    let mut game = BenjiGame::new(memory_world());
    press_key(&mut game, Key::Space);
    press_key(&mut game, Key::L);

    press_key(&mut game, Key::S);
    assert_eq!(game.world().map.active_id(), 0, "screen 0 has no south exit");

    press_key(&mut game, Key::W);
    assert_eq!(game.world().map.active_id(), 1);
    press_key(&mut game, Key::A);
    assert_eq!(game.world().map.active_id(), 2);
    assert!(game.world().collisions.is_empty());
}
