use benji_engine::{
    DrawLayer, DrawList, Game, InputSnapshot, Key, LoopCommand, LoopMetricsSnapshot, Vec2,
};
use tracing::{debug, info};

use super::editor::Editor;
use super::props::KeyColor;
use super::sprites::{self, TILE_SPRITE_SIZE, WORLD_SCALE};
use super::world::{GameEvent, World};
use super::PLAY_AREA;

const HUD_HEART_ORIGIN: Vec2 = Vec2::new(16.0, 32.0);
const HUD_KEY_ORIGIN: Vec2 = Vec2::new(410.0, 32.0);
const HUD_SLOT_SPACING: f32 = 70.0;
const HUD_HEART_BORDER: Vec2 = Vec2::new(6.0, 28.0);
const HUD_KEY_BORDER: Vec2 = Vec2::new(400.0, 28.0);
const HUD_WEAPON: Vec2 = Vec2::new(284.0, 32.0);
const HUD_WEAPON_BORDER: Vec2 = Vec2::new(280.0, 28.0);
const BORDER_1_SIZE: Vec2 = Vec2::new(18.0 * WORLD_SCALE, 18.0 * WORLD_SCALE);
const BORDER_3_SIZE: Vec2 = Vec2::new(56.0 * WORLD_SCALE, 18.0 * WORLD_SCALE);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SceneKind {
    MainMenu,
    Game,
    Editor,
    Win,
    Loss,
}

impl SceneKind {
    /// Every scene may (re)enter the game; the rest of the graph is fixed.
    pub(crate) fn can_transition_to(self, next: SceneKind) -> bool {
        matches!(
            (self, next),
            (_, SceneKind::Game)
                | (SceneKind::Game, SceneKind::Editor)
                | (SceneKind::Game, SceneKind::Win)
                | (SceneKind::Game, SceneKind::Loss)
                | (SceneKind::Win | SceneKind::Loss, SceneKind::MainMenu)
        )
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::MainMenu => "main_menu",
            Self::Game => "game",
            Self::Editor => "editor",
            Self::Win => "win",
            Self::Loss => "loss",
        }
    }

    fn prompt(self) -> Option<&'static str> {
        match self {
            Self::MainMenu => Some("Press SPACE to begin your adventure."),
            Self::Win => Some("You win! SPACE to play again, ESCAPE to leave."),
            Self::Loss => Some("You lost! SPACE to retry, ESCAPE to give up."),
            Self::Game | Self::Editor => None,
        }
    }
}

/// Top-level scene machine driven by the loop runner.
pub(crate) struct BenjiGame {
    world: World,
    scene: SceneKind,
    editor: Editor,
}

impl BenjiGame {
    pub(crate) fn new(world: World) -> Self {
        info!(scene = SceneKind::MainMenu.name(), "scene_started");
        Self {
            world,
            scene: SceneKind::MainMenu,
            editor: Editor::default(),
        }
    }

    pub(crate) fn scene(&self) -> SceneKind {
        self.scene
    }

    pub(crate) fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub(crate) fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Enters `next` when the graph allows it. Returns `false` for a no-op.
    pub(crate) fn request(&mut self, next: SceneKind) -> bool {
        if !self.scene.can_transition_to(next) {
            debug!(
                from = self.scene.name(),
                to = next.name(),
                "scene_transition_ignored"
            );
            return false;
        }
        match next {
            SceneKind::Game => self.world.init_game(),
            SceneKind::Editor => self.editor.enter(&mut self.world),
            SceneKind::MainMenu | SceneKind::Win | SceneKind::Loss => {}
        }
        info!(from = self.scene.name(), to = next.name(), "scene_changed");
        self.scene = next;
        true
    }

    /// Keys honored in every scene. Returns `true` when a scene changed.
    fn handle_global_keys(&mut self, input: &InputSnapshot) -> bool {
        if input.is_pressed(Key::C) {
            self.world.toggle_colliders();
        }

        let mut changed = false;
        if input.is_pressed(Key::L) {
            changed |= match self.scene {
                SceneKind::Editor => {
                    self.world.save_overrides();
                    self.request(SceneKind::Game)
                }
                SceneKind::Game => {
                    self.world.delete_game();
                    self.request(SceneKind::Editor)
                }
                _ => {
                    debug!(scene = self.scene.name(), "editor_toggle_ignored");
                    false
                }
            };
        }

        if input.is_pressed(Key::Numpad1) {
            if self.scene == SceneKind::Game {
                self.world.save_character();
                self.world.save_props();
            } else {
                info!(scene = self.scene.name(), "save_ignored_outside_game");
            }
        }
        if input.is_pressed(Key::Numpad2) {
            changed |= self.request(SceneKind::Game);
        }
        if input.is_pressed(Key::Numpad0) {
            self.world.delete_game();
        }
        changed
    }

    fn tick_scene(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) {
        match self.scene {
            SceneKind::MainMenu => {
                if input.is_pressed(Key::Space) {
                    self.request(SceneKind::Game);
                }
            }
            SceneKind::Game => {
                self.world.collisions.compute_collisions(fixed_dt_seconds);
                match self.world.update_game(fixed_dt_seconds, input) {
                    GameEvent::Continue => {}
                    GameEvent::Won => {
                        self.request(SceneKind::Win);
                    }
                    GameEvent::Lost => {
                        self.world.lose();
                        self.request(SceneKind::Loss);
                    }
                }
            }
            SceneKind::Editor => {
                self.world.tiles.advance(fixed_dt_seconds);
                self.editor.tick(&mut self.world, input);
            }
            SceneKind::Win => {
                if input.is_pressed(Key::Escape) {
                    self.world.delete_game();
                    self.request(SceneKind::MainMenu);
                } else if input.is_pressed(Key::Space) {
                    self.world.delete_game();
                    self.request(SceneKind::Game);
                }
            }
            SceneKind::Loss => {
                if input.is_pressed(Key::Escape) {
                    self.request(SceneKind::MainMenu);
                } else if input.is_pressed(Key::Space) {
                    self.request(SceneKind::Game);
                }
            }
        }
    }

    fn draw_hud(&self, draw_list: &mut DrawList) {
        let character = &self.world.character;
        for slot in 0..character.health() {
            let position = HUD_HEART_ORIGIN + Vec2::new(HUD_SLOT_SPACING * slot as f32, 0.0);
            draw_list.sprite(DrawLayer::Hud, sprites::HEART, position, TILE_SPRITE_SIZE);
        }
        draw_list.sprite(
            DrawLayer::Hud,
            sprites::BORDER_3,
            HUD_HEART_BORDER,
            BORDER_3_SIZE,
        );

        draw_list.sprite(
            DrawLayer::Hud,
            sprites::SWORD_STATIC,
            HUD_WEAPON,
            TILE_SPRITE_SIZE,
        );
        draw_list.sprite(
            DrawLayer::Hud,
            sprites::BORDER_1,
            HUD_WEAPON_BORDER,
            BORDER_1_SIZE,
        );

        draw_list.sprite(
            DrawLayer::Hud,
            sprites::BORDER_3,
            HUD_KEY_BORDER,
            BORDER_3_SIZE,
        );
        for color in KeyColor::ALL {
            if !character.has_key(color) {
                continue;
            }
            let position =
                HUD_KEY_ORIGIN + Vec2::new(HUD_SLOT_SPACING * color.index() as f32, 0.0);
            if let Some(key) = sprites::KEYS.get(color.index()).copied() {
                draw_list.sprite(DrawLayer::Hud, key, position, TILE_SPRITE_SIZE);
            }
        }
    }
}

impl Game for BenjiGame {
    fn tick(&mut self, fixed_dt_seconds: f32, input: &InputSnapshot) -> LoopCommand {
        if !self.handle_global_keys(input) {
            self.tick_scene(fixed_dt_seconds, input);
        }
        LoopCommand::Continue
    }

    fn render(&self, draw_list: &mut DrawList) {
        match self.scene {
            SceneKind::MainMenu | SceneKind::Win | SceneKind::Loss => {
                draw_list.sprite(DrawLayer::World, sprites::MAIN_MENU, Vec2::ZERO, PLAY_AREA);
            }
            SceneKind::Game => self.world.draw_play(draw_list),
            SceneKind::Editor => {
                self.world.map.draw_tiles(draw_list, &self.world.tiles);
                self.world.props.draw(draw_list);
                self.editor.draw(draw_list);
            }
        }
        self.draw_hud(draw_list);
    }

    fn window_title(&self, metrics: &LoopMetricsSnapshot) -> Option<String> {
        let detail = match self.scene {
            SceneKind::Editor => self.editor.status(self.world.map.active_id()),
            scene => scene
                .prompt()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Screen {}", self.world.map.active_id())),
        };
        Some(format!(
            "Benji | {detail} | Score: {} | FPS: {:.0}",
            self.world.character.score(),
            metrics.fps
        ))
    }

    fn shutdown(&mut self) {
        info!(
            scene = self.scene.name(),
            score = self.world.character.score(),
            "game_shutdown"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_graph_matches_the_scene_flow() {
        use SceneKind::*;
        assert!(MainMenu.can_transition_to(Game));
        assert!(Game.can_transition_to(Editor));
        assert!(Editor.can_transition_to(Game));
        assert!(Game.can_transition_to(Win));
        assert!(Game.can_transition_to(Loss));
        assert!(Win.can_transition_to(MainMenu));
        assert!(Loss.can_transition_to(Game));

        assert!(!MainMenu.can_transition_to(Editor));
        assert!(!MainMenu.can_transition_to(Win));
        assert!(!Editor.can_transition_to(Win));
        assert!(!Game.can_transition_to(MainMenu));
        assert!(!Loss.can_transition_to(Win));
    }
}
