use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use strider::{
    AssetError, AssetManifest, Entity, EntityId, EntityKind, HostContext, PlayerEntity, ScoreSink,
    WorldParams, AVATAR_SIZE,
};

const DT: f32 = 1.0 / 60.0;
const FRAMES: u32 = 900;

const GROUND_LEVEL: f32 = 600.0;
const GRAVITY: f32 = 15.0;
const PLAYER_X: f32 = 200.0;

// World scroll, px/s leftward
const SCROLL_SPEED: f32 = 240.0;
const SPAWN_X: f32 = 1400.0;
const DESPAWN_X: f32 = -200.0;

const OBSTACLE_SIZE: f32 = 90.0;
const POINT_SIZE: f32 = 60.0;
// Points hang at jump height
const POINT_ALTITUDE: f32 = 280.0;

const SPAWN_PERIOD: u32 = 150;
const JUMP_FRAMES: [u32; 4] = [140, 320, 560, 740];

// Stands in for the host's asset pipeline.
const MANIFEST_JSON: &str = r#"{
    "atlases": [
        { "name": "avatar", "cols": 8, "rows": 2, "path": "avatar.png" }
    ],
    "clips": {
        "run": { "atlas": 0, "row": 0, "frames": 4, "step_time": 0.15 },
        "jump": { "atlas": 0, "row": 1, "frames": 1 },
        "fall": { "atlas": 0, "row": 1, "start_col": 1, "frames": 1 }
    },
    "sounds": {
        "jump": { "path": "sfx/jump.wav" },
        "score": { "path": "sfx/score.wav" },
        "damage": { "path": "sfx/damage.wav" }
    }
}"#;

/// Score counter shared between the avatar's sink and the session log.
#[derive(Clone, Default)]
struct SharedScore(Rc<RefCell<u32>>);

impl SharedScore {
    fn total(&self) -> u32 {
        *self.0.borrow()
    }
}

impl ScoreSink for SharedScore {
    fn add_score(&mut self, amount: u32) {
        *self.0.borrow_mut() += amount;
    }
    fn reset_score(&mut self) {
        *self.0.borrow_mut() = 0;
    }
}

/// A scripted headless session playing the host engine's roles: fixed
/// timestep, spawning, world scroll, overlap-start collision dispatch.
pub struct DemoSession {
    world: WorldParams,
    ctx: HostContext,
    player: PlayerEntity,
    score: SharedScore,
    /// Entities overlapping the avatar last frame, so a contact fires
    /// on_collision once per overlap start.
    touching: Vec<EntityId>,
}

impl DemoSession {
    pub fn new() -> Result<Self, AssetError> {
        let manifest = AssetManifest::from_json(MANIFEST_JSON)?;
        let score = SharedScore::default();
        let spawn = Vec2::new(PLAYER_X, GROUND_LEVEL - AVATAR_SIZE / 2.0);
        let player = PlayerEntity::load(spawn, &manifest, Box::new(score.clone()))?;

        Ok(Self {
            world: WorldParams::new(GROUND_LEVEL, GRAVITY),
            ctx: HostContext::new(),
            player,
            score,
            touching: Vec::new(),
        })
    }

    pub fn run(&mut self) {
        log::info!("session start: {} frames at {:.0} fps", FRAMES, 1.0 / DT);
        for frame in 0..FRAMES {
            self.step(frame);
        }
        log::info!("session over: final score {}", self.score.total());
    }

    fn step(&mut self, frame: u32) {
        self.spawn_scheduled(frame);
        if JUMP_FRAMES.contains(&frame) {
            self.player.jump(&self.world, &mut self.ctx);
        }

        self.ctx.effects.tick(DT, &mut self.player);
        self.player.update(DT, &self.world);
        self.scroll_and_cull();
        self.dispatch_collisions();

        for sound in &self.ctx.sounds {
            log::info!("frame {frame}: sfx {sound:?} (score {})", self.score.total());
        }
        self.ctx.clear_frame_data();
    }

    /// Alternate hazards and pickups marching in from the right.
    fn spawn_scheduled(&mut self, frame: u32) {
        if frame % SPAWN_PERIOD == 30 {
            let id = self.ctx.next_id();
            self.ctx.scene.spawn(
                Entity::new(id, EntityKind::Obstacle)
                    .with_pos(Vec2::new(SPAWN_X, GROUND_LEVEL - OBSTACLE_SIZE / 2.0))
                    .with_size(Vec2::splat(OBSTACLE_SIZE))
                    .with_fitted_collider(),
            );
        }
        if frame % SPAWN_PERIOD == 105 {
            let id = self.ctx.next_id();
            self.ctx.scene.spawn(
                Entity::new(id, EntityKind::Point)
                    .with_pos(Vec2::new(SPAWN_X, GROUND_LEVEL - POINT_ALTITUDE))
                    .with_size(Vec2::splat(POINT_SIZE))
                    .with_fitted_collider(),
            );
        }
    }

    fn scroll_and_cull(&mut self) {
        let mut gone = Vec::new();
        for entity in self.ctx.scene.iter_mut() {
            entity.pos.x -= SCROLL_SPEED * DT;
            if entity.pos.x < DESPAWN_X {
                gone.push(entity.id);
            }
        }
        for id in gone {
            self.ctx.scene.despawn(id);
            self.touching.retain(|t| *t != id);
        }
    }

    fn dispatch_collisions(&mut self) {
        let collider = self.player.collider();
        let pos = self.player.pos();

        let now: Vec<EntityId> = self
            .ctx
            .scene
            .iter()
            .filter(|e| {
                e.collider
                    .is_some_and(|c| collider.overlaps(pos, &c, e.pos))
            })
            .map(|e| e.id)
            .collect();

        for id in &now {
            if !self.touching.contains(id) {
                self.player.on_collision(*id, &mut self.ctx);
            }
        }
        self.touching = now;
    }
}
