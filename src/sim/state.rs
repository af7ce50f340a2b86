//! Game state and core simulation types
//!
//! All mutable session state (player, platforms, camera, score, gesture and
//! scoring baselines, RNG) lives in one owned [`Session`] aggregate. Restart
//! is "tear down the old session, construct a new one" - never a partial
//! field-by-field reset.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::physics::{BodyDef, BodyId, PhysicsWorld};
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict open-interval horizontal overlap (touching edges don't count)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x
    }
}

/// The player body. Position and velocity are owned by the physics adapter;
/// the session only keeps the handle and extent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub body: BodyId,
    pub size: Vec2,
}

impl Player {
    /// Bounding box at the adapter-reported position
    pub fn aabb_at(&self, pos: Vec2) -> Aabb {
        Aabb::from_center_size(pos, self.size)
    }
}

/// A platform. Static body, so the cached position is authoritative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub body: BodyId,
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }

    /// Y of the platform's top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Camera tracking the player's ascent
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec2,
}

impl Camera {
    /// Follow the player upward. Monotonic: the camera never moves back down,
    /// even if the player falls.
    pub fn follow(&mut self, player_y: f32) {
        self.pos.y = self.pos.y.max(player_y);
    }
}

/// Notifications for the rendering bridge, drained once per frame.
///
/// The renderer creates/removes visuals and updates camera and score text
/// from these; the simulation never touches drawable state directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// The session was rebuilt from scratch; drop all visuals and re-create
    /// from current state
    SessionReset,
    PlatformAdded { id: u32, pos: Vec2 },
    PlatformRemoved { id: u32 },
    CameraMoved { pos: Vec2 },
    ScoreChanged { score: u32 },
}

/// Complete per-run game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Frame size (width, height); fixed for the session's lifetime
    pub frame: Vec2,
    /// Streamed platform RNG
    pub rng: Pcg32,
    pub player: Player,
    /// Active platforms, front = oldest/lowest, back = newest/highest
    pub platforms: Vec<Platform>,
    pub camera: Camera,
    pub score: u32,
    /// Last at-rest position; baseline for measuring ascent
    pub jump_origin: Option<Vec2>,
    /// Recorded gesture start, live between begin and end callbacks
    pub gesture_start: Option<Vec2>,
    /// Pending notifications for the rendering bridge
    #[serde(skip)]
    pub events: Vec<SceneEvent>,
    next_platform_id: u32,
}

impl Session {
    /// Create a fresh session: player at the frame midpoint, camera centered,
    /// score zero, evenly spaced starting platforms.
    pub fn new(frame: Vec2, seed: u64, world: &mut dyn PhysicsWorld) -> Self {
        let midpoint = frame / 2.0;
        let player = Player {
            body: world.add_body(BodyDef::player(midpoint)),
            size: PLAYER_SIZE,
        };

        let mut session = Self {
            seed,
            frame,
            rng: Pcg32::seed_from_u64(seed),
            player,
            platforms: Vec::with_capacity(PLATFORM_TARGET),
            camera: Camera { pos: midpoint },
            score: 0,
            jump_origin: None,
            gesture_start: None,
            events: Vec::new(),
            next_platform_id: 0,
        };

        session.seed_initial_platforms(world);
        log::info!("session created (seed {seed})");
        session
    }

    /// Y of the frame's vertical midpoint; the camera follows and platforms
    /// stream only once the player has climbed past it
    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.frame.y / 2.0
    }

    /// Allocate a platform ID (unique within the session)
    pub(crate) fn next_platform_id(&mut self) -> u32 {
        let id = self.next_platform_id;
        self.next_platform_id += 1;
        id
    }

    /// Take all pending scene events (call once per frame from the host)
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    /// Remove every body this session owns from the physics world
    pub fn teardown(self, world: &mut dyn PhysicsWorld) {
        world.remove_body(self.player.body);
        for platform in &self.platforms {
            world.remove_body(platform.body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::physics::testing::MockWorld;

    const FRAME: Vec2 = Vec2::new(400.0, 800.0);

    #[test]
    fn test_aabb_overlap_is_strict() {
        let a = Aabb::from_center_size(Vec2::new(0.0, 0.0), Vec2::new(20.0, 40.0));
        let b = Aabb::from_center_size(Vec2::new(60.0, 0.0), Vec2::new(100.0, 20.0));
        // a spans [-10, 10], b spans [10, 110]: edges touch, no strict overlap
        assert!(!a.overlaps_x(&b));

        let c = Aabb::from_center_size(Vec2::new(59.0, 0.0), Vec2::new(100.0, 20.0));
        assert!(a.overlaps_x(&c));
    }

    #[test]
    fn test_camera_follow_is_monotonic() {
        let mut camera = Camera {
            pos: Vec2::new(200.0, 400.0),
        };
        camera.follow(650.0);
        assert_eq!(camera.pos.y, 650.0);
        // Player fell back; camera holds
        camera.follow(500.0);
        assert_eq!(camera.pos.y, 650.0);
    }

    #[test]
    fn test_new_session_state() {
        let mut world = MockWorld::new();
        let session = Session::new(FRAME, 7, &mut world);

        assert_eq!(session.score, 0);
        assert!(session.jump_origin.is_none());
        assert!(session.gesture_start.is_none());
        assert_eq!(session.platforms.len(), PLATFORM_TARGET);
        assert_eq!(world.position(session.player.body), FRAME / 2.0);
        assert_eq!(session.camera.pos, FRAME / 2.0);
        // Player plus ten platforms
        assert_eq!(world.body_count(), 1 + PLATFORM_TARGET);
    }

    #[test]
    fn test_teardown_removes_all_bodies() {
        let mut world = MockWorld::new();
        let session = Session::new(FRAME, 7, &mut world);
        session.teardown(&mut world);
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn test_session_snapshot_round_trip() {
        let mut world = MockWorld::new();
        let session = Session::new(FRAME, 42, &mut world);

        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.seed, session.seed);
        assert_eq!(restored.platforms.len(), session.platforms.len());
        for (a, b) in restored.platforms.iter().zip(&session.platforms) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
