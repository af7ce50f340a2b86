//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Frame-synchronous, single-threaded updates
//! - No rendering or platform dependencies (physics and hit-testing arrive
//!   through narrow traits)

pub mod physics;
pub mod player;
pub mod score;
pub mod state;
pub mod stream;
pub mod tick;

pub use physics::{BodyDef, BodyId, CollisionFilter, PhysicsWorld, PLATFORM_CATEGORY, PLAYER_CATEGORY};
pub use state::{Aabb, Camera, Platform, Player, SceneEvent, Session};
pub use tick::{Game, HitTester, tick};
