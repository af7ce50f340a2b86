//! Sling Hop - an endless vertical-jump platformer core
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (gesture impulses, platform
//!   streaming, scoring, per-frame orchestration)
//!
//! Rendering and view bootstrapping live outside this crate: a host drains
//! [`sim::SceneEvent`]s to keep visuals in sync and supplies a
//! [`sim::PhysicsWorld`] implementation for rigid-body simulation.

pub mod sim;

pub use sim::{Game, PhysicsWorld, Session};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// World gravity applied by the physics adapter
    pub const GRAVITY: Vec2 = Vec2::new(0.0, -5.0);

    /// Player body size (width x height)
    pub const PLAYER_SIZE: Vec2 = Vec2::new(20.0, 40.0);
    /// Platform body size (width x height)
    pub const PLATFORM_SIZE: Vec2 = Vec2::new(100.0, 20.0);

    /// Number of platforms kept active
    pub const PLATFORM_TARGET: usize = 10;
    /// Vertical spacing between streamed platforms
    pub const PLATFORM_SPACING: f32 = 100.0;
    /// Vertical spacing between initially seeded platforms (wider than the
    /// steady-state spacing so the opening screen reads as a ladder)
    pub const SEED_SPACING: f32 = 200.0;
    /// Vertical offset of the lowest seeded platform
    pub const SEED_BASE_Y: f32 = 100.0;
    /// Horizontal margin keeping platform centers away from the frame edges
    pub const PLATFORM_EDGE_MARGIN: f32 = 50.0;
    /// Platforms further than this below the camera are evicted
    pub const EVICT_MARGIN: f32 = 400.0;

    /// Gesture displacement to impulse scale
    pub const IMPULSE_DAMPING: f32 = 0.8;
    /// Gesture length to angular velocity scale
    pub const SPIN_SCALE: f32 = 0.2;

    /// Net upward displacement (while at rest) that scores a point
    pub const ASCENT_THRESHOLD: f32 = 20.0;
    /// Vertical slack when testing whether the player sits on a platform
    pub const ON_PLATFORM_TOLERANCE: f32 = 2.0;

    /// Horizontal wrap margin beyond the frame edges
    pub const WRAP_MARGIN: f32 = 50.0;
}
