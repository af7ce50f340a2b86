//! Physics adapter seam
//!
//! The core decides *what* impulses to apply and *which* bodies exist; an
//! external 2D rigid-body simulator owns integration, collision resolution
//! and contact reporting. This module defines the narrow trait the core
//! drives that simulator through, plus the body descriptions and collision
//! filters handed over at body creation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Category bit for the player body
pub const PLAYER_CATEGORY: u32 = 0x1;
/// Category bit for platform bodies
pub const PLATFORM_CATEGORY: u32 = 0x1 << 1;

/// Opaque handle to a body owned by the physics adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Category/contact/collision bitmasks for a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFilter {
    pub category: u32,
    /// Body pairs whose categories intersect this mask report contacts
    pub contact_mask: u32,
    /// Body pairs whose categories intersect this mask resolve collisions
    pub collision_mask: u32,
}

/// Everything the adapter needs to construct a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyDef {
    /// Initial center position
    pub pos: Vec2,
    /// Axis-aligned rectangle extent (width x height)
    pub size: Vec2,
    /// Static bodies ignore gravity and impulses
    pub dynamic: bool,
    pub filter: CollisionFilter,
    pub linear_damping: f32,
    pub friction: f32,
    pub restitution: f32,
    pub allows_rotation: bool,
}

impl BodyDef {
    /// Player body: dynamic, contacts and collides with platforms
    pub fn player(pos: Vec2) -> Self {
        Self {
            pos,
            size: PLAYER_SIZE,
            dynamic: true,
            filter: CollisionFilter {
                category: PLAYER_CATEGORY,
                contact_mask: PLATFORM_CATEGORY,
                collision_mask: PLATFORM_CATEGORY,
            },
            linear_damping: 1.0,
            friction: 1.0,
            restitution: 0.3,
            allows_rotation: true,
        }
    }

    /// Platform body: static, reports contacts with the player
    pub fn platform(pos: Vec2) -> Self {
        Self {
            pos,
            size: PLATFORM_SIZE,
            dynamic: false,
            filter: CollisionFilter {
                category: PLATFORM_CATEGORY,
                contact_mask: PLAYER_CATEGORY,
                collision_mask: 0,
            },
            linear_damping: 0.0,
            friction: 5.0,
            restitution: 0.0,
            allows_rotation: false,
        }
    }
}

/// The external rigid-body simulator, seen from the core.
///
/// Implementations integrate gravity (see [`crate::consts::GRAVITY`]), apply
/// impulses as instantaneous velocity changes, and resolve collisions per the
/// bitmasks in [`CollisionFilter`]. Handles stay valid until `remove_body`.
pub trait PhysicsWorld {
    fn add_body(&mut self, def: BodyDef) -> BodyId;
    fn remove_body(&mut self, body: BodyId);

    /// Instantaneous velocity change on a dynamic body
    fn apply_impulse(&mut self, body: BodyId, impulse: Vec2);
    /// Overwrite (not add to) a body's angular velocity
    fn set_angular_velocity(&mut self, body: BodyId, omega: f32);

    fn velocity(&self, body: BodyId) -> Vec2;
    fn position(&self, body: BodyId) -> Vec2;
    /// Teleport a body without affecting its velocity (used for world wrap)
    fn set_position(&mut self, body: BodyId, pos: Vec2);
}
