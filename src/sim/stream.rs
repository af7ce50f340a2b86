//! Platform streaming
//!
//! Keeps the active platform set bounded while the camera climbs: new
//! platforms are generated ahead of the topmost one, platforms that fall far
//! enough behind the camera are evicted. The list stays ordered front =
//! oldest/lowest, back = newest/highest, because generation only ever appends
//! above the current top.

use glam::Vec2;
use rand::Rng;

use super::physics::{BodyDef, PhysicsWorld};
use super::state::{Platform, SceneEvent, Session};
use crate::consts::*;

impl Session {
    /// Uniform random platform x within the frame, clear of the edges
    fn random_platform_x(&mut self) -> f32 {
        self.rng
            .random_range(PLATFORM_EDGE_MARGIN..=self.frame.x - PLATFORM_EDGE_MARGIN)
    }

    /// Create a static platform body at `pos` and append it to the active set
    fn spawn_platform(&mut self, world: &mut dyn PhysicsWorld, pos: Vec2) {
        let id = self.next_platform_id();
        let body = world.add_body(BodyDef::platform(pos));
        self.platforms.push(Platform {
            id,
            body,
            pos,
            size: PLATFORM_SIZE,
        });
        self.events.push(SceneEvent::PlatformAdded { id, pos });
    }

    /// Seed the opening layout: evenly spaced rungs every 200 units.
    ///
    /// Intentionally wider than the steady-state streaming spacing; the two
    /// rules are distinct and must stay that way.
    pub(crate) fn seed_initial_platforms(&mut self, world: &mut dyn PhysicsWorld) {
        for i in 0..PLATFORM_TARGET {
            let x = self.random_platform_x();
            let y = i as f32 * SEED_SPACING + SEED_BASE_Y;
            self.spawn_platform(world, Vec2::new(x, y));
        }
    }

    /// Remove every platform more than the eviction margin below the camera.
    ///
    /// The margin guarantees a platform the player could still land on is
    /// never removed.
    pub fn evict_platforms(&mut self, world: &mut dyn PhysicsWorld) {
        let cutoff = self.camera.pos.y - EVICT_MARGIN;
        let mut evicted = 0usize;
        let mut i = 0;
        while i < self.platforms.len() {
            if self.platforms[i].pos.y <= cutoff {
                let platform = self.platforms.remove(i);
                world.remove_body(platform.body);
                self.events.push(SceneEvent::PlatformRemoved { id: platform.id });
                evicted += 1;
            } else {
                i += 1;
            }
        }
        if evicted > 0 {
            log::debug!("evicted {evicted} platforms below y={cutoff}");
        }
    }

    /// Generate platforms until the active count is back at target, each one
    /// spaced above the current topmost platform
    pub fn refill_platforms(&mut self, world: &mut dyn PhysicsWorld) {
        while self.platforms.len() < PLATFORM_TARGET {
            let top_y = self.platforms.last().map_or(0.0, |p| p.pos.y);
            let x = self.random_platform_x();
            self.spawn_platform(world, Vec2::new(x, top_y + PLATFORM_SPACING));
        }
    }
}
