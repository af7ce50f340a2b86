//! Ascent scoring
//!
//! Observed once per frame after physics settles. Scoring only happens while
//! the player is verifiably at rest on a platform: vertical velocity exactly
//! zero (a settled body reports 0.0 from the adapter) and the on-platform
//! test passing. The first at-rest observation only establishes the baseline
//! and never scores; this one-frame debounce is deliberate and changing it
//! alters the scoring cadence.

use super::physics::PhysicsWorld;
use super::state::{SceneEvent, Session};
use crate::consts::*;

impl Session {
    /// Score one point per net ascent beyond the threshold, measured between
    /// at-rest observations. The baseline moves to the scoring position
    /// immediately, so the same ascent can't score twice.
    pub fn update_score(&mut self, world: &mut dyn PhysicsWorld) {
        let velocity = world.velocity(self.player.body);
        if velocity.y != 0.0 || !self.is_on_platform(world) {
            return;
        }

        let pos = world.position(self.player.body);
        let Some(origin) = self.jump_origin else {
            self.jump_origin = Some(pos);
            return;
        };

        if pos.y - origin.y > ASCENT_THRESHOLD {
            self.score += 1;
            self.jump_origin = Some(pos);
            self.events.push(SceneEvent::ScoreChanged { score: self.score });
        }
    }
}
