//! Per-frame orchestration and the restart transition
//!
//! The frame update runs in a fixed order: camera follow plus platform
//! streaming, then horizontal world wrap, then scoring. Input callbacks
//! (touch began/ended) arrive between frames on the same thread; there is no
//! parallelism anywhere in the session.

use glam::Vec2;
use rand::Rng;

use super::physics::PhysicsWorld;
use super::state::{SceneEvent, Session};
use crate::consts::*;

/// Hit-test query supplied by the rendering layer, standing in for a full
/// scene graph: which tappable controls lie under a scene point. The core
/// only ever asks about the restart control.
pub trait HitTester {
    fn restart_control_at(&self, point: Vec2) -> bool;
}

/// Advance the session by one frame. Call after the physics adapter has
/// stepped and settled.
pub fn tick(session: &mut Session, world: &mut dyn PhysicsWorld) {
    // 1. Camera follow + platform streaming, only once the player has climbed
    //    past the frame's vertical midpoint
    let player_pos = world.position(session.player.body);
    if player_pos.y > session.mid_y() {
        session.camera.follow(player_pos.y);
        session.events.push(SceneEvent::CameraMoved {
            pos: session.camera.pos,
        });
        session.evict_platforms(world);
        session.refill_platforms(world);
    }

    // 2. Horizontal world wrap
    wrap_player_x(session, world);

    // 3. Scoring
    session.update_score(world);
}

/// Keep the player's x within [-margin, frame_width + margin] by teleporting
/// across the opposite edge. Velocity is untouched.
fn wrap_player_x(session: &mut Session, world: &mut dyn PhysicsWorld) {
    let mut pos = world.position(session.player.body);
    let left = -WRAP_MARGIN;
    let right = session.frame.x + WRAP_MARGIN;

    if pos.x < left {
        pos.x = right;
        world.set_position(session.player.body, pos);
    } else if pos.x > right {
        pos.x = left;
        world.set_position(session.player.body, pos);
    }
}

/// Session orchestrator: routes input callbacks and owns the restart
/// transition. The session state machine is Playing -> Restarting ->
/// Playing; restarting completes synchronously inside the callback that
/// triggered it, swapping in a freshly constructed session.
pub struct Game {
    pub session: Session,
}

impl Game {
    pub fn new(frame: Vec2, seed: u64, world: &mut dyn PhysicsWorld) -> Self {
        Self {
            session: Session::new(frame, seed, world),
        }
    }

    /// Touch-down callback: remember the potential sling anchor
    pub fn touch_began(&mut self, point: Vec2) {
        self.session.begin_gesture(point);
    }

    /// Touch-up callback: a tap on the restart control restarts the session,
    /// anything else releases the sling
    pub fn touch_ended(
        &mut self,
        world: &mut dyn PhysicsWorld,
        hit: &dyn HitTester,
        point: Vec2,
    ) {
        if hit.restart_control_at(point) {
            log::info!("restart tapped");
            self.restart(world);
            return;
        }
        self.session.end_gesture(world, point);
    }

    /// Tear down the current session and start a fresh one: score zero,
    /// player back at the frame midpoint, platforms reseeded, camera reset.
    /// The next run's seed is drawn from the old session's RNG so replays
    /// stay reproducible from the original seed.
    pub fn restart(&mut self, world: &mut dyn PhysicsWorld) {
        let frame = self.session.frame;
        let seed = self.session.rng.random();

        let old = std::mem::replace(&mut self.session, Session::new(frame, seed, world));
        old.teardown(world);

        // Reset notification precedes the new session's platform events
        self.session.events.insert(0, SceneEvent::SessionReset);
    }
}
