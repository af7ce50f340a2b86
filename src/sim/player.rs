//! Player gesture control
//!
//! Slingshot mechanic: the impulse points opposite to the drag (pull back to
//! launch), scaled by a damping constant tuned for a playable arc. Spin is
//! cosmetic but its sign must visually match the sling direction: dragging
//! rightward spins the player clockwise (negative), leftward spins it
//! counter-clockwise.

use glam::Vec2;

use super::physics::PhysicsWorld;
use super::state::Session;
use crate::consts::*;

impl Session {
    /// Record the gesture start point. No physics side effects.
    pub fn begin_gesture(&mut self, point: Vec2) {
        self.gesture_start = Some(point);
    }

    /// Finish a gesture: if the player is resting on a platform, convert the
    /// drag into an impulse plus spin. Degenerate gestures (no recorded
    /// start, zero-length drag) and airborne releases are silent no-ops.
    pub fn end_gesture(&mut self, world: &mut dyn PhysicsWorld, end: Vec2) {
        if !self.is_on_platform(world) {
            return;
        }
        let Some(start) = self.gesture_start else {
            return;
        };

        let d = start - end;
        let length = d.length();
        if length == 0.0 {
            return;
        }

        world.apply_impulse(self.player.body, d * IMPULSE_DAMPING);

        // Overwrites any residual rotation; sign follows the horizontal pull
        let spin = if d.x > 0.0 {
            -length * SPIN_SCALE
        } else {
            length * SPIN_SCALE
        };
        world.set_angular_velocity(self.player.body, spin);

        self.gesture_start = None;
    }

    /// True iff some platform's horizontal extent strictly overlaps the
    /// player's and the player's bottom edge sits within tolerance of that
    /// platform's top. First match short-circuits; only the boolean matters.
    pub fn is_on_platform(&self, world: &dyn PhysicsWorld) -> bool {
        let player = self.player.aabb_at(world.position(self.player.body));
        self.platforms.iter().any(|platform| {
            let plat = platform.aabb();
            player.overlaps_x(&plat)
                && (player.min.y - plat.max.y).abs() <= ON_PLATFORM_TOLERANCE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::physics::testing::MockWorld;
    use proptest::prelude::*;

    const FRAME: Vec2 = Vec2::new(400.0, 800.0);

    /// Session with the player parked dead-center on platform 0
    fn resting_session(world: &mut MockWorld) -> Session {
        let mut session = Session::new(FRAME, 5, world);
        let player_pos = world.position(session.player.body);
        // Platform top flush with the player's bottom edge
        let platform_y = player_pos.y - session.player.size.y / 2.0 - PLATFORM_SIZE.y / 2.0;
        session.platforms[0].pos = Vec2::new(player_pos.x, platform_y);
        session
    }

    #[test]
    fn test_on_platform_detection() {
        let mut world = MockWorld::new();
        let session = resting_session(&mut world);
        assert!(session.is_on_platform(&world));
    }

    #[test]
    fn test_on_platform_vertical_tolerance() {
        let mut world = MockWorld::new();
        let mut session = resting_session(&mut world);
        let player_pos = world.position(session.player.body);

        // 2 units of slack is still "on"
        session.platforms[0].pos.y -= 2.0;
        assert!(session.is_on_platform(&world));

        // 3 units is airborne
        session.platforms[0].pos.y -= 1.0;
        assert!(!session.is_on_platform(&world));

        // Horizontal miss: edges merely touching don't count
        let mut session = resting_session(&mut world);
        session.platforms[0].pos.x = player_pos.x + (PLAYER_SIZE.x + PLATFORM_SIZE.x) / 2.0;
        assert!(!session.is_on_platform(&world));
    }

    #[test]
    fn test_sling_impulse_and_spin() {
        let mut world = MockWorld::new();
        let mut session = resting_session(&mut world);

        // Pull back 20 units leftward of the release point
        session.begin_gesture(Vec2::new(100.0, 100.0));
        session.end_gesture(&mut world, Vec2::new(80.0, 100.0));

        let body = world.body(session.player.body);
        assert_eq!(body.vel, Vec2::new(16.0, 0.0));
        assert_eq!(body.angular_vel, -4.0);
        assert!(session.gesture_start.is_none());
    }

    #[test]
    fn test_gesture_ignored_while_airborne() {
        let mut world = MockWorld::new();
        let mut session = resting_session(&mut world);
        // Lift the player well clear of every platform
        let pos = world.position(session.player.body);
        world.set_position(session.player.body, pos + Vec2::new(0.0, 50.0));

        session.begin_gesture(Vec2::new(100.0, 100.0));
        session.end_gesture(&mut world, Vec2::new(60.0, 40.0));

        assert!(world.impulse_log.is_empty());
        // Start stays recorded: the release never consumed it
        assert!(session.gesture_start.is_some());
    }

    #[test]
    fn test_end_without_begin_is_noop() {
        let mut world = MockWorld::new();
        let mut session = resting_session(&mut world);
        session.end_gesture(&mut world, Vec2::new(60.0, 40.0));
        assert!(world.impulse_log.is_empty());
    }

    #[test]
    fn test_spin_overwrites_previous_rotation() {
        let mut world = MockWorld::new();
        let mut session = resting_session(&mut world);
        world.set_angular_velocity(session.player.body, 9.0);

        session.begin_gesture(Vec2::new(100.0, 100.0));
        session.end_gesture(&mut world, Vec2::new(130.0, 60.0)); // dx < 0: positive spin

        let d = Vec2::new(-30.0, 40.0);
        assert_eq!(world.body(session.player.body).angular_vel, d.length() * 0.2);
    }

    proptest! {
        #[test]
        fn prop_zero_length_gesture_is_noop(x in 0.0f32..400.0, y in 0.0f32..800.0) {
            let mut world = MockWorld::new();
            let mut session = resting_session(&mut world);

            session.begin_gesture(Vec2::new(x, y));
            session.end_gesture(&mut world, Vec2::new(x, y));

            prop_assert!(world.impulse_log.is_empty());
            prop_assert_eq!(world.body(session.player.body).angular_vel, 0.0);
        }

        #[test]
        fn prop_impulse_scales_linearly_with_drag(
            sx in 0.0f32..400.0,
            sy in 0.0f32..800.0,
            ex in 0.0f32..400.0,
            ey in 0.0f32..800.0,
        ) {
            let d = Vec2::new(sx - ex, sy - ey);
            prop_assume!(d.length() > 0.0);

            let mut world = MockWorld::new();
            let mut session = resting_session(&mut world);

            session.begin_gesture(Vec2::new(sx, sy));
            session.end_gesture(&mut world, Vec2::new(ex, ey));

            let (_, impulse) = world.impulse_log[0];
            prop_assert!((impulse.length() - 0.8 * d.length()).abs() < 1e-3);
        }

        #[test]
        fn prop_spin_sign_follows_pull_direction(
            sx in 0.0f32..400.0,
            ex in 0.0f32..400.0,
            dy in -100.0f32..100.0,
        ) {
            prop_assume!(sx != ex);

            let mut world = MockWorld::new();
            let mut session = resting_session(&mut world);

            session.begin_gesture(Vec2::new(sx, 100.0));
            session.end_gesture(&mut world, Vec2::new(ex, 100.0 + dy));

            let spin = world.body(session.player.body).angular_vel;
            if sx > ex {
                // Pulled rightward
                prop_assert!(spin < 0.0);
            } else {
                prop_assert!(spin > 0.0);
            }
        }
    }
}
