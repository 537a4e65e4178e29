//! Time-driven values for the whole-view rotation and the shared arc sweep.
//!
//! Every animated quantity is a pure function of elapsed time; the group only
//! decides whether elapsed time advances.

use crate::math::{lerp, CubicBezier};
use std::time::Duration;

/// One full turn of the view
pub const ROTATION_DURATION: Duration = Duration::from_millis(1600);
/// One pass of the sweep from `MIN_SWEEP` to `MAX_SWEEP` (or back)
pub const SWEEP_DURATION: Duration = Duration::from_millis(800);

pub const MIN_SWEEP: f64 = 5.0;
pub const MAX_SWEEP: f64 = 105.0;

pub const SWEEP_CURVE: CubicBezier = CubicBezier::new(1.0, 0.0, 0.0, 1.0);

/// How an animation's fraction is shaped
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    Bezier(CubicBezier),
}

impl Easing {
    pub fn apply(&self, fraction: f64) -> f64 {
        match self {
            Easing::Linear => fraction,
            Easing::Bezier(curve) => curve.ease(fraction),
        }
    }
}

/// What happens at the end of each iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatMode {
    /// Snap back to the start value
    Restart,
    /// Play the next iteration backwards
    Reverse,
}

/// An infinitely repeating animation between two values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub easing: Easing,
    pub repeat: RepeatMode,
}

impl Animation {
    /// Value after `elapsed` time of uninterrupted playback
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let period = self.duration.as_nanos();
        if period == 0 {
            return self.to;
        }
        let elapsed = elapsed.as_nanos();
        let iteration = elapsed / period;
        let mut fraction = (elapsed % period) as f64 / period as f64;
        if self.repeat == RepeatMode::Reverse && iteration % 2 == 1 {
            fraction = 1.0 - fraction;
        }
        lerp(self.from, self.to, self.easing.apply(fraction))
    }
}

/// Linear 0..360 degree spin that restarts every period
pub fn rotation_animation() -> Animation {
    Animation {
        from: 0.0,
        to: 360.0,
        duration: ROTATION_DURATION,
        easing: Easing::Linear,
        repeat: RepeatMode::Restart,
    }
}

/// Eased 5..105 degree sweep that ping-pongs
pub fn sweep_animation() -> Animation {
    Animation {
        from: MIN_SWEEP,
        to: MAX_SWEEP,
        duration: SWEEP_DURATION,
        easing: Easing::Bezier(SWEEP_CURVE),
        repeat: RepeatMode::Reverse,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Values sampled from the group at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupFrame {
    /// Whole-view rotation in degrees, in `[0, 360)`
    pub rotation: f64,
    /// Sweep shared by all three arcs, in `[5, 105]`
    pub sweep: f64,
}

/// The rotation and sweep animations sharing a single clock
#[derive(Debug, Clone)]
pub struct AnimationGroup {
    rotation: Animation,
    sweep: Animation,
    elapsed: Duration,
    state: RunState,
}

impl AnimationGroup {
    pub fn new(rotation: Animation, sweep: Animation) -> Self {
        AnimationGroup {
            rotation,
            sweep,
            elapsed: Duration::ZERO,
            state: RunState::Running,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Both values at the current clock position
    pub fn current(&self) -> GroupFrame {
        GroupFrame {
            rotation: self.rotation.value_at(self.elapsed),
            sweep: self.sweep.value_at(self.elapsed),
        }
    }

    /// Advances the shared clock by `dt`; `None` unless running
    pub fn tick(&mut self, dt: Duration) -> Option<GroupFrame> {
        if !self.is_running() {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        Some(self.current())
    }

    /// Rewinds both animations to their start values; a paused group stays paused
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn pause(&mut self) {
        self.state = RunState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = RunState::Running;
    }

    /// Flips between running and paused; returns the new state
    pub fn toggle(&mut self) -> RunState {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
        self.state
    }
}

impl Default for AnimationGroup {
    fn default() -> Self {
        AnimationGroup::new(rotation_animation(), sweep_animation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPSILON: f64 = 1e-9;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn rotation_is_linear_and_wraps() {
        let rotation = rotation_animation();
        assert_eq!(rotation.value_at(Duration::ZERO), 0.0);
        assert_eq!(rotation.value_at(ms(400)), 90.0);
        assert_eq!(rotation.value_at(ms(1200)), 270.0);
        assert_eq!(rotation.value_at(ROTATION_DURATION), 0.0);
        assert_eq!(rotation.value_at(ms(1600 * 7 + 800)), 180.0);
    }

    #[test]
    fn rotation_stays_below_full_turn() {
        let rotation = rotation_animation();
        for step in 0..5000u64 {
            let value = rotation.value_at(Duration::from_micros(step * 997));
            assert!((0.0..360.0).contains(&value), "{value}");
        }
        assert!(rotation.value_at(ROTATION_DURATION - Duration::from_nanos(1)) < 360.0);
    }

    #[test]
    fn sweep_ping_pongs_between_bounds() {
        let sweep = sweep_animation();
        assert_eq!(sweep.value_at(Duration::ZERO), MIN_SWEEP);
        assert_eq!(sweep.value_at(SWEEP_DURATION), MAX_SWEEP);
        assert_eq!(sweep.value_at(SWEEP_DURATION * 2), MIN_SWEEP);
        assert!((sweep.value_at(ms(400)) - 55.0).abs() < EPSILON);
        assert!((sweep.value_at(ms(1200)) - 55.0).abs() < EPSILON);
    }

    #[test]
    fn sweep_reverses_instead_of_snapping() {
        let sweep = sweep_animation();
        let before = sweep.value_at(ms(790));
        let after = sweep.value_at(ms(810));
        assert!(before > 100.0 && after > 100.0);
        assert!((before - after).abs() < EPSILON);
    }

    #[test]
    fn sweep_stays_within_bounds() {
        let sweep = sweep_animation();
        for step in 0..4000u64 {
            let value = sweep.value_at(Duration::from_micros(step * 1013));
            assert!((MIN_SWEEP..=MAX_SWEEP).contains(&value), "{value}");
        }
    }

    #[test]
    fn group_ticks_both_values_from_one_clock() {
        let mut group = AnimationGroup::default();
        let frame = group.tick(ms(400)).expect("running group produces a frame");
        assert_eq!(frame.rotation, 90.0);
        assert!((frame.sweep - 55.0).abs() < EPSILON);
        assert_eq!(group.elapsed(), ms(400));
    }

    #[test]
    fn full_period_returns_to_start() {
        let mut group = AnimationGroup::default();
        for _ in 0..100 {
            group.tick(ms(16));
        }
        group.tick(ms(0));
        let frame = group.current();
        assert_eq!(group.elapsed(), ROTATION_DURATION);
        assert_eq!(
            frame,
            GroupFrame {
                rotation: 0.0,
                sweep: MIN_SWEEP,
            }
        );
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let mut group = AnimationGroup::default();
        group.tick(ms(300));
        let frozen = group.current();

        assert_eq!(group.toggle(), RunState::Paused);
        assert_eq!(group.tick(ms(500)), None);
        assert_eq!(group.current(), frozen);

        assert_eq!(group.toggle(), RunState::Running);
        group.tick(ms(100));
        assert_eq!(group.elapsed(), ms(400));
    }

    #[test]
    fn restart_rewinds_but_keeps_pause() {
        let mut group = AnimationGroup::default();
        group.tick(ms(1000));
        group.pause();
        group.restart();
        assert_eq!(group.state(), RunState::Paused);
        assert_eq!(
            group.current(),
            GroupFrame {
                rotation: 0.0,
                sweep: MIN_SWEEP,
            }
        );
    }

    #[test]
    fn zero_duration_holds_end_value() {
        let animation = Animation {
            duration: Duration::ZERO,
            ..rotation_animation()
        };
        assert_eq!(animation.value_at(ms(5)), 360.0);
    }
}
