#![forbid(unsafe_code)]

//! Show/hide transition tracking.
//!
//! The host runs the actual CSS animation; this module only tracks whether
//! a transition is in flight and reports when it settles, so
//! `after_open_change` fires once per completed show or hide.
//!
//! A transition settles when the host reports the animation end
//! ([`Transition::motion_end`]) or when enough time was ticked through
//! [`Transition::tick`]. Ticking past the deadline settles it even if the
//! host never reports an end event.

use std::time::Duration;

/// Default motion of the tooltip overlay.
pub const DEFAULT_MOTION: &str = "zoom-big-fast";

/// Resolve the transition class prefix.
///
/// An explicit override is used verbatim; otherwise the default motion is
/// namespaced with the root prefix (`tip-zoom-big-fast`).
pub fn transition_name(root_prefix: &str, default: &str, override_name: Option<&str>) -> String {
    match override_name {
        Some(name) => name.to_owned(),
        None => format!("{root_prefix}-{default}"),
    }
}

/// Motion configuration handed to the positioning engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionConfig {
    /// Class prefix of the transition (`<name>-enter`, `<name>-leave`).
    pub motion_name: String,
    /// Expected animation length. Default: 100ms
    pub duration: Duration,
    /// Upper bound before the transition is forced to settle. Default: 1000ms
    pub deadline: Duration,
}

impl MotionConfig {
    pub fn new(motion_name: impl Into<String>) -> Self {
        Self {
            motion_name: motion_name.into(),
            duration: Duration::from_millis(100),
            deadline: Duration::from_millis(1000),
        }
    }

    /// Time after which a ticked transition settles.
    pub fn settle_after(&self) -> Duration {
        self.duration.min(self.deadline)
    }
}

/// Phase of the overlay transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// Nothing animating; the overlay is fully shown or fully hidden.
    #[default]
    Idle,
    Entering,
    Leaving,
}

/// Tracks one in-flight show or hide transition.
#[derive(Debug, Clone)]
pub struct Transition {
    phase: TransitionPhase,
    /// Visibility the overlay settles at.
    settled: bool,
    elapsed: Duration,
    settle_after: Duration,
}

impl Transition {
    /// Create an idle transition settled at `visible`.
    pub fn new(visible: bool, config: &MotionConfig) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            settled: visible,
            elapsed: Duration::ZERO,
            settle_after: config.settle_after(),
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != TransitionPhase::Idle
    }

    /// Begin animating toward `visible`.
    ///
    /// Returns `false` when already idle at `visible` or animating toward it.
    /// Reversing mid-flight restarts the clock.
    pub fn start(&mut self, visible: bool) -> bool {
        let target = match self.phase {
            TransitionPhase::Idle => self.settled,
            TransitionPhase::Entering => true,
            TransitionPhase::Leaving => false,
        };
        if target == visible {
            return false;
        }
        self.phase = if visible {
            TransitionPhase::Entering
        } else {
            TransitionPhase::Leaving
        };
        self.elapsed = Duration::ZERO;
        tracing::trace!(visible, "transition started");
        true
    }

    /// Advance by `dt`. Returns the settled visibility when this tick
    /// finishes the transition.
    pub fn tick(&mut self, dt: Duration) -> Option<bool> {
        if !self.is_running() {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.settle_after {
            return self.finish();
        }
        None
    }

    /// The host finished the animation.
    pub fn motion_end(&mut self) -> Option<bool> {
        if !self.is_running() {
            return None;
        }
        self.finish()
    }

    fn finish(&mut self) -> Option<bool> {
        let visible = self.phase == TransitionPhase::Entering;
        self.phase = TransitionPhase::Idle;
        self.settled = visible;
        self.elapsed = Duration::ZERO;
        tracing::trace!(visible, "transition settled");
        Some(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MotionConfig {
        MotionConfig::new("tip-zoom-big-fast")
    }

    #[test]
    fn transition_name_prefers_override() {
        assert_eq!(transition_name("tip", DEFAULT_MOTION, None), "tip-zoom-big-fast");
        assert_eq!(transition_name("tip", DEFAULT_MOTION, Some("fade")), "fade");
    }

    #[test]
    fn settle_after_is_capped_by_deadline() {
        let mut cfg = config();
        cfg.duration = Duration::from_secs(5);
        assert_eq!(cfg.settle_after(), Duration::from_millis(1000));
        assert_eq!(config().settle_after(), Duration::from_millis(100));
    }

    #[test]
    fn tick_settles_once() {
        let mut t = Transition::new(false, &config());
        assert!(t.start(true));
        assert_eq!(t.phase(), TransitionPhase::Entering);
        assert_eq!(t.tick(Duration::from_millis(60)), None);
        assert!(t.is_running());
        assert_eq!(t.tick(Duration::from_millis(60)), Some(true));
        assert_eq!(t.tick(Duration::from_millis(60)), None);
        assert!(!t.is_running());
    }

    #[test]
    fn start_toward_current_state_is_noop() {
        let mut t = Transition::new(true, &config());
        assert!(!t.start(true));
        assert!(t.start(false));
        assert!(!t.start(false));
    }

    #[test]
    fn reversal_restarts_and_settles_on_new_target() {
        let mut t = Transition::new(false, &config());
        t.start(true);
        t.tick(Duration::from_millis(50));
        assert!(t.start(false));
        assert_eq!(t.phase(), TransitionPhase::Leaving);
        assert_eq!(t.tick(Duration::from_millis(50)), None);
        assert_eq!(t.motion_end(), Some(false));
        assert_eq!(t.motion_end(), None);
    }
}
