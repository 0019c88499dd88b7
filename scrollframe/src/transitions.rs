use std::time::Duration;

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Slow at both ends.
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Opacity transition attached to a track style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn linear(duration: Duration) -> Self {
        Self::new(duration, Easing::Linear)
    }

    pub fn ease_in_out(duration: Duration) -> Self {
        Self::new(duration, Easing::EaseInOut)
    }
}

/// An in-flight opacity fade, sampled by the host on each frame.
///
/// Times are offsets on the host's clock (the same clock its
/// [`Scheduler`](crate::timer::Scheduler) reports).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    start: Duration,
    transition: Transition,
}

impl Fade {
    /// A fade that is already settled at `value`.
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: Duration::ZERO,
            transition: Transition::linear(Duration::ZERO),
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Interpolated opacity at `now`.
    pub fn value_at(&self, now: Duration) -> f32 {
        let duration = self.transition.duration;
        let progress = if duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_sub(self.start);
            (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };
        let eased = self.transition.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.transition.duration
    }

    /// Head toward a new target, starting from wherever the fade is at `now`.
    /// Returns false when `to` is already the target.
    pub fn retarget(&mut self, to: f32, transition: Transition, now: Duration) -> bool {
        if (self.to - to).abs() < f32::EPSILON {
            return false;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.transition = transition;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in [Easing::Linear, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_fade_interpolates_linearly() {
        let mut fade = Fade::settled(1.0);
        let transition = Transition::linear(Duration::from_millis(200));
        assert!(fade.retarget(0.0, transition, Duration::from_millis(1000)));

        assert_eq!(fade.value_at(Duration::from_millis(1000)), 1.0);
        assert!((fade.value_at(Duration::from_millis(1100)) - 0.5).abs() < 0.001);
        assert_eq!(fade.value_at(Duration::from_millis(1200)), 0.0);
        assert!(fade.is_finished(Duration::from_millis(1200)));
        assert!(!fade.is_finished(Duration::from_millis(1199)));
    }

    #[test]
    fn test_fade_eases_at_both_ends() {
        let mut fade = Fade::settled(1.0);
        let transition = Transition::ease_in_out(Duration::from_millis(200));
        fade.retarget(0.0, transition, Duration::ZERO);

        // A quarter of the way in, less than a quarter has faded
        assert!((fade.value_at(Duration::from_millis(50)) - 0.875).abs() < 0.001);
        assert!((fade.value_at(Duration::from_millis(100)) - 0.5).abs() < 0.001);
        assert!((fade.value_at(Duration::from_millis(150)) - 0.125).abs() < 0.001);
        assert_eq!(fade.value_at(Duration::from_millis(200)), 0.0);
    }

    #[test]
    fn test_fade_retarget_midway_starts_from_current_value() {
        let mut fade = Fade::settled(1.0);
        let transition = Transition::linear(Duration::from_millis(100));
        fade.retarget(0.0, transition, Duration::ZERO);
        fade.retarget(1.0, transition, Duration::from_millis(50));

        assert!((fade.value_at(Duration::from_millis(50)) - 0.5).abs() < 0.001);
        assert_eq!(fade.value_at(Duration::from_millis(150)), 1.0);
    }

    #[test]
    fn test_fade_retarget_same_target_is_noop() {
        let mut fade = Fade::settled(1.0);
        assert!(!fade.retarget(1.0, Transition::linear(Duration::from_millis(10)), Duration::ZERO));
    }
}
