//! Scalar Tween
//!
//! Interpolates one value from a start to a target over a fixed duration.
//! The owner ticks it with frame delta time; the final tick always lands
//! exactly on the target.

use std::time::Duration;

/// Easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Smooth ease-in-out
    QuadraticInOut,
}

impl Easing {
    /// Map progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A running interpolation of a single `f32`.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.as_secs_f32(),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by `delta_time` seconds and return the interpolated value.
    pub fn advance(&mut self, delta_time: f32) -> f32 {
        self.elapsed = (self.elapsed + delta_time.max(0.0)).min(self.duration);
        self.value()
    }

    /// Current value without advancing.
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * t
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn is_playing(&self) -> bool {
        !self.is_finished()
    }

    pub fn start_value(&self) -> f32 {
        self.from
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}
