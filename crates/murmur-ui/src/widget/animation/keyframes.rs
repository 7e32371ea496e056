//! Repeating keyframe tracks.
//!
//! A [`ColorKeyframes`] track maps elapsed time to a color by cycling through
//! a fixed set of keyframes forever. Tracks are stateless: callers hold on to
//! a start instant and sample the track with the elapsed time since then,
//! which keeps animated widgets trivial to test.

use std::time::Duration;

use crate::render::Color;

use super::easing::{Easing, ease};

/// A single keyframe: a color at a fractional offset within the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Position within the cycle, 0.0 (cycle start) to 1.0 (cycle end).
    pub offset: f32,
    /// The color at this position.
    pub color: Color,
}

impl Keyframe {
    /// Create a keyframe at `offset` with `color`.
    pub fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// An infinitely repeating color track.
///
/// Sampling interpolates between the keyframes surrounding the sample point.
/// A per-track phase offset shifts where in the cycle time zero lands, which
/// is how a row of identical tracks becomes a travelling pulse.
#[derive(Debug, Clone)]
pub struct ColorKeyframes {
    frames: Vec<Keyframe>,
    period: Duration,
    phase: Duration,
    easing: Easing,
}

impl ColorKeyframes {
    /// Create a track from keyframes and a cycle period.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two keyframes are given, if the offsets are not
    /// ascending, if the first offset is not 0.0 or the last is not 1.0, or
    /// if the period is zero. These are construction bugs, not runtime
    /// conditions.
    pub fn new(frames: Vec<Keyframe>, period: Duration) -> Self {
        assert!(frames.len() >= 2, "keyframe track needs at least two frames");
        assert!(frames[0].offset == 0.0, "first keyframe must sit at offset 0.0");
        assert!(
            frames[frames.len() - 1].offset == 1.0,
            "last keyframe must sit at offset 1.0"
        );
        assert!(
            frames.windows(2).all(|w| w[0].offset < w[1].offset),
            "keyframe offsets must be strictly ascending"
        );
        assert!(!period.is_zero(), "keyframe period must be non-zero");

        Self {
            frames,
            period,
            phase: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Shift the track forward in time by `phase`.
    ///
    /// Sampling a phase-shifted track at `t` yields the unshifted track's
    /// value at `t + phase`.
    pub fn with_phase(mut self, phase: Duration) -> Self {
        self.phase = phase;
        self
    }

    /// Use `easing` for the interpolation within each segment.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The cycle period.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// The phase offset.
    #[inline]
    pub fn phase(&self) -> Duration {
        self.phase
    }

    /// A pulse track: lit at the cycle start, dimming to `inactive` within
    /// one step, held dim, then returning to `active` at the end of the
    /// cycle. The period is four steps.
    pub fn pulse(active: Color, inactive: Color, step: Duration) -> Self {
        Self::new(
            vec![
                Keyframe::new(0.0, active),
                Keyframe::new(0.25, inactive),
                Keyframe::new(0.75, inactive),
                Keyframe::new(1.0, active),
            ],
            step * 4,
        )
    }

    /// Sample the track at `elapsed` time since the animation started.
    pub fn sample(&self, elapsed: Duration) -> Color {
        let period = self.period.as_secs_f32();
        let t = (elapsed + self.phase).as_secs_f32() % period / period;

        // Find the segment containing t. The construction invariants
        // guarantee a surrounding pair exists.
        let mut start = self.frames[0];
        let mut end = self.frames[self.frames.len() - 1];
        for pair in self.frames.windows(2) {
            if t >= pair[0].offset && t <= pair[1].offset {
                start = pair[0];
                end = pair[1];
                break;
            }
        }

        let span = end.offset - start.offset;
        let local = if span > 0.0 { (t - start.offset) / span } else { 0.0 };
        start.color.lerp(end.color, ease(self.easing, local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(350);

    fn assert_color_near(actual: Color, expected: Color) {
        assert!(
            (actual.r - expected.r).abs() < 0.001
                && (actual.g - expected.g).abs() < 0.001
                && (actual.b - expected.b).abs() < 0.001
                && (actual.a - expected.a).abs() < 0.001,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn pulse_hits_keyframes_at_step_boundaries() {
        let track = ColorKeyframes::pulse(Color::WHITE, Color::BLACK, STEP);
        assert_eq!(track.period(), STEP * 4);

        assert_color_near(track.sample(Duration::ZERO), Color::WHITE);
        assert_color_near(track.sample(STEP), Color::BLACK);
        assert_color_near(track.sample(STEP * 2), Color::BLACK);
        assert_color_near(track.sample(STEP * 3), Color::BLACK);
    }

    #[test]
    fn pulse_repeats_every_period() {
        let track = ColorKeyframes::pulse(Color::WHITE, Color::BLACK, STEP);
        let early = track.sample(STEP / 2);
        let late = track.sample(STEP * 4 + STEP / 2);
        assert_color_near(early, late);
    }

    #[test]
    fn phase_shift_advances_the_cycle() {
        let base = ColorKeyframes::pulse(Color::WHITE, Color::BLACK, STEP);
        let shifted = base.clone().with_phase(STEP);

        assert_color_near(shifted.sample(Duration::ZERO), base.sample(STEP));
        assert_color_near(shifted.sample(STEP * 2), base.sample(STEP * 3));
    }

    #[test]
    fn midpoints_interpolate() {
        let track = ColorKeyframes::pulse(Color::WHITE, Color::BLACK, STEP);
        let mid = track.sample(STEP / 2);
        assert!((mid.r - 0.5).abs() < 0.01);
        assert!((mid.g - 0.5).abs() < 0.01);
        assert!((mid.b - 0.5).abs() < 0.01);
    }

    #[test]
    #[should_panic(expected = "at least two frames")]
    fn rejects_single_frame() {
        let _ = ColorKeyframes::new(vec![Keyframe::new(0.0, Color::WHITE)], STEP);
    }

    #[test]
    #[should_panic(expected = "strictly ascending")]
    fn rejects_unsorted_offsets() {
        let _ = ColorKeyframes::new(
            vec![
                Keyframe::new(0.0, Color::WHITE),
                Keyframe::new(0.5, Color::BLACK),
                Keyframe::new(0.25, Color::WHITE),
                Keyframe::new(1.0, Color::WHITE),
            ],
            STEP,
        );
    }
}
