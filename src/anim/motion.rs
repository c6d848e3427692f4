use super::constants::*;
use super::reaction::Reaction;
use glam::DVec2;
use instant::Instant;
use smallvec::SmallVec;

// Easing curves. All take progress `t` in [0, 1].

/// Ease-out: most of the climb happens early.
#[inline]
pub fn ease_out_rise(t: f64) -> f64 {
    1.0 - (1.0 - t).powf(RISE_EXPONENT)
}

/// Ease-in: sideways drift starts slow and accelerates.
#[inline]
pub fn ease_in_drift(t: f64) -> f64 {
    t.powf(DRIFT_EXPONENT)
}

#[inline]
pub fn fade_out(t: f64) -> f64 {
    1.0 - t.powi(FADE_EXPONENT)
}

#[inline]
pub fn grow_in(t: f64) -> f64 {
    START_SCALE + t.powf(GROW_EXPONENT) * (1.0 - START_SCALE)
}

/// Visual state of one reaction at a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub progress: f64,
    pub vertical_progress: f64,
    pub horizontal_progress: f64,
    /// Fraction of the canvas height climbed from the bottom edge.
    pub vertical_offset: f64,
    /// Signed drift in units of `ANCHOR_INSET_PX`.
    pub horizontal_offset: f64,
    pub rotation_degrees: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl Motion {
    pub fn at_progress(t: f64, vertical_distance: f64, horizontal_distance: f64) -> Self {
        let vertical_progress = ease_out_rise(t);
        let horizontal_progress = ease_in_drift(t);
        let vertical_offset = vertical_progress * vertical_distance;
        let horizontal_offset = horizontal_progress * horizontal_distance;
        Self {
            progress: t,
            vertical_progress,
            horizontal_progress,
            vertical_offset,
            horizontal_offset,
            // tilt follows the signed drift
            rotation_degrees: horizontal_offset * ROTATION_DEGREES_PER_UNIT,
            opacity: fade_out(t),
            scale: grow_in(t),
        }
    }

    /// Anchor point in CSS px: near the bottom-right corner at spawn,
    /// rising toward the top as progress increases.
    pub fn anchor(&self, canvas_size: DVec2) -> DVec2 {
        DVec2::new(
            (canvas_size.x - ANCHOR_INSET_PX) + self.horizontal_offset * ANCHOR_INSET_PX,
            canvas_size.y * (1.0 - self.vertical_offset),
        )
    }
}

impl Reaction {
    /// `None` once the reaction has outlived its lifetime.
    pub fn motion_at(&self, now: Instant) -> Option<Motion> {
        if self.is_expired_at(now) {
            return None;
        }
        Some(Motion::at_progress(
            self.progress_at(now),
            self.vertical_distance(),
            self.horizontal_distance(),
        ))
    }
}

/// A reaction ready to draw.
#[derive(Clone, Copy, Debug)]
pub struct Sprite<'a> {
    pub symbol: &'a str,
    pub anchor: DVec2,
    pub motion: Motion,
}

pub struct FrameLayout<'a> {
    /// Live reactions in draw order.
    pub sprites: SmallVec<[Sprite<'a>; 32]>,
    pub expired: usize,
}

pub fn layout_frame<'a>(reactions: &'a [Reaction], now: Instant, canvas_size: DVec2) -> FrameLayout<'a> {
    let mut sprites = SmallVec::new();
    let mut expired = 0;
    for reaction in reactions {
        match reaction.motion_at(now) {
            Some(motion) => sprites.push(Sprite {
                symbol: reaction.symbol(),
                anchor: motion.anchor(canvas_size),
                motion,
            }),
            None => expired += 1,
        }
    }
    FrameLayout { sprites, expired }
}
