// Motion tuning shared by the store, the easing curves and the host tests.

// Random ranges drawn once per reaction at spawn time
pub const VERTICAL_DISTANCE_MIN: f64 = 0.5;
pub const VERTICAL_DISTANCE_MAX: f64 = 0.65;
pub const HORIZONTAL_DISTANCE_MIN: f64 = -1.0;
pub const HORIZONTAL_DISTANCE_MAX: f64 = 1.0;
pub const LIFETIME_MIN_SEC: f64 = 1.4;
pub const LIFETIME_MAX_SEC: f64 = 1.8;

// Easing exponents
pub const RISE_EXPONENT: f64 = 2.3; // ease-out, fast rise then slow near the top
pub const DRIFT_EXPONENT: f64 = 1.5; // ease-in, sideways drift picks up late
pub const FADE_EXPONENT: i32 = 11; // hang, then vanish
pub const GROW_EXPONENT: f64 = 2.7;

// Size at spawn, relative to the full glyph size
pub const START_SCALE: f64 = 0.6;

// Degrees of tilt per unit of (signed) horizontal offset
pub const ROTATION_DEGREES_PER_UNIT: f64 = 60.0;

// Horizontal span in CSS px: anchor inset from the right edge and the drift unit
pub const ANCHOR_INSET_PX: f64 = 42.0;
