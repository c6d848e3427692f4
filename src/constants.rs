/// Page and drawing constants for the web front-end.
///
/// Motion tuning lives in `anim::constants`; these only describe how the
/// page is wired and how glyphs are painted.
// Element ids in index.html
pub const CANVAS_ID: &str = "reactions-canvas";
pub const FINALE_BUTTON_ID: &str = "reaction-finale";

// Tap buttons and the glyph each one appends
pub const REACTION_BUTTONS: [(&str, &str); 3] = [
    ("reaction-heart", "❤️"),
    ("reaction-party", "🎉"),
    ("reaction-fire", "🔥"),
];

// Glyph rendering
pub const REACTION_FONT_PX: f64 = 44.0;
pub const REACTION_FONT_FAMILY: &str = "system-ui, \"Apple Color Emoji\", \"Segoe UI Emoji\", sans-serif";

// Whole-layer alpha applied on top of each reaction's own fade
pub const CANVAS_OPACITY: f64 = 0.7;

#[inline]
pub fn reaction_font() -> String {
    format!("{}px {}", REACTION_FONT_PX, REACTION_FONT_FAMILY)
}
