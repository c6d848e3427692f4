use crate::anim::Sprite;
use crate::constants::{reaction_font, CANVAS_OPACITY};
use fnv::FnvHashMap;
use glam::DVec2;
use wasm_bindgen::JsValue;
use web_sys as web;

/// A glyph measured against the current font.
#[derive(Clone, Copy, Debug)]
struct ResolvedGlyph {
    half_width: f64,
}

/// Measures each distinct symbol once per frame.
struct GlyphCache<'a> {
    resolved: FnvHashMap<&'a str, ResolvedGlyph>,
}

impl<'a> GlyphCache<'a> {
    fn new() -> Self {
        Self {
            resolved: FnvHashMap::default(),
        }
    }

    fn resolve(
        &mut self,
        ctx: &web::CanvasRenderingContext2d,
        symbol: &'a str,
    ) -> Result<ResolvedGlyph, JsValue> {
        if let Some(glyph) = self.resolved.get(symbol) {
            return Ok(*glyph);
        }
        let metrics = ctx.measure_text(symbol)?;
        let glyph = ResolvedGlyph {
            half_width: metrics.width() * 0.5,
        };
        self.resolved.insert(symbol, glyph);
        Ok(glyph)
    }
}

/// Clears the canvas and sets up a CSS-pixel coordinate space.
pub fn begin_frame(
    ctx: &web::CanvasRenderingContext2d,
    css_size: DVec2,
    dpr: f64,
) -> anyhow::Result<()> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.clear_rect(0.0, 0.0, css_size.x, css_size.y);
    ctx.set_font(&reaction_font());
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    Ok(())
}

/// Paints sprites in order; later ones land on top.
pub fn draw_sprites(ctx: &web::CanvasRenderingContext2d, sprites: &[Sprite<'_>]) -> anyhow::Result<()> {
    let mut glyphs = GlyphCache::new();
    for sprite in sprites {
        let glyph = glyphs
            .resolve(ctx, sprite.symbol)
            .map_err(|e| anyhow::anyhow!("measure {:?}: {:?}", sprite.symbol, e))?;
        ctx.save();
        let drawn = draw_sprite(ctx, sprite, glyph);
        ctx.restore();
        drawn.map_err(|e| anyhow::anyhow!("draw {:?}: {:?}", sprite.symbol, e))?;
    }
    Ok(())
}

fn draw_sprite(
    ctx: &web::CanvasRenderingContext2d,
    sprite: &Sprite<'_>,
    glyph: ResolvedGlyph,
) -> Result<(), JsValue> {
    let DVec2 { x, y } = sprite.anchor;
    let m = &sprite.motion;
    ctx.set_global_alpha(CANVAS_OPACITY * m.opacity);

    // scale and rotate about the anchor
    ctx.translate(x, y)?;
    ctx.scale(m.scale, m.scale)?;
    ctx.rotate(m.rotation_degrees.to_radians())?;
    ctx.translate(-x, -y)?;

    ctx.fill_text(sprite.symbol, x - glyph.half_width, y)
}
