//! Furniture catalog: maps a furniture kind to its vector glyph.
//!
//! Every glyph is a small fixed composition of primitive shapes centered at
//! the local origin, drawn "up" at scale 1 — placement (translate, rotate,
//! scale about the center) is applied by the caller before [`draw_glyph`]
//! runs. The mapping from (kind, mode, item state) to pixels is pure: same
//! inputs, same glyph.
//!
//! Item state never changes geometry. Selection, dragging, and ghost mode
//! only swap the palette resolved by [`Style::resolve`], which is the
//! testable half of this module.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::input::RenderMode;
use crate::scene::FurnitureKind;

/// Selection accent used by both palettes.
pub const ACCENT: &str = "#4ecdc4";

// Visual-mode material palette (warm wood and off-white cushions).
const WOOD: &str = "#8b5a2b";
const WOOD_STROKE: &str = "#5e3c1b";
const CUSHION: &str = "#e3e3e3";
const CUSHION_STROKE: &str = "#cccccc";
const UMBRELLA: &str = "#b58e65";
const UMBRELLA_STROKE: &str = "#8a6a4b";
const METAL: &str = "#222222";

/// Resolved drawing style for one item in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Visual (humanized) palette rather than technical monochrome.
    pub visual: bool,
    /// Outline color for schematic strokes.
    pub stroke: &'static str,
    /// Base fill, if any (`None` renders shapes hollow, as ghost mode does).
    pub fill: Option<&'static str>,
    /// Dashed outlines — ghost mode for hidden items.
    pub dashed: bool,
}

impl Style {
    /// Resolve the palette for (mode, selected, dragging, visible).
    #[must_use]
    pub fn resolve(mode: RenderMode, selected: bool, dragging: bool, visible: bool) -> Self {
        let visual = mode == RenderMode::Visual;
        let (stroke, fill) = if visual {
            (
                if selected { ACCENT } else { "#333333" },
                if visible { Some("#ffffff") } else { None },
            )
        } else {
            (
                if selected {
                    ACCENT
                } else if dragging {
                    "#ffffff"
                } else if visible {
                    "#e8e8ef"
                } else {
                    "#444444"
                },
                if dragging || selected {
                    Some("#1a1a24")
                } else if visible {
                    Some("#12121a")
                } else {
                    None
                },
            )
        };
        Self { visual, stroke, fill, dashed: !visible }
    }
}

/// Local half-extents of a glyph's bounding box at scale 1, used by the hit
/// tester. Extents cover the full footprint (a dining set includes its
/// chairs, a hammock its posts).
#[must_use]
pub fn half_extents(kind: FurnitureKind) -> (f64, f64) {
    match kind {
        FurnitureKind::Table4 => (26.0, 26.0),
        FurnitureKind::CoffeeTable => (15.0, 10.0),
        FurnitureKind::Sofa => (25.0, 12.0),
        FurnitureKind::Chair => (12.0, 12.0),
        FurnitureKind::Hammock => (35.0, 10.0),
        FurnitureKind::Lounger => (10.0, 25.0),
        FurnitureKind::Umbrella => (16.0, 16.0),
        FurnitureKind::Lights => (6.0, 22.0),
        FurnitureKind::StringLights => (50.0, 4.0),
        FurnitureKind::Plant => (8.0, 8.0),
    }
}

/// Draw the glyph for `kind` at the local origin. The caller has already
/// applied the item transform and global alpha.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_glyph(ctx: &CanvasRenderingContext2d, kind: FurnitureKind, style: &Style) -> Result<(), JsValue> {
    match kind {
        FurnitureKind::Table4 => draw_table4(ctx, style),
        FurnitureKind::CoffeeTable => draw_coffee_table(ctx, style),
        FurnitureKind::Sofa => draw_sofa(ctx, style),
        FurnitureKind::Chair => draw_chair(ctx, style),
        FurnitureKind::Hammock => draw_hammock(ctx, style),
        FurnitureKind::Lounger => draw_lounger(ctx, style),
        FurnitureKind::Umbrella => draw_umbrella(ctx, style),
        FurnitureKind::Lights => draw_lights(ctx, style),
        FurnitureKind::StringLights => draw_string_lights(ctx, style),
        FurnitureKind::Plant => draw_plant(ctx, style),
    }
}

// =============================================================
// Per-kind glyphs
// =============================================================

fn draw_table4(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    // Tabletop.
    if style.visual {
        fill_stroke_rect(ctx, -18.0, -18.0, 36.0, 36.0, Some(WOOD), WOOD_STROKE, 0.5);
        // Vertical slat texture.
        ctx.set_stroke_style_str(WOOD_STROKE);
        ctx.set_line_width(0.5);
        ctx.set_global_alpha(ctx.global_alpha() * 0.4);
        for x in [-9.0, 0.0, 9.0] {
            line(ctx, x, -18.0, x, 18.0);
        }
        ctx.set_global_alpha(ctx.global_alpha() / 0.4);
    } else {
        fill_stroke_rect(ctx, -18.0, -18.0, 36.0, 36.0, None, style.stroke, 1.5);
    }

    // Four chairs around the top.
    let chairs = [
        (-10.0, -26.0, 20.0, 8.0), // top
        (-10.0, 18.0, 20.0, 8.0),  // bottom
        (-26.0, -10.0, 8.0, 20.0), // left
        (18.0, -10.0, 8.0, 20.0),  // right
    ];
    for (x, y, w, h) in chairs {
        if style.visual {
            fill_stroke_rect(ctx, x, y, w, h, Some(WOOD), WOOD_STROKE, 0.5);
            fill_rect(ctx, x + 1.0, y + 1.0, w - 2.0, h - 2.0, CUSHION);
        } else {
            fill_stroke_rect(ctx, x, y, w, h, style.fill, style.stroke, 1.2);
        }
    }
    Ok(())
}

fn draw_coffee_table(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    if style.visual {
        fill_stroke_rect(ctx, -15.0, -10.0, 30.0, 20.0, Some(WOOD), WOOD_STROKE, 0.5);
        ctx.set_stroke_style_str(WOOD_STROKE);
        ctx.set_line_width(0.5);
        ctx.set_global_alpha(ctx.global_alpha() * 0.4);
        for y in [-5.0, 0.0, 5.0] {
            line(ctx, -15.0, y, 15.0, y);
        }
        ctx.set_global_alpha(ctx.global_alpha() / 0.4);
    } else {
        fill_stroke_rect(ctx, -15.0, -10.0, 30.0, 20.0, style.fill, style.stroke, 1.5);
        // Inset top edge.
        fill_stroke_rect(ctx, -12.0, -7.0, 24.0, 14.0, None, style.stroke, 0.5);
    }
    Ok(())
}

fn draw_sofa(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    let frame_fill = if style.visual { Some(WOOD) } else { style.fill };
    let frame_stroke = if style.visual { WOOD_STROKE } else { style.stroke };
    fill_stroke_rect(ctx, -25.0, -12.0, 50.0, 24.0, frame_fill, frame_stroke, if style.visual { 0.5 } else { 1.5 });

    if style.visual {
        // Two seat cushions.
        fill_stroke_rect(ctx, -23.0, -10.0, 22.0, 20.0, Some(CUSHION), CUSHION_STROKE, 0.5);
        fill_stroke_rect(ctx, 1.0, -10.0, 22.0, 20.0, Some(CUSHION), CUSHION_STROKE, 0.5);
        // Armrests and backrest in exposed wood.
        fill_rect(ctx, -25.0, -12.0, 2.0, 24.0, WOOD);
        fill_rect(ctx, 23.0, -12.0, 2.0, 24.0, WOOD);
        fill_rect(ctx, -25.0, -12.0, 50.0, 2.0, WOOD);
    } else {
        ctx.set_stroke_style_str("#6a6a7a");
        ctx.set_line_width(0.5);
        line(ctx, -25.0, 0.0, 25.0, 0.0);
    }
    Ok(())
}

fn draw_chair(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    let frame_fill = if style.visual { Some(WOOD) } else { style.fill };
    let frame_stroke = if style.visual { WOOD_STROKE } else { style.stroke };
    fill_stroke_rect(ctx, -12.0, -12.0, 24.0, 24.0, frame_fill, frame_stroke, if style.visual { 0.5 } else { 1.5 });

    if style.visual {
        // Backrest edge.
        ctx.set_stroke_style_str(WOOD_STROKE);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(-12.0, -8.0);
        ctx.line_to(-12.0, -12.0);
        ctx.line_to(12.0, -12.0);
        ctx.line_to(12.0, -8.0);
        ctx.stroke();
        fill_stroke_rect(ctx, -10.0, -10.0, 20.0, 20.0, Some(CUSHION), CUSHION_STROKE, 0.5);
    } else {
        ctx.set_stroke_style_str(style.stroke);
        ctx.set_line_width(1.0);
        line(ctx, -8.0, 2.0, 8.0, 2.0);
    }
    Ok(())
}

fn draw_hammock(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    // Posts and ropes.
    let post = if style.visual { METAL } else { "#6a6a7a" };
    circle_fill(ctx, -35.0, 0.0, 2.0, post)?;
    circle_fill(ctx, 35.0, 0.0, 2.0, post)?;
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(1.0);
    line(ctx, -35.0, 0.0, -25.0, 0.0);
    line(ctx, 35.0, 0.0, 25.0, 0.0);

    // Canvas bed with pinched ends.
    ctx.begin_path();
    ctx.move_to(-25.0, -10.0);
    ctx.quadratic_curve_to(-15.0, 0.0, -25.0, 10.0);
    ctx.line_to(25.0, 10.0);
    ctx.quadratic_curve_to(15.0, 0.0, 25.0, -10.0);
    ctx.close_path();
    if style.visual {
        ctx.set_fill_style_str("#e8e6e1");
        ctx.fill();
        ctx.set_stroke_style_str("#999999");
    } else {
        if let Some(fill) = style.fill {
            ctx.set_fill_style_str(fill);
            ctx.fill();
        }
        ctx.set_stroke_style_str(style.stroke);
    }
    ctx.set_line_width(1.5);
    ctx.stroke();

    if style.visual {
        ctx.set_stroke_style_str("#d1d1d1");
        ctx.set_line_width(0.5);
        for y in [-5.0, 0.0, 5.0] {
            line(ctx, -20.0, y, 20.0, y);
        }
    }
    Ok(())
}

fn draw_lounger(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    let frame_fill = if style.visual { Some(WOOD) } else { style.fill };
    let frame_stroke = if style.visual { WOOD_STROKE } else { style.stroke };
    fill_stroke_rect(ctx, -10.0, -25.0, 20.0, 50.0, frame_fill, frame_stroke, if style.visual { 0.5 } else { 1.2 });

    if style.visual {
        ctx.set_stroke_style_str(WOOD_STROKE);
        ctx.set_line_width(0.5);
        ctx.set_global_alpha(ctx.global_alpha() * 0.6);
        for y in [-15.0, -5.0, 5.0, 15.0] {
            line(ctx, -10.0, y, 10.0, y);
        }
        ctx.set_global_alpha(ctx.global_alpha() / 0.6);
        // Full-length cushion with a pillow seam.
        fill_stroke_rect(ctx, -8.0, -23.0, 16.0, 46.0, Some(CUSHION), CUSHION_STROKE, 0.5);
        ctx.set_stroke_style_str(CUSHION_STROKE);
        ctx.set_line_width(0.5);
        line(ctx, -8.0, -12.0, 8.0, -12.0);
    } else {
        ctx.set_stroke_style_str(style.stroke);
        ctx.set_line_width(1.0);
        line(ctx, -10.0, -5.0, 10.0, -5.0);
    }
    Ok(())
}

fn draw_umbrella(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    // Octagonal canopy.
    ctx.begin_path();
    ctx.move_to(-7.0, -16.0);
    for (x, y) in [
        (7.0, -16.0),
        (16.0, -7.0),
        (16.0, 7.0),
        (7.0, 16.0),
        (-7.0, 16.0),
        (-16.0, 7.0),
        (-16.0, -7.0),
    ] {
        ctx.line_to(x, y);
    }
    ctx.close_path();
    if style.visual {
        ctx.set_fill_style_str(UMBRELLA);
        ctx.fill();
        ctx.set_stroke_style_str(UMBRELLA_STROKE);
        ctx.set_line_width(0.5);
    } else {
        if let Some(fill) = style.fill {
            ctx.set_fill_style_str(fill);
            ctx.fill();
        }
        ctx.set_stroke_style_str(style.stroke);
        ctx.set_line_width(1.5);
    }
    ctx.stroke();

    // Ribs.
    if style.visual {
        ctx.set_stroke_style_str("rgba(0,0,0,0.15)");
    } else {
        ctx.set_stroke_style_str(style.stroke);
    }
    ctx.set_line_width(0.5);
    line(ctx, 0.0, -16.0, 0.0, 16.0);
    line(ctx, -16.0, 0.0, 16.0, 0.0);
    line(ctx, -11.0, -11.0, 11.0, 11.0);
    line(ctx, 11.0, -11.0, -11.0, 11.0);

    // Pole.
    circle_fill(ctx, 0.0, 0.0, 1.5, if style.visual { "#5c4033" } else { style.stroke })?;
    Ok(())
}

fn draw_lights(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    // Base.
    circle_fill(ctx, 0.0, 0.0, 4.0, if style.visual { METAL } else { style.stroke })?;

    // Post, drawn foreshortened as a dashed riser.
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(1.0);
    set_dash(ctx, &[2.0, 2.0])?;
    line(ctx, 0.0, 0.0, 0.0, -20.0);
    set_dash(ctx, &[])?;

    // Lamp head.
    ctx.begin_path();
    ctx.arc(0.0, -20.0, 2.0, 0.0, 2.0 * PI)?;
    if style.visual {
        ctx.set_fill_style_str("#ffd700");
        ctx.fill();
    }
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(1.0);
    ctx.stroke();

    ctx.set_fill_style_str("#6a6a7a");
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    ctx.set_font("6px monospace");
    ctx.fill_text("LUZ", 0.0, 10.0)?;
    Ok(())
}

fn draw_string_lights(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(if style.visual { "#333333" } else { style.stroke });
    ctx.set_line_width(1.5);
    line(ctx, -50.0, 0.0, 50.0, 0.0);

    for bx in [-40.0, -20.0, 0.0, 20.0, 40.0] {
        ctx.begin_path();
        ctx.arc(bx, 0.0, if style.visual { 3.0 } else { 2.0 }, 0.0, 2.0 * PI)?;
        ctx.set_fill_style_str(if style.visual { "#ffcc00" } else { style.stroke });
        ctx.fill();
        if style.visual {
            ctx.set_stroke_style_str("#ff9900");
            ctx.set_line_width(0.5);
            ctx.stroke();
        }
    }
    Ok(())
}

fn draw_plant(ctx: &CanvasRenderingContext2d, style: &Style) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(0.0, 0.0, 8.0, 0.0, 2.0 * PI)?;
    if style.visual {
        ctx.set_fill_style_str("#3d6e3d");
        ctx.fill();
    }
    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(1.0);
    ctx.stroke();

    if style.visual {
        ctx.set_global_alpha(ctx.global_alpha() * 0.7);
        circle_fill(ctx, 0.0, 0.0, 6.0, "#4a8a4a")?;
        ctx.set_global_alpha(ctx.global_alpha() / 0.7);
    }

    // Frond spokes.
    let fronds = if style.visual {
        "#2d5a2d"
    } else if style.dashed {
        style.stroke
    } else {
        "#5aaa5a"
    };
    ctx.set_stroke_style_str(fronds);
    ctx.set_line_width(1.0);
    for (x, y) in [
        (6.0, -6.0),
        (-6.0, -6.0),
        (6.0, 6.0),
        (-6.0, 6.0),
        (0.0, -8.0),
        (0.0, 8.0),
        (8.0, 0.0),
        (-8.0, 0.0),
    ] {
        line(ctx, 0.0, 0.0, x, y);
    }
    Ok(())
}

// =============================================================
// Canvas helpers
// =============================================================

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

fn fill_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, fill: &str) {
    ctx.set_fill_style_str(fill);
    ctx.fill_rect(x, y, w, h);
}

fn fill_stroke_rect(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    fill: Option<&str>,
    stroke: &str,
    stroke_width: f64,
) {
    if let Some(fill) = fill {
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(x, y, w, h);
    }
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(stroke_width);
    ctx.stroke_rect(x, y, w, h);
}

fn circle_fill(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, r: f64, fill: &str) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(cx, cy, r, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(fill);
    ctx.fill();
    Ok(())
}

/// Set (or clear, with an empty slice) the context's line dash pattern.
pub(crate) fn set_dash(ctx: &CanvasRenderingContext2d, pattern: &[f64]) -> Result<(), JsValue> {
    let arr = js_sys::Array::new();
    for seg in pattern {
        arr.push(&(*seg).into());
    }
    ctx.set_line_dash(&arr)
}
