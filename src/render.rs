//! Rendering: draws the full floor plan scene to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`] for the scene itself. It receives
//! read-only views of the plan, the scene, and UI state and produces pixels —
//! it never mutates application state.
//!
//! Layer order is fixed: background, technical grid, zone fills, outline
//! walls, spa block, furniture (insertion order), dimension overlay, compass.
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`;
//! the top-level caller ([`crate::engine::Engine::render`]) handles the
//! result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::annotate;
use crate::catalog::{self, ACCENT, Style, set_dash};
use crate::consts::{DRAG_ALPHA, GHOST_ALPHA, METER, SCENE_HEIGHT, SCENE_WIDTH, SELECTION_RING_RADIUS};
use crate::geometry::{FloorPlan, Spa, Zone, ZoneId};
use crate::input::{InputState, RenderMode, UiState};
use crate::scene::{FurnitureItem, Scene};
use crate::viewport::Point;

/// Wall stroke color per mode.
fn wall_color(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Technical => "#e8e8ef",
        RenderMode::Visual => "#d1d5db",
    }
}

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    plan: &FloorPlan,
    scene: &Scene,
    ui: &UiState,
    input: InputState,
) -> Result<(), JsValue> {
    let visual = ui.mode == RenderMode::Visual;

    // Layer 1: background over the fixed logical box.
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT);
    ctx.set_fill_style_str(if visual { "#fcfcfc" } else { "#0a0a0f" });
    ctx.fill_rect(0.0, 0.0, SCENE_WIDTH, SCENE_HEIGHT);

    if !visual {
        draw_grid(ctx)?;
    }

    // Layer 2: zone fills (hover highlight in technical mode, floor
    // textures in visual mode).
    for zone in &plan.zones {
        draw_zone(ctx, zone, ui)?;
    }

    // Layer 3: outline walls.
    draw_walls(ctx, &plan.outline, ui.mode)?;

    // Layer 4: the fixed spa block.
    draw_spa(ctx, plan.spa, ui.mode)?;

    // Layer 5: furniture in insertion order.
    for item in scene.items() {
        let dragging = input == InputState::Dragging(item.id);
        let selected = ui.selected_id == Some(item.id);
        draw_item(ctx, item, ui.mode, selected, dragging)?;
    }

    // Layer 6: dimension overlay.
    if ui.show_dimensions {
        for seg in &plan.dimensions {
            annotate::draw_dimension(ctx, seg, ui.mode)?;
        }
    }

    // Layer 7: compass rose.
    draw_compass(ctx, ui.mode)?;

    Ok(())
}

// =============================================================
// Backdrop
// =============================================================

/// Blueprint dot grid, one dot per meter tile.
fn draw_grid(ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_fill_style_str("#ffffff");
    ctx.set_global_alpha(0.08);
    let mut y = 1.0;
    while y < SCENE_HEIGHT {
        let mut x = 1.0;
        while x < SCENE_WIDTH {
            ctx.begin_path();
            ctx.arc(x, y, 1.0, 0.0, 2.0 * PI)?;
            ctx.fill();
            x += METER;
        }
        y += METER;
    }
    ctx.restore();
    Ok(())
}

fn trace_polygon(ctx: &CanvasRenderingContext2d, pts: &[Point]) {
    ctx.begin_path();
    for (i, p) in pts.iter().enumerate() {
        if i == 0 {
            ctx.move_to(p.x, p.y);
        } else {
            ctx.line_to(p.x, p.y);
        }
    }
    ctx.close_path();
}

fn polygon_bbox(pts: &[Point]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in pts {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (min_x, min_y, max_x, max_y)
}

fn technical_zone_fill(id: ZoneId, highlighted: bool) -> Option<&'static str> {
    match (id, highlighted) {
        (ZoneId::Top, true) => Some("#5aaa5a40"),
        (ZoneId::Top, false) => Some("#5aaa5a15"),
        (ZoneId::Jacuzzi, true) => Some("#4ecdc415"),
        (ZoneId::Jacuzzi, false) => None,
        (ZoneId::Extension, true) => Some("#ff9f4340"),
        (ZoneId::Extension, false) => Some("#ff9f4315"),
    }
}

fn draw_zone(ctx: &CanvasRenderingContext2d, zone: &Zone, ui: &UiState) -> Result<(), JsValue> {
    match ui.mode {
        RenderMode::Technical => {
            let highlighted = ui.hovered_zone == Some(zone.id);
            if let Some(fill) = technical_zone_fill(zone.id, highlighted) {
                trace_polygon(ctx, &zone.polygon);
                ctx.set_fill_style_str(fill);
                ctx.fill();
            }
            Ok(())
        }
        // Visual mode ignores hover: the floor finish is the fill. Grass in
        // the gourmet zone, porcelain tile elsewhere.
        RenderMode::Visual => {
            if zone.id == ZoneId::Top {
                draw_grass(ctx, &zone.polygon)
            } else {
                draw_porcelain(ctx, &zone.polygon)
            }
        }
    }
}

/// Artificial grass: base green with stylized tufts on an 8 px tile.
fn draw_grass(ctx: &CanvasRenderingContext2d, polygon: &[Point]) -> Result<(), JsValue> {
    let (min_x, min_y, max_x, max_y) = polygon_bbox(polygon);
    ctx.save();
    trace_polygon(ctx, polygon);
    ctx.clip();

    ctx.set_fill_style_str("#5a8c5a");
    ctx.fill_rect(min_x, min_y, max_x - min_x, max_y - min_y);

    ctx.set_stroke_style_str("#4a7c4a");
    ctx.set_line_width(0.5);
    let mut ty = min_y;
    while ty < max_y {
        let mut tx = min_x;
        while tx < max_x {
            for (x0, y0, xm, ym, x1) in [(1.0, 4.0, 2.0, 1.0, 3.0), (5.0, 7.0, 6.0, 3.0, 7.0)] {
                ctx.begin_path();
                ctx.move_to(tx + x0, ty + y0);
                ctx.line_to(tx + xm, ty + ym);
                ctx.line_to(tx + x1, ty + y0);
                ctx.stroke();
            }
            tx += 8.0;
        }
        ty += 8.0;
    }

    // Slight darkening wash.
    ctx.set_fill_style_str("#000000");
    ctx.set_global_alpha(0.05);
    ctx.fill_rect(min_x, min_y, max_x - min_x, max_y - min_y);

    ctx.restore();
    Ok(())
}

/// Large-format porcelain tile: warm off-white with grout lines on a 28 px
/// tile and sparse texture speckles.
fn draw_porcelain(ctx: &CanvasRenderingContext2d, polygon: &[Point]) -> Result<(), JsValue> {
    let (min_x, min_y, max_x, max_y) = polygon_bbox(polygon);
    ctx.save();
    trace_polygon(ctx, polygon);
    ctx.clip();

    ctx.set_fill_style_str("#f4f3ee");
    ctx.fill_rect(min_x, min_y, max_x - min_x, max_y - min_y);

    ctx.set_stroke_style_str("#e0ded8");
    ctx.set_line_width(0.8);
    let mut ty = min_y;
    while ty < max_y + 28.0 {
        let mut tx = min_x;
        while tx < max_x + 28.0 {
            // Grout along the bottom and right edges of each tile.
            ctx.begin_path();
            ctx.move_to(tx, ty + 28.0);
            ctx.line_to(tx + 28.0, ty + 28.0);
            ctx.line_to(tx + 28.0, ty);
            ctx.stroke();

            ctx.set_fill_style_str("#e8e6e1");
            ctx.fill_rect(tx + 5.0, ty + 5.0, 2.0, 2.0);
            ctx.fill_rect(tx + 20.0, ty + 18.0, 3.0, 3.0);
            tx += 28.0;
        }
        ty += 28.0;
    }

    ctx.restore();
    Ok(())
}

fn draw_walls(ctx: &CanvasRenderingContext2d, outline: &[Point], mode: RenderMode) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_line_cap("square");
    ctx.set_line_join("miter");
    trace_polygon(ctx, outline);

    match mode {
        RenderMode::Technical => {
            // Soft glow pass behind the crisp wall line.
            ctx.set_stroke_style_str(wall_color(mode));
            ctx.set_filter("blur(4px)");
            ctx.set_global_alpha(0.1);
            ctx.set_line_width(1.0);
            ctx.stroke();
            ctx.set_filter("none");
            ctx.set_global_alpha(1.0);
            ctx.set_line_width(2.5);
            ctx.stroke();
        }
        RenderMode::Visual => {
            // Glass railing: base curb, translucent panel, white post dashes.
            ctx.set_stroke_style_str("#d1d5db");
            ctx.set_line_width(3.0);
            ctx.stroke();
            ctx.set_stroke_style_str("#aed9e0");
            ctx.set_line_width(2.5);
            ctx.set_global_alpha(0.7);
            ctx.stroke();
            ctx.set_global_alpha(1.0);
            ctx.set_line_cap("butt");
            ctx.set_stroke_style_str("#ffffff");
            set_dash(ctx, &[2.0, 40.0])?;
            ctx.stroke();
            set_dash(ctx, &[])?;
        }
    }
    ctx.restore();
    Ok(())
}

// =============================================================
// Spa block
// =============================================================

#[allow(clippy::too_many_lines)]
fn draw_spa(ctx: &CanvasRenderingContext2d, spa: Spa, mode: RenderMode) -> Result<(), JsValue> {
    let size = spa.size;
    ctx.save();
    ctx.translate(spa.x, spa.y)?;

    match mode {
        RenderMode::Technical => {
            ctx.set_fill_style_str("#1a1a20");
            ctx.fill_rect(0.0, 0.0, size, size);
            ctx.set_stroke_style_str(wall_color(mode));
            ctx.set_line_width(1.0);
            ctx.stroke_rect(0.0, 0.0, size, size);

            // Schematic water hatching inside the shell.
            ctx.save();
            ctx.begin_path();
            ctx.rect(4.0, 4.0, size - 8.0, size - 8.0);
            ctx.clip();
            ctx.set_stroke_style_str(ACCENT);
            ctx.set_line_width(0.8);
            ctx.set_global_alpha(0.4);
            let mut wy = 4.0;
            while wy < size - 4.0 {
                draw_wave_row(ctx, 4.0, size - 4.0, wy + 5.0, 2.5, 5.0);
                wy += 10.0;
            }
            ctx.restore();

            ctx.set_stroke_style_str(ACCENT);
            ctx.set_line_width(0.5);
            ctx.set_global_alpha(0.5);
            ctx.stroke_rect(4.0, 4.0, size - 8.0, size - 8.0);
            ctx.set_global_alpha(1.0);

            ctx.set_fill_style_str("#ffffff");
            ctx.set_global_alpha(0.7);
            ctx.set_text_align("center");
            ctx.set_text_baseline("alphabetic");
            ctx.set_font("8px 'Space Mono', monospace");
            ctx.fill_text("2.20", size / 2.0, size / 2.0 + 3.0)?;
            ctx.set_global_alpha(1.0);
        }
        RenderMode::Visual => {
            // Drop shadow under the shell.
            ctx.set_fill_style_str("#000000");
            ctx.set_global_alpha(0.2);
            ctx.fill_rect(2.0, 2.0, size, size);
            ctx.set_global_alpha(1.0);

            // Wood cladding with vertical slats.
            ctx.set_fill_style_str("#8b5e3c");
            ctx.fill_rect(0.0, 0.0, size, size);
            ctx.set_stroke_style_str("#5d3a24");
            ctx.set_line_width(0.5);
            let mut sx = 0.0;
            while sx < size {
                ctx.begin_path();
                ctx.move_to(sx, 0.0);
                ctx.line_to(sx, size);
                ctx.stroke();
                sx += 6.0;
            }
            ctx.stroke_rect(0.0, 0.0, size, size);

            // White acrylic rim, then the water.
            ctx.set_fill_style_str("#fdfdfd");
            ctx.fill_rect(6.0, 6.0, size - 12.0, size - 12.0);
            ctx.set_stroke_style_str("#e5e5e5");
            ctx.set_line_width(1.0);
            ctx.stroke_rect(6.0, 6.0, size - 12.0, size - 12.0);

            ctx.set_fill_style_str("#a4ebf3");
            ctx.fill_rect(14.0, 14.0, size - 28.0, size - 28.0);
            ctx.save();
            ctx.begin_path();
            ctx.rect(14.0, 14.0, size - 28.0, size - 28.0);
            ctx.clip();
            ctx.set_stroke_style_str("#ffffff");
            ctx.set_line_width(0.8);
            ctx.set_global_alpha(0.5);
            let mut wy = 14.0;
            while wy < size - 14.0 {
                draw_wave_row(ctx, 14.0, size - 14.0, wy + 10.0, 5.0, 10.0);
                wy += 20.0;
            }
            ctx.restore();
            ctx.set_stroke_style_str("#88dbe6");
            ctx.set_line_width(1.0);
            ctx.stroke_rect(14.0, 14.0, size - 28.0, size - 28.0);

            // Headrest pillows on all four sides.
            ctx.set_fill_style_str("#ffffff");
            ctx.set_stroke_style_str("#dddddd");
            ctx.set_line_width(0.5);
            for (px, py, pw, ph) in [
                (size / 2.0 - 8.0, 8.0, 16.0, 6.0),
                (size / 2.0 - 8.0, size - 14.0, 16.0, 6.0),
                (8.0, size / 2.0 - 8.0, 6.0, 16.0),
                (size - 14.0, size / 2.0 - 8.0, 6.0, 16.0),
            ] {
                ctx.fill_rect(px, py, pw, ph);
                ctx.stroke_rect(px, py, pw, ph);
            }

            // Jets.
            ctx.set_fill_style_str("#ffffff");
            ctx.set_global_alpha(0.6);
            for (jx, jy) in [(20.0, 20.0), (size - 20.0, 20.0), (20.0, size - 20.0), (size - 20.0, size - 20.0)] {
                ctx.begin_path();
                ctx.arc(jx, jy, 1.5, 0.0, 2.0 * PI)?;
                ctx.fill();
            }
            ctx.set_global_alpha(1.0);
        }
    }

    // Clearance leaders and chips: 0.80 m to the wall above and to the
    // right, in both modes.
    ctx.set_stroke_style_str(annotate::dim_color(mode));
    ctx.set_line_width(0.5);
    set_dash(ctx, &[2.0, 2.0])?;
    ctx.begin_path();
    ctx.move_to(size / 2.0, -2.0);
    ctx.line_to(size / 2.0, -(spa.gap - 2.0));
    ctx.stroke();
    ctx.begin_path();
    ctx.move_to(size + 2.0, size / 2.0);
    ctx.line_to(size + spa.gap - 2.0, size / 2.0);
    ctx.stroke();
    set_dash(ctx, &[])?;
    annotate::draw_clearance_chip(ctx, size / 2.0, -spa.gap / 2.0, "0.80", mode)?;
    annotate::draw_clearance_chip(ctx, size + spa.gap / 2.0, size / 2.0, "0.80", mode)?;

    ctx.restore();
    Ok(())
}

/// One row of repeating water-ripple arcs from `x0` to `x1` at height `y`,
/// with the given crest height and half wavelength.
fn draw_wave_row(ctx: &CanvasRenderingContext2d, x0: f64, x1: f64, y: f64, crest: f64, half_wave: f64) {
    ctx.begin_path();
    ctx.move_to(x0, y);
    let mut x = x0;
    while x < x1 {
        ctx.quadratic_curve_to(x + half_wave / 2.0, y - crest, x + half_wave, y);
        x += half_wave;
    }
    ctx.stroke();
}

// =============================================================
// Furniture
// =============================================================

fn draw_item(
    ctx: &CanvasRenderingContext2d,
    item: &FurnitureItem,
    mode: RenderMode,
    selected: bool,
    dragging: bool,
) -> Result<(), JsValue> {
    let style = Style::resolve(mode, selected, dragging, item.visible);

    ctx.save();
    ctx.translate(item.x, item.y)?;
    ctx.rotate(item.rotation.to_radians())?;
    ctx.scale(item.scale, item.scale)?;

    ctx.set_global_alpha(if dragging {
        DRAG_ALPHA
    } else if item.visible {
        1.0
    } else {
        GHOST_ALPHA
    });

    // Elevated shadow while dragging; a subtle one in visual mode.
    if dragging {
        ctx.set_shadow_color("rgba(0,0,0,0.5)");
        ctx.set_shadow_blur(8.0);
        ctx.set_shadow_offset_y(4.0);
    } else if style.visual && item.visible {
        ctx.set_shadow_color("rgba(0,0,0,0.3)");
        ctx.set_shadow_blur(2.0);
        ctx.set_shadow_offset_x(1.0);
        ctx.set_shadow_offset_y(2.0);
    }

    if selected {
        ctx.save();
        ctx.set_stroke_style_str(ACCENT);
        ctx.set_line_width(1.0);
        ctx.set_global_alpha(ctx.global_alpha() * 0.5);
        set_dash(ctx, &[4.0, 2.0])?;
        ctx.begin_path();
        ctx.arc(0.0, 0.0, SELECTION_RING_RADIUS, 0.0, 2.0 * PI)?;
        ctx.stroke();
        ctx.restore();
    }

    if style.dashed {
        set_dash(ctx, &[4.0, 4.0])?;
    }
    catalog::draw_glyph(ctx, item.kind, &style)?;

    ctx.restore();
    Ok(())
}

// =============================================================
// Compass
// =============================================================

fn draw_compass(ctx: &CanvasRenderingContext2d, mode: RenderMode) -> Result<(), JsValue> {
    let needle = match mode {
        RenderMode::Technical => ACCENT,
        RenderMode::Visual => "#222222",
    };

    ctx.save();
    ctx.translate(480.0, 80.0)?;

    ctx.set_stroke_style_str(annotate::dim_color(mode));
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, 18.0, 0.0, 2.0 * PI)?;
    ctx.stroke();

    // North needle, filled; south needle, hollow.
    ctx.set_fill_style_str(needle);
    ctx.begin_path();
    ctx.move_to(0.0, -12.0);
    ctx.line_to(-4.0, 0.0);
    ctx.line_to(4.0, 0.0);
    ctx.close_path();
    ctx.fill();

    ctx.set_stroke_style_str(needle);
    ctx.begin_path();
    ctx.move_to(0.0, 12.0);
    ctx.line_to(-4.0, 0.0);
    ctx.line_to(4.0, 0.0);
    ctx.close_path();
    ctx.stroke();

    ctx.set_fill_style_str(needle);
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    ctx.set_font("10px 'Space Mono', monospace");
    ctx.fill_text("N", 0.0, -20.0)?;

    ctx.restore();
    Ok(())
}
