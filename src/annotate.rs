//! Dimension annotator: labeled measurement callouts between two plan
//! points.
//!
//! A callout is an extension-line dimension: short lead lines from each
//! anchor out to an offset parallel line with end ticks, a circular index
//! badge at the midpoint, and a label chip pushed further out in the
//! annotation direction so it clears the badge. [`layout`] computes all of
//! that as plain data so it can be tested natively; [`draw_dimension`] turns
//! a layout into context calls.
//!
//! Annotations are purely additive overlay and order-independent. Labels are
//! not collision-avoided; overlapping callouts on short edges are accepted.

#[cfg(test)]
#[path = "annotate_test.rs"]
mod annotate_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::catalog::ACCENT;
use crate::consts::{DIM_BADGE_RADIUS, DIM_OFFSET, DIM_TICK};
use crate::geometry::{DimSegment, Side};
use crate::input::RenderMode;
use crate::viewport::Point;

/// Computed placement for one dimension callout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimLayout {
    /// Lead line from anchor A out to the dimension line.
    pub lead_a: (Point, Point),
    /// Lead line from anchor B out to the dimension line.
    pub lead_b: (Point, Point),
    /// The offset dimension line itself.
    pub line: (Point, Point),
    /// Half-vector of the end tick marks (added and subtracted at each line
    /// end). Ticks run along the measured edge, perpendicular to the offset.
    pub tick: (f64, f64),
    /// Center of the circular index badge (the line midpoint).
    pub badge: Point,
    /// Top-left corner of the label chip.
    pub chip: Point,
    /// Baseline anchor of the label text (centered horizontally).
    pub label: Point,
}

/// Chip dimensions for the external callout label.
pub const CHIP_WIDTH: f64 = 28.0;
pub const CHIP_HEIGHT: f64 = 10.0;

/// Compute the callout placement for anchors `a` → `b` on the given side.
#[must_use]
pub fn layout(a: Point, b: Point, side: Side) -> DimLayout {
    let (dx, dy) = match side {
        Side::Top => (0.0, -DIM_OFFSET),
        Side::Bottom => (0.0, DIM_OFFSET),
        Side::Left => (-DIM_OFFSET, 0.0),
        Side::Right => (DIM_OFFSET, 0.0),
    };

    let a2 = Point::new(a.x + dx, a.y + dy);
    let b2 = Point::new(b.x + dx, b.y + dy);
    let badge = Point::new((a2.x + b2.x) / 2.0, (a2.y + b2.y) / 2.0);

    // Ticks run along the measured edge: horizontal for a vertical offset,
    // vertical for a horizontal offset.
    let tick = if dy == 0.0 { (0.0, DIM_TICK) } else { (DIM_TICK, 0.0) };

    // The chip sits below the badge except for top-side callouts, which
    // stack upward to stay outside the outline.
    let (chip_dy, label_dy) = if side == Side::Top { (-18.0, -11.0) } else { (10.0, 17.0) };

    DimLayout {
        lead_a: (a, a2),
        lead_b: (b, b2),
        line: (a2, b2),
        tick,
        badge,
        chip: Point::new(badge.x - CHIP_WIDTH / 2.0, badge.y + chip_dy),
        label: Point::new(badge.x, badge.y + label_dy),
    }
}

/// Mode-dependent line/stroke color for dimension work.
#[must_use]
pub fn dim_color(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Technical => "#6a6a7a",
        RenderMode::Visual => "#333333",
    }
}

/// Draw one external dimension callout.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_dimension(ctx: &CanvasRenderingContext2d, seg: &DimSegment, mode: RenderMode) -> Result<(), JsValue> {
    let l = layout(seg.a, seg.b, seg.side);
    let visual = mode == RenderMode::Visual;
    let color = dim_color(mode);

    ctx.save();

    // Lead lines, faint.
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(0.5);
    ctx.set_global_alpha(0.3);
    for (from, to) in [l.lead_a, l.lead_b] {
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);

    // Dimension line with end ticks.
    ctx.set_line_width(0.8);
    ctx.begin_path();
    ctx.move_to(l.line.0.x, l.line.0.y);
    ctx.line_to(l.line.1.x, l.line.1.y);
    ctx.stroke();
    for end in [l.line.0, l.line.1] {
        ctx.begin_path();
        ctx.move_to(end.x - l.tick.0, end.y - l.tick.1);
        ctx.line_to(end.x + l.tick.0, end.y + l.tick.1);
        ctx.stroke();
    }

    // Index badge.
    ctx.begin_path();
    ctx.arc(l.badge.x, l.badge.y, DIM_BADGE_RADIUS, 0.0, std::f64::consts::TAU)?;
    ctx.set_fill_style_str(if visual { "#ffffff" } else { "#1e1e24" });
    ctx.fill();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(1.0);
    ctx.stroke();
    ctx.set_fill_style_str(if visual { "#000000" } else { ACCENT });
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    ctx.set_font("8px 'Space Mono', monospace");
    ctx.fill_text(&seg.index.to_string(), l.badge.x, l.badge.y + 2.5)?;

    // Label chip.
    ctx.set_global_alpha(0.8);
    ctx.set_fill_style_str(if visual { "#ffffff" } else { "#0a0a0f" });
    ctx.fill_rect(l.chip.x, l.chip.y, CHIP_WIDTH, CHIP_HEIGHT);
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(if visual { "#000000" } else { "#ffffff" });
    ctx.set_font("500 8px 'DM Sans', sans-serif");
    ctx.fill_text(seg.label, l.label.x, l.label.y)?;

    ctx.restore();
    Ok(())
}

/// Draw a small internal clearance chip (used for the spa's 0.80 m
/// circulation labels), centered at `(x, y)`.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_clearance_chip(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    label: &str,
    mode: RenderMode,
) -> Result<(), JsValue> {
    let visual = mode == RenderMode::Visual;
    ctx.save();
    ctx.set_global_alpha(0.7);
    ctx.set_fill_style_str(if visual { "#ffffff" } else { "#0a0a0f" });
    ctx.fill_rect(x - 16.0, y - 6.0, 32.0, 12.0);
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(if visual { "#000000" } else { ACCENT });
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    ctx.set_font("8px 'Space Mono', monospace");
    ctx.fill_text(label, x, y + 2.5)?;
    ctx.restore();
    Ok(())
}
