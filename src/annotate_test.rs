#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

// =============================================================
// Layout
// =============================================================

#[test]
fn left_side_offsets_the_line_leftward() {
    let l = layout(Point::new(100.0, 100.0), Point::new(100.0, 200.0), Side::Left);
    assert_eq!(l.line, (Point::new(75.0, 100.0), Point::new(75.0, 200.0)));
    assert_eq!(l.badge, Point::new(75.0, 150.0));
    // Vertical line, horizontal offset: ticks run vertically.
    assert_eq!(l.tick, (0.0, 2.0));
}

#[test]
fn right_side_offsets_the_line_rightward() {
    let l = layout(Point::new(400.0, 100.0), Point::new(400.0, 300.0), Side::Right);
    assert_eq!(l.line, (Point::new(425.0, 100.0), Point::new(425.0, 300.0)));
    assert_eq!(l.badge, Point::new(425.0, 200.0));
    assert_eq!(l.tick, (0.0, 2.0));
}

#[test]
fn top_side_offsets_the_line_upward() {
    let l = layout(Point::new(100.0, 100.0), Point::new(200.0, 100.0), Side::Top);
    assert_eq!(l.line, (Point::new(100.0, 75.0), Point::new(200.0, 75.0)));
    assert_eq!(l.badge, Point::new(150.0, 75.0));
    assert_eq!(l.tick, (2.0, 0.0));
}

#[test]
fn bottom_side_offsets_the_line_downward() {
    let l = layout(Point::new(0.0, 0.0), Point::new(100.0, 0.0), Side::Bottom);
    assert_eq!(l.line, (Point::new(0.0, 25.0), Point::new(100.0, 25.0)));
    assert_eq!(l.badge, Point::new(50.0, 25.0));
    assert_eq!(l.tick, (2.0, 0.0));
}

#[test]
fn lead_lines_connect_anchors_to_the_line_ends() {
    let a = Point::new(100.0, 100.0);
    let b = Point::new(100.0, 200.0);
    let l = layout(a, b, Side::Left);
    assert_eq!(l.lead_a, (a, l.line.0));
    assert_eq!(l.lead_b, (b, l.line.1));
}

#[test]
fn chip_stacks_below_the_badge_by_default() {
    let l = layout(Point::new(0.0, 0.0), Point::new(100.0, 0.0), Side::Bottom);
    assert_eq!(l.chip, Point::new(36.0, 35.0));
    assert_eq!(l.label, Point::new(50.0, 42.0));
    assert!(l.chip.y > l.badge.y);
}

#[test]
fn chip_stacks_above_the_badge_on_top_callouts() {
    let l = layout(Point::new(100.0, 100.0), Point::new(200.0, 100.0), Side::Top);
    assert_eq!(l.chip, Point::new(136.0, 57.0));
    assert_eq!(l.label, Point::new(150.0, 64.0));
    assert!(l.chip.y + CHIP_HEIGHT < l.badge.y);
}

#[test]
fn chip_is_centered_on_the_badge_horizontally() {
    let l = layout(Point::new(100.0, 100.0), Point::new(100.0, 200.0), Side::Right);
    assert_eq!(l.chip.x + CHIP_WIDTH / 2.0, l.badge.x);
    assert_eq!(l.label.x, l.badge.x);
}

#[test]
fn badge_sits_at_the_line_midpoint() {
    let l = layout(Point::new(10.0, 40.0), Point::new(90.0, 40.0), Side::Top);
    assert_eq!(l.badge.x, (l.line.0.x + l.line.1.x) / 2.0);
    assert_eq!(l.badge.y, l.line.0.y);
}

// =============================================================
// Colors
// =============================================================

#[test]
fn dim_color_follows_the_mode() {
    assert_eq!(dim_color(RenderMode::Technical), "#6a6a7a");
    assert_eq!(dim_color(RenderMode::Visual), "#333333");
}
